//! Limit-Up Ports
//!
//! Port definitions (traits) for the limit-up event scanner.
//! These define the boundaries between the classification engine and the
//! reference data it consults.

mod board;
mod error;
mod exclusion;

pub use board::BoardClassifier;
pub use error::{PanelError, PanelResult};
pub use exclusion::ExclusionPolicy;
