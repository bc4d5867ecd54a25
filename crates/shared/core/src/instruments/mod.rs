//! Instrument identity and regulatory board segments
//!
//! An A-share code such as `600519` or `688001` carries its listing board in
//! its leading digits. This module only defines the types; the prefix
//! mapping lives behind the `BoardClassifier` port.

mod board;
mod instrument;

pub use board::BoardCategory;
pub use instrument::InstrumentId;
