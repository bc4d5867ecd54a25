//! Limit-Up Core Domain
//!
//! Pure domain types for the limit-up event scanner.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod instruments;
pub mod pricing;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{ClassifiedBar, DailyBar, DailySummary, LimitEvent};
pub use instruments::{BoardCategory, InstrumentId};
pub use pricing::{PRICE_SCALE, limit_price};
pub use values::{Price, Rate, RoundingRule, TradeDate};
