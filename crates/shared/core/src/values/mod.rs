use chrono::NaiveDate;
use rust_decimal::Decimal;

mod rounding;

pub use rounding::RoundingRule;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Limit-move rate as a fraction of the previous close (0.10 = 10%)
pub type Rate = Decimal;

/// Calendar date of a trading session (exchange local time, no timezone)
pub type TradeDate = NaiveDate;
