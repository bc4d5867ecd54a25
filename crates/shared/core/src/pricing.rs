//! Limit price arithmetic
//!
//! All math is exact decimal; only the final value is rounded.

use rust_decimal::Decimal;

use crate::values::{Price, Rate, RoundingRule};

/// Fractional digits of a quoted A-share price (one tick = 0.01)
pub const PRICE_SCALE: u32 = 2;

/// Theoretical limit-up price for a session
///
/// `round(prev_close * (1 + rate), scale)` under the given midpoint rule.
/// Returns `None` when the product overflows `Decimal`.
pub fn limit_price(
    prev_close: Price,
    rate: Rate,
    rounding: RoundingRule,
    scale: u32,
) -> Option<Price> {
    let factor = Decimal::ONE.checked_add(rate)?;
    let raw = prev_close.checked_mul(factor)?;
    Some(rounding.round(raw, scale))
}
