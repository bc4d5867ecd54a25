use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Midpoint rule used when rounding a computed price to the tick scale
///
/// Exchanges quote limit prices with round-half-up semantics on the
/// absolute value, so `HalfAwayFromZero` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingRule {
    /// 11.165 -> 11.17
    #[default]
    HalfAwayFromZero,
    /// Banker's rounding: 11.165 -> 11.16, 11.175 -> 11.18
    HalfEven,
}

impl RoundingRule {
    /// The matching `rust_decimal` strategy
    pub fn strategy(&self) -> RoundingStrategy {
        match self {
            RoundingRule::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            RoundingRule::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Round `value` to `scale` fractional digits
    pub fn round(&self, value: Decimal, scale: u32) -> Decimal {
        value.round_dp_with_strategy(scale, self.strategy())
    }
}

impl std::fmt::Display for RoundingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingRule::HalfAwayFromZero => write!(f, "half_away_from_zero"),
            RoundingRule::HalfEven => write!(f, "half_even"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_away_from_zero() {
        let rule = RoundingRule::HalfAwayFromZero;
        assert_eq!(rule.round(dec!(11.165), 2), dec!(11.17));
        assert_eq!(rule.round(dec!(11.175), 2), dec!(11.18));
        assert_eq!(rule.round(dec!(11.164), 2), dec!(11.16));
    }

    #[test]
    fn test_half_even() {
        let rule = RoundingRule::HalfEven;
        assert_eq!(rule.round(dec!(11.165), 2), dec!(11.16));
        assert_eq!(rule.round(dec!(11.175), 2), dec!(11.18));
        assert_eq!(rule.round(dec!(11.1651), 2), dec!(11.17));
    }

    #[test]
    fn test_default_is_half_away() {
        assert_eq!(RoundingRule::default(), RoundingRule::HalfAwayFromZero);
    }

    #[test]
    fn test_serde_names() {
        let rule: RoundingRule = serde_json::from_str("\"half_even\"").unwrap();
        assert_eq!(rule, RoundingRule::HalfEven);
    }
}
