//! Engine configuration

use limitup_core::{PRICE_SCALE, RoundingRule};
use serde::{Deserialize, Serialize};

/// Configuration for the limit event engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Midpoint rule applied to the computed limit price
    #[serde(default)]
    pub rounding: RoundingRule,
    /// Fractional digits of the limit price
    #[serde(default = "default_price_scale")]
    pub price_scale: u32,
}

fn default_price_scale() -> u32 {
    PRICE_SCALE
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rounding: RoundingRule::default(),
            price_scale: default_price_scale(),
        }
    }
}

impl EngineConfig {
    /// Default config with a different rounding rule
    pub fn with_rounding(rounding: RoundingRule) -> Self {
        Self {
            rounding,
            ..Default::default()
        }
    }
}
