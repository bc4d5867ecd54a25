use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::values::Rate;

/// Regulatory listing segment, which fixes the daily limit-move rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardCategory {
    /// Shanghai/Shenzhen main boards (fallback for unknown codes)
    #[default]
    Main,
    /// Shenzhen ChiNext growth board
    Chinext,
    /// Shanghai STAR science and technology innovation board
    Star,
    /// NEEQ / Beijing exchange
    Neeq,
}

impl BoardCategory {
    /// Daily limit-move rate as a fraction of the previous close
    pub fn limit_rate(&self) -> Rate {
        match self {
            BoardCategory::Star | BoardCategory::Chinext => Decimal::new(20, 2),
            BoardCategory::Neeq => Decimal::new(30, 2),
            BoardCategory::Main => Decimal::new(10, 2),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoardCategory::Main => "MAIN",
            BoardCategory::Chinext => "CHINEXT",
            BoardCategory::Star => "STAR",
            BoardCategory::Neeq => "NEEQ",
        }
    }
}

impl std::fmt::Display for BoardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
