use serde::{Deserialize, Serialize};

/// Limit-up outcome of a single session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LimitEvent {
    /// Never reached the limit price
    #[default]
    None,
    /// Closed at (or above) the limit price
    Sealed,
    /// Touched the limit intraday but closed below it
    Broken,
}

impl LimitEvent {
    /// Returns true for sealed and broken sessions
    pub fn is_event(&self) -> bool {
        !matches!(self, LimitEvent::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LimitEvent::None => "NONE",
            LimitEvent::Sealed => "SEALED",
            LimitEvent::Broken => "BROKEN",
        }
    }
}

impl std::fmt::Display for LimitEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
