use serde::{Deserialize, Serialize};

use super::LimitEvent;
use crate::values::TradeDate;

/// Per-day event counts
///
/// Zero counts are kept as explicit zeros so every row has all three columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub trade_date: TradeDate,
    pub sealed_count: u64,
    pub broken_count: u64,
    pub total_count: u64,
}

impl DailySummary {
    /// Empty summary for a trading day
    pub fn new(trade_date: TradeDate) -> Self {
        Self {
            trade_date,
            sealed_count: 0,
            broken_count: 0,
            total_count: 0,
        }
    }

    /// Count one classified session
    pub fn record(&mut self, event: LimitEvent) {
        match event {
            LimitEvent::Sealed => self.sealed_count += 1,
            LimitEvent::Broken => self.broken_count += 1,
            LimitEvent::None => return,
        }
        self.total_count = self.sealed_count + self.broken_count;
    }
}
