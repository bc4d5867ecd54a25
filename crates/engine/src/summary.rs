//! Daily aggregation of limit events

use std::collections::BTreeMap;

use limitup_core::{ClassifiedBar, DailySummary, LimitEvent};
use serde::{Deserialize, Serialize};

/// Group sessions by trade date and count sealed/broken events
///
/// Every date present in `rows` yields a row, so a date with no events
/// reports `(0, 0, 0)` rather than disappearing. Output is date ascending.
pub fn summarize_by_date(rows: &[ClassifiedBar]) -> Vec<DailySummary> {
    let mut by_date: BTreeMap<_, DailySummary> = BTreeMap::new();
    for row in rows {
        by_date
            .entry(row.trade_date)
            .or_insert_with(|| DailySummary::new(row.trade_date))
            .record(row.limit_event);
    }
    by_date.into_values().collect()
}

/// Batch-wide event totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounts {
    pub sealed: u64,
    pub broken: u64,
    pub total: u64,
}

impl EventCounts {
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a ClassifiedBar>) -> Self {
        let mut counts = Self::default();
        for row in rows {
            match row.limit_event {
                LimitEvent::Sealed => counts.sealed += 1,
                LimitEvent::Broken => counts.broken += 1,
                LimitEvent::None => continue,
            }
            counts.total += 1;
        }
        counts
    }
}
