//! Classification output

use limitup_core::{ClassifiedBar, DailySummary, TradeDate};

use crate::summary::{EventCounts, summarize_by_date};

/// Every classified session of a batch, ordered by `(instrument, trade_date)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedPanel {
    rows: Vec<ClassifiedBar>,
}

impl ClassifiedPanel {
    pub fn new(rows: Vec<ClassifiedBar>) -> Self {
        Self { rows }
    }

    /// All rows, including excluded and non-event sessions
    pub fn rows(&self) -> &[ClassifiedBar] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Detailed event table: sealed and broken sessions by `(trade_date, instrument)`
    pub fn events(&self) -> Vec<&ClassifiedBar> {
        let mut events: Vec<&ClassifiedBar> = self.rows.iter().filter(|r| r.is_event()).collect();
        events.sort_by(|a, b| {
            a.trade_date
                .cmp(&b.trade_date)
                .then_with(|| a.instrument.cmp(&b.instrument))
        });
        events
    }

    /// Owned variant of [`ClassifiedPanel::events`]
    pub fn into_events(self) -> Vec<ClassifiedBar> {
        let mut events: Vec<ClassifiedBar> =
            self.rows.into_iter().filter(|r| r.is_event()).collect();
        events.sort_by(|a, b| {
            a.trade_date
                .cmp(&b.trade_date)
                .then_with(|| a.instrument.cmp(&b.instrument))
        });
        events
    }

    /// Rows of a single trading day
    pub fn on_date(&self, date: TradeDate) -> Vec<&ClassifiedBar> {
        self.rows.iter().filter(|r| r.trade_date == date).collect()
    }

    /// Per-day sealed/broken/total counts
    pub fn daily_summary(&self) -> Vec<DailySummary> {
        summarize_by_date(&self.rows)
    }

    /// Batch-wide counts
    pub fn counts(&self) -> EventCounts {
        EventCounts::from_rows(&self.rows)
    }
}
