//! CSV report writers
//!
//! Two tables leave the runner:
//! - daily summary: `trade_date, sealed_count, broken_count, total_count`
//! - detailed events: `instrument, trade_date, open, close, high, low,
//!   limit_price, limit_event`

use std::io::Write;
use std::path::Path;

use limitup_core::{ClassifiedBar, DailySummary, LimitEvent, Price, TradeDate};
use log::info;
use serde::Serialize;

use crate::error::{Result, RunnerError};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One row of the detailed event table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub instrument: String,
    pub trade_date: TradeDate,
    pub open: Price,
    pub close: Price,
    pub high: Price,
    pub low: Price,
    pub limit_price: Option<Price>,
    pub limit_event: LimitEvent,
}

impl From<&ClassifiedBar> for EventRecord {
    fn from(row: &ClassifiedBar) -> Self {
        Self {
            instrument: row.instrument.to_string(),
            trade_date: row.trade_date,
            open: row.open,
            close: row.close,
            high: row.high,
            low: row.low,
            limit_price: row.limit_price,
            limit_event: row.limit_event,
        }
    }
}

/// One row of the daily summary table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    pub trade_date: TradeDate,
    pub sealed_count: u64,
    pub broken_count: u64,
    pub total_count: u64,
}

impl From<&DailySummary> for SummaryRecord {
    fn from(summary: &DailySummary) -> Self {
        Self {
            trade_date: summary.trade_date,
            sealed_count: summary.sealed_count,
            broken_count: summary.broken_count,
            total_count: summary.total_count,
        }
    }
}

/// Write the detailed event table
pub fn write_events(path: impl AsRef<Path>, events: &[&ClassifiedBar], bom: bool) -> Result<()> {
    let records = events.iter().map(|row| EventRecord::from(*row));
    write_table(path.as_ref(), EVENT_HEADERS, records, bom)?;
    info!(
        "Wrote {} event rows to {}",
        events.len(),
        path.as_ref().display()
    );
    Ok(())
}

/// Write the daily summary table
pub fn write_summary(path: impl AsRef<Path>, summary: &[DailySummary], bom: bool) -> Result<()> {
    let records = summary.iter().map(SummaryRecord::from);
    write_table(path.as_ref(), SUMMARY_HEADERS, records, bom)?;
    info!(
        "Wrote {} summary rows to {}",
        summary.len(),
        path.as_ref().display()
    );
    Ok(())
}

const EVENT_HEADERS: &[&str] = &[
    "instrument",
    "trade_date",
    "open",
    "close",
    "high",
    "low",
    "limit_price",
    "limit_event",
];

const SUMMARY_HEADERS: &[&str] = &["trade_date", "sealed_count", "broken_count", "total_count"];

/// Serialize records under an explicit header so empty tables still have one
fn write_table<T: Serialize>(
    path: &Path,
    headers: &[&str],
    records: impl Iterator<Item = T>,
    bom: bool,
) -> Result<()> {
    let mut file = std::fs::File::create(path).map_err(|e| RunnerError::io(path, e))?;
    if bom {
        file.write_all(UTF8_BOM)
            .map_err(|e| RunnerError::io(path, e))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(headers)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush().map_err(|e| RunnerError::io(path, e))?;
    Ok(())
}
