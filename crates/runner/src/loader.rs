//! Panel loading
//!
//! Reads a tabular panel `{instrument, trade_date, open, high, low, close}`
//! from CSV or a JSON array of records. Every value is parsed strictly: an
//! unparseable number or date fails the whole load instead of being coerced.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use limitup_core::{DailyBar, InstrumentId, Price, TradeDate};
use limitup_ports::PanelError;
use log::{debug, info};
use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{Result, RunnerError};

/// Canonical column names with accepted aliases
///
/// `ts_code` is the column name used by the upstream daily-bar exports.
const COLUMNS: [(&str, &[&str]); 6] = [
    ("instrument", &["instrument", "ts_code", "code", "symbol"]),
    ("trade_date", &["trade_date", "date"]),
    ("open", &["open"]),
    ("high", &["high"]),
    ("low", &["low"]),
    ("close", &["close"]),
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d"];

/// Load a panel, picking the format from the file extension
pub fn load_panel(path: impl AsRef<Path>) -> Result<Vec<DailyBar>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let bars = match extension.as_str() {
        "csv" => {
            let file = std::fs::File::open(path).map_err(|e| RunnerError::io(path, e))?;
            read_csv(file)?
        }
        "json" => {
            let content = std::fs::read_to_string(path).map_err(|e| RunnerError::io(path, e))?;
            read_json(&content)?
        }
        other => return Err(RunnerError::UnsupportedFormat(other.to_string())),
    };

    info!("Loaded {} bars from {}", bars.len(), path.display());
    Ok(bars)
}

/// Parse CSV with a header row
pub fn read_csv(reader: impl std::io::Read) -> Result<Vec<DailyBar>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_lowercase())
        .collect();
    let positions = resolve_columns(&headers)?;
    debug!("CSV column positions: {:?}", positions);

    let mut bars = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let field = |column: usize| record.get(positions[column]).unwrap_or("");
        bars.push(parse_row(idx + 1, field)?);
    }
    Ok(bars)
}

/// Parse a JSON array of flat records
///
/// Numbers and strings are both accepted for prices and dates.
pub fn read_json(content: &str) -> Result<Vec<DailyBar>> {
    let records: Vec<HashMap<String, Value>> = serde_json::from_str(content)?;

    let mut bars = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let record: HashMap<String, String> = record
            .iter()
            .map(|(k, v)| (k.to_lowercase(), json_scalar(v)))
            .collect();
        let keys: Vec<String> = record.keys().cloned().collect();
        let names = resolve_column_names(&keys)?;
        let field = |column: usize| record.get(names[column]).map(String::as_str).unwrap_or("");
        bars.push(parse_row(idx + 1, field)?);
    }
    Ok(bars)
}

/// Restricted codes, one per line; blank lines and `#` comments are skipped
pub fn load_restricted_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| RunnerError::io(path, e))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Coerce a date string: `YYYY-MM-DD`, `YYYYMMDD`, `YYYY/MM/DD`, or a
/// datetime whose date part is `YYYY-MM-DD`
pub fn parse_trade_date(value: &str) -> Option<TradeDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            let head = value.get(..10)?;
            let rest = &value[10..];
            if rest.starts_with([' ', 'T']) {
                NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
            } else {
                None
            }
        })
}

fn parse_price(row: usize, column: &str, value: &str) -> std::result::Result<Price, PanelError> {
    if value.is_empty() {
        return Err(PanelError::invalid_value(row, column, value, "missing value"));
    }
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| PanelError::invalid_value(row, column, value, "not a decimal number"))
}

fn parse_row<'a>(
    row: usize,
    field: impl Fn(usize) -> &'a str,
) -> std::result::Result<DailyBar, PanelError> {
    let instrument = field(0);
    if instrument.is_empty() {
        return Err(PanelError::invalid_value(
            row,
            "instrument",
            instrument,
            "missing value",
        ));
    }

    let raw_date = field(1);
    let trade_date = parse_trade_date(raw_date).ok_or_else(|| {
        PanelError::invalid_value(row, "trade_date", raw_date, "unrecognised date")
    })?;

    Ok(DailyBar {
        instrument: InstrumentId::new(instrument),
        trade_date,
        open: parse_price(row, "open", field(2))?,
        high: parse_price(row, "high", field(3))?,
        low: parse_price(row, "low", field(4))?,
        close: parse_price(row, "close", field(5))?,
    })
}

/// Header index of each canonical column
fn resolve_columns(headers: &[String]) -> std::result::Result<Vec<usize>, PanelError> {
    COLUMNS
        .iter()
        .map(|(canonical, aliases)| {
            headers
                .iter()
                .position(|h| aliases.contains(&h.as_str()))
                .ok_or_else(|| PanelError::missing_column(*canonical))
        })
        .collect()
}

/// Key name of each canonical column in a JSON record
fn resolve_column_names(keys: &[String]) -> std::result::Result<Vec<&'static str>, PanelError> {
    COLUMNS
        .iter()
        .map(|(canonical, aliases)| {
            aliases
                .iter()
                .copied()
                .find(|alias| keys.iter().any(|k| k.as_str() == *alias))
                .ok_or_else(|| PanelError::missing_column(*canonical))
        })
        .collect()
}

fn json_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
