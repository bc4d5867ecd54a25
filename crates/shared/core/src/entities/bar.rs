use serde::{Deserialize, Serialize};

use crate::instruments::InstrumentId;
use crate::values::{Price, TradeDate};

/// One session's OHLC prices for one instrument
///
/// Keyed by `(instrument, trade_date)`. The previous close is not stored
/// here; it is derived when the panel is aligned into per-instrument series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBar {
    pub instrument: InstrumentId,
    pub trade_date: TradeDate,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl DailyBar {
    /// Create a new bar
    pub fn new(
        instrument: impl Into<InstrumentId>,
        trade_date: TradeDate,
        open: Price,
        high: Price,
        low: Price,
        close: Price,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            trade_date,
            open,
            high,
            low,
            close,
        }
    }

    /// Price fields paired with their column names, for validation
    pub fn prices(&self) -> [(&'static str, Price); 4] {
        [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ]
    }
}
