use serde::{Deserialize, Serialize};

use super::{DailyBar, LimitEvent};
use crate::instruments::{BoardCategory, InstrumentId};
use crate::values::{Price, TradeDate};

/// A daily bar with its derived limit price and classification attached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedBar {
    pub instrument: InstrumentId,
    pub trade_date: TradeDate,
    pub open: Price,
    pub close: Price,
    pub high: Price,
    pub low: Price,
    /// Close of the previous session; `None` on the first observed bar
    pub prev_close: Option<Price>,
    pub board: BoardCategory,
    /// `None` whenever `prev_close` is `None`
    pub limit_price: Option<Price>,
    pub limit_event: LimitEvent,
    /// Restricted instrument: carried for prev_close only, never an event
    pub excluded: bool,
}

impl ClassifiedBar {
    /// Attach derived fields to a raw bar
    pub fn from_bar(
        bar: DailyBar,
        prev_close: Option<Price>,
        board: BoardCategory,
        limit_price: Option<Price>,
        limit_event: LimitEvent,
        excluded: bool,
    ) -> Self {
        Self {
            instrument: bar.instrument,
            trade_date: bar.trade_date,
            open: bar.open,
            close: bar.close,
            high: bar.high,
            low: bar.low,
            prev_close,
            board,
            limit_price,
            limit_event,
            excluded,
        }
    }

    /// Returns true for sealed and broken sessions
    pub fn is_event(&self) -> bool {
        self.limit_event.is_event()
    }
}
