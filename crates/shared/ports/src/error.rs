use limitup_core::{InstrumentId, TradeDate};
use thiserror::Error;

/// Batch-fatal errors raised while validating or classifying a panel
///
/// Any of these aborts the whole batch: no partial results are produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    #[error("Input schema error: required column '{column}' is missing")]
    InputSchema { column: String },

    #[error("Input ordering error: duplicate trade date {trade_date} for {instrument}")]
    InputOrdering {
        instrument: InstrumentId,
        trade_date: TradeDate,
    },

    #[error("Invalid value in row {row}, column '{column}': '{value}' ({reason})")]
    InvalidValue {
        /// 1-based data row (header excluded)
        row: usize,
        column: String,
        value: String,
        reason: String,
    },
}

impl PanelError {
    pub fn missing_column(column: impl Into<String>) -> Self {
        PanelError::InputSchema {
            column: column.into(),
        }
    }

    pub fn invalid_value(
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PanelError::InvalidValue {
            row,
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type PanelResult<T> = std::result::Result<T, PanelError>;
