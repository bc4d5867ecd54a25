//! Limit-Up Runner - batch scan of a daily bar panel
//!
//! Owns every boundary concern around the engine:
//!
//! - **Config**: JSON configuration with CLI overrides
//! - **Loader**: CSV / JSON panels into validated `DailyBar`s
//! - **Pipeline**: engine construction and the full-panel / single-date runs
//! - **Report**: daily summary and detailed event CSVs
//!
//! ## Data Flow
//!
//! ```text
//!  panel.csv / panel.json
//!          │
//!          ▼
//!     ┌─────────┐  missing column ──► InputSchema
//!     │ Loader  │  bad number/date ─► InvalidValue
//!     └────┬────┘
//!          │ Vec<DailyBar>
//!          ▼
//!  ┌──────────────────┐
//!  │ LimitEventEngine │ ◄── ExclusionPolicy (config)
//!  └────────┬─────────┘
//!           │
//!     ┌─────┴──────┐
//!     ▼            ▼
//!  summary.csv  events.csv
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod report;

// Re-export main types
pub use cli::Cli;
pub use config::{ConfigError, ExclusionConfig, RunnerConfig};
pub use error::{Result, RunnerError};
pub use loader::{load_panel, load_restricted_list, parse_trade_date};
pub use pipeline::{RunReport, build_engine, run};
pub use report::{EventRecord, SummaryRecord, write_events, write_summary};
