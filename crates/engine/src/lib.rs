//! Limit-Up Event Engine
//!
//! Batch classification of daily equity bars into limit-up events:
//!
//! - **Panel**: validates bars, partitions them per instrument, sorts by date
//! - **Engine**: derives the previous close, computes the limit price from the
//!   instrument's board rate, and classifies each session
//! - **Summary**: per-day sealed/broken/total counts
//!
//! ## Architecture
//!
//! ```text
//!   Vec<DailyBar>
//!        │
//!        ▼
//!  ┌─────────────┐   duplicate date ──► PanelError::InputOrdering
//!  │    Panel    │   bad price ───────► PanelError::InvalidValue
//!  └──────┬──────┘
//!         │ per-instrument series (date ascending)
//!         ▼
//!  ┌─────────────────────────────────────────────┐
//!  │              LimitEventEngine               │
//!  │                                             │
//!  │  prev_close ──► BoardClassifier ──► rate    │
//!  │  limit = round(prev_close * (1 + rate), 2)  │
//!  │  ExclusionPolicy ──► force NONE             │
//!  │  close >= limit ──► SEALED                  │
//!  │  high  >= limit ──► BROKEN                  │
//!  └──────────────────────┬──────────────────────┘
//!                         ▼
//!                  ClassifiedPanel
//!                   │           │
//!                   ▼           ▼
//!            events()     daily_summary()
//! ```
//!
//! The engine is synchronous and performs no I/O.

pub mod classified;
pub mod config;
pub mod engine;
pub mod panel;
pub mod summary;

// Re-export main types
pub use classified::ClassifiedPanel;
pub use config::EngineConfig;
pub use engine::{LimitEventEngine, classify_session};
pub use panel::{InstrumentSeries, Panel};
pub use summary::{EventCounts, summarize_by_date};

// Re-export errors from ports for convenience
pub use limitup_ports::{PanelError, PanelResult};
