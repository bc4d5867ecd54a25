//! Scan pipeline: load, classify, report

use std::path::PathBuf;

use limitup_board::create_exclusion_policy;
use limitup_core::{DailySummary, TradeDate};
use limitup_engine::{EventCounts, LimitEventEngine, summarize_by_date};
use log::info;

use crate::config::RunnerConfig;
use crate::error::{Result, RunnerError};
use crate::loader::{load_panel, load_restricted_list};
use crate::report::{write_events, write_summary};

/// Outcome of one scan
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Set when the scan was limited to one trading day
    pub target_date: Option<TradeDate>,
    pub bars_loaded: usize,
    pub counts: EventCounts,
    pub summary: Vec<DailySummary>,
    pub summary_path: PathBuf,
    pub events_path: PathBuf,
}

/// Build an engine from configuration, resolving the restricted list
pub fn build_engine(config: &RunnerConfig) -> Result<LimitEventEngine> {
    let exclusion = &config.exclusion;
    let mut restricted = exclusion.restricted.clone();
    if let Some(path) = &exclusion.restricted_file {
        let codes = load_restricted_list(path)?;
        info!("Loaded {} restricted codes from {}", codes.len(), path.display());
        restricted.extend(codes);
    }

    let policy = create_exclusion_policy(&exclusion.kind, restricted, &exclusion.marker);
    info!(
        "Engine: rounding={}, scale={}, exclusion={}",
        config.engine.rounding,
        config.engine.price_scale,
        policy.name()
    );

    Ok(LimitEventEngine::with_config(config.engine).with_exclusion(policy))
}

/// Run a full scan and write both reports
///
/// With `target_date` set only that day's events are reported. Nothing is
/// written if loading or classification fails.
pub fn run(config: &RunnerConfig) -> Result<RunReport> {
    let engine = build_engine(config)?;
    let bars = load_panel(&config.input_path)?;
    let bars_loaded = bars.len();

    let (events, summary) = match config.target_date {
        Some(date) => {
            let events = engine.evaluate_on(bars, date)?;
            let mut day = DailySummary::new(date);
            for row in &events {
                day.record(row.limit_event);
            }
            (events, vec![day])
        }
        None => {
            let classified = engine.evaluate(bars)?;
            let summary = summarize_by_date(classified.rows());
            (classified.into_events(), summary)
        }
    };

    let counts = EventCounts::from_rows(&events);
    let summary_path = config.summary_path();
    let events_path = config.events_path();
    let event_refs: Vec<_> = events.iter().collect();
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| RunnerError::io(&config.output_dir, e))?;
    write_summary(&summary_path, &summary, config.utf8_bom)?;
    write_events(&events_path, &event_refs, config.utf8_bom)?;

    Ok(RunReport {
        target_date: config.target_date,
        bars_loaded,
        counts,
        summary,
        summary_path,
        events_path,
    })
}
