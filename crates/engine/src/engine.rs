//! Limit Event Engine
//!
//! Classifies every session of a panel against its theoretical limit-up
//! price:
//! - first session of an instrument: no previous close, never an event
//! - `close >= limit` is sealed, otherwise `high >= limit` is broken
//! - restricted instruments propagate their close but are never events

use limitup_board::{NameMarkerExclusion, PrefixBoardClassifier};
use limitup_core::{ClassifiedBar, DailyBar, LimitEvent, Price, TradeDate, limit_price};
use limitup_ports::{BoardClassifier, ExclusionPolicy, PanelError, PanelResult};
use log::{info, warn};

use crate::classified::ClassifiedPanel;
use crate::config::EngineConfig;
use crate::panel::{InstrumentSeries, Panel};

/// Dual-threshold classification of one session
///
/// Uses `>=` on both legs so a close that rounds onto or past the limit is
/// still sealed.
pub fn classify_session(high: Price, close: Price, limit: Price) -> LimitEvent {
    if close >= limit {
        LimitEvent::Sealed
    } else if high >= limit {
        LimitEvent::Broken
    } else {
        LimitEvent::None
    }
}

/// Batch limit-up classifier
pub struct LimitEventEngine {
    config: EngineConfig,
    classifier: Box<dyn BoardClassifier>,
    exclusion: Box<dyn ExclusionPolicy>,
}

impl LimitEventEngine {
    /// Create an engine with the A-share prefix table and the name-marker
    /// special-treatment filter
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            classifier: Box::new(PrefixBoardClassifier::new()),
            exclusion: Box::new(NameMarkerExclusion::default()),
        }
    }

    /// Replace the board classifier
    pub fn with_classifier(mut self, classifier: Box<dyn BoardClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Replace the exclusion policy
    pub fn with_exclusion(mut self, exclusion: Box<dyn ExclusionPolicy>) -> Self {
        self.exclusion = exclusion;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate and classify a batch of bars
    ///
    /// Fails the whole batch on the first invalid or duplicated row.
    pub fn evaluate(&self, bars: Vec<DailyBar>) -> PanelResult<ClassifiedPanel> {
        let panel = Panel::new(bars)?;
        self.evaluate_panel(&panel)
    }

    /// Classify an already aligned panel
    ///
    /// Fails if a close is too large to derive the next session's limit.
    pub fn evaluate_panel(&self, panel: &Panel) -> PanelResult<ClassifiedPanel> {
        let mut rows = Vec::with_capacity(panel.bar_count());
        for series in panel.series() {
            rows.extend(self.evaluate_series(series)?);
        }

        let classified = ClassifiedPanel::new(rows);
        let counts = classified.counts();
        info!(
            "Classified {} bars across {} instruments: {} sealed, {} broken",
            classified.len(),
            panel.instrument_count(),
            counts.sealed,
            counts.broken
        );
        Ok(classified)
    }

    /// Limit events on a single trading day
    ///
    /// Sessions after `date` are dropped before classification; earlier
    /// sessions stay so that `date` still has its previous close.
    pub fn evaluate_on(
        &self,
        bars: Vec<DailyBar>,
        date: TradeDate,
    ) -> PanelResult<Vec<ClassifiedBar>> {
        let panel = Panel::new(bars)?.through(date);
        let classified = self.evaluate_panel(&panel)?;
        Ok(classified
            .into_events()
            .into_iter()
            .filter(|row| row.trade_date == date)
            .collect())
    }

    fn evaluate_series(&self, series: &InstrumentSeries) -> PanelResult<Vec<ClassifiedBar>> {
        let instrument = series.instrument();
        let board = self.classifier.classify(instrument);
        let rate = self.classifier.rate_for(board);
        let excluded = self.exclusion.is_excluded(instrument);

        if excluded {
            warn!(
                "{} excluded by '{}' policy, events suppressed",
                instrument,
                self.exclusion.name()
            );
        }

        series
            .with_prev_close()
            .enumerate()
            .map(|(idx, (bar, prev_close))| -> PanelResult<ClassifiedBar> {
                let limit = match prev_close {
                    Some(prev) => Some(
                        limit_price(prev, rate, self.config.rounding, self.config.price_scale)
                            .ok_or_else(|| {
                                // prev_close is the close of the preceding bar
                                PanelError::invalid_value(
                                    series.rows()[idx - 1],
                                    "close",
                                    prev.to_string(),
                                    format!("limit price at rate {rate} overflows"),
                                )
                            })?,
                    ),
                    None => None,
                };
                let event = match limit {
                    Some(limit) if !excluded => classify_session(bar.high, bar.close, limit),
                    _ => LimitEvent::None,
                };
                Ok(ClassifiedBar::from_bar(
                    bar.clone(),
                    prev_close,
                    board,
                    limit,
                    event,
                    excluded,
                ))
            })
            .collect()
    }
}

impl Default for LimitEventEngine {
    fn default() -> Self {
        Self::new()
    }
}
