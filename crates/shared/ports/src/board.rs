use limitup_core::{BoardCategory, InstrumentId, Rate};

/// Port for board detection
///
/// Maps an instrument code to its regulatory board. Implementations must be
/// total: codes that match nothing fall back to `BoardCategory::Main`.
pub trait BoardClassifier: Send + Sync {
    /// Board category for an instrument code
    fn classify(&self, instrument: &InstrumentId) -> BoardCategory;

    /// Limit-move rate for a category
    fn rate_for(&self, category: BoardCategory) -> Rate {
        category.limit_rate()
    }

    /// Convenience: classify then look up the rate
    fn limit_rate(&self, instrument: &InstrumentId) -> Rate {
        self.rate_for(self.classify(instrument))
    }

    /// Get the classifier's name for debugging
    fn name(&self) -> &str {
        "BoardClassifier"
    }
}
