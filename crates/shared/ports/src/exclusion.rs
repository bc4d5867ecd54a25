use limitup_core::InstrumentId;

/// Port for restricted-security lookup
///
/// Excluded instruments keep feeding the previous-close chain of their own
/// series but are never reported as limit events. Real markets publish
/// special-treatment status separately from the code, so this is a lookup
/// rather than a property of `InstrumentId`.
pub trait ExclusionPolicy: Send + Sync {
    /// Whether the instrument is barred from event detection
    fn is_excluded(&self, instrument: &InstrumentId) -> bool;

    /// Get the policy's name for debugging
    fn name(&self) -> &str {
        "ExclusionPolicy"
    }
}
