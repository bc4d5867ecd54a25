use std::collections::HashSet;

use limitup_core::InstrumentId;
use limitup_ports::ExclusionPolicy;

/// Marker used by the name-based special-treatment heuristic
pub const DEFAULT_MARKER: &str = "ST";

/// Excludes nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExclusion;

impl ExclusionPolicy for NoExclusion {
    fn is_excluded(&self, _instrument: &InstrumentId) -> bool {
        false
    }

    fn name(&self) -> &str {
        "none"
    }
}

/// Explicit set of restricted codes, typically loaded from a status feed
#[derive(Debug, Clone, Default)]
pub struct RestrictedList {
    codes: HashSet<InstrumentId>,
}

impl RestrictedList {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<InstrumentId>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl ExclusionPolicy for RestrictedList {
    fn is_excluded(&self, instrument: &InstrumentId) -> bool {
        self.codes.contains(instrument)
    }

    fn name(&self) -> &str {
        "list"
    }
}

/// Legacy heuristic: the code itself embeds a status marker (case-insensitive)
#[derive(Debug, Clone)]
pub struct NameMarkerExclusion {
    marker: String,
}

impl NameMarkerExclusion {
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_lowercase(),
        }
    }
}

impl Default for NameMarkerExclusion {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl ExclusionPolicy for NameMarkerExclusion {
    fn is_excluded(&self, instrument: &InstrumentId) -> bool {
        if self.marker.is_empty() {
            return false;
        }
        instrument.as_str().to_lowercase().contains(&self.marker)
    }

    fn name(&self) -> &str {
        "marker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_exclusion() {
        assert!(!NoExclusion.is_excluded(&InstrumentId::from("*ST600001")));
    }

    #[test]
    fn test_restricted_list() {
        let list = RestrictedList::new(["600001", "000002"]);
        assert_eq!(list.len(), 2);
        assert!(list.is_excluded(&InstrumentId::from("000002")));
        assert!(!list.is_excluded(&InstrumentId::from("000003")));
    }

    #[test]
    fn test_name_marker_is_case_insensitive() {
        let policy = NameMarkerExclusion::default();
        assert!(policy.is_excluded(&InstrumentId::from("*ST600001")));
        assert!(policy.is_excluded(&InstrumentId::from("st000002")));
        assert!(!policy.is_excluded(&InstrumentId::from("600519.SH")));
    }

    #[test]
    fn test_empty_marker_excludes_nothing() {
        let policy = NameMarkerExclusion::new("");
        assert!(!policy.is_excluded(&InstrumentId::from("ST600001")));
    }
}
