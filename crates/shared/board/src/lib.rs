//! Limit-Up Board Rules
//!
//! Implementations of the board and exclusion ports: the fixed A-share
//! prefix classifier and the restricted-security policies.

mod exclusion;
mod prefix;

pub use exclusion::{DEFAULT_MARKER, NameMarkerExclusion, NoExclusion, RestrictedList};
pub use prefix::{CHINEXT_PREFIXES, NEEQ_PREFIXES, PrefixBoardClassifier, STAR_PREFIXES};

// Re-export the traits from ports for convenience
pub use limitup_ports::{BoardClassifier, ExclusionPolicy};

/// Factory function to create exclusion policies by name
///
/// `restricted` feeds the `list` policy; `marker` feeds the `marker` policy.
pub fn create_exclusion_policy(
    policy_type: &str,
    restricted: Vec<String>,
    marker: &str,
) -> Box<dyn ExclusionPolicy> {
    match policy_type.to_lowercase().as_str() {
        "none" | "off" => Box::new(NoExclusion),
        "list" | "restricted" => Box::new(RestrictedList::new(restricted)),
        "marker" => Box::new(NameMarkerExclusion::new(marker)),
        other => {
            log::warn!("Unknown exclusion policy '{}', using name marker", other);
            Box::new(NameMarkerExclusion::new(marker))
        }
    }
}
