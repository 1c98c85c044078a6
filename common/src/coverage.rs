//! Key-parity checks between two locale dictionaries.
//!
//! [`check_coverage`] computes the symmetric difference of the key sets of a
//! base dictionary and a target dictionary. Both halves of the difference are
//! reported in key order, so the same inputs always yield the same report.

use serde::Serialize;

use crate::dictionary::LocaleDictionary;

/// Result of comparing a target dictionary against its base.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    /// Keys present in the base dictionary but absent from the target.
    pub missing_in_target: Vec<String>,
    /// Keys present in the target dictionary but absent from the base.
    pub extra_in_target: Vec<String>,
}

impl CoverageReport {
    /// Whether both dictionaries share exactly the same keys.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_in_target.is_empty() && self.extra_in_target.is_empty()
    }
}

/// Compare the key sets of `base` and `target`.
///
/// ```
/// use lexique_common::{LocaleDictionary, check_coverage};
///
/// let base: LocaleDictionary = [("a", "Hello"), ("b", "World")].into_iter().collect();
/// let target: LocaleDictionary = [("a", "Bonjour")].into_iter().collect();
///
/// let report = check_coverage(&base, &target);
/// assert_eq!(report.missing_in_target, ["b"]);
/// assert!(report.extra_in_target.is_empty());
/// assert!(!report.is_complete());
/// ```
#[must_use]
pub fn check_coverage(base: &LocaleDictionary, target: &LocaleDictionary) -> CoverageReport {
    CoverageReport {
        missing_in_target: keys_absent_from(base, target),
        extra_in_target: keys_absent_from(target, base),
    }
}

fn keys_absent_from(source: &LocaleDictionary, other: &LocaleDictionary) -> Vec<String> {
    source
        .keys()
        .filter(|key| !other.contains_key(key))
        .map(str::to_owned)
        .collect()
}

/// List the keys whose value is empty or only whitespace.
#[must_use]
pub fn empty_values(dictionary: &LocaleDictionary) -> Vec<String> {
    dictionary
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key.to_owned())
        .collect()
}
