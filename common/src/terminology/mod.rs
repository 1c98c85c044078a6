//! Terminology validation against a curated map of disallowed terms.
//!
//! Each entry of a [`TerminologyMap`] is compiled into a case-insensitive,
//! whole-word pattern and tested independently against the whole text, so
//! nested terms such as `building` and `building type` both fire. Violations
//! are reported in map order, which is the lexicographic order of terms.
//!
//! An entry that cannot be compiled is skipped and surfaced as a
//! [`PatternWarning`] next to the violations; one bad entry never aborts a
//! scan.

mod map;
mod pattern;
mod quebec;

use log::{debug, warn};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::dictionary::LocaleDictionary;

pub use map::{TerminologyError, TerminologyMap};

const LOG_TARGET: &str = "lexique::terminology";

/// A disallowed term found in text, with its preferred replacement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// The disallowed term, as stored in the map.
    pub term: String,
    /// The replacement to use instead.
    pub suggestion: String,
}

/// A [`Violation`] attributed to the dictionary key whose value contains it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeyedViolation {
    /// Dictionary key of the offending value.
    pub key: String,
    /// The detected term and suggestion.
    #[serde(flatten)]
    pub violation: Violation,
}

/// A terminology entry skipped because no pattern could be built for it.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternWarning {
    /// The term is empty once whitespace is removed.
    #[error("terminology entry `{term}` has no words to match")]
    BlankTerm {
        /// The skipped term.
        term: String,
    },

    /// The regex engine rejected the generated pattern.
    #[error("could not build a pattern for `{term}`: {reason}")]
    Invalid {
        /// The skipped term.
        term: String,
        /// Engine error message.
        reason: String,
    },
}

impl PatternWarning {
    /// The map key of the skipped entry.
    #[must_use]
    pub fn term(&self) -> &str {
        match self {
            Self::BlankTerm { term } | Self::Invalid { term, .. } => term,
        }
    }
}

/// Violations and pattern warnings produced by one validation call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Detected terms in map order.
    pub violations: Vec<Violation>,
    /// Entries skipped while compiling the map.
    pub warnings: Vec<PatternWarning>,
}

impl ValidationOutcome {
    /// Whether no disallowed term was found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Tuning for pattern compilation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValidatorOptions {
    /// Upper bound, in bytes, on the compiled size of each term pattern.
    pub size_limit: usize,
}

impl ValidatorOptions {
    /// Default per-pattern compiled size limit (1 MiB).
    pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            size_limit: Self::DEFAULT_SIZE_LIMIT,
        }
    }
}

#[derive(Clone, Debug)]
struct CompiledTerm {
    term: String,
    suggestion: String,
    pattern: Regex,
}

/// A terminology map compiled once for repeated scans.
///
/// ```
/// use lexique_common::{TerminologyMap, TerminologyValidator};
///
/// let map = TerminologyMap::from_pairs([("email", "courriel")])?;
/// let validator = TerminologyValidator::new(&map);
///
/// assert_eq!(validator.validate("I sent an email").violations.len(), 1);
/// assert!(validator.validate("I emailed them").is_clean());
/// # Ok::<(), lexique_common::TerminologyError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TerminologyValidator {
    terms: Vec<CompiledTerm>,
    warnings: Vec<PatternWarning>,
}

impl TerminologyValidator {
    /// Compile `map` with the default [`ValidatorOptions`].
    #[must_use]
    pub fn new(map: &TerminologyMap) -> Self {
        Self::with_options(map, ValidatorOptions::default())
    }

    /// Compile `map`, skipping entries that cannot become patterns.
    #[must_use]
    pub fn with_options(map: &TerminologyMap, options: ValidatorOptions) -> Self {
        let mut terms = Vec::with_capacity(map.len());
        let mut warnings = Vec::new();

        for (term, suggestion) in map.iter() {
            match pattern::build_pattern(term, options.size_limit) {
                Ok(pattern) => terms.push(CompiledTerm {
                    term: term.to_owned(),
                    suggestion: suggestion.to_owned(),
                    pattern,
                }),
                Err(warning) => {
                    warn!(target: LOG_TARGET, "skipping terminology entry: {warning}");
                    warnings.push(warning);
                }
            }
        }

        debug!(
            target: LOG_TARGET,
            "compiled {} terminology patterns ({} skipped)",
            terms.len(),
            warnings.len(),
        );

        Self { terms, warnings }
    }

    /// Entries skipped during compilation.
    #[must_use]
    pub fn warnings(&self) -> &[PatternWarning] {
        &self.warnings
    }

    /// Number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether no pattern compiled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Scan `text` for every disallowed term.
    #[must_use]
    pub fn validate(&self, text: &str) -> ValidationOutcome {
        ValidationOutcome {
            violations: self.violations_in(text).collect(),
            warnings: self.warnings.clone(),
        }
    }

    /// Scan the text content of a single rendered element.
    ///
    /// Identical to [`Self::validate`]; scanning one element at a time
    /// localises the source of a violation.
    #[must_use]
    pub fn validate_element_text(&self, element_text_content: &str) -> ValidationOutcome {
        self.validate(element_text_content)
    }

    /// Scan every value of `dictionary`, attributing violations to keys.
    ///
    /// Results follow key order, then map order within a key.
    #[must_use]
    pub fn validate_dictionary(&self, dictionary: &LocaleDictionary) -> Vec<KeyedViolation> {
        dictionary
            .iter()
            .flat_map(|(key, value)| {
                self.violations_in(value).map(move |violation| KeyedViolation {
                    key: key.to_owned(),
                    violation,
                })
            })
            .collect()
    }

    fn violations_in<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Violation> + 'a {
        self.terms
            .iter()
            .filter(move |compiled| !text.is_empty() && compiled.pattern.is_match(text))
            .map(|compiled| Violation {
                term: compiled.term.clone(),
                suggestion: compiled.suggestion.clone(),
            })
    }
}

/// Scan `text` against `map`.
///
/// ```
/// use lexique_common::{TerminologyMap, validate};
///
/// let map = TerminologyMap::from_pairs([("parking", "stationnement")])?;
/// let outcome = validate("PARKING and stationnement both appear", &map);
///
/// assert_eq!(outcome.violations.len(), 1);
/// assert_eq!(outcome.violations[0].suggestion, "stationnement");
/// # Ok::<(), lexique_common::TerminologyError>(())
/// ```
#[must_use]
pub fn validate(text: &str, map: &TerminologyMap) -> ValidationOutcome {
    TerminologyValidator::new(map).validate(text)
}

/// Scan the text content of a single rendered element against `map`.
#[must_use]
pub fn validate_element_text(element_text_content: &str, map: &TerminologyMap) -> ValidationOutcome {
    TerminologyValidator::new(map).validate_element_text(element_text_content)
}
