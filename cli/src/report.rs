//! Check results gathered by a run, before rendering.

use lexique_common::{CoverageReport, KeyedViolation, PatternWarning, PlaceholderMismatch};
use serde::Serialize;

/// Key and location label used when scanning a literal `--text` argument.
pub const INLINE_TEXT_LABEL: &str = "<text>";

/// Results of the coverage command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CoverageSection {
    /// Display path of the base dictionary.
    pub base: String,
    /// Display path of the target dictionary.
    pub target: String,
    /// Key parity between the two dictionaries.
    #[serde(flatten)]
    pub keys: CoverageReport,
    /// Target keys whose value is blank.
    pub empty_values: Vec<String>,
    /// Shared keys whose placeholders differ.
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
}

impl CoverageSection {
    /// Whether every coverage check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.keys.is_complete()
            && self.empty_values.is_empty()
            && self.placeholder_mismatches.is_empty()
    }
}

/// Results of the terminology command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TermsSection {
    /// Display path of the scanned dictionary, or [`INLINE_TEXT_LABEL`].
    pub target: String,
    /// Violations keyed by the entry they were found in.
    pub violations: Vec<KeyedViolation>,
    /// Terminology entries skipped while compiling.
    pub warnings: Vec<PatternWarning>,
}

impl TermsSection {
    /// Whether the scan passed; warnings fail it only under `deny_warnings`.
    #[must_use]
    pub fn passed(&self, deny_warnings: bool) -> bool {
        self.violations.is_empty() && !(deny_warnings && !self.warnings.is_empty())
    }
}

/// Everything a run found.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Coverage results, when the command ran them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageSection>,
    /// Terminology results, when the command ran them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminology: Option<TermsSection>,
    /// Whether pattern warnings count as failures.
    #[serde(skip)]
    pub deny_warnings: bool,
}

impl Report {
    /// Whether every section that ran passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.coverage.as_ref().is_none_or(CoverageSection::passed)
            && self
                .terminology
                .as_ref()
                .is_none_or(|section| section.passed(self.deny_warnings))
    }
}
