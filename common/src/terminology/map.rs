//! Disallowed-term to replacement mappings.

use std::collections::BTreeMap;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a [`TerminologyMap`].
#[derive(Debug, Error)]
pub enum TerminologyError {
    /// The replacement for a term is empty.
    #[error("suggestion for `{term}` must not be empty")]
    EmptySuggestion {
        /// The disallowed term.
        term: String,
    },

    /// The replacement repeats the disallowed term.
    #[error("suggestion for `{term}` repeats the disallowed term")]
    SuggestionMatchesTerm {
        /// The disallowed term.
        term: String,
    },

    /// The terminology file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The terminology file is not valid TOML or has unexpected fields.
    #[error("invalid terminology file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// On-disk shape of a terminology file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TerminologyFile {
    terms: BTreeMap<String, String>,
}

/// Curated mapping of disallowed terms to their preferred replacements.
///
/// Terms are stored lower-case with internal whitespace collapsed to single
/// spaces, and iterate in lexicographic order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TerminologyMap {
    entries: BTreeMap<String, String>,
}

/// Lower-case `term` and collapse its internal whitespace.
pub(crate) fn normalise_term(term: &str) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl TerminologyMap {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub(crate) fn from_normalised(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Insert `term`, returning the suggestion it replaces, if any.
    ///
    /// ```
    /// use lexique_common::TerminologyMap;
    ///
    /// let mut map = TerminologyMap::new();
    /// map.insert("E-mail", "courriel")?;
    /// assert_eq!(map.get("e-mail"), Some("courriel"));
    /// assert!(map.insert("parking", "").is_err());
    /// assert!(map.insert("parking", "Parking").is_err());
    /// # Ok::<(), lexique_common::TerminologyError>(())
    /// ```
    pub fn insert(&mut self, term: &str, suggestion: &str) -> Result<Option<String>, TerminologyError> {
        let term = normalise_term(term);
        let suggestion = suggestion.trim();

        if suggestion.is_empty() {
            return Err(TerminologyError::EmptySuggestion { term });
        }
        if normalise_term(suggestion) == term {
            return Err(TerminologyError::SuggestionMatchesTerm { term });
        }

        Ok(self.entries.insert(term, suggestion.to_owned()))
    }

    /// Build a map from `(term, suggestion)` pairs.
    pub fn from_pairs<I, T, S>(pairs: I) -> Result<Self, TerminologyError>
    where
        I: IntoIterator<Item = (T, S)>,
        T: AsRef<str>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (term, suggestion) in pairs {
            map.insert(term.as_ref(), suggestion.as_ref())?;
        }
        Ok(map)
    }

    /// Parse a TOML document with a `[terms]` table.
    ///
    /// ```
    /// use lexique_common::TerminologyMap;
    ///
    /// let map = TerminologyMap::from_toml_str("[terms]\n\"due date\" = \"date d'échéance\"\n")?;
    /// assert_eq!(map.get("due date"), Some("date d'échéance"));
    /// # Ok::<(), lexique_common::TerminologyError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, TerminologyError> {
        let file: TerminologyFile = toml::from_str(source)?;
        Self::from_pairs(file.terms)
    }

    /// Load a TOML terminology file from disk.
    pub fn load(path: &Utf8Path) -> Result<Self, TerminologyError> {
        let source = fs::read_to_string(path).map_err(|source| TerminologyError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Look up the suggestion for `term`, ignoring case and spacing.
    #[must_use]
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(&normalise_term(term)).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(term, suggestion)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(term, suggestion)| (term.as_str(), suggestion.as_str()))
    }

    /// Remove allow-listed terms from the map.
    #[must_use]
    pub fn without<I, T>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for term in allowed {
            self.entries.remove(&normalise_term(term.as_ref()));
        }
        self
    }

    /// Merge `other` into this map; its suggestions win on conflicts.
    pub fn extend_from(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }
}
