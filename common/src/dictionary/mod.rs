//! Locale dictionaries: flat key to string mappings, one per locale.
//!
//! A [`LocaleDictionary`] is immutable once built. Entries are kept in an
//! ordered map so iteration, and therefore every report derived from it,
//! follows the lexicographic order of keys.
//!
//! Dictionaries can be assembled from pairs, from JSON documents (nested
//! objects are flattened into dotted keys), or from Fluent resources (each
//! message contributes its identifier and each attribute `id.attr`).

mod ftl;
mod json;

use std::collections::BTreeMap;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use thiserror::Error;

/// Errors raised while building a dictionary from a source document.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The JSON document is syntactically invalid.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON document is not an object at the top level.
    #[error("expected a JSON object at the top level, found {found}")]
    NotAnObject {
        /// JSON kind found instead.
        found: &'static str,
    },

    /// A leaf value is not a string.
    #[error("value for `{key}` must be a string, found {found}")]
    NonStringValue {
        /// Flattened key of the offending value.
        key: String,
        /// JSON kind found instead.
        found: &'static str,
    },

    /// Two source entries flatten to the same key.
    #[error("key `{key}` is defined more than once")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// The Fluent resource failed to parse.
    #[error("Fluent source has {count} syntax error(s), first: {first}")]
    FluentSyntax {
        /// Number of parser errors.
        count: usize,
        /// Rendering of the first parser error.
        first: String,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported dictionary format for {path}; expected .json or .ftl")]
    UnsupportedFormat {
        /// Path with the unrecognised extension.
        path: Utf8PathBuf,
    },

    /// Parsing failed for a file on disk.
    #[error("{path}: {source}")]
    InFile {
        /// Path of the file being parsed.
        path: Utf8PathBuf,
        /// The parse failure.
        #[source]
        source: Box<DictionaryError>,
    },
}

/// Source formats understood by [`LocaleDictionary::load`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DictionaryFormat {
    /// A JSON object, possibly nested.
    Json,
    /// A Fluent Translation List resource.
    Fluent,
}

impl DictionaryFormat {
    /// Determine the format from a file extension.
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use lexique_common::DictionaryFormat;
    ///
    /// assert_eq!(
    ///     DictionaryFormat::from_path(Utf8Path::new("locales/fr.json")),
    ///     Some(DictionaryFormat::Json),
    /// );
    /// assert_eq!(DictionaryFormat::from_path(Utf8Path::new("fr.yaml")), None);
    /// ```
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        match path.extension()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "ftl" => Some(Self::Fluent),
            _ => None,
        }
    }
}

/// Flat mapping of translation keys to user-facing strings for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocaleDictionary {
    entries: BTreeMap<String, String>,
}

impl LocaleDictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parse a JSON document into a dictionary.
    ///
    /// Nested objects are flattened with `.` between segments.
    ///
    /// ```
    /// use lexique_common::LocaleDictionary;
    ///
    /// let dictionary = LocaleDictionary::from_json_str(
    ///     r#"{"bills": {"title": "Factures"}, "save": "Enregistrer"}"#,
    /// )?;
    /// assert_eq!(dictionary.get("bills.title"), Some("Factures"));
    /// assert_eq!(dictionary.len(), 2);
    /// # Ok::<(), lexique_common::DictionaryError>(())
    /// ```
    pub fn from_json_str(source: &str) -> Result<Self, DictionaryError> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        json::flatten(value).map(|entries| Self { entries })
    }

    /// Parse a Fluent resource into a dictionary.
    ///
    /// Each message value becomes an `id` entry and each message attribute
    /// an `id.attr` entry. Terms are skipped.
    pub fn from_fluent_str(source: &str) -> Result<Self, DictionaryError> {
        ftl::parse(source).map(|entries| Self { entries })
    }

    /// Parse `source` according to `format`.
    pub fn parse(source: &str, format: DictionaryFormat) -> Result<Self, DictionaryError> {
        match format {
            DictionaryFormat::Json => Self::from_json_str(source),
            DictionaryFormat::Fluent => Self::from_fluent_str(source),
        }
    }

    /// Load a dictionary from disk, choosing the format from the extension.
    pub fn load(path: &Utf8Path) -> Result<Self, DictionaryError> {
        let format =
            DictionaryFormat::from_path(path).ok_or_else(|| DictionaryError::UnsupportedFormat {
                path: path.to_owned(),
            })?;
        let source = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_owned(),
            source,
        })?;

        Self::parse(&source, format).map_err(|error| DictionaryError::InFile {
            path: path.to_owned(),
            source: Box::new(error),
        })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for LocaleDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}
