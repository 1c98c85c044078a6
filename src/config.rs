//! Project configuration loaded from `lexique.toml`.
//!
//! Every table is optional. Relative paths are interpreted against the
//! directory holding the configuration file, so a checked-in `lexique.toml`
//! works no matter where the tool is launched from. Command-line arguments
//! take precedence over anything configured here.

use std::fs;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use lexique_common::ValidatorOptions;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "lexique.toml";

const LOG_TARGET: &str = "lexique::config";

/// Errors raised while loading `lexique.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or has unexpected fields.
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        #[source]
        source: toml::de::Error,
    },
}

/// Shared configuration for every Lexique front end.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SharedConfig {
    /// Preferred report language when neither `--lang` nor `LEXIQUE_LOCALE`
    /// is set. Blank values are ignored.
    pub locale: Option<String>,
    /// Default dictionaries to compare.
    pub dictionaries: DictionariesConfig,
    /// Terminology sources and tuning.
    pub terminology: TerminologyConfig,
}

/// The `[dictionaries]` table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DictionariesConfig {
    /// Reference dictionary, usually English.
    pub base: Option<Utf8PathBuf>,
    /// Dictionary under review, usually Quebec French.
    pub target: Option<Utf8PathBuf>,
}

/// The `[terminology]` table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TerminologyConfig {
    /// Start from the built-in Quebec French map.
    #[serde(default = "TerminologyConfig::default_builtin")]
    pub builtin: bool,
    /// Extra TOML terminology file merged over the built-in map.
    pub terms: Option<Utf8PathBuf>,
    /// Terms accepted in this project even though the map lists them.
    pub allow: Vec<String>,
    /// Compiled size limit for each term pattern, in bytes.
    pub pattern_size_limit: Option<usize>,
}

impl TerminologyConfig {
    const fn default_builtin() -> bool {
        true
    }

    /// Validator tuning derived from this table.
    #[must_use]
    pub fn validator_options(&self) -> ValidatorOptions {
        self.pattern_size_limit
            .map_or_else(ValidatorOptions::default, |size_limit| ValidatorOptions {
                size_limit,
            })
    }
}

impl Default for TerminologyConfig {
    fn default() -> Self {
        Self {
            builtin: Self::default_builtin(),
            terms: None,
            allow: Vec::new(),
            pattern_size_limit: None,
        }
    }
}

impl SharedConfig {
    /// Loads configuration for the current invocation.
    ///
    /// An explicit `path` must exist. Without one, `lexique.toml` in the
    /// working directory is read when present and defaults apply otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a file cannot be read or parsed.
    pub fn discover(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        match path {
            Some(explicit) => Self::load_from(explicit),
            None => Self::load_or_default(Utf8Path::new(DEFAULT_CONFIG_FILE)),
        }
    }

    /// Reads `path` when it exists, falling back to the defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file exists but cannot be read or
    /// parsed.
    pub fn load_or_default(path: &Utf8Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |candidate| match Self::load_from(candidate) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                debug!(target: LOG_TARGET, "no {candidate} found; using defaults");
                Ok(Self::default())
            }
            other => other,
        })
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file is unreadable and
    /// [`ConfigError::Parse`] when it is malformed.
    pub fn load_from(path: &Utf8Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml_str(&source).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })?;

        debug!(target: LOG_TARGET, "loaded configuration from {path}");
        Ok(config.rebased_on(path.parent().unwrap_or_else(|| Utf8Path::new(""))))
    }

    /// Loads configuration using the supplied loader.
    ///
    /// Exists so callers and tests can substitute the file system while
    /// keeping the lookup path explicit.
    ///
    /// # Errors
    ///
    /// Propagates whatever the loader returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8Path;
    /// use lexique::SharedConfig;
    ///
    /// let config = SharedConfig::load_with(Utf8Path::new("lexique.toml"), |_| {
    ///     Ok(SharedConfig::default())
    /// })?;
    /// assert!(config.terminology.builtin);
    /// # Ok::<(), lexique::ConfigError>(())
    /// ```
    pub fn load_with<F>(path: &Utf8Path, loader: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&Utf8Path) -> Result<Self, ConfigError>,
    {
        loader(path)
    }

    /// Parses configuration from TOML without touching the file system.
    ///
    /// # Errors
    ///
    /// Returns the TOML diagnostic when `source` is malformed.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Returns the configured locale override, if present and not blank.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale
            .as_deref()
            .map(str::trim)
            .filter(|locale| !locale.is_empty())
    }

    fn rebased_on(mut self, root: &Utf8Path) -> Self {
        let rebase = |path: Option<Utf8PathBuf>| {
            path.map(|path| {
                if path.is_absolute() {
                    path
                } else {
                    root.join(path)
                }
            })
        };

        self.dictionaries.base = rebase(self.dictionaries.base);
        self.dictionaries.target = rebase(self.dictionaries.target);
        self.terminology.terms = rebase(self.terminology.terms);
        self
    }
}
