//! Error type for the `lexique` command.
//!
//! Every variant is an input, configuration, or environment problem and maps
//! to exit status 2. Failed checks are not errors; they are reported through
//! [`crate::run::Verdict`].

use lexique::ConfigError;
use lexique_common::{DictionaryError, I18nError, InputError, TerminologyError};
use thiserror::Error;

/// Errors that stop a run before a verdict is reached.
#[derive(Debug, Error)]
pub enum CliError {
    /// A required input was supplied by neither the command line nor the
    /// configuration file.
    #[error(transparent)]
    Input(#[from] InputError),

    /// `lexique.toml` could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A dictionary could not be loaded.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// A terminology file could not be loaded.
    #[error(transparent)]
    Terminology(#[from] TerminologyError),

    /// A report message is missing from the bundled translations.
    #[error(transparent)]
    Localisation(#[from] I18nError),

    /// The JSON report could not be serialised.
    #[error("failed to serialise the report: {0}")]
    Json(#[from] serde_json::Error),

    /// The report could not be written.
    #[error("failed to write the report: {0}")]
    Write(#[from] std::io::Error),
}

impl CliError {
    /// Exit status used when a run stops on an error.
    pub const EXIT_CODE: i32 = 2;
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
