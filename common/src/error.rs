//! Errors shared by every entry point that resolves checker inputs.

use thiserror::Error;

/// Raised when a required checker input was never supplied.
///
/// The checks themselves take references and cannot observe an absent
/// argument, so this error is produced where inputs are gathered from
/// optional sources such as command-line arguments and configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A required input (`base`, `target`, or `terminology`) is missing.
    #[error("missing required input `{argument}`")]
    Missing {
        /// Name of the absent input.
        argument: &'static str,
    },
}

impl InputError {
    /// Build a [`InputError::Missing`] for `argument`.
    #[must_use]
    pub const fn missing(argument: &'static str) -> Self {
        Self::Missing { argument }
    }

    /// Unwrap `value` or report `argument` as missing.
    ///
    /// ```
    /// use lexique_common::InputError;
    ///
    /// assert_eq!(InputError::require(Some(3), "base"), Ok(3));
    /// assert_eq!(
    ///     InputError::require(None::<u8>, "target"),
    ///     Err(InputError::missing("target")),
    /// );
    /// ```
    pub fn require<T>(value: Option<T>, argument: &'static str) -> Result<T, Self> {
        value.ok_or(Self::Missing { argument })
    }
}
