use std::borrow::Cow;
use std::collections::HashMap;
use std::str::FromStr;

use fluent_templates::Loader;
use fluent_templates::fluent_bundle::FluentValue;
use thiserror::Error;

use super::locales::supports_locale;
use super::{FALLBACK_LANGUAGE, LOADER, LanguageIdentifier};

/// HashMap wrapper used when passing Fluent arguments to lookups.
pub type Arguments<'a> = HashMap<Cow<'a, str>, FluentValue<'a>>;

/// Error raised when localisation data cannot satisfy a caller request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// Raised when the requested message is missing for the resolved locale.
    #[error("message `{key}` missing for locale `{locale}`")]
    MissingMessage {
        /// Requested message identifier.
        key: String,
        /// Locale the lookup ran against.
        locale: String,
    },
}

/// Resolve report messages for a specific locale.
///
/// The localiser eagerly falls back to `en-GB` when the requested locale is
/// not bundled.
#[derive(Clone, Debug)]
pub struct Localiser {
    language: LanguageIdentifier,
    fallback_used: bool,
}

impl Localiser {
    /// Create a localiser for `locale`, falling back to
    /// [`FALLBACK_LOCALE`](super::FALLBACK_LOCALE).
    ///
    /// ```
    /// use lexique_common::i18n::{Localiser, available_locales};
    ///
    /// let quebec = Localiser::new(Some("fr-CA"));
    /// assert!(available_locales().contains(&"fr-CA".to_owned()));
    /// assert_eq!(quebec.locale(), "fr-CA");
    /// assert!(!quebec.used_fallback());
    ///
    /// let fallback = Localiser::new(Some("zz"));
    /// assert_eq!(fallback.locale(), "en-GB");
    /// assert!(fallback.used_fallback());
    /// ```
    #[must_use]
    pub fn new(locale: Option<&str>) -> Self {
        match locale {
            Some(value) if supports_locale(value) => match LanguageIdentifier::from_str(value) {
                Ok(identifier) => Self {
                    language: identifier,
                    fallback_used: false,
                },
                Err(_) => Self::fallback(),
            },
            _ => Self::fallback(),
        }
    }

    /// Return the resolved locale identifier.
    #[must_use]
    pub fn language(&self) -> &LanguageIdentifier {
        &self.language
    }

    /// Return the resolved locale as a string.
    #[must_use]
    pub fn locale(&self) -> String {
        self.language.to_string()
    }

    /// Whether the fallback locale was used.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        self.fallback_used
    }

    /// Fetch the translated message for `key`.
    pub fn message(&self, key: &str) -> Result<String, I18nError> {
        self.lookup(key, None)
    }

    /// Fetch the translated message with Fluent arguments.
    pub fn message_with_args(&self, key: &str, args: &Arguments<'static>) -> Result<String, I18nError> {
        self.lookup(key, Some(args))
    }

    fn lookup(&self, key: &str, args: Option<&Arguments<'static>>) -> Result<String, I18nError> {
        let maybe_value = match args {
            Some(arguments) => LOADER.try_lookup_with_args(&self.language, key, arguments),
            None => LOADER.try_lookup(&self.language, key),
        };

        maybe_value.ok_or_else(|| I18nError::MissingMessage {
            key: key.to_owned(),
            locale: self.language.to_string(),
        })
    }

    fn fallback() -> Self {
        Self {
            language: FALLBACK_LANGUAGE.clone(),
            fallback_used: true,
        }
    }
}
