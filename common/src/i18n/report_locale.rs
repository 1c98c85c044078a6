//! Choosing the language a report is written in.
//!
//! A run has three places a language can come from: the `--lang` flag, the
//! `LEXIQUE_LOCALE` environment variable and the `locale` key of
//! `lexique.toml`. The first one naming a bundled locale wins. Blank values
//! are treated as absent; unsupported ones are logged and remembered so the
//! caller can mention them.

use std::env;
use std::fmt;

use log::{debug, warn};

use super::{LOCALE_ENV_VAR, Localiser, supports_locale};

const LOG_TARGET: &str = "lexique::i18n";

/// The input that decided the report language.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocaleOrigin {
    /// The `--lang` command-line flag.
    LangFlag,
    /// The `LEXIQUE_LOCALE` environment variable.
    Environment,
    /// The `locale` key of `lexique.toml`.
    ConfigFile,
    /// Nothing usable was supplied; the bundled default applies.
    BuiltIn,
}

impl fmt::Display for LocaleOrigin {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::LangFlag => "--lang",
            Self::Environment => LOCALE_ENV_VAR,
            Self::ConfigFile => "lexique.toml",
            Self::BuiltIn => "the built-in default",
        })
    }
}

/// A locale input that named a language Lexique does not ship.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IgnoredLocale {
    /// Where the value came from.
    pub origin: LocaleOrigin,
    /// The value, trimmed.
    pub tag: String,
}

/// The language inputs of one `lexique` run, minus the environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocaleRequest<'a> {
    /// Value of `--lang`.
    pub lang: Option<&'a str>,
    /// `locale` from `lexique.toml`.
    pub config: Option<&'a str>,
}

impl LocaleRequest<'_> {
    /// Resolve against the process environment.
    #[must_use]
    pub fn resolve(self) -> ReportLocale {
        self.resolve_with(|name| env::var(name).ok())
    }

    /// Resolve, reading `LEXIQUE_LOCALE` through `lookup`.
    ///
    /// ```
    /// use lexique_common::i18n::{LocaleOrigin, LocaleRequest};
    ///
    /// let request = LocaleRequest { lang: None, config: Some("en-GB") };
    /// let chosen = request.resolve_with(|_| Some("fr-CA".to_owned()));
    /// assert_eq!(chosen.origin(), LocaleOrigin::Environment);
    /// assert_eq!(chosen.tag(), "fr-CA");
    /// ```
    #[must_use]
    pub fn resolve_with(self, lookup: impl FnOnce(&str) -> Option<String>) -> ReportLocale {
        let environment = lookup(LOCALE_ENV_VAR);
        let inputs = [
            (LocaleOrigin::LangFlag, self.lang),
            (LocaleOrigin::Environment, environment.as_deref()),
            (LocaleOrigin::ConfigFile, self.config),
        ];

        let mut ignored = Vec::new();
        for (origin, raw) in inputs {
            let Some(tag) = raw.map(str::trim).filter(|tag| !tag.is_empty()) else {
                continue;
            };
            if supports_locale(tag) {
                debug!(target: LOG_TARGET, "report language `{tag}` taken from {origin}");
                return ReportLocale {
                    localiser: Localiser::new(Some(tag)),
                    origin,
                    ignored,
                };
            }
            warn!(target: LOG_TARGET, "ignoring unsupported locale `{tag}` from {origin}");
            ignored.push(IgnoredLocale {
                origin,
                tag: tag.to_owned(),
            });
        }

        let localiser = Localiser::new(None);
        debug!(
            target: LOG_TARGET,
            "no usable locale requested; writing reports in `{}`",
            localiser.locale(),
        );
        ReportLocale {
            localiser,
            origin: LocaleOrigin::BuiltIn,
            ignored,
        }
    }
}

/// The language a report is rendered in, and why.
#[derive(Clone, Debug)]
pub struct ReportLocale {
    localiser: Localiser,
    origin: LocaleOrigin,
    ignored: Vec<IgnoredLocale>,
}

impl ReportLocale {
    /// Input that decided the language.
    #[must_use]
    pub const fn origin(&self) -> LocaleOrigin {
        self.origin
    }

    /// Canonical tag of the chosen language.
    #[must_use]
    pub fn tag(&self) -> String {
        self.localiser.locale()
    }

    /// Inputs skipped because they named an unsupported locale, in priority
    /// order.
    #[must_use]
    pub fn ignored(&self) -> &[IgnoredLocale] {
        &self.ignored
    }

    /// Borrow the localiser for the chosen language.
    #[must_use]
    pub const fn localiser(&self) -> &Localiser {
        &self.localiser
    }

    /// Consume the choice, keeping only the localiser.
    #[must_use]
    pub fn into_localiser(self) -> Localiser {
        self.localiser
    }
}

/// Choose the report language for `--lang` and the configured locale,
/// consulting `LEXIQUE_LOCALE` in between.
#[must_use]
pub fn resolve_report_locale(lang: Option<&str>, config: Option<&str>) -> ReportLocale {
    LocaleRequest { lang, config }.resolve()
}
