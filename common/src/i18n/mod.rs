//! Localisation of Lexique's own report messages.
//!
//! Fluent resources under `locales/` are embedded at build time so reports can
//! be rendered in English or Quebec French without touching the filesystem.
//! [`Localiser`] is a thin wrapper around `fluent-templates` that records
//! whether the fallback bundle was used and surfaces missing messages as
//! errors instead of empty strings.
//!
//! [`resolve_report_locale`] picks the report language from `--lang`,
//! `LEXIQUE_LOCALE` and `lexique.toml`, in that order, before falling back to
//! the bundled locale.

use fluent_templates::static_loader;
use unic_langid::langid;

/// Re-export the Fluent value type for constructing message arguments.
pub use fluent_templates::fluent_bundle::FluentValue;
pub(crate) use fluent_templates::loader::LanguageIdentifier;

const FALLBACK_LITERAL: &str = "en-GB";

static_loader! {
    pub(crate) static LOADER = {
        locales: "../locales",
        fallback_language: "en-GB",
        // Reports are plain terminal or JSON text; bidi isolation marks
        // would leak into both.
        customise: |bundle| bundle.set_use_isolating(false),
    };
}

/// Locale used when no candidate resolves.
pub const FALLBACK_LOCALE: &str = FALLBACK_LITERAL;
/// Environment variable consulted for the report locale.
pub const LOCALE_ENV_VAR: &str = "LEXIQUE_LOCALE";
pub(crate) const FALLBACK_LANGUAGE: LanguageIdentifier = langid!("en-GB");

mod loader;
mod locales;
mod report_locale;

pub use loader::{Arguments, I18nError, Localiser};
pub use locales::{available_locales, supports_locale};
pub use report_locale::{
    IgnoredLocale, LocaleOrigin, LocaleRequest, ReportLocale, resolve_report_locale,
};
