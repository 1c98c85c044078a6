//! Shared checks for Lexique: locale dictionaries, translation coverage,
//! placeholder parity, Quebec French terminology validation, and the
//! localisation layer used to render reports.

pub mod coverage;
pub mod dictionary;
pub mod error;
pub mod i18n;
pub mod placeholders;
pub mod terminology;

pub use coverage::{CoverageReport, check_coverage, empty_values};
pub use dictionary::{DictionaryError, DictionaryFormat, LocaleDictionary};
pub use error::InputError;
pub use i18n::{
    Arguments, FALLBACK_LOCALE, FluentValue, I18nError, IgnoredLocale, LOCALE_ENV_VAR,
    LocaleOrigin, LocaleRequest, Localiser, ReportLocale, available_locales,
    resolve_report_locale, supports_locale,
};
pub use placeholders::{PlaceholderMismatch, check_placeholders, extract_placeholders};
pub use terminology::{
    KeyedViolation, PatternWarning, TerminologyError, TerminologyMap, TerminologyValidator,
    ValidationOutcome, ValidatorOptions, Violation, validate, validate_element_text,
};
