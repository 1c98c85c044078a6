//! Placeholder parity between translations.
//!
//! A translated value must interpolate the same arguments as its source
//! value. Three placeholder spellings are recognised: `{name}`,
//! `{{name}}`, and Fluent's `{ $name }`. ICU-style `{name, plural, ...}`
//! contributes `name`.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::dictionary::LocaleDictionary;

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\{\{\s*([A-Za-z_][\w.]*)\s*\}\}|\{\s*\$([A-Za-z_][\w-]*)|\{\s*([A-Za-z_][\w.]*)\s*[,}]",
    )
    .unwrap_or_else(|error| panic!("placeholder pattern should compile: {error}"))
});

/// A key whose placeholders differ between the base and target values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlaceholderMismatch {
    /// Translation key shared by both dictionaries.
    pub key: String,
    /// Placeholders used by the base value but not the target value.
    pub missing_in_target: Vec<String>,
    /// Placeholders used by the target value but not the base value.
    pub extra_in_target: Vec<String>,
}

/// Collect the placeholder names used in `text`.
///
/// ```
/// use lexique_common::extract_placeholders;
///
/// let names = extract_placeholders("{{count}} bills for { $building } due {date}");
/// let names: Vec<&str> = names.iter().map(String::as_str).collect();
/// assert_eq!(names, ["building", "count", "date"]);
/// ```
#[must_use]
pub fn extract_placeholders(text: &str) -> BTreeSet<String> {
    PLACEHOLDER_RE
        .captures_iter(text)
        .filter_map(|captures| {
            captures
                .get(1)
                .or_else(|| captures.get(2))
                .or_else(|| captures.get(3))
        })
        .map(|name| name.as_str().to_owned())
        .collect()
}

/// Report keys present in both dictionaries whose placeholder sets differ.
///
/// Keys missing from either side are the concern of
/// [`check_coverage`](crate::coverage::check_coverage) and are ignored here.
#[must_use]
pub fn check_placeholders(
    base: &LocaleDictionary,
    target: &LocaleDictionary,
) -> Vec<PlaceholderMismatch> {
    base.iter()
        .filter_map(|(key, base_value)| {
            let target_value = target.get(key)?;
            let expected = extract_placeholders(base_value);
            let actual = extract_placeholders(target_value);
            if expected == actual {
                return None;
            }

            Some(PlaceholderMismatch {
                key: key.to_owned(),
                missing_in_target: expected.difference(&actual).cloned().collect(),
                extra_in_target: actual.difference(&expected).cloned().collect(),
            })
        })
        .collect()
}
