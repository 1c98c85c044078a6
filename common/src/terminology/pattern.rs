//! Construction of whole-word, case-insensitive term patterns.

use regex::{Regex, RegexBuilder};

use super::PatternWarning;

/// Word characters as understood by the Unicode-aware `\b` assertion.
fn is_word_char(character: char) -> bool {
    character.is_alphanumeric() || character == '_'
}

/// Render the regex source for an already-normalised term.
///
/// Each whitespace-separated word is escaped and words are joined by a
/// single literal space. `\b` anchors only edges that start or end with a
/// word character; an anchor next to punctuation would never match.
pub(super) fn pattern_source(term: &str) -> Option<String> {
    let body = term
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(" ");
    let first = term.trim_start().chars().next()?;
    let last = term.trim_end().chars().next_back()?;

    let leading = if is_word_char(first) { r"\b" } else { "" };
    let trailing = if is_word_char(last) { r"\b" } else { "" };
    Some(format!("{leading}{body}{trailing}"))
}

/// Compile the pattern for `term`, or explain why it must be skipped.
pub(super) fn build_pattern(term: &str, size_limit: usize) -> Result<Regex, PatternWarning> {
    let source = pattern_source(term).ok_or_else(|| PatternWarning::BlankTerm {
        term: term.to_owned(),
    })?;

    RegexBuilder::new(&source)
        .case_insensitive(true)
        .size_limit(size_limit)
        .build()
        .map_err(|error| PatternWarning::Invalid {
            term: term.to_owned(),
            reason: error.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const GENEROUS_LIMIT: usize = 1 << 20;

    #[rstest]
    #[case("email", r"\bemail\b")]
    #[case("property manager", r"\bproperty manager\b")]
    #[case("lease  agreement", r"\blease agreement\b")]
    #[case("c++", r"\bc\+\+")]
    #[case("(beta)", r"\(beta\)")]
    #[case("à date", r"\bà date\b")]
    fn renders_sources(#[case] term: &str, #[case] expected: &str) {
        assert_eq!(pattern_source(term).as_deref(), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_terms_have_no_source(#[case] term: &str) {
        assert_eq!(pattern_source(term), None);
    }

    #[rstest]
    #[case("c++", "Written in C++ today", true)]
    #[case("(beta)", "Feature (BETA) enabled", true)]
    #[case("e-mail", "Send an E-Mail", true)]
    #[case("e-mail", "re-mail it", false)]
    fn punctuation_edges_still_match(
        #[case] term: &str,
        #[case] text: &str,
        #[case] expected: bool,
    ) {
        let pattern = build_pattern(term, GENEROUS_LIMIT)
            .unwrap_or_else(|warning| panic!("pattern should build: {warning}"));

        assert_eq!(pattern.is_match(text), expected);
    }

    #[rstest]
    fn blank_terms_become_warnings() {
        let outcome = build_pattern(" ", GENEROUS_LIMIT);

        assert!(matches!(outcome, Err(PatternWarning::BlankTerm { .. })));
    }

    #[rstest]
    fn oversized_patterns_become_warnings() {
        match build_pattern("lease agreement", 8) {
            Err(PatternWarning::Invalid { term, reason }) => {
                assert_eq!(term, "lease agreement");
                assert!(!reason.is_empty());
            }
            other => panic!("expected an invalid pattern warning, got {other:?}"),
        }
    }
}
