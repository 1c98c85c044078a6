//! Report rendering as localised text or JSON.

use std::borrow::Cow;
use std::io::Write;

use lexique_common::{Arguments, FluentValue, Localiser, PatternWarning};
use serde::Serialize;

use crate::error::Result;
use crate::report::{CoverageSection, Report, TermsSection};

/// Builds Fluent arguments from `(name, value)` pairs.
fn arguments<const N: usize>(pairs: [(&'static str, FluentValue<'static>); N]) -> Arguments<'static> {
    pairs
        .into_iter()
        .map(|(name, value)| (Cow::Borrowed(name), value))
        .collect()
}

fn count(value: usize) -> FluentValue<'static> {
    FluentValue::from(i64::try_from(value).unwrap_or(i64::MAX))
}

fn text(value: &str) -> FluentValue<'static> {
    FluentValue::from(value.to_owned())
}

struct TextRenderer<'a> {
    localiser: &'a Localiser,
    out: &'a mut dyn Write,
}

impl TextRenderer<'_> {
    fn line(&mut self, key: &str, args: &Arguments<'static>) -> Result<()> {
        let message = self.localiser.message_with_args(key, args)?;
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn plain(&mut self, key: &str) -> Result<()> {
        let message = self.localiser.message(key)?;
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn bullets<'k>(&mut self, items: impl IntoIterator<Item = &'k String>) -> Result<()> {
        for item in items {
            writeln!(self.out, "  - {item}")?;
        }
        Ok(())
    }

    fn counted_list(&mut self, key: &str, target: &str, items: &[String]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.line(key, &arguments([("count", count(items.len())), ("target", text(target))]))?;
        self.bullets(items)
    }

    fn name_list(&self, names: &[String]) -> Result<String> {
        if names.is_empty() {
            return Ok(self.localiser.message("placeholders-none")?);
        }
        Ok(names.join(", "))
    }

    fn coverage(&mut self, section: &CoverageSection) -> Result<()> {
        let paths = || [("target", text(&section.target)), ("base", text(&section.base))];

        self.line("coverage-heading", &arguments(paths()))?;
        if section.keys.is_complete() {
            self.line("coverage-complete", &arguments(paths()))?;
        }
        self.counted_list("coverage-missing", &section.target, &section.keys.missing_in_target)?;
        self.counted_list("coverage-extra", &section.target, &section.keys.extra_in_target)?;
        self.counted_list("coverage-empty", &section.target, &section.empty_values)?;

        if !section.placeholder_mismatches.is_empty() {
            self.line(
                "placeholders-mismatch",
                &arguments([("count", count(section.placeholder_mismatches.len()))]),
            )?;
            for mismatch in &section.placeholder_mismatches {
                let missing = self.name_list(&mismatch.missing_in_target)?;
                let extra = self.name_list(&mismatch.extra_in_target)?;
                let detail = self.localiser.message_with_args(
                    "placeholders-detail",
                    &arguments([
                        ("key", text(&mismatch.key)),
                        ("missing", text(&missing)),
                        ("extra", text(&extra)),
                    ]),
                )?;
                writeln!(self.out, "  - {detail}")?;
            }
        }
        Ok(())
    }

    fn terminology(&mut self, section: &TermsSection) -> Result<()> {
        self.line("terms-heading", &arguments([("target", text(&section.target))]))?;

        if section.violations.is_empty() {
            self.plain("terms-clean")?;
        } else {
            self.line(
                "terms-found",
                &arguments([("count", count(section.violations.len()))]),
            )?;
            for keyed in &section.violations {
                let entry = self.localiser.message_with_args(
                    "terms-violation",
                    &arguments([
                        ("location", text(&keyed.key)),
                        ("term", text(&keyed.violation.term)),
                        ("suggestion", text(&keyed.violation.suggestion)),
                    ]),
                )?;
                writeln!(self.out, "  - {entry}")?;
            }
        }

        for warning in &section.warnings {
            let entry = match warning {
                PatternWarning::BlankTerm { term } => self
                    .localiser
                    .message_with_args("terms-warning-blank", &arguments([("term", text(term))]))?,
                PatternWarning::Invalid { term, reason } => self.localiser.message_with_args(
                    "terms-warning-invalid",
                    &arguments([("term", text(term)), ("reason", text(reason))]),
                )?,
            };
            writeln!(self.out, "  ! {entry}")?;
        }
        Ok(())
    }
}

/// Render `report` as localised text.
///
/// # Errors
///
/// Fails when a message is missing from the bundle or `out` rejects a write.
pub fn render_text(report: &Report, localiser: &Localiser, out: &mut dyn Write) -> Result<()> {
    let mut renderer = TextRenderer { localiser, out };

    if let Some(coverage) = &report.coverage {
        renderer.coverage(coverage)?;
        writeln!(renderer.out)?;
    }
    if let Some(terminology) = &report.terminology {
        renderer.terminology(terminology)?;
        writeln!(renderer.out)?;
    }

    renderer.plain(if report.passed() {
        "summary-pass"
    } else {
        "summary-fail"
    })
}

#[derive(Serialize)]
struct JsonReport<'a> {
    locale: String,
    passed: bool,
    #[serde(flatten)]
    report: &'a Report,
}

/// Render `report` as pretty-printed JSON.
///
/// # Errors
///
/// Fails when serialisation or the write to `out` fails.
pub fn render_json(report: &Report, localiser: &Localiser, out: &mut dyn Write) -> Result<()> {
    let document = JsonReport {
        locale: localiser.locale(),
        passed: report.passed(),
        report,
    };
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexique_common::{CoverageReport, KeyedViolation, PlaceholderMismatch, Violation};
    use rstest::{fixture, rstest};

    fn rendered(report: &Report, locale: &str) -> String {
        let localiser = Localiser::new(Some(locale));
        let mut out = Vec::new();
        render_text(report, &localiser, &mut out)
            .unwrap_or_else(|error| panic!("report should render: {error}"));
        String::from_utf8(out).unwrap_or_else(|error| panic!("report should be UTF-8: {error}"))
    }

    #[fixture]
    fn failing() -> Report {
        Report {
            coverage: Some(CoverageSection {
                base: "en.json".to_owned(),
                target: "fr.json".to_owned(),
                keys: CoverageReport {
                    missing_in_target: vec!["b".to_owned()],
                    extra_in_target: Vec::new(),
                },
                empty_values: Vec::new(),
                placeholder_mismatches: vec![PlaceholderMismatch {
                    key: "greeting".to_owned(),
                    missing_in_target: vec!["name".to_owned()],
                    extra_in_target: Vec::new(),
                }],
            }),
            terminology: Some(TermsSection {
                target: "fr.json".to_owned(),
                violations: vec![KeyedViolation {
                    key: "nav.parking".to_owned(),
                    violation: Violation {
                        term: "parking".to_owned(),
                        suggestion: "stationnement".to_owned(),
                    },
                }],
                warnings: Vec::new(),
            }),
            deny_warnings: false,
        }
    }

    #[rstest]
    fn english_text_lists_every_finding(failing: Report) {
        let text = rendered(&failing, "en-GB");

        assert!(text.contains("Coverage of fr.json against en.json"), "{text}");
        assert!(text.contains("1 key missing from fr.json:"), "{text}");
        assert!(text.contains("  - b\n"), "{text}");
        assert!(text.contains("greeting: missing name; unexpected none"), "{text}");
        assert!(text.contains("nav.parking: “parking”, use “stationnement”"), "{text}");
        assert!(text.ends_with("Some checks failed.\n"), "{text}");
    }

    #[rstest]
    fn french_text_uses_the_quebec_bundle(failing: Report) {
        let text = rendered(&failing, "fr-CA");

        assert!(text.contains("1 clé manquante"), "{text}");
        assert!(!text.contains("Some checks failed."), "{text}");
    }

    #[rstest]
    #[case::english(
        "en-GB",
        "  ! Skipped terminology entry “  ”: it has no words to match\n",
        "  ! Skipped terminology entry “(”: no pattern could be built (unclosed group)\n"
    )]
    #[case::french(
        "fr-CA",
        "  ! Entrée de terminologie ignorée «    » : elle ne contient aucun mot à repérer\n",
        "  ! Entrée de terminologie ignorée « ( » : aucun motif n’a pu être construit (unclosed group)\n"
    )]
    fn pattern_warnings_are_localised(
        #[case] locale: &str,
        #[case] blank: &str,
        #[case] invalid: &str,
    ) {
        let report = Report {
            terminology: Some(TermsSection {
                target: "fr.json".to_owned(),
                violations: Vec::new(),
                warnings: vec![
                    PatternWarning::BlankTerm {
                        term: "  ".to_owned(),
                    },
                    PatternWarning::Invalid {
                        term: "(".to_owned(),
                        reason: "unclosed group".to_owned(),
                    },
                ],
            }),
            ..Report::default()
        };

        let text = rendered(&report, locale);

        assert!(text.contains(blank), "{text}");
        assert!(text.contains(invalid), "{text}");
    }

    #[rstest]
    fn clean_reports_say_so() {
        let report = Report {
            terminology: Some(TermsSection {
                target: "fr.json".to_owned(),
                violations: Vec::new(),
                warnings: Vec::new(),
            }),
            ..Report::default()
        };

        let text = rendered(&report, "en-GB");

        assert!(text.contains("No disallowed terms found."), "{text}");
        assert!(text.ends_with("All checks passed.\n"), "{text}");
    }

    #[rstest]
    fn json_reports_carry_the_verdict(failing: Report) {
        let localiser = Localiser::new(Some("fr-CA"));
        let mut out = Vec::new();
        render_json(&failing, &localiser, &mut out)
            .unwrap_or_else(|error| panic!("report should render: {error}"));

        let value: serde_json::Value = serde_json::from_slice(&out)
            .unwrap_or_else(|error| panic!("report should be JSON: {error}"));

        assert_eq!(value["locale"], "fr-CA");
        assert_eq!(value["passed"], false);
        assert_eq!(value["coverage"]["missing_in_target"][0], "b");
        assert_eq!(value["terminology"]["violations"][0]["term"], "parking");
        assert!(value.get("deny_warnings").is_none());
    }
}
