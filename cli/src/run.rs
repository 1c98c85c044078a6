//! Orchestration of a single `lexique` invocation.
//!
//! Inputs are resolved command line first, then `lexique.toml`. Dictionary
//! and terminology loading errors abort the run; check findings never do.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use lexique::{SharedConfig, TerminologyConfig};
use lexique_common::{
    InputError, KeyedViolation, LocaleDictionary, TerminologyMap, TerminologyValidator,
    check_coverage, check_placeholders, empty_values, resolve_report_locale,
};
use log::{debug, info};

use crate::cli::{Cli, Command, DictionaryPair, OutputFormat, TerminologyArgs, TermsArgs};
use crate::error::Result;
use crate::output::{render_json, render_text};
use crate::report::{CoverageSection, INLINE_TEXT_LABEL, Report, TermsSection};

const LOG_TARGET: &str = "lexique::run";

/// Overall result of a run that reached its checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every check passed.
    Pass,
    /// At least one check found a problem.
    Fail,
}

impl Verdict {
    /// Process exit status for this verdict.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Pass => 0,
            Self::Fail => 1,
        }
    }
}

/// Run the command described by `cli`, writing the report to `stdout`.
///
/// # Errors
///
/// Returns [`crate::CliError`] when configuration, dictionaries, or
/// terminology files cannot be loaded, when a required path is missing, or
/// when the report cannot be written.
pub fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<Verdict> {
    let config = SharedConfig::discover(cli.config.as_deref())?;
    run_with_config(cli, &config, stdout)
}

/// Like [`run`], with configuration already loaded.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_config(cli: &Cli, config: &SharedConfig, stdout: &mut dyn Write) -> Result<Verdict> {
    let localiser = resolve_report_locale(cli.lang.as_deref(), config.locale()).into_localiser();
    let report = build_report(&cli.command, config)?;

    match cli.format {
        OutputFormat::Text => render_text(&report, &localiser, stdout)?,
        OutputFormat::Json => render_json(&report, &localiser, stdout)?,
    }

    let verdict = if report.passed() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };
    info!(target: LOG_TARGET, "checks finished: {verdict:?}");
    Ok(verdict)
}

fn build_report(command: &Command, config: &SharedConfig) -> Result<Report> {
    match command {
        Command::Coverage(pair) => {
            let (base, target) = resolve_pair(pair, config)?;
            let (base, target) = (LoadedDictionary::load(base)?, LoadedDictionary::load(target)?);
            Ok(Report {
                coverage: Some(coverage_section(&base, &target)),
                ..Report::default()
            })
        }
        Command::Terms(args) => Ok(Report {
            terminology: Some(terms_section(args, config)?),
            deny_warnings: args.terminology.deny_warnings,
            ..Report::default()
        }),
        Command::Check(args) => {
            let (base, target) = resolve_pair(&args.dictionaries, config)?;
            let validator = compile_terminology(&args.terminology, &config.terminology)?;
            let (base, target) = (LoadedDictionary::load(base)?, LoadedDictionary::load(target)?);
            Ok(Report {
                coverage: Some(coverage_section(&base, &target)),
                terminology: Some(scan_dictionary(&validator, &target)),
                deny_warnings: args.terminology.deny_warnings,
            })
        }
    }
}

/// A dictionary and the path it was read from.
struct LoadedDictionary {
    path: Utf8PathBuf,
    dictionary: LocaleDictionary,
}

impl LoadedDictionary {
    fn load(path: Utf8PathBuf) -> Result<Self> {
        let dictionary = LocaleDictionary::load(&path)?;
        debug!(target: LOG_TARGET, "loaded {} keys from {path}", dictionary.len());
        Ok(Self { path, dictionary })
    }
}

fn resolve_pair(pair: &DictionaryPair, config: &SharedConfig) -> Result<(Utf8PathBuf, Utf8PathBuf)> {
    let base = InputError::require(
        pair.base.clone().or_else(|| config.dictionaries.base.clone()),
        "base",
    )?;
    let target = resolve_target(pair.target.as_deref(), config)?;
    Ok((base, target))
}

fn resolve_target(target: Option<&Utf8Path>, config: &SharedConfig) -> Result<Utf8PathBuf> {
    Ok(InputError::require(
        target
            .map(Utf8Path::to_path_buf)
            .or_else(|| config.dictionaries.target.clone()),
        "target",
    )?)
}

fn coverage_section(base: &LoadedDictionary, target: &LoadedDictionary) -> CoverageSection {
    debug!(
        target: LOG_TARGET,
        "comparing {} keys in {} against {} keys in {}",
        target.dictionary.len(),
        target.path,
        base.dictionary.len(),
        base.path,
    );

    CoverageSection {
        base: base.path.to_string(),
        target: target.path.to_string(),
        keys: check_coverage(&base.dictionary, &target.dictionary),
        empty_values: empty_values(&target.dictionary),
        placeholder_mismatches: check_placeholders(&base.dictionary, &target.dictionary),
    }
}

fn terms_section(args: &TermsArgs, config: &SharedConfig) -> Result<TermsSection> {
    let validator = compile_terminology(&args.terminology, &config.terminology)?;

    if let Some(text) = &args.text {
        let outcome = validator.validate_element_text(text);
        return Ok(TermsSection {
            target: INLINE_TEXT_LABEL.to_owned(),
            violations: outcome
                .violations
                .into_iter()
                .map(|violation| KeyedViolation {
                    key: INLINE_TEXT_LABEL.to_owned(),
                    violation,
                })
                .collect(),
            warnings: outcome.warnings,
        });
    }

    let target = resolve_target(args.target.as_deref(), config)?;
    Ok(scan_dictionary(&validator, &LoadedDictionary::load(target)?))
}

fn scan_dictionary(validator: &TerminologyValidator, target: &LoadedDictionary) -> TermsSection {
    TermsSection {
        target: target.path.to_string(),
        violations: validator.validate_dictionary(&target.dictionary),
        warnings: validator.warnings().to_vec(),
    }
}

/// Assemble the terminology map from the built-in map, configured and
/// command-line files, and allow lists, then compile it.
///
/// # Errors
///
/// Returns [`InputError::Missing`] for `terminology` when every source is
/// disabled, and propagates terminology file errors.
pub fn compile_terminology(
    args: &TerminologyArgs,
    config: &TerminologyConfig,
) -> Result<TerminologyValidator> {
    let builtin = config.builtin && !args.no_builtin;
    let files: Vec<&Utf8Path> = config
        .terms
        .as_deref()
        .into_iter()
        .chain(args.terms.as_deref())
        .collect();

    if !builtin && files.is_empty() {
        return Err(InputError::missing("terminology").into());
    }

    let mut map = if builtin {
        TerminologyMap::quebec_french()
    } else {
        TerminologyMap::new()
    };
    for file in files {
        debug!(target: LOG_TARGET, "merging terminology from {file}");
        map.extend_from(TerminologyMap::load(file)?);
    }
    let map = map.without(config.allow.iter().chain(&args.allow));

    Ok(TerminologyValidator::with_options(
        &map,
        config.validator_options(),
    ))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
