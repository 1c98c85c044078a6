//! CLI argument definitions for `lexique`.
//!
//! Positional dictionary paths are optional so they can come from
//! `lexique.toml`; [`crate::run`] reports an input error when neither source
//! supplies one.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Check translation dictionaries for coverage and Quebec French terminology.
#[derive(Parser, Debug)]
#[command(name = "lexique")]
#[command(version, about)]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Compare key sets and placeholders:\n",
    "    $ lexique coverage locales/en.json locales/fr.json\n\n",
    "  Scan a dictionary for disallowed terms:\n",
    "    $ lexique terms locales/fr.json\n\n",
    "  Scan the text of a single element:\n",
    "    $ lexique terms --text \"Téléversez la facture\"\n\n",
    "  Run every check with a project terminology file:\n",
    "    $ lexique check en.json fr.json --terms terminology.toml\n\n",
    "EXIT STATUS:\n",
    "  0 all checks passed, 1 a check failed, 2 usage or input error",
))]
pub struct Cli {
    /// Configuration file [default: ./lexique.toml when present].
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Report language (for example en-GB or fr-CA).
    #[arg(long, global = true, value_name = "LOCALE")]
    pub lang: Option<String>,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        global = true,
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbosity")]
    pub quiet: bool,

    /// Report format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Check to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Compare key sets, empty values, and placeholders of two dictionaries.
    Coverage(DictionaryPair),

    /// Scan a dictionary, or a literal text, for disallowed terms.
    Terms(TermsArgs),

    /// Run the coverage and terminology checks together.
    Check(CheckArgs),
}

/// Base and target dictionary paths.
#[derive(Args, Debug, Clone, Default)]
pub struct DictionaryPair {
    /// Reference dictionary (`.json` or `.ftl`).
    #[arg(value_name = "BASE")]
    pub base: Option<Utf8PathBuf>,

    /// Dictionary under review (`.json` or `.ftl`).
    #[arg(value_name = "TARGET")]
    pub target: Option<Utf8PathBuf>,
}

/// Arguments for the `terms` command.
#[derive(Args, Debug, Clone, Default)]
pub struct TermsArgs {
    /// Dictionary to scan.
    #[arg(value_name = "TARGET", conflicts_with = "text")]
    pub target: Option<Utf8PathBuf>,

    /// Scan this text instead of a dictionary.
    #[arg(long, value_name = "STRING")]
    pub text: Option<String>,

    /// Terminology sources.
    #[command(flatten)]
    pub terminology: TerminologyArgs,
}

/// Arguments for the `check` command.
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Dictionaries to compare.
    #[command(flatten)]
    pub dictionaries: DictionaryPair,

    /// Terminology sources.
    #[command(flatten)]
    pub terminology: TerminologyArgs,
}

/// Terminology sources shared by `terms` and `check`.
#[derive(Args, Debug, Clone, Default)]
pub struct TerminologyArgs {
    /// TOML terminology file merged over the built-in map.
    #[arg(long, value_name = "FILE")]
    pub terms: Option<Utf8PathBuf>,

    /// Do not start from the built-in Quebec French map.
    #[arg(long)]
    pub no_builtin: bool,

    /// Accept a listed term in this project (can be repeated).
    #[arg(long, value_name = "TERM")]
    pub allow: Vec<String>,

    /// Treat skipped terminology entries as failures.
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Report rendering.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Localised plain text.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
