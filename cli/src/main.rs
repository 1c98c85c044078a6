//! `lexique` entrypoint.
//!
//! Reports go to stdout and diagnostics to stderr. Exit status is 0 when
//! every check passes, 1 when a check fails, and 2 on usage or input errors.

use std::io::Write;

use clap::Parser;
use lexique_cli::cli::Cli;
use lexique_cli::error::Result;
use lexique_cli::{CliError, Verdict, logging, run};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbosity, cli.quiet);

    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn exit_code_for_run_result(result: Result<Verdict>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(verdict) => verdict.exit_code(),
        Err(err) => {
            write_stderr_line(stderr, format_args!("lexique: {err}"));
            CliError::EXIT_CODE
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}
