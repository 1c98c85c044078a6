//! The `lexique` command-line tool.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Errors that stop a run, all mapped to exit status 2
//! - [`logging`] - Stderr subscriber for library `log` records
//! - [`output`] - Localised text and JSON report rendering
//! - [`report`] - Check results gathered before rendering
//! - [`run`] - Input resolution and check orchestration

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod run;

pub use error::CliError;
pub use run::{Verdict, run};
