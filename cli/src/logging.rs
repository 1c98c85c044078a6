//! Diagnostic logging for the binary.
//!
//! The library crates log through the `log` facade. The subscriber installed
//! here bridges those records into `tracing` and writes them to stderr so
//! stdout only ever carries the report.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Level used when `RUST_LOG` is unset.
#[must_use]
pub fn default_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }

    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` directives take precedence over the `-v`/`-q` flags. A second
/// call is a no-op.
pub fn init(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbosity, quiet).into())
        .from_env_lossy();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .try_init();

    if installed.is_err() {
        log::debug!(target: "lexique::cli", "logging was already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false, LevelFilter::WARN)]
    #[case(1, false, LevelFilter::INFO)]
    #[case(2, false, LevelFilter::DEBUG)]
    #[case(7, false, LevelFilter::TRACE)]
    #[case(0, true, LevelFilter::ERROR)]
    fn maps_flags_to_levels(
        #[case] verbosity: u8,
        #[case] quiet: bool,
        #[case] expected: LevelFilter,
    ) {
        assert_eq!(default_level(verbosity, quiet), expected);
    }
}
