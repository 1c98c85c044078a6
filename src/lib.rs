//! Lexique keeps translated user interfaces honest.
//!
//! The checks themselves live in [`lexique_common`]; this crate adds the
//! project configuration read from `lexique.toml` so the command-line tool
//! and other front ends agree on defaults.

pub mod config;

pub use config::{
    ConfigError, DEFAULT_CONFIG_FILE, DictionariesConfig, SharedConfig, TerminologyConfig,
};
