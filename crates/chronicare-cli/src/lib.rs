//! Chronicare CLI library.
//!
//! This library provides the presentation layer for Chronicare: argument
//! parsing, configuration, input range handling, the interactive session
//! and output formatting. All risk logic lives in `chronicare-domain`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod intake;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::{Config, RangePolicy};
pub use error::{CliError, Result};
pub use output::Formatter;
