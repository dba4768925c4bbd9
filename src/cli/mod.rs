//! CLI module for bookshelf
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - serve: Boot the store and serve the HTTP API

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
