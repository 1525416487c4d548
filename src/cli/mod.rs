//! CLI module for persona-api
//!
//! Provides command-line interface for:
//! - serve: load configuration, install logging, run the HTTP server
//! - check-config: validate a configuration file

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliResult};
