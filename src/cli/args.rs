//! CLI argument definitions using clap
//!
//! Commands:
//! - persona-api serve [--config <path>] [--port <n>] [-v...]
//! - persona-api check-config --config <path>

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// persona-api - an in-memory REST service for personas
#[derive(Parser, Debug)]
#[command(name = "persona-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the configuration
        #[arg(long)]
        port: Option<u16>,

        /// Increase log verbosity (-v debug, -vv trace)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },

    /// Validate a configuration file and print the effective settings
    CheckConfig {
        /// Path to configuration file
        #[arg(long, default_value = "./persona-api.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
