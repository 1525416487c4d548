//! CLI error types
//!
//! Every CLI error is fatal: `main` prints it as `CODE: message` and exits
//! non-zero.

use std::io;

use thiserror::Error;

use crate::observability::LoggingError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Config file unreadable, malformed, or invalid
    #[error("PERSONA_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Subscriber could not be installed
    #[error("PERSONA_CLI_LOGGING_ERROR: {0}")]
    Logging(#[from] LoggingError),

    /// The tokio runtime could not be built
    #[error("PERSONA_CLI_RUNTIME_ERROR: failed to create tokio runtime: {0}")]
    Runtime(#[source] io::Error),

    /// Binding or serving the listener failed
    #[error("PERSONA_CLI_SERVER_ERROR: {0}")]
    Server(#[from] io::Error),

    /// Printing the effective config failed
    #[error("PERSONA_CLI_JSON_ERROR: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Stable code printed before the message
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(_) => "PERSONA_CLI_CONFIG_ERROR",
            CliError::Logging(_) => "PERSONA_CLI_LOGGING_ERROR",
            CliError::Runtime(_) => "PERSONA_CLI_RUNTIME_ERROR",
            CliError::Server(_) => "PERSONA_CLI_SERVER_ERROR",
            CliError::Json(_) => "PERSONA_CLI_JSON_ERROR",
        }
    }
}
