//! Logging setup using tracing + tracing-subscriber
//!
//! - Level from config, raised by `-v` flags
//! - `RUST_LOG` overrides the computed filter when set
//! - Optional JSON output, one event per line

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Log levels accepted in configuration
pub const LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "warning", "error"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Base level (default: "info")
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json_format: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            json_format: false,
        }
    }
}

impl LoggingSettings {
    pub fn validate(&self) -> Result<(), String> {
        if LEVELS.contains(&self.level.to_lowercase().as_str()) {
            Ok(())
        } else {
            Err(format!(
                "Invalid log level: '{}'. Expected one of {}.",
                self.level,
                LEVELS.join(", ")
            ))
        }
    }
}

/// Logging errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber
pub fn init_logging(settings: &LoggingSettings, verbose: u8) -> Result<(), LoggingError> {
    let level = effective_level(settings, verbose);
    let filter = build_env_filter(level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer(settings.json_format))
        .try_init()?;

    tracing::debug!(%level, json = settings.json_format, "logging initialized");
    Ok(())
}

fn console_layer<S>(json_format: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    if json_format {
        Box::new(
            fmt::layer()
                .json()
                .with_target(true)
                .with_current_span(true),
        )
    } else {
        Box::new(fmt::layer().with_target(true).compact())
    }
}

/// Determine the effective level from settings and `-v` count
fn effective_level(settings: &LoggingSettings, verbose: u8) -> Level {
    match verbose {
        0 => parse_level(&settings.level),
        1 => parse_level(&settings.level).max(Level::DEBUG),
        _ => Level::TRACE,
    }
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn build_env_filter(level: Level) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let level = level.to_string().to_lowercase();
    Ok(EnvFilter::new(&level)
        .add_directive(format!("persona_api={}", level).parse()?)
        .add_directive(format!("tower_http={}", level).parse()?)
        // Reduce noise from dependencies
        .add_directive("hyper=warn".parse()?))
}
