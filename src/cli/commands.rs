//! CLI command implementations

use std::path::Path;

use tracing::info;

use crate::http_server::HttpServer;
use crate::observability::init_logging;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            verbose,
        } => serve(config.as_deref(), port, verbose),
        Command::CheckConfig { config } => check_config(&config),
    }
}

/// Start the HTTP server and block until it stops
pub fn serve(config_path: Option<&Path>, port: Option<u16>, verbose: u8) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
        config.validate()?;
    }

    init_logging(&config.logging, verbose)?;

    info!(
        config = ?config_path,
        port = config.server.port,
        "starting persona API"
    );

    let server = HttpServer::with_config(config.server);

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new().map_err(CliError::Runtime)?;
    rt.block_on(server.start())?;

    Ok(())
}

/// Validate a config file and print the effective configuration
pub fn check_config(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
