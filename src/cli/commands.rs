//! CLI command implementations

use std::path::Path;

use tracing::info;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::init_logging;

/// Main entry point for CLI
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(config.as_deref(), port),
    }
}

/// Write a default configuration file.
///
/// Does not start the server and never overwrites an existing file.
pub fn init(config_path: &Path) -> CliResult<()> {
    Config::default().write_new(config_path)?;
    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}

/// Boot the book API and serve until ctrl-c.
///
/// Boot sequence:
/// 1. Load configuration (defaults when no path is given)
/// 2. Apply the `--port` override
/// 3. Install logging
/// 4. Build the store and hand it to the server
pub fn serve(config_path: Option<&Path>, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load_or_default(config_path)?;
    if let Some(port) = port {
        if port == 0 {
            return Err(CliError::config_error("--port must be > 0"));
        }
        config.server.port = port;
    }

    init_logging(&config.log).map_err(|e| CliError::boot_failed(e.to_string()))?;

    let store = config.store.build();
    info!(
        books = store.len(),
        placement = ?store.placement(),
        "book store initialised"
    );

    let server = HttpServer::with_config(config.server, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}
