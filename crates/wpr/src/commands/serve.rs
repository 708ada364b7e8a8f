//! `wpr serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use wpr_config::{CliSettings, Config};
use wpr_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover wpr.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page shell directory (overrides config).
    #[arg(short, long)]
    shell_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// REST API root URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output (show widget warnings and request logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            shell_dir: self.shell_dir,
            base_url: self.base_url,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let base_url = config.require_wordpress()?.base_url.clone();

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Shell directory: {}",
            config.site_resolved.shell_dir.display()
        ));
        output.info(&format!("WordPress API: {base_url}"));

        // Build server config and run
        let server_config = server_config_from_config(&config, base_url, self.verbose);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
