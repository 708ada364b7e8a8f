//! HTTP server for wpr.
//!
//! Serves a headless `WordPress` site as fully rendered HTML:
//! - requests for `.html` files (and extensionless paths) load the matching
//!   page shell from disk and hydrate its mount points with live content
//! - requests with any other extension are served as static assets
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use wpr_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 8080,
//!         shell_dir: PathBuf::from("site"),
//!         site_name: "Kool Box".to_owned(),
//!         products_category: None,
//!         base_url: "https://example.com/wp-json/wp/v2".to_owned(),
//!         verbose: false,
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (wpr-server)
//!                        │
//!                        ├─► page shells (disk) ──► hydrate ──► WordPress REST
//!                        │
//!                        └─► static assets (mime_guess content types)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use state::AppState;
use wpr_site::SlickCarousel;
use wpr_wordpress::{ContentSource, WpClient};

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory containing page shells and static assets.
    pub shell_dir: PathBuf,
    /// Site name appended to document titles.
    pub site_name: String,
    /// Category id that scopes the products listing (`None` lists every post).
    pub products_category: Option<u32>,
    /// `WordPress` REST API root URL.
    pub base_url: String,
    /// Enable verbose output.
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 8080,
            shell_dir: PathBuf::from("site"),
            site_name: "Kool Box".to_owned(),
            products_category: None,
            base_url: String::new(),
            verbose: false,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Shared WordPress client used by every widget run
    let source: Arc<dyn ContentSource> = Arc::new(WpClient::new(&config.base_url));

    // Create app state
    let state = Arc::new(AppState {
        source,
        carousel: Arc::new(SlickCarousel),
        shell_dir: config.shell_dir.clone(),
        site_name: config.site_name.clone(),
        products_category: config.products_category,
        verbose: config.verbose,
    });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from wpr config.
///
/// # Arguments
///
/// * `config` - wpr configuration
/// * `base_url` - Validated `WordPress` REST API root URL
/// * `verbose` - Enable verbose output
#[must_use]
pub fn server_config_from_config(
    config: &wpr_config::Config,
    base_url: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        shell_dir: config.site_resolved.shell_dir.clone(),
        site_name: config.site_resolved.name.clone(),
        products_category: config.site_resolved.products_category,
        base_url,
        verbose,
    }
}
