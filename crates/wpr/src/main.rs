//! wpr CLI - Server-side renderer for a headless `WordPress` site.
//!
//! Provides commands for:
//! - `serve`: Start the page server
//! - `render`: Hydrate one page shell and print the HTML
//! - `check`: Verify page shells against the widgets that target them

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, RenderArgs, ServeArgs};
use output::Output;

/// wpr - Kool Box page renderer.
#[derive(Parser)]
#[command(name = "wpr", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the page server.
    Serve(ServeArgs),
    /// Hydrate one page shell and print the HTML.
    Render(RenderArgs),
    /// Check page shells for missing widget mount points.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for commands that fetch content
    let verbose = match &cli.command {
        Commands::Serve(args) => args.verbose,
        Commands::Render(args) => args.verbose,
        Commands::Check(_) => false,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            rt.block_on(args.execute())
        }
        Commands::Render(args) => args.execute(),
        Commands::Check(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
