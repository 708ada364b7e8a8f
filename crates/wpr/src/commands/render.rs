//! `wpr render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use wpr_config::{CliSettings, Config};
use wpr_site::{PageRequest, Shell, SlickCarousel, WidgetOutcome, Widgets, hydrate, shell_name};
use wpr_wordpress::WpClient;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Page to render, e.g. blog.html or "post.html?id=3".
    path: String,

    /// Write the hydrated page to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover wpr.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page shell directory (overrides config).
    #[arg(short, long)]
    shell_dir: Option<PathBuf>,

    /// REST API root URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose output (report widgets that stood down).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the shell cannot be read
    /// or the output file cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            shell_dir: self.shell_dir,
            base_url: self.base_url,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let base_url = config.require_wordpress()?.base_url.clone();

        let (path, query) = split_request(&self.path);
        let shell = shell_name(path);
        let shell_path = config.site_resolved.shell_dir.join(&shell);

        let mut page = match Shell::load(&shell_path) {
            Ok(page) => page,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CliError::Validation(format!(
                    "Page shell not found: {}",
                    shell_path.display()
                )));
            }
            Err(e) => return Err(CliError::Io(e)),
        };

        let client = WpClient::new(&base_url);
        let widgets = Widgets::new(
            &client,
            &SlickCarousel,
            &config.site_resolved.name,
            config.site_resolved.products_category,
        );
        let request = PageRequest::new(&shell, query);
        let runs = hydrate(&widgets, &mut page, &request);

        for run in &runs {
            match &run.outcome {
                WidgetOutcome::Failed { error } => {
                    output.warning(&format!("Widget {} failed: {error}", run.widget.label()));
                }
                WidgetOutcome::Skipped { reason } if self.verbose => {
                    output.info(&format!("Widget {} skipped: {reason}", run.widget.label()));
                }
                _ => {}
            }
        }

        let html = page.into_html();
        match self.output {
            Some(out_path) => {
                std::fs::write(&out_path, &html)?;
                output.success(&format!(
                    "Rendered {} to {}",
                    self.path,
                    out_path.display()
                ));
            }
            None => {
                std::io::stdout().lock().write_all(html.as_bytes())?;
            }
        }

        Ok(())
    }
}

/// Split an optional `?query` suffix off a request path.
fn split_request(path: &str) -> (&str, Option<&str>) {
    match path.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path, None),
    }
}
