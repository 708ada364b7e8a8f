//! `wpr check` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use wpr_config::{CliSettings, Config};
use wpr_site::{PageRequest, Shell, WidgetKind, plan};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover wpr.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page shell directory (overrides config).
    #[arg(short, long)]
    shell_dir: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the shell directory cannot
    /// be read or it contains no page shells.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            shell_dir: self.shell_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // check never fetches, so a missing [wordpress] section is only
        // worth a heads-up here; serve and render refuse to start on it
        if let Err(err) = config.require_wordpress() {
            output.warning(&err.to_string());
        }

        let shell_dir = &config.site_resolved.shell_dir;
        let shells = list_shells(shell_dir)?;
        if shells.is_empty() {
            return Err(CliError::Validation(format!(
                "No page shells (*.html) found in {}",
                shell_dir.display()
            )));
        }

        output.highlight(&format!(
            "Checking {} shells in {}",
            shells.len(),
            shell_dir.display()
        ));
        output.separator();

        let mut problems = 0;
        for file_name in &shells {
            let shell = Shell::load(&shell_dir.join(file_name))?;
            let request = PageRequest::new(file_name, None);
            output.info(file_name);

            for kind in plan(file_name) {
                // The static-page widget gates on the slug before its
                // mounts; the home shell never reaches the mount check.
                if kind == WidgetKind::StaticPage && request.page_slug().is_none() {
                    continue;
                }
                let missing: Vec<&str> = kind
                    .mounts()
                    .iter()
                    .copied()
                    .filter(|id| !shell.has_element(id))
                    .collect();
                if missing.is_empty() {
                    output.info(&format!("  {}: ok", kind.label()));
                } else if dedicated(kind) {
                    problems += 1;
                    output.warning(&format!(
                        "  {}: missing mount {}",
                        kind.label(),
                        missing.join(", ")
                    ));
                } else {
                    output.info(&format!(
                        "  {}: stands down (no {} mount)",
                        kind.label(),
                        missing.join(", ")
                    ));
                }
            }
        }

        output.separator();
        if problems == 0 {
            output.success(&format!(
                "Checked {} shells, every targeted widget has its mounts",
                shells.len()
            ));
        } else {
            output.warning(&format!(
                "Checked {} shells, {problems} widgets have no mount in their own shell",
                shells.len()
            ));
        }

        Ok(())
    }
}

/// Widgets selected by the file name alone; a matching shell without
/// their mounts is an authoring mistake rather than a quiet stand-down.
fn dedicated(kind: WidgetKind) -> bool {
    matches!(
        kind,
        WidgetKind::BlogList | WidgetKind::ProductList | WidgetKind::SinglePost
    )
}

/// File names of the `*.html` shells in a directory, sorted.
fn list_shells(shell_dir: &Path) -> Result<Vec<String>, CliError> {
    let entries = std::fs::read_dir(shell_dir).map_err(|e| {
        CliError::Validation(format!(
            "Cannot read shell directory {}: {e}",
            shell_dir.display()
        ))
    })?;

    let mut shells = Vec::new();
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name.ends_with(".html") && entry.file_type()?.is_file() {
            shells.push(name.to_owned());
        }
    }
    shells.sort();
    Ok(shells)
}
