//! Check command implementation.

use anyhow::{Context, Result};
use name_lint_core::{Config, Linter};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
///
/// Exits the process with code 1 when diagnostics were recorded; internal
/// and configuration errors propagate to the caller instead.
pub fn run(path: &Path, format: OutputFormat, source: &ConfigSource) -> Result<()> {
    let config = match source.path() {
        None => Config::default(),
        Some(p) => {
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let mut linter = Linter::new(&config).context("Failed to build linter")?;
    linter
        .lint_project(path)
        .with_context(|| format!("Failed to lint {}", path.display()))?;

    let result = linter.into_result();
    super::output::print(&result, format)?;

    if result.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
