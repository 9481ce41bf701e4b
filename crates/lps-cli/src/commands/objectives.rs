//! Objectives-only command.

use super::common;
use crate::config::RunConfig;
use anyhow::{Context, Result};
use lps_core::TemplateEngine;
use lps_core::cli::ExitCode;
use lps_files::write_file;
use std::fs;
use tracing::info;

/// Writes the objectives include file for the unit.
///
/// The include defines one `\objectives<id>` macro per lesson and is the only
/// file written in this mode.
///
/// # Errors
///
/// Returns an error if the lessons file cannot be loaded, the include cannot
/// be rendered, or the file cannot be written.
pub fn run(config: &RunConfig) -> Result<ExitCode> {
    let unit = common::load_unit(&config.lessons_file, config.input_format)?;
    if common::report_duplicates(&unit) {
        return Ok(ExitCode::ERROR);
    }

    let path = config.objectives_path();
    let engine = TemplateEngine::new()?;
    let include = unit
        .with_objectives_file(path.display().to_string())
        .generate_objectives_include(&engine)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    write_file(&path, &include.content, &config.export)?;
    info!("Wrote objectives to {}", include.path);

    Ok(ExitCode::SUCCESS)
}
