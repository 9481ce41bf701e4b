//! Default command: one LaTeX document per lesson.

use super::common;
use crate::config::RunConfig;
use anyhow::{Context, Result};
use lps_core::TemplateEngine;
use lps_core::cli::ExitCode;
use lps_files::FileSetBuilder;
use tracing::info;

/// Renders every lesson of the unit to `lp-NN.tex` under the output directory.
///
/// Nothing is written when the unit has duplicate ids.
///
/// # Errors
///
/// Returns an error if the lessons file cannot be loaded, a document cannot
/// be rendered, or a file cannot be written.
pub fn run(config: &RunConfig) -> Result<ExitCode> {
    let unit = common::load_unit(&config.lessons_file, config.input_format)?;
    if common::report_duplicates(&unit) {
        return Ok(ExitCode::ERROR);
    }

    let engine = TemplateEngine::new()?;
    let documents = unit.generate_all_documents(&engine)?;

    let files = FileSetBuilder::from_generated_code(documents, ".")
        .build()
        .context("generated an invalid document path")?;

    info!("Beginning to write files");
    let written = if config.parallel {
        files.export_to_directory_parallel(&config.output_dir, &config.export)
    } else {
        files.export_to_directory_with_options(&config.output_dir, &config.export)
    }
    .with_context(|| format!("failed to write documents to {}", config.output_dir.display()))?;
    info!("Done writing {} files", written.len());

    Ok(ExitCode::SUCCESS)
}
