//! Unit overview command.

use super::common;
use crate::formatters::format_summaries;
use anyhow::Result;
use lps_core::cli::{ExitCode, InputFormat, OutputFormat};
use std::path::Path;
use tracing::warn;

/// Prints lesson number, topic number, output file and title for each lesson.
///
/// Duplicate ids do not stop the listing; they are reported as a warning.
///
/// # Errors
///
/// Returns an error if the lessons file cannot be loaded or a title cannot
/// be rendered.
pub fn run(path: &Path, input_format: InputFormat, output_format: OutputFormat) -> Result<ExitCode> {
    let unit = common::load_unit(path, input_format)?;

    let duplicates = unit.duplicate_ids();
    if !duplicates.is_empty() {
        warn!("{} duplicate ids in {}", duplicates.len(), path.display());
    }

    let output = format_summaries(&unit.summaries()?, output_format)?;
    print!("{output}");
    if output_format == OutputFormat::Json {
        println!();
    }

    Ok(ExitCode::SUCCESS)
}
