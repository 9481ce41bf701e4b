//! Duplicate-id check without writing anything.

use super::common;
use anyhow::Result;
use lps_core::cli::{ExitCode, InputFormat};
use std::path::Path;

/// Validates the lessons file.
///
/// Returns [`ExitCode::ERROR`] and logs every duplicate id when the unit
/// fails validation.
///
/// # Errors
///
/// Returns an error if the lessons file cannot be loaded.
pub fn run(path: &Path, input_format: InputFormat) -> Result<ExitCode> {
    let unit = common::load_unit(path, input_format)?;
    if common::report_duplicates(&unit) {
        return Ok(ExitCode::ERROR);
    }

    println!("{}: {} lessons, all ids unique", path.display(), unit.len());
    Ok(ExitCode::SUCCESS)
}
