//! Blank skeleton command.

use crate::codec::{self, RecordFormat};
use crate::config::RunConfig;
use anyhow::{Context, Result};
use lps_core::blank_records;
use lps_core::cli::ExitCode;
use lps_files::write_file;
use std::fs;
use tracing::{error, info};

/// Writes `count` blank lesson records to the lessons file.
///
/// An existing file is left untouched unless `force` is set.
///
/// # Errors
///
/// Returns an error if the records cannot be encoded or written.
pub fn run(config: &RunConfig, count: usize, force: bool) -> Result<ExitCode> {
    let path = &config.lessons_file;
    let format = RecordFormat::detect(path, config.input_format);
    let content = codec::encode_records(&blank_records(count), format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let options = config.export.with_overwrite(force);
    if !write_file(path, &content, &options)? {
        error!(
            "{} already exists; pass --force to replace it",
            path.display()
        );
        return Ok(ExitCode::INVALID_INPUT);
    }
    info!("Wrote {count} blank lessons to {}", path.display());

    Ok(ExitCode::SUCCESS)
}
