//! Helpers shared by commands.

use crate::codec;
use anyhow::Result;
use lps_core::cli::InputFormat;
use lps_core::{Lesson, Unit};
use std::path::Path;
use tracing::{error, info};

/// Reads a lessons file and numbers its lessons.
///
/// The unit is not validated; callers decide how to report duplicates.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_unit(path: &Path, format: InputFormat) -> Result<Unit> {
    let records = codec::read_records(path, format)?;
    let unit: Unit = records.into_iter().map(Lesson::from).collect();
    info!("Loaded {} lessons from {}", unit.len(), path.display());
    Ok(unit)
}

/// Logs every duplicate id at error level, returning `true` if any were found.
///
/// The header line is followed by one line per id, in sorted order.
pub fn report_duplicates(unit: &Unit) -> bool {
    let Err(err) = unit.validate() else {
        return false;
    };
    error!("Duplicate ids detected! Duplicate ids are:");
    for id in err.duplicate_ids() {
        error!("{id}");
    }
    true
}
