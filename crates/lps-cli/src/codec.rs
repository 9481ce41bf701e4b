//! Reading and writing lessons files.
//!
//! A lessons file is a single list of lesson records encoded as JSON or YAML.
//! Records are written with sorted keys; JSON uses a four-space indent so
//! skeletons diff cleanly against files produced by the older tool.

use anyhow::{Context, Result};
use lps_core::LessonRecord;
use lps_core::cli::InputFormat;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Concrete encoding of a lessons file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// JSON array
    Json,
    /// YAML sequence
    Yaml,
}

impl RecordFormat {
    /// Resolves the encoding for `path`.
    ///
    /// An explicit `requested` format wins; `Auto` picks YAML for `.yaml`
    /// and `.yml` extensions and JSON for everything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use lps_cli::codec::RecordFormat;
    /// use lps_core::cli::InputFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(RecordFormat::detect(Path::new("unit.yml"), InputFormat::Auto), RecordFormat::Yaml);
    /// assert_eq!(RecordFormat::detect(Path::new("unit.txt"), InputFormat::Auto), RecordFormat::Json);
    /// assert_eq!(RecordFormat::detect(Path::new("unit.yml"), InputFormat::Json), RecordFormat::Json);
    /// ```
    #[must_use]
    pub fn detect(path: &Path, requested: InputFormat) -> Self {
        match requested {
            InputFormat::Json => Self::Json,
            InputFormat::Yaml => Self::Yaml,
            InputFormat::Auto => {
                let is_yaml = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
                if is_yaml { Self::Yaml } else { Self::Json }
            }
        }
    }
}

impl fmt::Display for RecordFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Decodes a list of records.
///
/// # Errors
///
/// Returns an error if `content` is not a list of records in `format`.
pub fn decode_records(content: &str, format: RecordFormat) -> Result<Vec<LessonRecord>> {
    let records = match format {
        RecordFormat::Json => {
            serde_json::from_str(content).context("failed to parse lessons file as JSON")?
        }
        RecordFormat::Yaml => {
            serde_yaml::from_str(content).context("failed to parse lessons file as YAML")?
        }
    };
    Ok(records)
}

/// Encodes a list of records with sorted keys.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_records(records: &[LessonRecord], format: RecordFormat) -> Result<String> {
    // serde_json::Value keeps object keys sorted
    let value = serde_json::to_value(records).context("failed to serialize lesson records")?;

    match format {
        RecordFormat::Json => {
            let mut buf = Vec::new();
            let mut serializer =
                serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
            value
                .serialize(&mut serializer)
                .context("failed to encode lesson records as JSON")?;
            let mut out = String::from_utf8(buf).context("JSON output is not UTF-8")?;
            out.push('\n');
            Ok(out)
        }
        RecordFormat::Yaml => {
            serde_yaml::to_string(&value).context("failed to encode lesson records as YAML")
        }
    }
}

/// Reads and decodes the lessons file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn read_records(path: &Path, requested: InputFormat) -> Result<Vec<LessonRecord>> {
    let format = RecordFormat::detect(path, requested);
    debug!(path = %path.display(), %format, "Reading lessons file");

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read lessons file {}", path.display()))?;
    let records = decode_records(&content, format)
        .with_context(|| format!("invalid lessons file {}", path.display()))?;

    debug!(count = records.len(), "Decoded lesson records");
    Ok(records)
}
