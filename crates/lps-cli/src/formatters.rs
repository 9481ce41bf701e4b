//! Output formatters for CLI commands.
//!
//! The unit overview can be printed as JSON, as a plain aligned table, or as
//! a colored table for terminals.

use anyhow::Result;
use colored::Colorize;
use lps_core::LessonSummary;
use lps_core::cli::OutputFormat;
use serde::Serialize;

/// Formats the unit overview according to `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use lps_cli::formatters::format_summaries;
/// use lps_core::cli::OutputFormat;
/// use lps_core::{Lesson, Unit};
///
/// let unit = Unit::new(vec![Lesson::new("Limits", "L1")]);
/// let output = format_summaries(&unit.summaries()?, OutputFormat::Json)?;
/// assert!(output.contains("\"file_name\": \"lp-01.tex\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_summaries(rows: &[LessonSummary], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(&rows),
        OutputFormat::Text => Ok(text::table(rows)),
        OutputFormat::Pretty => Ok(pretty::table(rows)),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let json = serde_json::to_string_pretty(data)?;
        Ok(json)
    }
}

const LESSON_WIDTH: usize = 13;
const TOPIC_WIDTH: usize = 5;
const FILE_WIDTH: usize = 10;

/// Plain text output formatting.
pub mod text {
    use super::{FILE_WIDTH, LESSON_WIDTH, LessonSummary, TOPIC_WIDTH};

    /// Aligned table without colors, suitable for piping.
    #[must_use]
    pub fn table(rows: &[LessonSummary]) -> String {
        let mut out = format!(
            "{:<LESSON_WIDTH$} {:<TOPIC_WIDTH$} {:<FILE_WIDTH$} {}\n",
            "Lesson Number", "Topic", "File", "Title"
        );
        for row in rows {
            out.push_str(&format!(
                "{:<LESSON_WIDTH$} {:<TOPIC_WIDTH$} {:<FILE_WIDTH$} {}\n",
                row.lesson_number, row.topic_number, row.file_name, row.display_title
            ));
        }
        out
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, FILE_WIDTH, LESSON_WIDTH, LessonSummary, TOPIC_WIDTH};

    /// Colored table for terminals.
    #[must_use]
    pub fn table(rows: &[LessonSummary]) -> String {
        // pad before coloring so escape codes do not skew alignment
        let mut out = format!(
            "{} {} {} {}\n",
            format!("{:<LESSON_WIDTH$}", "Lesson Number").bold(),
            format!("{:<TOPIC_WIDTH$}", "Topic").bold(),
            format!("{:<FILE_WIDTH$}", "File").bold(),
            "Title".bold()
        );
        for row in rows {
            out.push_str(&format!(
                "{} {} {} {}\n",
                format!("{:<LESSON_WIDTH$}", row.lesson_number).cyan(),
                format!("{:<TOPIC_WIDTH$}", row.topic_number).yellow(),
                format!("{:<FILE_WIDTH$}", row.file_name).green(),
                row.display_title
            ));
        }
        if rows.is_empty() {
            out.push_str(&"(no lessons)".dimmed().to_string());
            out.push('\n');
        }
        out
    }
}
