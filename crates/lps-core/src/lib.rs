//! Core numbering and rendering for lesson plan generation.
//!
//! Turns an ordered list of lessons into one LaTeX document per lesson plus
//! an include file defining each lesson's objectives macro.
//!
//! # Architecture
//!
//! - [`roman`] - Roman numerals for continuation part labels
//! - [`Lesson`] - one session; computes its title and renders its artifacts
//! - [`Unit`] - numbers lessons, validates ids, drives generation
//! - [`LessonRecord`] - typed external record with documented defaults
//! - [`TemplateEngine`] - Handlebars wrapper holding the LaTeX templates
//! - [`cli`] - output formats and exit codes shared with front ends
//!
//! Reading and writing lessons files is left to callers; the core only
//! consumes [`LessonRecord`] values and returns [`GeneratedFile`]s.
//!
//! # Examples
//!
//! ```
//! use lps_core::{Lesson, LessonRecord, TemplateEngine, Unit};
//!
//! let records: Vec<LessonRecord> = serde_json::from_str(
//!     r#"[{"title": "Intro", "id": "L1"}, {"title": "Intro", "id": "L2", "is_continuation": true}]"#,
//! )?;
//!
//! let unit = Unit::try_new(records.into_iter().map(Lesson::from).collect())?;
//! let engine = TemplateEngine::new()?;
//!
//! let documents = unit.generate_all_documents(&engine)?;
//! let paths: Vec<&str> = documents.files.iter().map(|f| f.path.as_str()).collect();
//! assert_eq!(paths, ["lp-01.tex", "lp-02.tex"]);
//!
//! let include = unit.generate_objectives_include(&engine)?;
//! assert!(include.content.contains("\\providecommand{\\objectivesL2}{}"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;
mod lesson;
mod record;
mod template_engine;
mod types;
mod unit;

pub mod cli;
pub mod roman;

pub use error::{Error, Result};
pub use lesson::{Lesson, OBJECTIVES_INPUT};
pub use record::{LessonRecord, blank_records};
pub use template_engine::TemplateEngine;
pub use types::{GeneratedCode, GeneratedFile, LessonId};
pub use unit::{DEFAULT_OBJECTIVES_FILE, LessonSummary, OBJECTIVES_HEADER, Unit};
