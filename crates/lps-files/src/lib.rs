//! Generated file set and disk export for lesson plans.
//!
//! Rendered documents are collected into an in-memory [`FileSet`] keyed by
//! validated relative paths, then written under an output directory in one
//! pass. Writes are atomic by default.
//!
//! # Features
//!
//! - **Validated paths**: nothing can be written outside the output directory
//! - **Builder pattern**: fluent construction from `lps-core` output
//! - **Atomic writes**: temp file plus rename
//! - **Parallel export**: optional, behind the `parallel` feature
//!
//! # Examples
//!
//! ```
//! use lps_core::{Lesson, TemplateEngine, Unit};
//! use lps_files::FileSetBuilder;
//! # use tempfile::TempDir;
//!
//! # let temp = TempDir::new().unwrap();
//! let engine = TemplateEngine::new().unwrap();
//! let unit = Unit::new(vec![Lesson::new("Limits", "L1")]);
//! let documents = unit.generate_all_documents(&engine).unwrap();
//!
//! let files = FileSetBuilder::from_generated_code(documents, ".")
//!     .build()
//!     .unwrap();
//! files.export_to_directory(temp.path()).unwrap();
//!
//! assert!(temp.path().join("lp-01.tex").exists());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builder;
pub mod export;
pub mod file_set;
pub mod types;

pub use builder::FileSetBuilder;
pub use export::{ExportOptions, write_file};
pub use file_set::FileSet;
pub use types::{FileEntry, FilePath, FilesError, Result};
