//! Strong domain types for lesson plans.
//!
//! # Examples
//!
//! ```
//! use lps_core::{GeneratedCode, GeneratedFile, LessonId};
//!
//! let id = LessonId::new("Limits1");
//! assert_eq!(id.objectives_macro(), "\\objectivesLimits1");
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile {
//!     path: "lp-01.tex".to_string(),
//!     content: "\\documentclass{article}".to_string(),
//! });
//! assert_eq!(code.file_count(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lesson identifier (newtype over String).
///
/// Keys the objectives macro generated for a lesson, so it must be unique
/// within a unit.
///
/// # Examples
///
/// ```
/// use lps_core::LessonId;
///
/// let id = LessonId::new("Intro");
/// assert_eq!(id.as_str(), "Intro");
/// assert_eq!(LessonId::default().as_str(), "Undefined");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(String);

impl LessonId {
    /// Placeholder id given to blank lessons.
    pub const UNDEFINED: &'static str = "Undefined";

    /// Creates a new lesson identifier.
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `LessonId` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Name of the LaTeX macro holding this lesson's objectives.
    ///
    /// # Examples
    ///
    /// ```
    /// use lps_core::LessonId;
    ///
    /// assert_eq!(LessonId::new("A").objectives_macro(), "\\objectivesA");
    /// ```
    #[must_use]
    pub fn objectives_macro(&self) -> String {
        format!("\\objectives{}", self.0)
    }
}

impl Default for LessonId {
    fn default() -> Self {
        Self::new(Self::UNDEFINED)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for LessonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for LessonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single rendered artifact: a relative file name plus its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// File path relative to the output location
    pub path: String,
    /// Rendered file content
    pub content: String,
}

/// Ordered collection of rendered artifacts.
///
/// Produced by [`Unit::generate_all_documents`](crate::Unit::generate_all_documents);
/// the caller decides where and how the files are written.
///
/// # Examples
///
/// ```
/// use lps_core::GeneratedCode;
///
/// let code = GeneratedCode::new();
/// assert_eq!(code.file_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Generated files in lesson order
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates a new empty container.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Appends a generated file.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub const fn file_count(&self) -> usize {
        self.files.len()
    }
}

impl IntoIterator for GeneratedCode {
    type Item = GeneratedFile;
    type IntoIter = std::vec::IntoIter<GeneratedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
