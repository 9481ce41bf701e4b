//! Builder for constructing file sets.
//!
//! Invalid paths are collected while building and reported by
//! [`FileSetBuilder::build`], so chained `add_file` calls stay fluent.
//!
//! # Examples
//!
//! ```
//! use lps_core::{GeneratedCode, GeneratedFile};
//! use lps_files::FileSetBuilder;
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile {
//!     path: "lp-01.tex".to_string(),
//!     content: "\\documentclass{article}".to_string(),
//! });
//!
//! let files = FileSetBuilder::from_generated_code(code, "lessons")
//!     .add_file("info/objectives.tex", "% header")
//!     .build()
//!     .unwrap();
//!
//! let paths: Vec<&str> = files.files().map(|(path, _)| path.as_str()).collect();
//! assert_eq!(paths, ["info/objectives.tex", "lessons/lp-01.tex"]);
//! ```

use crate::file_set::FileSet;
use crate::types::{FilesError, Result};
use lps_core::GeneratedCode;
use std::path::Path;

/// Fluent builder for a [`FileSet`].
#[derive(Debug, Default)]
pub struct FileSetBuilder {
    files: FileSet,
    errors: Vec<FilesError>,
}

impl FileSetBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: FileSet::new(),
            errors: Vec::new(),
        }
    }

    /// Creates a builder holding every file of `code` under `base_path`.
    ///
    /// Pass `""` or `"."` to keep the generated paths unchanged.
    #[must_use]
    pub fn from_generated_code(code: GeneratedCode, base_path: impl AsRef<Path>) -> Self {
        let base = base_path.as_ref();
        Self::new().add_files(code.into_iter().map(|file| (base.join(&file.path), file.content)))
    }

    /// Adds a file.
    #[must_use]
    pub fn add_file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        if let Err(e) = self.files.add_file(path, content) {
            self.errors.push(e);
        }
        self
    }

    /// Adds several files.
    #[must_use]
    pub fn add_files<P, C>(mut self, files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: AsRef<Path>,
        C: Into<String>,
    {
        for (path, content) in files {
            self = self.add_file(path, content);
        }
        self
    }

    /// Builds the file set.
    ///
    /// # Errors
    ///
    /// Returns the first path error encountered while adding files.
    pub fn build(self) -> Result<FileSet> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.files),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lps_core::GeneratedFile;

    fn code(paths: &[&str]) -> GeneratedCode {
        let mut code = GeneratedCode::new();
        for path in paths {
            code.add_file(GeneratedFile {
                path: (*path).to_string(),
                content: format!("content of {path}"),
            });
        }
        code
    }

    #[test]
    fn test_empty_builder() {
        let files = FileSetBuilder::new().build().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_from_generated_code_current_dir() {
        let files = FileSetBuilder::from_generated_code(code(&["lp-01.tex", "lp-02.tex"]), ".")
            .build()
            .unwrap();
        assert_eq!(files.file_count(), 2);
        let (path, entry) = files.files().nth(1).unwrap();
        assert_eq!(path.as_str(), "lp-02.tex");
        assert_eq!(entry.content(), "content of lp-02.tex");
    }

    #[test]
    fn test_from_generated_code_empty_base() {
        let files = FileSetBuilder::from_generated_code(code(&["lp-01.tex"]), "")
            .build()
            .unwrap();
        let paths: Vec<&str> = files.files().map(|(path, _)| path.as_str()).collect();
        assert_eq!(paths, ["lp-01.tex"]);
    }

    #[test]
    fn test_add_files() {
        let files = FileSetBuilder::new()
            .add_files([("a.tex", "a"), ("b.tex", "b")])
            .build()
            .unwrap();
        assert_eq!(files.file_count(), 2);
    }

    #[test]
    fn test_invalid_path_reported_on_build() {
        let result = FileSetBuilder::new()
            .add_file("ok.tex", "")
            .add_file("../bad.tex", "")
            .build();
        assert!(result.unwrap_err().is_invalid_path());
    }
}
