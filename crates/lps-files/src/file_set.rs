//! In-memory set of generated files.
//!
//! Files are kept in a `BTreeMap` so iteration and export follow path order.
//!
//! # Examples
//!
//! ```
//! use lps_files::FileSet;
//!
//! let mut files = FileSet::new();
//! files.add_file("lp-01.tex", "\\documentclass{article}").unwrap();
//!
//! files.add_file("./lp-01.tex", "\\documentclass{book}").unwrap();
//!
//! assert_eq!(files.file_count(), 1);
//! let (path, entry) = files.files().next().unwrap();
//! assert_eq!(path.as_str(), "lp-01.tex");
//! assert_eq!(entry.content(), "\\documentclass{book}");
//! ```

use crate::types::{FileEntry, FilePath, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// An ordered, in-memory collection of generated files.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: BTreeMap<FilePath, FileEntry>,
}

impl FileSet {
    /// Creates an empty file set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
        }
    }

    /// Adds a file, replacing any file already at that path.
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::InvalidPath`] if the path is not a valid relative path.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Result<()> {
        let path = FilePath::new(path)?;
        self.files.insert(path, FileEntry::new(content));
        Ok(())
    }

    /// Number of files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if the set holds no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates over `(path, entry)` pairs in path order.
    pub fn files(&self) -> impl Iterator<Item = (&FilePath, &FileEntry)> {
        self.files.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(files: &FileSet) -> Vec<(&str, &str)> {
        files
            .files()
            .map(|(path, entry)| (path.as_str(), entry.content()))
            .collect()
    }

    #[test]
    fn test_new_is_empty() {
        let files = FileSet::new();
        assert!(files.is_empty());
        assert_eq!(files.file_count(), 0);
    }

    #[test]
    fn test_files_iterate_in_path_order() {
        let mut files = FileSet::new();
        files.add_file("lp-02.tex", "two").unwrap();
        files.add_file("lp-01.tex", "one").unwrap();

        assert_eq!(contents(&files), [("lp-01.tex", "one"), ("lp-02.tex", "two")]);
    }

    #[test]
    fn test_add_replaces() {
        let mut files = FileSet::new();
        files.add_file("lp-01.tex", "old").unwrap();
        files.add_file("./lp-01.tex", "new").unwrap();
        assert_eq!(contents(&files), [("lp-01.tex", "new")]);
    }

    #[test]
    fn test_add_invalid_path() {
        let mut files = FileSet::new();
        assert!(files.add_file("../x.tex", "").unwrap_err().is_invalid_path());
        assert!(files.is_empty());
    }
}
