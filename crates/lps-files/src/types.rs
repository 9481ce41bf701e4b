//! Core types for the generated file set.
//!
//! # Examples
//!
//! ```
//! use lps_files::{FileEntry, FilePath};
//!
//! let path = FilePath::new("info/objectives.tex").unwrap();
//! let file = FileEntry::new("% header");
//!
//! assert_eq!(path.as_str(), "info/objectives.tex");
//! assert_eq!(file.content(), "% header");
//! ```

use std::fmt;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while collecting or exporting generated files.
#[derive(Error, Debug)]
pub enum FilesError {
    /// Path is empty, absolute, or escapes the output directory
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath {
        /// The rejected path
        path: String,
        /// Why the path was rejected
        reason: String,
    },

    /// I/O failure while writing to disk
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl FilesError {
    /// Returns `true` if this is an invalid path error.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Type alias for `Result` with `FilesError`.
pub type Result<T> = std::result::Result<T, FilesError>;

/// A validated path relative to the output directory.
///
/// Paths use forward slashes on all platforms and may not be absolute or
/// contain `..` components, so an export can never write outside its base
/// directory.
///
/// # Examples
///
/// ```
/// use lps_files::FilePath;
///
/// assert!(FilePath::new("lp-01.tex").is_ok());
/// assert!(FilePath::new("info/objectives.tex").is_ok());
///
/// assert!(FilePath::new("/etc/passwd").is_err());
/// assert!(FilePath::new("../escape.tex").is_err());
/// assert!(FilePath::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilePath(String);

impl FilePath {
    /// Creates a new `FilePath`.
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::InvalidPath`] if the path is empty, not UTF-8,
    /// absolute, or contains a parent-directory component.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let invalid = |reason: &str| FilesError::InvalidPath {
            path: path.display().to_string(),
            reason: reason.to_string(),
        };

        let raw = path.to_str().ok_or_else(|| invalid("not valid UTF-8"))?;
        let normalized = raw.replace('\\', "/");

        if normalized.is_empty() {
            return Err(invalid("path is empty"));
        }
        if normalized.starts_with('/') || path.is_absolute() {
            return Err(invalid("path must be relative"));
        }

        let mut parts = Vec::new();
        for component in Path::new(&normalized).components() {
            match component {
                Component::Normal(part) => {
                    parts.push(part.to_str().ok_or_else(|| invalid("not valid UTF-8"))?);
                }
                Component::CurDir => {}
                Component::ParentDir => return Err(invalid("'..' is not allowed")),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid("path must be relative"));
                }
            }
        }

        if parts.is_empty() {
            return Err(invalid("path has no file name"));
        }

        Ok(Self(parts.join("/")))
    }

    /// Returns the path as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins this path onto `base` using platform separators.
    #[must_use]
    pub fn to_disk_path(&self, base: &Path) -> PathBuf {
        self.0.split('/').fold(base.to_path_buf(), |acc, part| acc.join(part))
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content of one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    content: String,
}

impl FileEntry {
    /// Creates a new file entry.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the file content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
