//! Writing a [`FileSet`] to disk.
//!
//! Export runs in two phases: every parent directory is created first, then
//! files are written in path order. With atomic writes enabled (the default)
//! each file goes to a sibling `.tmp` file that is renamed into place, so a
//! reader never observes a half-written lesson plan.

use crate::file_set::FileSet;
use crate::types::{FilesError, Result};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options controlling how files are written.
///
/// # Examples
///
/// ```
/// use lps_files::ExportOptions;
///
/// let options = ExportOptions::default()
///     .with_atomic_writes(false)
///     .with_overwrite(false);
///
/// assert!(!options.atomic);
/// assert!(!options.overwrite);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Write to a temp file, then rename
    pub atomic: bool,
    /// Replace files that already exist
    pub overwrite: bool,
}

impl ExportOptions {
    /// Creates options with atomic writes and overwriting enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            atomic: true,
            overwrite: true,
        }
    }

    /// Sets whether to use atomic writes.
    #[must_use]
    pub const fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// Sets whether existing files are replaced.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSet {
    /// Exports every file under `base_path` with default options.
    ///
    /// Returns the paths actually written.
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::Io`] if a directory or file cannot be written.
    ///
    /// # Examples
    ///
    /// ```
    /// use lps_files::FileSetBuilder;
    /// # use tempfile::TempDir;
    ///
    /// # let temp = TempDir::new().unwrap();
    /// # let base = temp.path();
    /// let files = FileSetBuilder::new()
    ///     .add_file("info/objectives.tex", "% header")
    ///     .build()
    ///     .unwrap();
    ///
    /// files.export_to_directory(base).unwrap();
    /// assert!(base.join("info").join("objectives.tex").exists());
    /// ```
    pub fn export_to_directory(&self, base_path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        self.export_to_directory_with_options(base_path, &ExportOptions::default())
    }

    /// Exports every file under `base_path` with custom options.
    ///
    /// The base directory is created if it does not exist. Files skipped
    /// because `overwrite` is off are not included in the returned list.
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::Io`] if a directory or file cannot be written.
    pub fn export_to_directory_with_options(
        &self,
        base_path: impl AsRef<Path>,
        options: &ExportOptions,
    ) -> Result<Vec<PathBuf>> {
        let base = base_path.as_ref();
        self.create_directories(base)?;

        let mut written = Vec::with_capacity(self.file_count());
        for (path, file) in self.files() {
            let disk_path = path.to_disk_path(base);
            if write_file(&disk_path, file.content(), options)? {
                written.push(disk_path);
            }
        }

        debug!(count = written.len(), base = %base.display(), "Export complete");
        Ok(written)
    }

    /// Exports every file using parallel writes (requires the `parallel` feature).
    ///
    /// Directories are still created sequentially. The returned paths are in
    /// path order regardless of write order.
    ///
    /// # Errors
    ///
    /// Returns [`FilesError::Io`] if a directory or file cannot be written.
    #[cfg(feature = "parallel")]
    pub fn export_to_directory_parallel(
        &self,
        base_path: impl AsRef<Path>,
        options: &ExportOptions,
    ) -> Result<Vec<PathBuf>> {
        use rayon::prelude::*;

        let base = base_path.as_ref();
        self.create_directories(base)?;

        let files: Vec<_> = self.files().collect();
        let results = files
            .par_iter()
            .map(|(path, file)| {
                let disk_path = path.to_disk_path(base);
                write_file(&disk_path, file.content(), options)
                    .map(|was_written| was_written.then_some(disk_path))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(results.into_iter().flatten().collect())
    }

    fn create_directories(&self, base: &Path) -> Result<()> {
        let mut dirs = BTreeSet::new();
        dirs.insert(base.to_path_buf());
        for (path, _) in self.files() {
            if let Some(parent) = path.to_disk_path(base).parent() {
                dirs.insert(parent.to_path_buf());
            }
        }

        for dir in dirs {
            if dir.as_os_str().is_empty() {
                continue;
            }
            fs::create_dir_all(&dir).map_err(|e| FilesError::io(&dir, e))?;
        }
        Ok(())
    }
}

/// Writes `content` to `path` according to `options`.
///
/// Returns `false` without touching the file if it exists and overwriting is
/// disabled. The parent directory must already exist.
///
/// # Errors
///
/// Returns [`FilesError::Io`] if the file cannot be created, written or renamed.
///
/// # Examples
///
/// ```
/// use lps_files::{ExportOptions, write_file};
/// # use tempfile::TempDir;
///
/// # let temp = TempDir::new().unwrap();
/// let path = temp.path().join("lessons.json");
/// assert!(write_file(&path, "[]", &ExportOptions::default()).unwrap());
/// assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
/// ```
pub fn write_file(path: &Path, content: &str, options: &ExportOptions) -> Result<bool> {
    if !options.overwrite && path.exists() {
        debug!(path = %path.display(), "Skipping existing file");
        return Ok(false);
    }

    if options.atomic {
        let temp_path = temp_path_for(path);

        let mut file = fs::File::create(&temp_path).map_err(|e| FilesError::io(&temp_path, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| FilesError::io(&temp_path, e))?;
        file.sync_all().map_err(|e| FilesError::io(&temp_path, e))?;
        drop(file);

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(FilesError::io(path, e));
        }
    } else {
        fs::write(path, content).map_err(|e| FilesError::io(path, e))?;
    }

    info!("Wrote {}", path.display());
    Ok(true)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FileSetBuilder;
    use tempfile::TempDir;

    #[test]
    fn test_export_options_default() {
        let options = ExportOptions::default();
        assert!(options.atomic);
        assert!(options.overwrite);
    }

    #[test]
    fn test_export_single_file() {
        let temp = TempDir::new().unwrap();
        let files = FileSetBuilder::new()
            .add_file("lp-01.tex", "\\begin{document}")
            .build()
            .unwrap();

        let written = files.export_to_directory(temp.path()).unwrap();

        assert_eq!(written, [temp.path().join("lp-01.tex")]);
        assert_eq!(
            fs::read_to_string(temp.path().join("lp-01.tex")).unwrap(),
            "\\begin{document}"
        );
    }

    #[test]
    fn test_export_creates_missing_base_and_parents() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("out").join("unit-3");
        let files = FileSetBuilder::new()
            .add_file("info/objectives.tex", "% objectives")
            .build()
            .unwrap();

        files.export_to_directory(&base).unwrap();

        assert!(base.join("info").join("objectives.tex").is_file());
    }

    #[test]
    fn test_no_temp_files_left_behind() {
        let temp = TempDir::new().unwrap();
        let files = FileSetBuilder::new()
            .add_files([("lp-01.tex", "a"), ("lp-02.tex", "b")])
            .build()
            .unwrap();

        files.export_to_directory(temp.path()).unwrap();

        let names: Vec<String> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().all(|n| !n.ends_with(".tmp")), "{names:?}");
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_overwrite_disabled_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lessons.json");
        fs::write(&path, "keep me").unwrap();

        let options = ExportOptions::default().with_overwrite(false);
        assert!(!write_file(&path, "[]", &options).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_overwrite_replaces_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lp-01.tex");
        fs::write(&path, "old").unwrap();

        assert!(write_file(&path, "new", &ExportOptions::default()).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_direct_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lp-01.tex");
        let options = ExportOptions::default().with_atomic_writes(false);

        assert!(write_file(&path, "direct", &options).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "direct");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("lp-01.tex");

        let err = write_file(&path, "x", &ExportOptions::default()).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_temp_path_keeps_extension() {
        let temp = temp_path_for(Path::new("out/lp-01.tex"));
        assert_eq!(temp, Path::new("out/lp-01.tex.tmp"));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_export() {
        let temp = TempDir::new().unwrap();
        let files = FileSetBuilder::new()
            .add_files((1..=20).map(|i| (format!("lp-{i:02}.tex"), format!("lesson {i}"))))
            .build()
            .unwrap();

        let written = files
            .export_to_directory_parallel(temp.path(), &ExportOptions::default())
            .unwrap();

        assert_eq!(written.len(), 20);
        assert_eq!(written[0], temp.path().join("lp-01.tex"));
        assert_eq!(
            fs::read_to_string(temp.path().join("lp-20.tex")).unwrap(),
            "lesson 20"
        );
    }
}
