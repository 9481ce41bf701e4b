//! Configuration file and per-run settings.
//!
//! Settings are read from TOML. The first file found wins:
//!
//! 1. the path given with `--config`
//! 2. `./lps.toml`
//! 3. `<config dir>/lps/config.toml` (`~/.config/lps/config.toml` on Linux)
//!
//! Command-line flags override anything read from the file.
//!
//! ```toml
//! [output]
//! directory = "plans"
//! objectives_file = "info/objectives.tex"
//! atomic_writes = true
//! parallel = false
//!
//! [input]
//! format = "auto"
//! ```

use anyhow::{Context, Result};
use lps_core::DEFAULT_OBJECTIVES_FILE;
use lps_core::cli::InputFormat;
use lps_files::ExportOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "lps.toml";

/// Settings loaded from a config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Where and how files are written
    #[serde(default)]
    pub output: OutputConfig,

    /// How lessons files are read
    #[serde(default)]
    pub input: InputConfig,
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the lesson documents
    pub directory: PathBuf,

    /// Objectives include path, relative to `directory` unless absolute
    pub objectives_file: PathBuf,

    /// Write through a temp file and rename
    pub atomic_writes: bool,

    /// Write lesson documents in parallel
    pub parallel: bool,
}

/// Input settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// Lessons file encoding (auto, json, yaml)
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            objectives_file: PathBuf::from(DEFAULT_OBJECTIVES_FILE),
            atomic_writes: true,
            parallel: false,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            format: InputFormat::Auto.to_string(),
        }
    }
}

impl Config {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown input format or an empty path.
    pub fn validate(&self) -> Result<()> {
        self.input_format()?;

        if self.output.directory.as_os_str().is_empty() {
            anyhow::bail!("output.directory must not be empty");
        }
        if self.output.objectives_file.as_os_str().is_empty() {
            anyhow::bail!("output.objectives_file must not be empty");
        }

        Ok(())
    }

    /// Parsed `input.format`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not `auto`, `json` or `yaml`.
    pub fn input_format(&self) -> Result<InputFormat> {
        self.input
            .format
            .parse::<InputFormat>()
            .with_context(|| format!("invalid input.format '{}'", self.input.format))
    }

    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or fails validation.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads configuration using the search order described above.
    ///
    /// An explicit path must exist; the implicit locations are optional and
    /// defaults apply when none is present.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be loaded.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        for path in search_paths() {
            if path.is_file() {
                return Self::load_from(&path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }
}

/// Implicit config file locations, in lookup order.
#[must_use]
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("lps").join("config.toml"));
    }
    paths
}

/// What a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// One LaTeX document per lesson
    Documents,
    /// Only the objectives include file
    Objectives,
    /// A skeleton lessons file with `count` blank records
    Blank {
        /// Number of records
        count: usize,
        /// Replace an existing lessons file
        force: bool,
    },
}

/// Fully resolved settings for one invocation.
///
/// Built from the config file, then adjusted from command-line flags. The
/// core crate never sees this; only commands read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Lessons file to read, or to write in blank mode
    pub lessons_file: PathBuf,
    /// What to produce
    pub mode: RunMode,
    /// Lessons file encoding
    pub input_format: InputFormat,
    /// Directory receiving the lesson documents
    pub output_dir: PathBuf,
    /// Objectives include path as configured
    pub objectives_file: PathBuf,
    /// Write behavior
    pub export: ExportOptions,
    /// Write lesson documents in parallel
    pub parallel: bool,
}

impl RunConfig {
    /// Creates run settings from the loaded config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config holds an invalid input format.
    pub fn from_config(
        lessons_file: impl Into<PathBuf>,
        mode: RunMode,
        config: &Config,
    ) -> Result<Self> {
        Ok(Self {
            lessons_file: lessons_file.into(),
            mode,
            input_format: config.input_format()?,
            output_dir: config.output.directory.clone(),
            objectives_file: config.output.objectives_file.clone(),
            export: ExportOptions::default().with_atomic_writes(config.output.atomic_writes),
            parallel: config.output.parallel,
        })
    }

    /// Where the objectives include is written.
    ///
    /// Relative paths resolve against the output directory, which is where
    /// the documents that `\input` it live.
    ///
    /// # Examples
    ///
    /// ```
    /// use lps_cli::config::{Config, RunConfig, RunMode};
    /// use std::path::Path;
    ///
    /// let mut run = RunConfig::from_config("unit.json", RunMode::Objectives, &Config::default()).unwrap();
    /// run.output_dir = "plans".into();
    /// assert_eq!(run.objectives_path(), Path::new("plans").join("info/objectives.tex"));
    /// ```
    #[must_use]
    pub fn objectives_path(&self) -> PathBuf {
        if self.objectives_file.is_absolute() {
            self.objectives_file.clone()
        } else {
            self.output_dir.join(&self.objectives_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.directory, Path::new("."));
        assert_eq!(config.output.objectives_file, Path::new("info/objectives.tex"));
        assert!(config.output.atomic_writes);
        assert!(!config.output.parallel);
        assert_eq!(config.input.format, "auto");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let config = Config::from_toml("[output]\nparallel = true\n").unwrap();
        assert!(config.output.parallel);
        assert!(config.output.atomic_writes);
        assert_eq!(config.output.objectives_file, Path::new("info/objectives.tex"));
    }

    #[test]
    fn test_invalid_input_format() {
        let err = Config::from_toml("[input]\nformat = \"xml\"\n").unwrap_err();
        assert!(format!("{err:#}").contains("xml"));
    }

    #[test]
    fn test_empty_directory_rejected() {
        assert!(Config::from_toml("[output]\ndirectory = \"\"\n").is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[input]\nformat = \"yaml\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.input_format().unwrap(), InputFormat::Yaml);
    }

    #[test]
    fn test_load_explicit_missing() {
        let err = Config::load(Some(Path::new("/nonexistent/lps.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lps.toml"));
    }

    #[test]
    fn test_search_paths_start_local() {
        assert_eq!(search_paths()[0], Path::new(LOCAL_CONFIG_FILE));
    }

    #[test]
    fn test_run_config_from_config() {
        let config = Config::from_toml(
            "[output]\ndirectory = \"out\"\natomic_writes = false\n[input]\nformat = \"json\"\n",
        )
        .unwrap();
        let run = RunConfig::from_config("unit.yaml", RunMode::Documents, &config).unwrap();

        assert_eq!(run.input_format, InputFormat::Json);
        assert_eq!(run.output_dir, Path::new("out"));
        assert!(!run.export.atomic);
        assert!(run.export.overwrite);
    }

    #[test]
    fn test_absolute_objectives_path() {
        let mut run =
            RunConfig::from_config("unit.json", RunMode::Objectives, &Config::default()).unwrap();
        run.output_dir = PathBuf::from("plans");
        run.objectives_file = PathBuf::from("/tmp/objectives.tex");
        assert_eq!(run.objectives_path(), Path::new("/tmp/objectives.tex"));
    }
}
