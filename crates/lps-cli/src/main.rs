//! Lesson plan generator CLI.
//!
//! Reads a lessons file (a JSON or YAML list of lesson records) and writes
//! one LaTeX document per lesson, or the objectives include file, or a blank
//! skeleton to fill in.
//!
//! # Examples
//!
//! ```bash
//! # Write lp-01.tex, lp-02.tex, ... in the current directory
//! lps unit3.json
//!
//! # Write only info/objectives.tex
//! lps --generate-objectives unit3.json
//!
//! # Start a new unit with 12 blank lessons
//! lps --generate-blank 12 unit4.yaml
//!
//! # Overview of numbering and titles
//! lps list unit3.json --format text
//! ```

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use lps_cli::commands;
use lps_cli::config::{Config, RunConfig, RunMode};
use lps_core::cli::{ExitCode, InputFormat, OutputFormat};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Generate LaTeX lesson plans from a lessons file.
#[derive(Parser, Debug)]
#[command(name = "lps")]
#[command(version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Subcommand to execute instead of generating files
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ./lps.toml, then the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Lessons file encoding (auto, json, yaml)
    #[arg(long, global = true, value_name = "FORMAT")]
    input_format: Option<String>,
}

/// Arguments of the default generate run.
#[derive(Args, Debug)]
struct RunArgs {
    /// Lessons file: a JSON or YAML list of lesson records
    #[arg(value_name = "LESSONS_FILE", required = true)]
    lessons_file: Option<PathBuf>,

    /// Write only the objectives include file
    #[arg(long, alias = "generate_objectives")]
    generate_objectives: bool,

    /// Destination of the objectives include file
    #[arg(long, alias = "objectives_file", value_name = "PATH")]
    objectives_file: Option<PathBuf>,

    /// Write N blank lessons to LESSONS_FILE instead of reading it
    #[arg(
        long,
        alias = "generate_blank",
        value_name = "N",
        conflicts_with = "generate_objectives"
    )]
    generate_blank: Option<usize>,

    /// Replace an existing lessons file when writing a blank skeleton
    #[arg(long, requires = "generate_blank")]
    force: bool,

    /// Directory receiving the generated documents
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Show lesson numbers, topics, titles and output files.
    List {
        /// Lessons file to read
        lessons_file: PathBuf,

        /// Output format (json, text, pretty)
        #[arg(long, default_value = "pretty")]
        format: String,
    },

    /// Check a lessons file for duplicate ids without writing anything.
    Check {
        /// Lessons file to read
        lessons_file: PathBuf,
    },

    /// Generate shell completions.
    ///
    /// # Examples
    ///
    /// ```bash
    /// lps completions bash > /etc/bash_completion.d/lps
    /// lps completions zsh > ~/.zfunc/_lps
    /// ```
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let exit_code = execute(cli)?;
    if !exit_code.is_success() {
        debug!(code = %exit_code, "Exiting with failure");
    }

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, falling back
/// to info. Logs go to stderr so stdout stays clean for listings.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Routes the parsed command line to its handler and returns an exit code.
fn execute(cli: Cli) -> Result<ExitCode> {
    let input_format = parse_input_format(cli.input_format.as_deref())?;

    match cli.command {
        Some(Commands::List {
            lessons_file,
            format,
        }) => {
            let output_format = format
                .parse::<OutputFormat>()
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            let config = Config::load(cli.config.as_deref())?;
            let input_format = resolve_input_format(input_format, &config)?;
            commands::list::run(&lessons_file, input_format, output_format)
        }
        Some(Commands::Check { lessons_file }) => {
            let config = Config::load(cli.config.as_deref())?;
            let input_format = resolve_input_format(input_format, &config)?;
            commands::check::run(&lessons_file, input_format)
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            Ok(commands::completions::run(shell, &mut cmd))
        }
        None => {
            let config = Config::load(cli.config.as_deref())?;
            let run = resolve_run(cli.run, input_format, &config)?;
            match run.mode {
                RunMode::Documents => commands::documents::run(&run),
                RunMode::Objectives => commands::objectives::run(&run),
                RunMode::Blank { count, force } => commands::blank::run(&run, count, force),
            }
        }
    }
}

fn parse_input_format(value: Option<&str>) -> Result<Option<InputFormat>> {
    value
        .map(str::parse::<InputFormat>)
        .transpose()
        .map_err(|e| anyhow::anyhow!("{e}"))
}

fn resolve_input_format(explicit: Option<InputFormat>, config: &Config) -> Result<InputFormat> {
    match explicit {
        Some(format) => Ok(format),
        None => config.input_format(),
    }
}

/// Builds the run settings: config file first, then command-line overrides.
fn resolve_run(args: RunArgs, input_format: Option<InputFormat>, config: &Config) -> Result<RunConfig> {
    let lessons_file = args.lessons_file.context("LESSONS_FILE is required")?;

    let mode = match (args.generate_blank, args.generate_objectives) {
        (Some(count), _) => RunMode::Blank {
            count,
            force: args.force,
        },
        (None, true) => RunMode::Objectives,
        (None, false) => RunMode::Documents,
    };

    let mut run = RunConfig::from_config(lessons_file, mode, config)?;
    if let Some(format) = input_format {
        run.input_format = format;
    }
    if let Some(dir) = args.output_dir {
        run.output_dir = dir;
    }
    if let Some(path) = args.objectives_file {
        run.objectives_file = path;
    }

    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parsing_default_run() {
        let cli = parse(&["lps", "unit.json"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.run.lessons_file.as_deref(), Some(Path::new("unit.json")));
        assert!(!cli.run.generate_objectives);
        assert!(cli.run.generate_blank.is_none());
    }

    #[test]
    fn test_cli_parsing_objectives() {
        let cli = parse(&[
            "lps",
            "--generate-objectives",
            "--objectives-file",
            "out/objectives.tex",
            "unit.json",
        ]);
        assert!(cli.run.generate_objectives);
        assert_eq!(
            cli.run.objectives_file.as_deref(),
            Some(Path::new("out/objectives.tex"))
        );
    }

    #[test]
    fn test_cli_parsing_underscore_aliases() {
        let cli = parse(&["lps", "--generate_objectives", "--objectives_file", "o.tex", "u.json"]);
        assert!(cli.run.generate_objectives);

        let cli = parse(&["lps", "--generate_blank", "4", "u.json"]);
        assert_eq!(cli.run.generate_blank, Some(4));
    }

    #[test]
    fn test_cli_parsing_blank() {
        let cli = parse(&["lps", "--generate-blank", "5", "--force", "unit.yaml"]);
        assert_eq!(cli.run.generate_blank, Some(5));
        assert!(cli.run.force);
    }

    #[test]
    fn test_cli_force_requires_blank() {
        assert!(Cli::try_parse_from(["lps", "--force", "unit.json"]).is_err());
    }

    #[test]
    fn test_cli_blank_conflicts_with_objectives() {
        let result = Cli::try_parse_from([
            "lps",
            "--generate-blank",
            "3",
            "--generate-objectives",
            "unit.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_lessons_file() {
        assert!(Cli::try_parse_from(["lps"]).is_err());
        assert!(Cli::try_parse_from(["lps", "--generate-objectives"]).is_err());
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = parse(&["lps", "list", "unit.json", "--format", "json"]);
        if let Some(Commands::List {
            lessons_file,
            format,
        }) = cli.command
        {
            assert_eq!(lessons_file, Path::new("unit.json"));
            assert_eq!(format, "json");
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_parsing_check_with_globals() {
        let cli = parse(&["lps", "-v", "check", "unit.yml", "--input-format", "yaml"]);
        assert!(cli.verbose);
        assert_eq!(cli.input_format.as_deref(), Some("yaml"));
        assert!(matches!(cli.command, Some(Commands::Check { .. })));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = parse(&["lps", "completions", "zsh"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Zsh })
        ));
    }

    #[test]
    fn test_parse_input_format() {
        assert_eq!(parse_input_format(None).unwrap(), None);
        assert_eq!(
            parse_input_format(Some("yaml")).unwrap(),
            Some(InputFormat::Yaml)
        );
        assert!(parse_input_format(Some("csv")).is_err());
    }

    #[test]
    fn test_resolve_run_modes() {
        let config = Config::default();

        let run = resolve_run(parse(&["lps", "u.json"]).run, None, &config).unwrap();
        assert_eq!(run.mode, RunMode::Documents);

        let run = resolve_run(parse(&["lps", "--generate-objectives", "u.json"]).run, None, &config)
            .unwrap();
        assert_eq!(run.mode, RunMode::Objectives);

        let run = resolve_run(parse(&["lps", "--generate-blank", "2", "u.json"]).run, None, &config)
            .unwrap();
        assert_eq!(
            run.mode,
            RunMode::Blank {
                count: 2,
                force: false
            }
        );
    }

    #[test]
    fn test_resolve_run_flags_override_config() {
        let config = Config::from_toml(
            "[output]\ndirectory = \"from-config\"\n[input]\nformat = \"json\"\n",
        )
        .unwrap();
        let args = parse(&[
            "lps",
            "--output-dir",
            "from-flag",
            "--objectives-file",
            "obj.tex",
            "u.yaml",
        ])
        .run;

        let run = resolve_run(args, Some(InputFormat::Yaml), &config).unwrap();
        assert_eq!(run.output_dir, Path::new("from-flag"));
        assert_eq!(run.objectives_file, Path::new("obj.tex"));
        assert_eq!(run.input_format, InputFormat::Yaml);
    }

    #[test]
    fn test_resolve_run_uses_config() {
        let config = Config::from_toml("[output]\ndirectory = \"plans\"\n").unwrap();
        let run = resolve_run(parse(&["lps", "u.json"]).run, None, &config).unwrap();
        assert_eq!(run.output_dir, Path::new("plans"));
        assert_eq!(run.input_format, InputFormat::Auto);
    }
}
