//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, elvish and `PowerShell`.

use clap::Command;
use clap_complete::{Shell, generate};
use lps_core::cli::ExitCode;
use std::io::{self, Write};
use tracing::info;

/// Writes the completion script for `shell` to `out`.
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
///
/// # Examples
///
/// ```no_run
/// use clap::Command;
/// use clap_complete::Shell;
/// use lps_cli::commands::completions;
///
/// let mut cmd = Command::new("lps");
/// completions::run(Shell::Bash, &mut cmd);
/// ```
pub fn run(shell: Shell, cmd: &mut Command) -> ExitCode {
    info!("Generating {shell} completions");
    generate_completions(shell, cmd, &mut io::stdout());
    ExitCode::SUCCESS
}
