//! Command implementations for the `lps` CLI.
//!
//! Each command reads its inputs, performs one operation and returns an
//! [`ExitCode`](lps_core::cli::ExitCode). Duplicate lesson ids map to exit
//! code 1 and leave the output untouched.

pub mod blank;
pub mod check;
pub mod common;
pub mod completions;
pub mod documents;
pub mod list;
pub mod objectives;
