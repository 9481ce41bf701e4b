//! Lesson plan CLI library.
//!
//! Backs the `lps` binary: configuration, lessons-file codecs, commands and
//! output formatters, exposed as a library so they can be tested directly.

#![deny(unsafe_code)]

pub mod codec;
pub mod commands;
pub mod config;
pub mod formatters;

pub use config::{Config, RunConfig, RunMode};
