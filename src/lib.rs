//! Backdated commit history generator
//!
//! Walks a calendar date range and, for every day, commits a handful of
//! placeholder source files at randomized, backdated timestamps.
//!
//! - `areas`: the repository and its collaborators (git, content providers, output tree)
//! - `artifacts`: scheduling, file content and run results
//! - `commands`: `generate` and `initialize`
//! - `config`: TOML and command-line settings
//! - `errors`: error kinds shared across the crate

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
