//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod preview;
pub mod serve;
