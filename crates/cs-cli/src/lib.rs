//! Conference scheduler CLI library.
//!
//! This crate provides the CLI interface for the conference scheduler.

mod cli;
pub mod commands;
mod config;

pub use cli::Cli;
pub use config::Config;
