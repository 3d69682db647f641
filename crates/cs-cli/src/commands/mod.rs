//! CLI command implementations.

pub mod schedule;
