//! Tooling & Integration Layer
//!
//! Diagnostic command-line surface over the locator, validator, and hasher.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
