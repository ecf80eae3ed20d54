//! Minutes CLI library.
//!
//! Configuration loading, argument parsing and command execution for the
//! `minutes` binary. Commands return their JSON output so the binary only
//! has to print it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
