//! CLI module for gigboard
//!
//! Provides the `serve` command, which resolves configuration from flags
//! and `$PORT`, then runs the HTTP API until interrupted.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, SchemaArg, ServeArgs};
pub use commands::{resolve_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
