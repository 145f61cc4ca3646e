//! CLI module for bookshelf
//!
//! Provides command-line interface for:
//! - init: Create an empty books file
//! - serve: Load the books file and serve the HTTP API

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{boot, init, run, run_command, serve};
pub use config::ServiceConfig;
pub use errors::{CliError, CliErrorCode, CliResult};
