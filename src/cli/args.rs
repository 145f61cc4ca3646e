//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf init [--books-file <path>]
//! - bookshelf serve [--config <path>] [--host] [--port] [--books-file] ...

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// bookshelf - a book catalogue served over HTTP
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty books file
    Init {
        /// Path of the books file to create
        #[arg(long, env = "BOOKSHELF_BOOKS_FILE", default_value = "books.json")]
        books_file: PathBuf,
    },

    /// Serve the book API
    Serve(ServeArgs),
}

/// Overrides for `serve`. Each one wins over the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, env = "BOOKSHELF_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "BOOKSHELF_PORT")]
    pub port: Option<u16>,

    /// Books file to load and persist to
    #[arg(long, env = "BOOKSHELF_BOOKS_FILE")]
    pub books_file: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "BOOKSHELF_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
