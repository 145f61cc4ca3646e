//! CLI command implementations
//!
//! `serve` follows a fixed boot sequence:
//! 1. Resolve configuration
//! 2. Install the log subscriber
//! 3. Load the books file (any failure here ends the process)
//! 4. Start the runtime and serve until Ctrl-C

use std::path::Path;
use std::sync::Arc;

use super::args::{Cli, Command, ServeArgs};
use super::config::ServiceConfig;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::{init_logging, log_event, log_event_with_fields, Event};
use crate::store::{BookStore, BooksFile};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { books_file } => init(&books_file),
        Command::Serve(args) => serve(&args),
    }
}

/// Create an empty books file.
///
/// Refuses to touch an existing file.
pub fn init(books_file: &Path) -> CliResult<()> {
    BooksFile::new(books_file).create_empty()?;

    let path = books_file.display().to_string();
    log_event_with_fields(Event::BooksFileCreated, &[("path", path.as_str())]);
    println!("Created {}", path);

    Ok(())
}

/// Load the books file and serve the HTTP API
pub fn serve(args: &ServeArgs) -> CliResult<()> {
    let config = ServiceConfig::resolve(args)?;

    init_logging(&config.log_level, config.json_logs)
        .map_err(|e| CliError::boot_failed(format!("Failed to initialize logging: {}", e)))?;

    log_event(Event::BootStart);
    let books_file = config.books_file.display().to_string();
    let port = config.port.to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("books_file", books_file.as_str()), ("port", port.as_str())],
    );

    let server = boot(&config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Load the books file and build the server.
///
/// Fails if the books file is absent or is not a JSON array of books.
pub fn boot(config: &ServiceConfig) -> CliResult<HttpServer> {
    let store = Arc::new(BookStore::open(&config.books_file, config.store)?);
    Ok(HttpServer::new(
        config.socket_addr(),
        &config.cors_origins,
        store,
    ))
}
