//! Observable events for bookshelf
//!
//! Events are explicit and typed. Each maps to a stable code that appears
//! as the `event` field of the log line.

use std::fmt;

/// Log severity of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Error,
}

/// Observable events in bookshelf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration resolved from defaults, file and flags
    ConfigLoaded,
    /// Books file read and parsed
    BooksLoaded,
    /// Listener bound, serving requests
    Serving,
    /// A configured CORS origin is not a valid header value
    CorsOriginSkipped,
    /// Shutdown signal received
    ShutdownStart,
    /// Server loop exited
    ShutdownComplete,

    // Init
    /// Empty books file created
    BooksFileCreated,

    // Mutations
    BookCreated,
    BookUpdated,
    BookPatched,
    BookDeleted,

    // Persistence
    /// Books file could not be rewritten
    PersistFailed,

    // Requests
    /// A request was rejected with a client error
    RequestRejected,
}

impl Event {
    /// Returns the stable event code
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOKSHELF_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::BooksLoaded => "BOOKS_LOADED",
            Event::Serving => "SERVING",
            Event::CorsOriginSkipped => "CORS_ORIGIN_SKIPPED",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::BooksFileCreated => "BOOKS_FILE_CREATED",

            Event::BookCreated => "BOOK_CREATED",
            Event::BookUpdated => "BOOK_UPDATED",
            Event::BookPatched => "BOOK_PATCHED",
            Event::BookDeleted => "BOOK_DELETED",

            Event::PersistFailed => "PERSIST_FAILED",

            Event::RequestRejected => "REQUEST_REJECTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::PersistFailed | Event::CorsOriginSkipped => Severity::Error,
            Event::RequestRejected => Severity::Debug,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
