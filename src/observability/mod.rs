//! Observability for bookshelf
//!
//! - Typed lifecycle and mutation events with stable codes
//! - `tracing` emission with deterministic field ordering
//! - Subscriber setup (plain or JSON lines)
//!
//! # Usage
//!
//! ```ignore
//! use bookshelf::observability::{init_logging, log_event_with_fields, Event};
//!
//! init_logging("info", false)?;
//! log_event_with_fields(Event::BookCreated, &[("id", "1")]);
//! ```

mod events;
mod logger;

pub use events::{Event, Severity};
pub use logger::{init_logging, log_event, log_event_with_fields, render_fields, TryInitError};
