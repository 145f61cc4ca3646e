//! Log subscriber setup and event emission
//!
//! Events go through `tracing`; `init_logging` installs a fmt subscriber
//! filtered by `RUST_LOG`, falling back to the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::events::{Event, Severity};

pub use tracing_subscriber::util::TryInitError;

/// Install the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(level: &str, json: bool) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .try_init()
    }
}

/// Render fields as `key=value` pairs sorted by key
pub fn render_fields(fields: &[(&str, &str)]) -> String {
    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    sorted
        .iter()
        .map(|(k, v)| format!("{}={:?}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let fields = render_fields(fields);
    let code = event.as_str();

    match event.severity() {
        Severity::Debug => tracing::debug!(event = code, "{}", fields),
        Severity::Info => tracing::info!(event = code, "{}", fields),
        Severity::Error => tracing::error!(event = code, "{}", fields),
    }
}
