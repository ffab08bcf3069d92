//! Observability for gigboard
//!
//! - Structured logging (JSON, one line per event)
//! - Typed events
//! - Request counters
//!
//! Observability is read-only: nothing here influences request handling.
//!
//! ```ignore
//! use gigboard::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::RequestCreated, &[("id", "1")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_created();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
