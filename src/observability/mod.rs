//! Observability for the roster service
//!
//! - `tracing` subscriber setup (text or JSON lines)
//! - Typed lifecycle events
//!
//! Request-level spans come from `tower_http::trace::TraceLayer`, added
//! in `http_server::server`.
//!
//! # Usage
//!
//! ```ignore
//! use students_crud::observability::{init_logging, log_event, Event, LoggingConfig};
//!
//! init_logging(&LoggingConfig::default());
//! log_event(Event::BootStart);
//! ```

mod events;
mod logging;

pub use events::Event;
pub use logging::{init_logging, LoggingConfig};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    tracing::info!(event = event.as_str());
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let rendered = fields
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ");
    tracing::info!(event = event.as_str(), fields = %rendered);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // No subscriber needed; verifies no panic
        log_event(Event::BootStart);
        log_event(Event::BootComplete);
    }

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::StoreSeeded, &[("count", "3")]);
    }
}
