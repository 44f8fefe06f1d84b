//! The appender: classification, record building, and dispatch.

use std::sync::Arc;

use pharos_telemetry::{TelemetryRecord, TelemetrySink};

use crate::config::AppenderConfig;
use crate::error::AppenderError;
use crate::event::LogEvent;
use crate::layout::Layout;
use crate::metadata;
use crate::severity::severity_for;

/// Identity stamped into the sink context at activation.
pub const SDK_VERSION: &str = concat!("pharos-appender:", env!("CARGO_PKG_VERSION"));

/// Message text used for trace records built from events that carry no
/// rendered message. Public so hosts can filter on it downstream.
pub const EMPTY_MESSAGE_FALLBACK: &str = "(empty trace)";

/// Adapter between a logging pipeline and a telemetry sink.
///
/// Holds exactly one sink handle and one layout for its lifetime, both
/// injected at activation. Append calls carry no appender-level state,
/// so concurrent appends from multiple threads need no extra
/// synchronization here.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pharos_appender::{AppenderConfig, LogEvent, LogLevel, MessageLayout, TelemetryAppender};
/// use pharos_telemetry::InMemorySink;
///
/// let sink = Arc::new(InMemorySink::new());
/// let appender = TelemetryAppender::activate(
///     &AppenderConfig::new().with_instrumentation_key("ikey-1"),
///     MessageLayout,
///     sink.clone(),
/// );
///
/// let event = LogEvent::builder(chrono::Utc::now())
///     .level(LogLevel::INFO)
///     .message("started")
///     .build();
/// appender.append(&event).unwrap();
///
/// let records = sink.drain();
/// assert_eq!(records[0].message(), Some("started"));
/// ```
pub struct TelemetryAppender {
    sink: Arc<dyn TelemetrySink>,
    layout: Box<dyn Layout>,
}

impl TelemetryAppender {
    /// One-time activation.
    ///
    /// Takes ownership of the sink handle for the appender's lifetime.
    /// A configured instrumentation key is pushed into the sink context
    /// so every subsequent submission is attributed to it; an absent or
    /// empty key silently leaves the sink on its own defaults. The SDK
    /// identity is stamped once and never changes. Activation cannot
    /// fail.
    #[must_use]
    pub fn activate(
        config: &AppenderConfig,
        layout: impl Layout + 'static,
        sink: Arc<dyn TelemetrySink>,
    ) -> Self {
        if let Some(key) = config.instrumentation_key() {
            sink.context().set_instrumentation_key(key);
        }
        sink.context().set_sdk_version(SDK_VERSION);
        Self {
            sink,
            layout: Box::new(layout),
        }
    }

    /// Process one log event: classify it, build the matching record,
    /// and submit it to the sink.
    ///
    /// An event carrying an error object becomes an exception record;
    /// anything else becomes a trace record. Missing-argument failures
    /// raised while building the record are wrapped into
    /// [`AppenderError::DeliveryFailed`] at this boundary; sink errors
    /// and every other kind propagate unchanged. Failures are never
    /// swallowed, and the appender never logs about itself.
    pub fn append(&self, event: &LogEvent) -> Result<(), AppenderError> {
        let record = if event.error().is_some() {
            self.build_exception(event)
        } else {
            self.build_trace(event)
        }
        .map_err(AppenderError::isolate)?;

        self.sink.submit(record)?;
        Ok(())
    }

    fn build_trace(&self, event: &LogEvent) -> Result<TelemetryRecord, AppenderError> {
        let message = if event.rendered_message().is_some() {
            self.layout.format(event)?
        } else {
            EMPTY_MESSAGE_FALLBACK.to_owned()
        };

        let meta = metadata::extract(event);
        Ok(TelemetryRecord::trace(message, meta.timestamp)
            .with_severity(severity_for(event.level()))
            .with_user_id(meta.user_id)
            .with_properties(meta.properties))
    }

    fn build_exception(&self, event: &LogEvent) -> Result<TelemetryRecord, AppenderError> {
        let error = event
            .error()
            .cloned()
            .ok_or(AppenderError::MissingArgument { name: "error" })?;

        let meta = metadata::extract(event);
        Ok(TelemetryRecord::exception(error, meta.timestamp)
            .with_severity(severity_for(event.level()))
            .with_user_id(meta.user_id)
            .with_properties(meta.properties))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pharos_telemetry::InMemorySink;

    use super::*;
    use crate::layout::MessageLayout;

    #[test]
    fn activation_stamps_context_once() {
        let sink = Arc::new(InMemorySink::new());
        let config = AppenderConfig::new().with_instrumentation_key("ikey-42");
        let _appender = TelemetryAppender::activate(&config, MessageLayout, sink.clone());

        assert_eq!(
            sink.context().instrumentation_key().as_deref(),
            Some("ikey-42")
        );
        assert_eq!(sink.context().sdk_version().as_deref(), Some(SDK_VERSION));
    }

    #[test]
    fn activation_without_key_leaves_sink_defaults() {
        let sink = Arc::new(InMemorySink::new());
        let _appender =
            TelemetryAppender::activate(&AppenderConfig::new(), MessageLayout, sink.clone());

        assert_eq!(sink.context().instrumentation_key(), None);
        assert_eq!(sink.context().sdk_version().as_deref(), Some(SDK_VERSION));
    }

    #[test]
    fn empty_key_counts_as_absent() {
        let sink = Arc::new(InMemorySink::new());
        let config = AppenderConfig::new().with_instrumentation_key("");
        let _appender = TelemetryAppender::activate(&config, MessageLayout, sink.clone());
        assert_eq!(sink.context().instrumentation_key(), None);
    }

    #[test]
    fn append_is_callable_from_multiple_threads() {
        let sink = Arc::new(InMemorySink::new());
        let appender = Arc::new(TelemetryAppender::activate(
            &AppenderConfig::new(),
            MessageLayout,
            sink.clone(),
        ));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let appender = Arc::clone(&appender);
                std::thread::spawn(move || {
                    for j in 0..25 {
                        let event = LogEvent::builder(Utc::now())
                            .message(format!("t{i} m{j}"))
                            .build();
                        appender.append(&event).expect("append");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread");
        }

        assert_eq!(sink.len(), 100);
    }
}
