//! The structured log event consumed by the appender.
//!
//! A [`LogEvent`] is owned by the logging pipeline and read-only to the
//! appender; it lives for the duration of one append call. Events are
//! assembled through [`LogEvent::builder`], which mirrors the shape a
//! host pipeline would populate.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use pharos_telemetry::ErrorObject;
use serde_json::Value;

use crate::level::LogLevel;

/// Source-location details attached to an event, all optional.
#[derive(Debug, Clone, Default)]
pub struct LocationInfo {
    /// Fully-qualified name of the emitting type.
    pub class_name: Option<String>,
    /// Source file name.
    pub file_name: Option<String>,
    /// Emitting method name.
    pub method_name: Option<String>,
    /// Source line number.
    pub line: Option<u32>,
}

/// One structured record emitted by the logging pipeline.
///
/// # Examples
///
/// ```
/// use pharos_appender::{LogEvent, LogLevel};
///
/// let event = LogEvent::builder(chrono::Utc::now())
///     .level(LogLevel::WARN)
///     .message("disk almost full")
///     .logger_name("app.storage")
///     .property("UserId", "42")
///     .build();
///
/// assert_eq!(event.rendered_message(), Some("disk almost full"));
/// ```
#[derive(Debug, Clone)]
pub struct LogEvent {
    timestamp: DateTime<Utc>,
    level: Option<LogLevel>,
    rendered_message: Option<String>,
    logger_name: Option<String>,
    thread_name: Option<String>,
    user_name: Option<String>,
    domain: Option<String>,
    identity: Option<String>,
    location: Option<LocationInfo>,
    error: Option<ErrorObject>,
    properties: BTreeMap<String, Value>,
}

impl LogEvent {
    /// Start building an event stamped with the given timestamp.
    #[must_use]
    pub fn builder(timestamp: DateTime<Utc>) -> LogEventBuilder {
        LogEventBuilder {
            event: Self {
                timestamp,
                level: None,
                rendered_message: None,
                logger_name: None,
                thread_name: None,
                user_name: None,
                domain: None,
                identity: None,
                location: None,
                error: None,
                properties: BTreeMap::new(),
            },
        }
    }

    /// When the event was emitted.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Ordered level, if the pipeline supplied one.
    #[must_use]
    pub fn level(&self) -> Option<LogLevel> {
        self.level
    }

    /// Rendered message text, if any.
    #[must_use]
    pub fn rendered_message(&self) -> Option<&str> {
        self.rendered_message.as_deref()
    }

    /// Name of the emitting logger.
    #[must_use]
    pub fn logger_name(&self) -> Option<&str> {
        self.logger_name.as_deref()
    }

    /// Name of the emitting thread.
    #[must_use]
    pub fn thread_name(&self) -> Option<&str> {
        self.thread_name.as_deref()
    }

    /// User name associated with the event.
    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    /// Application domain the event originated from.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Identity string associated with the event.
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Source-location details, if captured.
    #[must_use]
    pub fn location(&self) -> Option<&LocationInfo> {
        self.location.as_ref()
    }

    /// The attached error object, if any. Presence routes the event down
    /// the exception path.
    #[must_use]
    pub fn error(&self) -> Option<&ErrorObject> {
        self.error.as_ref()
    }

    /// Open-ended context properties supplied by the pipeline.
    #[must_use]
    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }
}

/// Fluent builder for [`LogEvent`].
#[derive(Debug)]
pub struct LogEventBuilder {
    event: LogEvent,
}

impl LogEventBuilder {
    /// Set the ordered level.
    #[must_use]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.event.level = Some(level);
        self
    }

    /// Set the rendered message text.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.event.rendered_message = Some(message.into());
        self
    }

    /// Set the emitting logger name.
    #[must_use]
    pub fn logger_name(mut self, name: impl Into<String>) -> Self {
        self.event.logger_name = Some(name.into());
        self
    }

    /// Set the emitting thread name.
    #[must_use]
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.event.thread_name = Some(name.into());
        self
    }

    /// Set the user name.
    #[must_use]
    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.event.user_name = Some(name.into());
        self
    }

    /// Set the application domain.
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.event.domain = Some(domain.into());
        self
    }

    /// Set the identity string.
    #[must_use]
    pub fn identity(mut self, identity: impl Into<String>) -> Self {
        self.event.identity = Some(identity.into());
        self
    }

    /// Attach source-location details.
    #[must_use]
    pub fn location(mut self, location: LocationInfo) -> Self {
        self.event.location = Some(location);
        self
    }

    /// Attach an error object, routing the event down the exception path.
    #[must_use]
    pub fn error(mut self, error: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.event.error = Some(std::sync::Arc::new(error));
        self
    }

    /// Attach an already-shared error handle.
    #[must_use]
    pub fn error_arc(mut self, error: ErrorObject) -> Self {
        self.event.error = Some(error);
        self
    }

    /// Add one context property.
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.event.properties.insert(key.into(), value.into());
        self
    }

    /// Finish the event.
    #[must_use]
    pub fn build(self) -> LogEvent {
        self.event
    }
}
