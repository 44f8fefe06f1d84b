#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Pharos Appender
//!
//! Adapter between a structured logging pipeline and a telemetry sink.
//! Each appended [`LogEvent`] becomes exactly one
//! [`TelemetryRecord`](pharos_telemetry::TelemetryRecord): events
//! carrying an error object take the exception path, everything else
//! the trace path. Severity mapping, metadata extraction, and the
//! failure-isolation boundary live here; transport belongs to the
//! injected [`TelemetrySink`](pharos_telemetry::TelemetrySink).
//!
//! The appender is stateless across calls: one sink handle and one
//! [`Layout`], both fixed at [`TelemetryAppender::activate`] time.

pub mod appender;
pub mod config;
pub mod error;
pub mod event;
pub mod layout;
pub mod level;
pub mod metadata;
pub mod severity;

pub use appender::{EMPTY_MESSAGE_FALLBACK, SDK_VERSION, TelemetryAppender};
pub use config::{AppenderConfig, INSTRUMENTATION_KEY_ENV};
pub use error::AppenderError;
pub use event::{LogEvent, LogEventBuilder, LocationInfo};
pub use layout::{Layout, MessageLayout, PatternLayout};
pub use level::LogLevel;
pub use severity::severity_for;
