//! Sink contract and reference implementations.
//!
//! [`TelemetrySink`] is the submission boundary: one record in, no
//! response awaited. Concrete sinks own their transport, batching, and
//! retry policy -- none of that leaks into this contract. Sinks are
//! shared via `Arc<dyn TelemetrySink>` and must tolerate concurrent
//! submitters.

use std::mem;

use parking_lot::{Mutex, RwLock};
use thiserror::Error;

use crate::record::{SeverityLevel, TelemetryPayload, TelemetryRecord};

/// Failure surfaced by a sink's submission path.
///
/// Never produced by the adapter itself; adapters propagate these
/// unchanged to their caller.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink's submission channel has shut down.
    #[error("telemetry sink closed")]
    Closed,
    /// The sink rejected the record.
    #[error("telemetry submission rejected: {reason}")]
    Rejected {
        /// Sink-specific rejection reason.
        reason: String,
    },
}

/// Mutable attribution context shared by everything a sink submits.
///
/// Holds the instrumentation key and the SDK identity string. Both are
/// stamped once at adapter activation and read by the sink's transport.
#[derive(Debug, Default)]
pub struct SinkContext {
    inner: RwLock<ContextInner>,
}

#[derive(Debug, Default)]
struct ContextInner {
    instrumentation_key: Option<String>,
    sdk_version: Option<String>,
}

impl SinkContext {
    /// Create an empty context (sink defaults apply).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute all subsequent submissions to the given key.
    pub fn set_instrumentation_key(&self, key: impl Into<String>) {
        self.inner.write().instrumentation_key = Some(key.into());
    }

    /// The configured instrumentation key, if any.
    #[must_use]
    pub fn instrumentation_key(&self) -> Option<String> {
        self.inner.read().instrumentation_key.clone()
    }

    /// Record the identity of the SDK submitting through this sink.
    pub fn set_sdk_version(&self, version: impl Into<String>) {
        self.inner.write().sdk_version = Some(version.into());
    }

    /// The stamped SDK identity string, if any.
    #[must_use]
    pub fn sdk_version(&self) -> Option<String> {
        self.inner.read().sdk_version.clone()
    }
}

/// Submission backend for telemetry records.
///
/// Shared via `Arc<dyn TelemetrySink>` and injected into the adapter at
/// activation; the adapter holds exactly one sink for its lifetime.
pub trait TelemetrySink: Send + Sync {
    /// The sink's attribution context.
    fn context(&self) -> &SinkContext;

    /// Submit one record. The caller does not await any transport
    /// response; errors reported here are synchronous hand-off failures.
    fn submit(&self, record: TelemetryRecord) -> Result<(), SinkError>;
}

/// Sink that retains every submitted record in memory.
///
/// The test double, and a usable development default. Records are held
/// until [`InMemorySink::drain`] is called.
///
/// # Examples
///
/// ```
/// use pharos_telemetry::{InMemorySink, TelemetryRecord, TelemetrySink};
///
/// let sink = InMemorySink::new();
/// sink.submit(TelemetryRecord::trace("hi", chrono::Utc::now())).unwrap();
/// assert_eq!(sink.len(), 1);
/// let records = sink.drain();
/// assert_eq!(records[0].message(), Some("hi"));
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    context: SinkContext,
    records: Mutex<Vec<TelemetryRecord>>,
}

impl InMemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether no records are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Take all held records, leaving the sink empty.
    #[must_use]
    pub fn drain(&self) -> Vec<TelemetryRecord> {
        mem::take(&mut *self.records.lock())
    }
}

impl TelemetrySink for InMemorySink {
    fn context(&self) -> &SinkContext {
        &self.context
    }

    fn submit(&self, record: TelemetryRecord) -> Result<(), SinkError> {
        self.records.lock().push(record);
        Ok(())
    }
}

/// Sink that forwards records to the local `tracing` subscriber.
///
/// Useful in development and in hosts that already ship their tracing
/// output somewhere; no remote transport involved.
#[derive(Debug, Default)]
pub struct TracingSink {
    context: SinkContext,
}

impl TracingSink {
    /// Create a forwarding sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TelemetrySink for TracingSink {
    fn context(&self) -> &SinkContext {
        &self.context
    }

    fn submit(&self, record: TelemetryRecord) -> Result<(), SinkError> {
        match record.payload() {
            TelemetryPayload::Trace { message } => match record.severity() {
                Some(SeverityLevel::Verbose) => {
                    tracing::trace!(target: "pharos::telemetry", "{message}");
                }
                Some(SeverityLevel::Warning) => {
                    tracing::warn!(target: "pharos::telemetry", "{message}");
                }
                Some(SeverityLevel::Error | SeverityLevel::Critical) => {
                    tracing::error!(target: "pharos::telemetry", "{message}");
                }
                Some(SeverityLevel::Information) | None => {
                    tracing::info!(target: "pharos::telemetry", "{message}");
                }
            },
            TelemetryPayload::Exception { error } => {
                tracing::error!(target: "pharos::telemetry", error = %error, "exception");
            }
        }
        Ok(())
    }
}
