//! Telemetry record shapes.
//!
//! A [`TelemetryRecord`] is the unit handed to a [`TelemetrySink`]. It is
//! built by the adapter, submitted once, and then discarded -- records are
//! projections of log events, **not** the source of truth.
//!
//! [`TelemetrySink`]: crate::sink::TelemetrySink

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shared handle to the error object attached to an exception record.
pub type ErrorObject = Arc<dyn Error + Send + Sync + 'static>;

/// Severity of a telemetry record, ordered from least to most severe.
///
/// "Unspecified" is modeled as `Option<SeverityLevel>::None` on the
/// record, not as a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityLevel {
    /// Diagnostic chatter below informational level.
    Verbose,
    /// Routine informational record.
    Information,
    /// Something unexpected but recoverable.
    Warning,
    /// An operation failed.
    Error,
    /// A failure severe enough to threaten the process.
    Critical,
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Verbose => "Verbose",
            Self::Information => "Information",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
        };
        f.write_str(name)
    }
}

/// The variant-specific part of a record.
#[derive(Debug, Clone)]
pub enum TelemetryPayload {
    /// A plain trace message.
    Trace {
        /// Rendered message text.
        message: String,
    },
    /// An exception wrapping the original error object from the log event.
    Exception {
        /// Shared handle to the original error.
        error: ErrorObject,
    },
}

/// One telemetry record: a trace or exception payload plus common fields.
///
/// # Examples
///
/// ```
/// use pharos_telemetry::{SeverityLevel, TelemetryRecord};
///
/// let record = TelemetryRecord::trace("user logged in", chrono::Utc::now())
///     .with_severity(Some(SeverityLevel::Information))
///     .with_user_id(Some("u-42".into()));
///
/// assert!(record.is_trace());
/// assert_eq!(record.message(), Some("user logged in"));
/// ```
#[derive(Debug, Clone)]
pub struct TelemetryRecord {
    payload: TelemetryPayload,
    severity: Option<SeverityLevel>,
    timestamp: DateTime<Utc>,
    user_id: Option<String>,
    properties: BTreeMap<String, String>,
}

impl TelemetryRecord {
    /// Create a trace-variant record.
    #[must_use]
    pub fn trace(message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            payload: TelemetryPayload::Trace {
                message: message.into(),
            },
            severity: None,
            timestamp,
            user_id: None,
            properties: BTreeMap::new(),
        }
    }

    /// Create an exception-variant record wrapping an error object.
    #[must_use]
    pub fn exception(error: ErrorObject, timestamp: DateTime<Utc>) -> Self {
        Self {
            payload: TelemetryPayload::Exception { error },
            severity: None,
            timestamp,
            user_id: None,
            properties: BTreeMap::new(),
        }
    }

    /// Set the severity (`None` leaves it unspecified).
    #[must_use]
    pub fn with_severity(mut self, severity: Option<SeverityLevel>) -> Self {
        self.severity = severity;
        self
    }

    /// Set the user identity.
    #[must_use]
    pub fn with_user_id(mut self, user_id: Option<String>) -> Self {
        self.user_id = user_id;
        self
    }

    /// Replace the properties mapping.
    #[must_use]
    pub fn with_properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.properties = properties;
        self
    }

    /// The variant-specific payload.
    #[must_use]
    pub fn payload(&self) -> &TelemetryPayload {
        &self.payload
    }

    /// Whether this is a trace record.
    #[must_use]
    pub fn is_trace(&self) -> bool {
        matches!(self.payload, TelemetryPayload::Trace { .. })
    }

    /// Whether this is an exception record.
    #[must_use]
    pub fn is_exception(&self) -> bool {
        matches!(self.payload, TelemetryPayload::Exception { .. })
    }

    /// Trace message text, if this is a trace record.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.payload {
            TelemetryPayload::Trace { message } => Some(message),
            TelemetryPayload::Exception { .. } => None,
        }
    }

    /// The wrapped error object, if this is an exception record.
    #[must_use]
    pub fn error(&self) -> Option<&ErrorObject> {
        match &self.payload {
            TelemetryPayload::Trace { .. } => None,
            TelemetryPayload::Exception { error } => Some(error),
        }
    }

    /// Record severity, if one was mapped.
    #[must_use]
    pub fn severity(&self) -> Option<SeverityLevel> {
        self.severity
    }

    /// Timestamp of the originating log event.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// User identity carried over from the log event.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// String properties extracted from the log event.
    #[must_use]
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }
}
