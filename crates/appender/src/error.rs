//! Appender error types.

use pharos_telemetry::SinkError;

/// Errors from the append path.
#[derive(Debug, thiserror::Error)]
pub enum AppenderError {
    /// A required input was absent where the contract demands one, e.g.
    /// a layout asked to format an event with no rendered message.
    #[error("missing argument `{name}`")]
    MissingArgument {
        /// Name of the absent input.
        name: &'static str,
    },

    /// A record could not be delivered because building it tripped over
    /// a missing argument. Wraps the original failure as its source so
    /// the host pipeline can tell this apart from unrelated bugs.
    #[error("log delivery failed: {message}")]
    DeliveryFailed {
        /// Message of the original failure.
        message: String,
        /// The original failure.
        #[source]
        source: Box<AppenderError>,
    },

    /// The sink refused the record. Passed through unchanged.
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl AppenderError {
    /// Whether this is the wrapped delivery-failure kind.
    #[must_use]
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, Self::DeliveryFailed { .. })
    }

    /// Apply the path-boundary isolation rule: missing-argument failures
    /// are wrapped into [`AppenderError::DeliveryFailed`] carrying the
    /// original message and cause; every other kind passes through.
    pub(crate) fn isolate(self) -> Self {
        match self {
            err @ Self::MissingArgument { .. } => Self::DeliveryFailed {
                message: err.to_string(),
                source: Box::new(err),
            },
            other => other,
        }
    }
}
