#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Pharos Telemetry
//!
//! Record shapes and the sink contract for the Pharos adapter.
//!
//! This crate provides:
//! - [`TelemetryRecord`] -- the trace-or-exception record handed to a sink
//! - [`SeverityLevel`] -- five-value ordered severity scale
//! - [`TelemetrySink`] trait -- pluggable submission backend
//! - [`SinkContext`] -- per-sink attribution (instrumentation key, SDK version)
//! - [`InMemorySink`] / [`TracingSink`] -- reference implementations for
//!   testing and development
//!
//! Transport, batching, and retry belong to concrete sink implementations,
//! not to this crate.

pub mod record;
pub mod sink;

pub use record::{ErrorObject, SeverityLevel, TelemetryPayload, TelemetryRecord};
pub use sink::{InMemorySink, SinkContext, SinkError, TelemetrySink, TracingSink};
