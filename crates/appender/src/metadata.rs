//! Common-field and property extraction.
//!
//! Turns a [`LogEvent`]'s open-ended context into the flat string
//! properties a telemetry record carries. Extraction is deterministic
//! and stateless; the filter rules are named predicates so they can be
//! tested without a sink.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::event::LogEvent;

/// Property keys starting with this prefix (case-insensitively) belong
/// to the logging framework itself and are never exported.
pub const RESERVED_PREFIX: &str = "log4net";

/// Common record fields extracted from one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// Event timestamp, passed through unconverted.
    pub timestamp: DateTime<Utc>,
    /// User identity from the event's user-name field.
    pub user_id: Option<String>,
    /// Flattened string properties.
    pub properties: BTreeMap<String, String>,
}

/// Whether a context-property key is reserved for framework internals.
#[must_use]
pub fn is_reserved_key(key: &str) -> bool {
    key.get(..RESERVED_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(RESERVED_PREFIX))
}

/// Whether a context-property key may appear in output properties.
#[must_use]
pub fn is_exportable_key(key: &str) -> bool {
    !key.is_empty() && !is_reserved_key(key)
}

/// Natural text representation of a property value.
///
/// `Null` has none (the key is omitted); strings render unquoted; other
/// JSON values render in their JSON text form.
#[must_use]
pub fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Extract the common fields and properties for one event.
///
/// Properties are inserted in a fixed order -- logger/thread, source
/// location, domain/identity, then context properties -- so on a key
/// collision the context property wins (last write into the map).
/// Missing values are simply never inserted.
#[must_use]
pub fn extract(event: &LogEvent) -> Metadata {
    let mut properties = BTreeMap::new();

    insert_opt(&mut properties, "LoggerName", event.logger_name());
    insert_opt(&mut properties, "ThreadName", event.thread_name());

    if let Some(location) = event.location() {
        insert_opt(&mut properties, "ClassName", location.class_name.as_deref());
        insert_opt(&mut properties, "FileName", location.file_name.as_deref());
        insert_opt(
            &mut properties,
            "MethodName",
            location.method_name.as_deref(),
        );
        if let Some(line) = location.line {
            properties.insert("LineNumber".to_owned(), line.to_string());
        }
    }

    insert_opt(&mut properties, "Domain", event.domain());
    insert_opt(&mut properties, "Identity", event.identity());

    for (key, value) in event.properties() {
        if !is_exportable_key(key) {
            continue;
        }
        if let Some(text) = render_value(value) {
            properties.insert(key.clone(), text);
        }
    }

    Metadata {
        timestamp: event.timestamp(),
        user_id: event.user_name().map(str::to_owned),
        properties,
    }
}

fn insert_opt(properties: &mut BTreeMap<String, String>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        properties.insert(key.to_owned(), value.to_owned());
    }
}
