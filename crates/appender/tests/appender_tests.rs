//! End-to-end tests: appender against an in-memory sink.

use std::sync::Arc;

use chrono::Utc;
use pretty_assertions::assert_eq;
use serde_json::Value;

use pharos_appender::{
    AppenderConfig, AppenderError, EMPTY_MESSAGE_FALLBACK, Layout, LogEvent, LogLevel,
    MessageLayout, PatternLayout, TelemetryAppender,
};
use pharos_telemetry::{
    InMemorySink, SeverityLevel, SinkContext, SinkError, TelemetryRecord, TelemetrySink,
};

#[derive(Debug, thiserror::Error)]
#[error("database unreachable")]
struct DbDown;

fn activate(sink: Arc<InMemorySink>) -> TelemetryAppender {
    TelemetryAppender::activate(&AppenderConfig::new(), MessageLayout, sink)
}

#[test]
fn event_with_error_becomes_exception_record() {
    let sink = Arc::new(InMemorySink::new());
    let appender = activate(sink.clone());

    // Message content does not matter once an error is attached.
    let event = LogEvent::builder(Utc::now())
        .level(LogLevel::ERROR)
        .message("ignored for classification")
        .error(DbDown)
        .build();
    appender.append(&event).unwrap();

    let records = sink.drain();
    assert_eq!(records.len(), 1);
    assert!(records[0].is_exception());
    assert_eq!(
        records[0].error().unwrap().to_string(),
        "database unreachable"
    );
    assert_eq!(records[0].severity(), Some(SeverityLevel::Error));
}

#[test]
fn event_without_error_becomes_trace_record() {
    let sink = Arc::new(InMemorySink::new());
    let appender = activate(sink.clone());

    let event = LogEvent::builder(Utc::now())
        .level(LogLevel::INFO)
        .message("cache warmed")
        .build();
    appender.append(&event).unwrap();

    let records = sink.drain();
    assert!(records[0].is_trace());
    assert_eq!(records[0].message(), Some("cache warmed"));
    assert_eq!(records[0].severity(), Some(SeverityLevel::Information));
}

#[test]
fn trace_text_is_the_layout_rendering() {
    let sink = Arc::new(InMemorySink::new());
    let appender = TelemetryAppender::activate(
        &AppenderConfig::new(),
        PatternLayout::new("%logger: %message"),
        sink.clone(),
    );

    let event = LogEvent::builder(Utc::now())
        .logger_name("app.cache")
        .message("miss")
        .build();
    appender.append(&event).unwrap();

    assert_eq!(sink.drain()[0].message(), Some("app.cache: miss"));
}

#[test]
fn missing_message_uses_fallback_literal() {
    let sink = Arc::new(InMemorySink::new());
    let appender = activate(sink.clone());

    let event = LogEvent::builder(Utc::now()).level(LogLevel::DEBUG).build();
    appender.append(&event).unwrap();

    let records = sink.drain();
    assert!(records[0].is_trace());
    assert_eq!(records[0].message(), Some(EMPTY_MESSAGE_FALLBACK));
    assert_eq!(records[0].severity(), Some(SeverityLevel::Verbose));
}

#[test]
fn unleveled_event_has_unspecified_severity() {
    let sink = Arc::new(InMemorySink::new());
    let appender = activate(sink.clone());

    appender
        .append(&LogEvent::builder(Utc::now()).message("no level").build())
        .unwrap();
    assert_eq!(sink.drain()[0].severity(), None);
}

#[test]
fn severity_thresholds_apply_end_to_end() {
    let sink = Arc::new(InMemorySink::new());
    let appender = activate(sink.clone());

    // Strictly between INFO and WARN.
    let between = LogLevel::custom("AUDIT", 45_000);
    appender
        .append(&LogEvent::builder(Utc::now()).level(between).message("a").build())
        .unwrap();
    // Exactly at SEVERE.
    appender
        .append(
            &LogEvent::builder(Utc::now())
                .level(LogLevel::SEVERE)
                .message("b")
                .build(),
        )
        .unwrap();

    let records = sink.drain();
    assert_eq!(records[0].severity(), Some(SeverityLevel::Information));
    assert_eq!(records[1].severity(), Some(SeverityLevel::Critical));
}

#[test]
fn reserved_and_null_properties_never_reach_the_sink() {
    let sink = Arc::new(InMemorySink::new());
    let appender = activate(sink.clone());

    let event = LogEvent::builder(Utc::now())
        .message("checkout")
        .property("log4net.test", "x")
        .property("Log4Net.Something", "y")
        .property("LOG4NET:HostName", "z")
        .property("UserId", "42")
        .property("Flag", Value::Null)
        .build();
    appender.append(&event).unwrap();

    let records = sink.drain();
    let properties = records[0].properties();
    assert_eq!(properties.len(), 1);
    assert_eq!(properties["UserId"], "42");
}

#[test]
fn common_fields_flow_into_the_record() {
    let sink = Arc::new(InMemorySink::new());
    let appender = activate(sink.clone());
    let now = Utc::now();

    let event = LogEvent::builder(now)
        .message("login")
        .logger_name("app.auth")
        .thread_name("http-1")
        .user_name("alice")
        .domain("web")
        .identity("alice@corp")
        .build();
    appender.append(&event).unwrap();

    let records = sink.drain();
    assert_eq!(records[0].timestamp(), now);
    assert_eq!(records[0].user_id(), Some("alice"));
    let properties = records[0].properties();
    assert_eq!(properties["LoggerName"], "app.auth");
    assert_eq!(properties["ThreadName"], "http-1");
    assert_eq!(properties["Domain"], "web");
    assert_eq!(properties["Identity"], "alice@corp");
}

#[test]
fn exception_records_carry_the_same_metadata() {
    let sink = Arc::new(InMemorySink::new());
    let appender = activate(sink.clone());

    let event = LogEvent::builder(Utc::now())
        .level(LogLevel::FATAL)
        .logger_name("app.db")
        .user_name("bob")
        .property("RequestId", "r-9")
        .error(DbDown)
        .build();
    appender.append(&event).unwrap();

    let records = sink.drain();
    assert!(records[0].is_exception());
    assert_eq!(records[0].severity(), Some(SeverityLevel::Critical));
    assert_eq!(records[0].user_id(), Some("bob"));
    assert_eq!(records[0].properties()["LoggerName"], "app.db");
    assert_eq!(records[0].properties()["RequestId"], "r-9");
}

#[test]
fn context_property_wins_key_collisions() {
    let sink = Arc::new(InMemorySink::new());
    let appender = activate(sink.clone());

    let event = LogEvent::builder(Utc::now())
        .message("x")
        .logger_name("real-logger")
        .property("LoggerName", "spoofed")
        .build();
    appender.append(&event).unwrap();

    assert_eq!(sink.drain()[0].properties()["LoggerName"], "spoofed");
}

#[test]
fn appending_twice_yields_identical_properties() {
    let sink = Arc::new(InMemorySink::new());
    let appender = activate(sink.clone());

    let event = LogEvent::builder(Utc::now())
        .message("same")
        .logger_name("app")
        .property("Attempt", 3)
        .build();
    appender.append(&event).unwrap();
    appender.append(&event).unwrap();

    let records = sink.drain();
    assert_eq!(records[0].properties(), records[1].properties());
}

/// Layout standing in for a formatting capability that trips over an
/// absent input while rendering.
struct BrokenLayout;

impl Layout for BrokenLayout {
    fn format(&self, _event: &LogEvent) -> Result<String, AppenderError> {
        Err(AppenderError::MissingArgument { name: "pattern" })
    }
}

#[test]
fn missing_argument_is_wrapped_at_the_boundary() {
    let sink = Arc::new(InMemorySink::new());
    let appender = TelemetryAppender::activate(&AppenderConfig::new(), BrokenLayout, sink.clone());

    let event = LogEvent::builder(Utc::now()).message("x").build();
    let err = appender.append(&event).unwrap_err();

    assert!(err.is_delivery_failure());
    assert_eq!(
        err.to_string(),
        "log delivery failed: missing argument `pattern`"
    );
    assert!(sink.is_empty(), "no record may reach the sink on failure");
}

/// Sink whose synchronous hand-off always fails.
struct RejectingSink {
    context: SinkContext,
}

impl TelemetrySink for RejectingSink {
    fn context(&self) -> &SinkContext {
        &self.context
    }

    fn submit(&self, _record: TelemetryRecord) -> Result<(), SinkError> {
        Err(SinkError::Rejected {
            reason: "quota exhausted".into(),
        })
    }
}

#[test]
fn sink_errors_propagate_unchanged() {
    let sink = Arc::new(RejectingSink {
        context: SinkContext::new(),
    });
    let appender = TelemetryAppender::activate(&AppenderConfig::new(), MessageLayout, sink);

    let event = LogEvent::builder(Utc::now()).message("x").build();
    let err = appender.append(&event).unwrap_err();

    assert!(!err.is_delivery_failure());
    assert!(matches!(
        err,
        AppenderError::Sink(SinkError::Rejected { .. })
    ));
    assert_eq!(
        err.to_string(),
        "telemetry submission rejected: quota exhausted"
    );
}

#[test]
fn one_record_per_event() {
    let sink = Arc::new(InMemorySink::new());
    let appender = activate(sink.clone());

    for i in 0..10 {
        let builder = LogEvent::builder(Utc::now()).message(format!("m{i}"));
        let event = if i % 2 == 0 {
            builder.error(DbDown).build()
        } else {
            builder.build()
        };
        appender.append(&event).unwrap();
    }

    let records = sink.drain();
    assert_eq!(records.len(), 10);
    assert_eq!(records.iter().filter(|r| r.is_exception()).count(), 5);
    assert_eq!(records.iter().filter(|r| r.is_trace()).count(), 5);
}
