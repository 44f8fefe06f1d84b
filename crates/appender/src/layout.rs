//! Message formatting for the trace path.
//!
//! A [`Layout`] is the pluggable formatting capability the appender
//! requires at construction. The trace path renders the whole event
//! through it whenever the event carries a message.

use crate::error::AppenderError;
use crate::event::LogEvent;

/// Renders a log event into the message text of a trace record.
pub trait Layout: Send + Sync {
    /// Format one event.
    fn format(&self, event: &LogEvent) -> Result<String, AppenderError>;
}

/// Layout that emits the event's rendered message verbatim.
///
/// Formatting an event that has no rendered message is a contract
/// violation and reports [`AppenderError::MissingArgument`]. The
/// appender's trace path never calls a layout for such events, so this
/// only fires for hosts driving a layout directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageLayout;

impl Layout for MessageLayout {
    fn format(&self, event: &LogEvent) -> Result<String, AppenderError> {
        event
            .rendered_message()
            .map(str::to_owned)
            .ok_or(AppenderError::MissingArgument {
                name: "rendered_message",
            })
    }
}

/// Layout driven by a small token pattern.
///
/// Recognized tokens: `%message`, `%level`, `%logger`, `%thread`,
/// `%date` (RFC 3339), and `%%` for a literal percent sign. Absent
/// optional fields render as empty; unrecognized tokens are kept
/// literally.
///
/// # Examples
///
/// ```
/// use pharos_appender::{Layout, LogEvent, LogLevel, PatternLayout};
///
/// let layout = PatternLayout::new("[%level] %logger - %message");
/// let event = LogEvent::builder(chrono::Utc::now())
///     .level(LogLevel::WARN)
///     .logger_name("app.db")
///     .message("slow query")
///     .build();
/// assert_eq!(layout.format(&event).unwrap(), "[WARN] app.db - slow query");
/// ```
#[derive(Debug, Clone)]
pub struct PatternLayout {
    pattern: String,
}

impl PatternLayout {
    /// Create a layout from a token pattern.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Layout for PatternLayout {
    fn format(&self, event: &LogEvent) -> Result<String, AppenderError> {
        let mut out = String::with_capacity(self.pattern.len() + 16);
        let mut rest = self.pattern.as_str();

        while let Some(pos) = rest.find('%') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos + 1..];

            if let Some(tail) = rest.strip_prefix('%') {
                out.push('%');
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("message") {
                out.push_str(event.rendered_message().unwrap_or_default());
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("level") {
                if let Some(level) = event.level() {
                    out.push_str(level.name());
                }
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("logger") {
                out.push_str(event.logger_name().unwrap_or_default());
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("thread") {
                out.push_str(event.thread_name().unwrap_or_default());
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("date") {
                out.push_str(&event.timestamp().to_rfc3339());
                rest = tail;
            } else {
                // Unknown token: keep the percent sign literally.
                out.push('%');
            }
        }
        out.push_str(rest);
        Ok(out)
    }
}
