//! Level-to-severity mapping.

use pharos_telemetry::SeverityLevel;

use crate::level::LogLevel;

/// Map an optional log level onto the five-value severity scale.
///
/// A missing level stays unspecified. Otherwise the level is compared
/// against four ascending thresholds with strict `<`, so a level sitting
/// exactly on a threshold lands in that threshold's own bucket:
///
/// - below [`LogLevel::INFO`] ⇒ [`SeverityLevel::Verbose`]
/// - below [`LogLevel::WARN`] ⇒ [`SeverityLevel::Information`]
/// - below [`LogLevel::ERROR`] ⇒ [`SeverityLevel::Warning`]
/// - below [`LogLevel::SEVERE`] ⇒ [`SeverityLevel::Error`]
/// - at or above [`LogLevel::SEVERE`] ⇒ [`SeverityLevel::Critical`]
#[must_use]
pub fn severity_for(level: Option<LogLevel>) -> Option<SeverityLevel> {
    let level = level?;
    let severity = if level < LogLevel::INFO {
        SeverityLevel::Verbose
    } else if level < LogLevel::WARN {
        SeverityLevel::Information
    } else if level < LogLevel::ERROR {
        SeverityLevel::Warning
    } else if level < LogLevel::SEVERE {
        SeverityLevel::Error
    } else {
        SeverityLevel::Critical
    };
    Some(severity)
}
