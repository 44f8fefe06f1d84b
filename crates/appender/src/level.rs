//! Ordered log levels on the classic numeric scale.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named position on the ordered log-level scale.
///
/// Levels compare by numeric value only; the name is display metadata.
/// The named constants follow the conventional 10 000-per-step scale, so
/// hosts can slot custom levels between them with [`LogLevel::custom`].
///
/// # Examples
///
/// ```
/// use pharos_appender::LogLevel;
///
/// assert!(LogLevel::DEBUG < LogLevel::WARN);
/// let audit = LogLevel::custom("AUDIT", 45_000);
/// assert!(LogLevel::INFO < audit && audit < LogLevel::WARN);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogLevel {
    value: u32,
    name: &'static str,
}

impl LogLevel {
    /// Finest-grained diagnostic level.
    pub const VERBOSE: Self = Self::custom("VERBOSE", 10_000);
    /// Tracing-level diagnostics.
    pub const TRACE: Self = Self::custom("TRACE", 20_000);
    /// Debug diagnostics.
    pub const DEBUG: Self = Self::custom("DEBUG", 30_000);
    /// Routine informational events.
    pub const INFO: Self = Self::custom("INFO", 40_000);
    /// Noteworthy but routine events.
    pub const NOTICE: Self = Self::custom("NOTICE", 50_000);
    /// Unexpected but recoverable conditions.
    pub const WARN: Self = Self::custom("WARN", 60_000);
    /// Failed operations.
    pub const ERROR: Self = Self::custom("ERROR", 70_000);
    /// Failures requiring prompt attention.
    pub const SEVERE: Self = Self::custom("SEVERE", 80_000);
    /// Failures threatening the process.
    pub const CRITICAL: Self = Self::custom("CRITICAL", 90_000);
    /// Failures requiring immediate intervention.
    pub const ALERT: Self = Self::custom("ALERT", 100_000);
    /// Unrecoverable failures.
    pub const FATAL: Self = Self::custom("FATAL", 110_000);

    /// A level at an arbitrary point on the scale.
    #[must_use]
    pub const fn custom(name: &'static str, value: u32) -> Self {
        Self { value, name }
    }

    /// Numeric position on the scale.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for LogLevel {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for LogLevel {}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Hash for LogLevel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_constants_are_ascending() {
        let scale = [
            LogLevel::VERBOSE,
            LogLevel::TRACE,
            LogLevel::DEBUG,
            LogLevel::INFO,
            LogLevel::NOTICE,
            LogLevel::WARN,
            LogLevel::ERROR,
            LogLevel::SEVERE,
            LogLevel::CRITICAL,
            LogLevel::ALERT,
            LogLevel::FATAL,
        ];
        assert!(scale.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn equality_ignores_name() {
        let alias = LogLevel::custom("INFORMATIONAL", 40_000);
        assert_eq!(alias, LogLevel::INFO);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(LogLevel::WARN.to_string(), "WARN");
        assert_eq!(LogLevel::custom("AUDIT", 45_000).to_string(), "AUDIT");
    }
}
