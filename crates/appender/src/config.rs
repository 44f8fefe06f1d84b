//! Appender configuration.

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`AppenderConfig::from_env`].
pub const INSTRUMENTATION_KEY_ENV: &str = "PHAROS_INSTRUMENTATION_KEY";

/// Configuration supplied before activation.
///
/// One knob: the instrumentation key every submitted record should be
/// attributed to. Absent or empty means the sink keeps whatever default
/// attribution it was built with; that is not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppenderConfig {
    /// Raw instrumentation key as configured; prefer the normalized
    /// [`AppenderConfig::instrumentation_key`] accessor.
    pub instrumentation_key: Option<String>,
}

impl AppenderConfig {
    /// An empty configuration (sink defaults apply).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the instrumentation key.
    #[must_use]
    pub fn with_instrumentation_key(mut self, key: impl Into<String>) -> Self {
        self.instrumentation_key = Some(key.into());
        self
    }

    /// Read the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            instrumentation_key: std::env::var(INSTRUMENTATION_KEY_ENV).ok(),
        }
    }

    /// The configured key, normalized: surrounding whitespace trimmed,
    /// empty values treated as unset.
    #[must_use]
    pub fn instrumentation_key(&self) -> Option<&str> {
        self.instrumentation_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_has_no_key() {
        assert_eq!(AppenderConfig::new().instrumentation_key(), None);
    }

    #[test]
    fn empty_and_blank_keys_normalize_to_none() {
        let empty = AppenderConfig::new().with_instrumentation_key("");
        assert_eq!(empty.instrumentation_key(), None);

        let blank = AppenderConfig::new().with_instrumentation_key("   ");
        assert_eq!(blank.instrumentation_key(), None);
    }

    #[test]
    fn key_is_trimmed() {
        let config = AppenderConfig::new().with_instrumentation_key("  ikey-1  ");
        assert_eq!(config.instrumentation_key(), Some("ikey-1"));
    }

    #[test]
    fn deserializes_from_json() {
        let config: AppenderConfig =
            serde_json::from_str(r#"{"instrumentation_key": "abc-123"}"#).unwrap();
        assert_eq!(config.instrumentation_key(), Some("abc-123"));

        let config: AppenderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.instrumentation_key(), None);
    }
}
