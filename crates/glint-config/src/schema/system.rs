//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive scoped to the glint crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "glint=trace",
            LogLevel::Debug => "glint=debug",
            LogLevel::Info => "glint=info",
            LogLevel::Warning => "glint=warn",
            LogLevel::Error => "glint=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_default_is_info() {
        assert_eq!(LoggingConfig::default().level, LogLevel::Info);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: LoggingConfig = toml::from_str("level = \"WARNING\"").unwrap();
        assert_eq!(config.level, LogLevel::Warning);
        assert_eq!(config.level.directive(), "glint=warn");
    }

    #[test]
    fn log_level_rejects_lowercase() {
        let result: Result<LoggingConfig, _> = toml::from_str("level = \"debug\"");
        assert!(result.is_err());
    }
}
