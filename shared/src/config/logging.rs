//! Logging configuration

use serde::{Deserialize, Serialize};

/// Logging configuration for binaries embedding the drivers
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level or filter directive (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty, compact)
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Create from `SMS_LOG_LEVEL` and `SMS_LOG_FORMAT`
    pub fn from_env() -> Self {
        let level = std::env::var("SMS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = std::env::var("SMS_LOG_FORMAT")
            .ok()
            .and_then(|value| LogFormat::parse(&value))
            .unwrap_or_else(default_log_format);

        Self { level, format }
    }
}

/// Log format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

fn default_log_format() -> LogFormat {
    LogFormat::Compact
}
