//! Telemetry configuration

use std::fmt;

use serde::{Deserialize, Serialize};

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// Output format
    #[serde(default)]
    pub log_format: LogFormat,
}

impl TelemetryAppConfig {
    /// Validate the configuration
    pub const fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_serde() {
        let json: TelemetryAppConfig = serde_json::from_str(r#"{"log_format": "json"}"#).unwrap();
        assert_eq!(json.log_format, LogFormat::Json);
        assert_eq!(LogFormat::default().to_string(), "pretty");
    }
}
