//! Packager configuration

use crate::{DataPackError, DataPackResult, LogLevel, UNCLASSIFIED_ERROR_NO};
use serde::{Deserialize, Serialize};

/// Configuration for a packager instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagerConfig {
    /// Error number used when a pack call does not supply one
    #[serde(default = "default_error_no")]
    pub default_error_no: i32,

    /// Message packed when a pack call receives no payload
    #[serde(default = "default_no_data_message")]
    pub no_data_message: String,

    /// Whether to pretty-print envelope text
    #[serde(default)]
    pub pretty: bool,

    /// Log level for the packager's tracing output
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_error_no() -> i32 {
    UNCLASSIFIED_ERROR_NO
}

fn default_no_data_message() -> String {
    "no data found".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self {
            default_error_no: default_error_no(),
            no_data_message: default_no_data_message(),
            pretty: false,
            log_level: default_log_level(),
        }
    }
}

impl PackagerConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes; empty input yields the default
    pub fn from_json(bytes: &[u8]) -> DataPackResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_slice(bytes)
            .map_err(|e| DataPackError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field holds a usable value
    pub fn validate(&self) -> DataPackResult<()> {
        if self.no_data_message.trim().is_empty() {
            return Err(DataPackError::Config(
                "no_data_message must not be empty".to_string(),
            ));
        }
        if LogLevel::parse(&self.log_level).is_none() {
            return Err(DataPackError::Config(format!(
                "unknown log level: {}",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Parsed log level, falling back to `Info` for unknown names
    pub fn log_level(&self) -> LogLevel {
        LogLevel::parse(&self.log_level).unwrap_or(LogLevel::Info)
    }

    /// Set the default error number
    pub fn with_default_error_no(mut self, error_no: i32) -> Self {
        self.default_error_no = error_no;
        self
    }

    /// Set the no-data message
    pub fn with_no_data_message(mut self, message: impl Into<String>) -> Self {
        self.no_data_message = message.into();
        self
    }

    /// Enable or disable pretty-printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
