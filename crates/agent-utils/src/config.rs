//! Configuration management utilities

use serde::{Deserialize, Serialize};

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name, case-insensitively. Unknown names give `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application name
    pub app_name: String,
    /// Environment (dev, prod, etc.)
    pub environment: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from `APP_ENV` and `LOG_FORMAT`
    ///
    /// Missing or unrecognised values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(environment) = std::env::var("APP_ENV")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
        {
            config.environment = environment;
        }

        if let Some(format) = std::env::var("LOG_FORMAT")
            .ok()
            .as_deref()
            .and_then(LogFormat::parse)
        {
            config.log_format = format;
        }

        config
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "prod" | "production")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: "quantgpt".to_string(),
            environment: "development".to_string(),
            log_format: LogFormat::Text,
        }
    }
}
