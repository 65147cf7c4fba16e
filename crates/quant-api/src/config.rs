//! Server configuration

use serde::{Deserialize, Serialize};

/// Where the HTTP server listens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Load from `QUANTGPT_HOST` and `QUANTGPT_PORT`
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("QUANTGPT_HOST")
                .map(|host| host.trim().to_string())
                .filter(|host| !host.is_empty())
                .unwrap_or(defaults.host),
            port: lookup("QUANTGPT_PORT")
                .and_then(|port| port.trim().parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    /// `host:port` socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
