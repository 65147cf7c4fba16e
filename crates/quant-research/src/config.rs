//! Configuration for research operations

use crate::error::{ResearchError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Default Ollama server address
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Default model used for summaries
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

/// Configuration for the research assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// Base URL of the Ollama server
    pub ollama_base_url: String,

    /// Model asked for investment insights
    pub ollama_model: String,

    /// Timeout for a single LLM request
    pub request_timeout: Duration,

    /// Upper bound on generated tokens
    pub max_tokens: usize,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            request_timeout: Duration::from_secs(120),
            max_tokens: 512,
            temperature: 0.7,
        }
    }
}

impl ResearchConfig {
    /// Create a new configuration builder
    pub fn builder() -> ResearchConfigBuilder {
        ResearchConfigBuilder::default()
    }

    /// Load configuration from the environment
    ///
    /// Reads `OLLAMA_BASE_URL`, `OLLAMA_MODEL` and `OLLAMA_TIMEOUT_SECS`;
    /// unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::builder();

        if let Some(url) = lookup("OLLAMA_BASE_URL") {
            builder = builder.ollama_base_url(url);
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            builder = builder.ollama_model(model);
        }
        if let Some(secs) = lookup("OLLAMA_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ResearchError::Config(format!("OLLAMA_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            builder = builder.request_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.ollama_base_url).map_err(|e| {
            ResearchError::Config(format!(
                "invalid Ollama base URL '{}': {e}",
                self.ollama_base_url
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ResearchError::Config(format!(
                "Ollama base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.ollama_model.trim().is_empty() {
            return Err(ResearchError::Config(
                "Ollama model must not be empty".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ResearchError::Config(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        if self.max_tokens == 0 {
            return Err(ResearchError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ResearchError::Config(format!(
                "temperature must be within 0.0..=2.0, got {}",
                self.temperature
            )));
        }

        Ok(())
    }

    /// Remediation hint attached to LLM outages
    pub fn unavailable_hint(&self) -> String {
        format!(
            "Ollama not available at {}. Start with: ollama serve. Then: ollama pull {}",
            self.ollama_base_url, self.ollama_model
        )
    }

    /// Client-facing detail for the service-unavailable response
    pub fn unavailable_detail(&self) -> String {
        format!(
            "Ollama is not available. Start with: ollama serve. Then: ollama pull {}",
            self.ollama_model
        )
    }
}

/// Builder for ResearchConfig
#[derive(Debug, Default)]
pub struct ResearchConfigBuilder {
    ollama_base_url: Option<String>,
    ollama_model: Option<String>,
    request_timeout: Option<Duration>,
    max_tokens: Option<usize>,
    temperature: Option<f32>,
}

impl ResearchConfigBuilder {
    /// Set the Ollama base URL
    pub fn ollama_base_url(mut self, url: impl Into<String>) -> Self {
        self.ollama_base_url = Some(url.into());
        self
    }

    /// Set the model name
    pub fn ollama_model(mut self, model: impl Into<String>) -> Self {
        self.ollama_model = Some(model.into());
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set maximum generated tokens
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set sampling temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ResearchConfig> {
        let defaults = ResearchConfig::default();

        let config = ResearchConfig {
            ollama_base_url: self
                .ollama_base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .unwrap_or(defaults.ollama_base_url),
            ollama_model: self
                .ollama_model
                .map(|model| model.trim().to_string())
                .unwrap_or(defaults.ollama_model),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature.unwrap_or(defaults.temperature),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Metadata for a model the service can use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier as understood by the provider
    pub id: String,
    /// Display name
    pub name: String,
    /// Provider serving the model
    pub provider: String,
}

impl ModelInfo {
    fn ollama(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            provider: "ollama".to_string(),
        }
    }
}

/// Models advertised by the service
pub fn available_models() -> Vec<ModelInfo> {
    vec![
        ModelInfo::ollama("llama3.2", "Llama 3.2"),
        ModelInfo::ollama("mistral", "Mistral"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ResearchConfig::default();
        assert_eq!(config.ollama_base_url, "http://localhost:11434");
        assert_eq!(config.ollama_model, "llama3.2");
        assert_eq!(config.request_timeout, Duration::from_secs(120));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ResearchConfig::builder()
            .ollama_base_url("http://gpu-box:11434/")
            .ollama_model(" mistral ")
            .request_timeout(Duration::from_secs(10))
            .max_tokens(128)
            .temperature(0.1)
            .build()
            .unwrap();

        assert_eq!(config.ollama_base_url, "http://gpu-box:11434");
        assert_eq!(config.ollama_model, "mistral");
        assert_eq!(config.max_tokens, 128);
    }

    #[test]
    fn test_validation() {
        let invalid = [
            ResearchConfig::builder().ollama_base_url("not a url"),
            ResearchConfig::builder().ollama_base_url("ftp://host"),
            ResearchConfig::builder().ollama_model("   "),
            ResearchConfig::builder().request_timeout(Duration::ZERO),
            ResearchConfig::builder().max_tokens(0),
            ResearchConfig::builder().temperature(3.0),
        ];

        for builder in invalid {
            assert!(matches!(builder.build(), Err(ResearchError::Config(_))));
        }
    }

    #[test]
    fn test_from_lookup() {
        let config = ResearchConfig::from_lookup(lookup_from(&[
            ("OLLAMA_BASE_URL", "http://10.0.0.5:11434"),
            ("OLLAMA_MODEL", "mistral"),
            ("OLLAMA_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();

        assert_eq!(config.ollama_base_url, "http://10.0.0.5:11434");
        assert_eq!(config.ollama_model, "mistral");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_lookup_defaults_and_bad_timeout() {
        let config = ResearchConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.ollama_model, DEFAULT_OLLAMA_MODEL);

        let result = ResearchConfig::from_lookup(lookup_from(&[("OLLAMA_TIMEOUT_SECS", "soon")]));
        assert!(matches!(result, Err(ResearchError::Config(_))));
    }

    #[test]
    fn test_hints_mention_model() {
        let config = ResearchConfig::default();
        assert_eq!(
            config.unavailable_hint(),
            "Ollama not available at http://localhost:11434. Start with: ollama serve. Then: ollama pull llama3.2"
        );
        assert_eq!(
            config.unavailable_detail(),
            "Ollama is not available. Start with: ollama serve. Then: ollama pull llama3.2"
        );
    }

    #[test]
    fn test_available_models() {
        let models = available_models();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].id, "llama3.2");
        assert_eq!(models[0].name, "Llama 3.2");
        assert_eq!(models[1].id, "mistral");
        assert!(models.iter().all(|m| m.provider == "ollama"));
    }
}
