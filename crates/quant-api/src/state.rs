//! Shared handler state

use agent_core::Agent;
use quant_research::{ModelInfo, ResearchAgent, ResearchConfig, available_models};
use std::sync::Arc;

/// State shared by every request
///
/// The research agent is built once and reused; it holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    /// Agent answering `/api/v1/research`
    pub research_agent: Arc<dyn Agent>,
    /// Models listed by `/api/v1/models`
    pub models: Vec<ModelInfo>,
    /// Version reported by `/health`
    pub version: String,
    /// Detail sent with 503 responses
    pub unavailable_detail: String,
}

impl AppState {
    /// State around an arbitrary research agent with the default model list
    pub fn new(research_agent: Arc<dyn Agent>) -> Self {
        let config = ResearchConfig::default();
        Self {
            research_agent,
            models: available_models(),
            version: crate::VERSION.to_string(),
            unavailable_detail: config.unavailable_detail(),
        }
    }

    /// State backed by a [`ResearchAgent`] talking to Ollama
    pub fn from_config(config: &ResearchConfig) -> agent_core::Result<Self> {
        let agent = ResearchAgent::from_config(config)?;
        Ok(Self {
            unavailable_detail: config.unavailable_detail(),
            ..Self::new(Arc::new(agent))
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("research_agent", &self.research_agent.name())
            .field("models", &self.models)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}
