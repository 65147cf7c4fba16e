//! Request and response bodies

use quant_research::ModelInfo;
use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Body of `GET /api/v1/models`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelInfo>,
}

/// Body of `POST /api/v1/research`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchRequest {
    /// Symbol, topic or question
    pub query: String,
}

/// Answer of `POST /api/v1/research`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResponse {
    pub insight: String,
}

/// Error body shared by all failing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
