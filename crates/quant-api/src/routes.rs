//! Router and request handlers

use agent_core::Context;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::schemas::{HealthResponse, ModelsResponse, ResearchRequest, ResearchResponse};
use crate::state::AppState;

/// Build the application router
///
/// Routes:
/// - `GET /health` - liveness probe
/// - `GET /api/v1/models` - available LLM models
/// - `POST /api/v1/research` - investment insight for a query
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/models", get(list_models))
        .route("/api/v1/research", post(run_research))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: state.version.clone(),
    })
}

async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.models.clone(),
    })
}

async fn run_research(
    State(state): State<AppState>,
    Json(body): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();
    let context = Context::new().with_request_id(request_id.clone());

    info!(%request_id, query = %body.query, "Research requested");

    match state.research_agent.run(&body.query, &context).await {
        Ok(insight) => Ok(Json(ResearchResponse { insight })),
        Err(e) if e.is_unavailable() => {
            warn!(%request_id, error = %e, "LLM backend unavailable");
            Err(ApiError::Unavailable(state.unavailable_detail.clone()))
        }
        Err(e) => {
            error!(%request_id, error = %e, "Research failed");
            Err(ApiError::Internal(e.to_string()))
        }
    }
}
