//! HTTP API for QuantGPT
//!
//! Exposes the research agent over a small axum router:
//!
//! - `GET /health`: liveness and version
//! - `GET /api/v1/models`: models the service can use
//! - `POST /api/v1/research`: run the research pipeline for a query
//!
//! The router is built from an [`AppState`] so tests and embedders can
//! inject any [`agent_core::Agent`] in place of the real research agent.

pub mod config;
pub mod error;
pub mod routes;
pub mod schemas;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::create_app;
pub use server::serve;
pub use state::AppState;

/// API version reported by `/health`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
