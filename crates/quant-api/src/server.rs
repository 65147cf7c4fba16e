//! Server startup

use tokio::net::TcpListener;
use tracing::info;

use crate::{AppState, ServerConfig, create_app};

/// Bind to `config` and serve the API until the process is stopped
pub async fn serve(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.addr()).await?;
    info!(addr = %listener.local_addr()?, "QuantGPT API listening");

    axum::serve(listener, create_app(state)).await
}
