//! Server-rendered search page. Each request builds its own view, runs the
//! single backend call it implies, and renders the result.

pub mod errors;
pub mod handlers;
pub mod params;
pub mod routes;
pub mod state;
pub mod static_files;
pub mod templates;

use crate::config::WebConfig;
use state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn run_server(config: WebConfig, state: Arc<AppState>) -> std::io::Result<()> {
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
