use axum::{
    Json,
    extract::{Query, State},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, warn};

use crate::catalog::QueryRequest;
use crate::view::{AskView, SearchView, ViewState};
use crate::web::errors::WebError;
use crate::web::params::SearchParams;
use crate::web::state::AppState;

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    pub ok: bool,
    pub version: String,
    pub uptime_seconds: i64,
    pub backend_url: String,
    pub backend: String,
}

// Keyword search, returning the resulting view state
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<ViewState>, WebError> {
    let mut view = SearchView::with_query(params.query(), params.filters());

    view.submit(state.backend.as_ref()).await.map_err(|e| {
        error!("Keyword search failed: {}", e);
        WebError::from(e)
    })?;

    Ok(Json(view.into_state()))
}

// Natural-language query; failures are part of the returned state
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<QueryRequest>,
) -> Json<ViewState> {
    let mut view = AskView::with_query(payload.query);
    view.submit(state.backend.as_ref()).await;
    Json(view.into_state())
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<SystemStatus> {
    let backend = match state.backend.health().await {
        Ok(health) if health.ok => "ok".to_string(),
        Ok(_) => "degraded".to_string(),
        Err(e) => {
            warn!("Backend health check failed: {}", e);
            format!("unreachable: {}", e)
        }
    };

    Json(SystemStatus {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        backend_url: state.config.backend.base_url.clone(),
        backend,
    })
}
