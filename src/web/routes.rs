use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::handlers;
use super::static_files::static_handler;
use super::state::AppState;

// UI Routes - server-rendered search page
pub fn ui_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::ui::index_handler))
        .route("/search", get(handlers::ui::search_page))
        .route("/ask", post(handlers::ui::ask_page))
        .route("/static/{*path}", get(static_handler))
}

// API Routes - the same views as JSON
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::api::health))
        .nest(
            "/api",
            Router::new()
                .route("/search", get(handlers::api::search))
                .route("/ask", post(handlers::api::ask)),
        )
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(ui_routes())
        .merge(api_routes())
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
