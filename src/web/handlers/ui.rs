use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::context;
use std::sync::Arc;
use tracing::{error, info};

use crate::catalog::SearchFilters;
use crate::view::{AskView, EMPTY_STATE_MESSAGE, SearchView, ViewState};
use crate::web::params::{AskForm, SearchParams};
use crate::web::state::AppState;

fn render_page(state: &AppState, template: &str, ctx: minijinja::Value, status: StatusCode) -> Response {
    match state.render(template, ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}

fn results_page(
    state: &AppState,
    mode: &str,
    search_query: &str,
    filters: &SearchFilters,
    ask_query: &str,
    view: Option<&ViewState>,
) -> Response {
    let ctx = context! {
        mode => mode,
        search_query => search_query,
        filters => filters,
        ask_query => ask_query,
        view => view,
        empty_state => view.is_some_and(ViewState::show_empty_state),
        empty_message => EMPTY_STATE_MESSAGE,
    };
    render_page(state, "index.html", ctx, StatusCode::OK)
}

// Main UI entry point
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Response {
    let ctx = context! {
        search_query => "",
        filters => SearchFilters::default(),
        ask_query => "",
    };
    render_page(&state, "index.html", ctx, StatusCode::OK)
}

pub async fn search_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let mut view = SearchView::with_query(params.query(), params.filters());
    info!("Keyword search: {:?}", view.state().query);

    match view.submit(state.backend.as_ref()).await {
        Ok(()) => results_page(
            &state,
            "search",
            &view.state().query,
            view.filters(),
            "",
            Some(view.state()),
        ),
        Err(e) => {
            error!("Keyword search failed: {}", e);
            render_page(
                &state,
                "error.html",
                context! { message => e.to_string() },
                StatusCode::BAD_GATEWAY,
            )
        }
    }
}

pub async fn ask_page(State(state): State<Arc<AppState>>, Form(form): Form<AskForm>) -> Response {
    let mut view = AskView::with_query(form.query);

    // A blank question leaves the page as it was
    let submitted = view.submit(state.backend.as_ref()).await;
    if submitted {
        info!("Asked agent: {:?}", view.state().query);
    }

    let filters = SearchFilters::default();
    let shown = submitted.then(|| view.state());
    results_page(&state, "ask", "", &filters, &view.state().query, shown)
}
