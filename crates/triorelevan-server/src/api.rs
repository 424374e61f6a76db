use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    response::Html,
    routing::get,
};
use serde::Serialize;
use serde_json::Value;
use triorelevan_config::{BackendMode, Config};
use triorelevan_engine::formatting::{Escape, RenderOptions};
use triorelevan_engine::search::{SearchLimits, SearchParams, SearchRequest};

use crate::{
    backend::SearchBackend,
    error::ApiError,
    page::{PageView, render_page},
};

/// Result count for page searches that do not name `k`.
pub const PAGE_RESULTS_PER_SEARCH: u32 = 10;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub backend: Arc<SearchBackend>,
    pub limits: SearchLimits,
    pub render: RenderOptions,
}

impl AppState {
    pub fn new(backend: SearchBackend, config: &Config) -> Self {
        Self {
            backend: Arc::new(backend),
            limits: SearchLimits {
                default_k: config.search.default_k,
                max_k: config.search.max_k,
            },
            render: RenderOptions {
                escape: if config.render.escape_html {
                    Escape::Html
                } else {
                    Escape::Verbatim
                },
            },
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_page))
        .route("/api/search", get(handle_search))
        .route("/health", get(handle_health))
        .with_state(state)
}

pub async fn handle_search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(params) = params.inspect_err(|e| log::warn!("Rejected query string: {e}"))?;
    let request = SearchRequest::from_params(&params, state.limits)?;

    log::info!("Search q={:?} k={}", request.query, request.k);

    match state.backend.relay(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            log::error!("Search API error: {e}");
            Err(e.into())
        }
    }
}

pub async fn handle_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Html<String> {
    let query = params.q.clone().unwrap_or_default();
    if query.trim().is_empty() {
        return Html(render_page(&query, PageView::Initial, &state.render));
    }

    let limits = SearchLimits {
        default_k: PAGE_RESULTS_PER_SEARCH,
        ..state.limits
    };
    let response = match SearchRequest::from_params(&params, limits) {
        Ok(request) => match state.backend.search(&request).await {
            Ok(response) => Some(response),
            Err(e) => {
                log::error!("Search failed: {e}");
                None
            }
        },
        Err(e) => {
            log::warn!("Rejected page search: {e}");
            None
        }
    };

    let view = match &response {
        Some(response) => PageView::Results(response),
        None => PageView::NoResults,
    };
    Html(render_page(&query, view, &state.render))
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub mode: BackendMode,
}

pub async fn handle_health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        mode: state.backend.mode(),
    })
}
