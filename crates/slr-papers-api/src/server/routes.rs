//! HTTP routes for the papers API.
//!
//! Every listing re-fetches the whole table, derives facets on the fly and
//! paginates in memory. Nothing is cached between requests.

use std::any::Any;
use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};
use crate::facets::{self, FacetFilter, FilterOptions};
use crate::formatters;
use crate::models::{
    FilterRequest, FilterSelection, PageRequest, PaginatedResponse, PaperDetail, PaperRow,
    PaperSummary, paginate,
};
use crate::store::Fetcher;

/// Service singletons shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Row source.
    pub fetcher: Fetcher,
    /// Facet enumeration and filtering.
    pub facets: FacetFilter,
}

/// Response of the store connectivity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `unhealthy`.
    pub status: String,
    /// Probe message.
    pub database: String,
}

/// Response of `GET /api/papers/count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    /// Matching rows.
    pub total: usize,
    /// Present only when a filter was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<FilterSelection>,
}

/// Create the HTTP router.
pub fn create_router(fetcher: Fetcher, facets: FacetFilter) -> Router {
    let state = Arc::new(AppState { fetcher, facets });

    Router::new()
        .route("/", get(root))
        .route("/health", get(liveness))
        .route("/api/papers", get(list_papers))
        .route("/api/papers/", get(list_papers))
        .route("/api/papers/health", get(store_health))
        .route("/api/papers/filter-options", get(filter_options))
        .route("/api/papers/filter", post(filter_papers))
        .route("/api/papers/count", get(count_papers))
        .route("/api/papers/{work_id}", get(get_paper))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "SLR Backend APIs",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn liveness() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn store_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (connected, message) = state.fetcher.test_connection().await;
    Json(HealthResponse {
        status: if connected { "healthy" } else { "unhealthy" }.to_string(),
        database: message,
    })
}

async fn filter_options(State(state): State<Arc<AppState>>) -> Json<FilterOptions> {
    let rows = state.fetcher.fetch_all().await;
    Json(state.facets.filter_options(&rows))
}

async fn list_papers(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageRequest>, QueryRejection>,
) -> ApiResult<Json<PaginatedResponse<PaperSummary>>> {
    let Query(page) = query.map_err(|e| ApiError::validation("query", e.to_string()))?;
    let page = page.validate()?;

    let rows = state.fetcher.fetch_all().await;
    Ok(Json(paginated_response(&rows, page, FilterSelection::default())))
}

async fn filter_papers(
    State(state): State<Arc<AppState>>,
    body: Result<Json<FilterRequest>, JsonRejection>,
) -> ApiResult<Json<PaginatedResponse<PaperSummary>>> {
    let Json(request) = body.map_err(|e| ApiError::validation("body", e.to_string()))?;
    let page = request.page_request().validate()?;
    let selection = request.selection();

    tracing::debug!(
        categories = ?facets::active_categories(&selection),
        page = page.page,
        limit = page.limit,
        "Filtering papers"
    );

    let rows = state.fetcher.fetch_all().await;
    let filtered = state.facets.apply(&rows, &selection);
    Ok(Json(paginated_response(&filtered, page, selection)))
}

async fn count_papers(
    State(state): State<Arc<AppState>>,
    query: Result<axum_extra::extract::Query<FilterSelection>, axum_extra::extract::QueryRejection>,
) -> ApiResult<Json<CountResponse>> {
    let axum_extra::extract::Query(selection) =
        query.map_err(|e| ApiError::validation("query", e.to_string()))?;

    let rows = state.fetcher.fetch_all().await;
    if selection.is_empty() {
        return Ok(Json(CountResponse { total: rows.len(), filters_applied: None }));
    }

    let filtered = state.facets.apply(&rows, &selection);
    Ok(Json(CountResponse { total: filtered.len(), filters_applied: Some(selection) }))
}

async fn get_paper(
    State(state): State<Arc<AppState>>,
    Path(work_id): Path<String>,
) -> ApiResult<Json<PaperDetail>> {
    let row = state.fetcher.fetch_by_id(&work_id).await.ok_or_else(|| {
        tracing::debug!(work_id = %work_id, "Paper not found");
        ApiError::not_found("Paper")
    })?;

    Ok(Json(formatters::format_detail(&row)))
}

fn paginated_response(
    rows: &[PaperRow],
    page: PageRequest,
    filters_applied: FilterSelection,
) -> PaginatedResponse<PaperSummary> {
    let (slice, pagination) = paginate(rows, page);
    PaginatedResponse {
        data: slice.iter().map(formatters::format_summary).collect(),
        pagination,
        filters_applied,
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| (*s).to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());

    ApiError::internal("Internal server error", detail).into_response()
}
