//! HTTP handlers for the dashboard.
//!
//! Each chart handler decodes the selection from the query string and
//! delegates to the pure derivations in [`crate::services`].

use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
    Json,
};

use super::dto::{
    DashboardLayout, HealthResponse, PieChartData, PieQuery, ScatterChartData, ScatterQuery,
};
use super::error::AppError;
use super::page::DASHBOARD_HTML;
use super::state::AppState;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Page and health
// =============================================================================

/// GET /
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset.len(),
    }))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

// =============================================================================
// Dashboard endpoints
// =============================================================================

/// GET /v1/layout
///
/// Widget ids, dropdown options and slider bounds for the dashboard page.
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<DashboardLayout> {
    Ok(Json(services::build_layout(&state.dataset)))
}

/// GET /v1/charts/success-pie?site=...
pub async fn get_success_pie(
    State(state): State<AppState>,
    Query(query): Query<PieQuery>,
) -> HandlerResult<PieChartData> {
    let selection = query.selection();
    let data = services::compute_pie_chart(&state.dataset, &selection);
    tracing::debug!(site = %selection, slices = data.slices.len(), "derived pie chart");
    Ok(Json(data))
}

/// GET /v1/charts/payload-scatter?site=...&low=...&high=...
pub async fn get_payload_scatter(
    State(state): State<AppState>,
    Query(query): Query<ScatterQuery>,
) -> HandlerResult<ScatterChartData> {
    let selection = query.selection();
    let range = query.payload_range(state.dataset.payload_bounds())?;
    let data = services::compute_scatter_chart(&state.dataset, &selection, range);
    tracing::debug!(
        site = %selection,
        low = range.low,
        high = range.high,
        points = data.len(),
        "derived scatter chart"
    );
    Ok(Json(data))
}
