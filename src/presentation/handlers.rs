// HTTP request handlers
use crate::domain::error::StatsError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct OffsetQuery {
    pub offset: Option<i64>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard for one evaluation day; `offset` shifts the day for prev/next
/// navigation.
pub async fn get_dashboard(
    Path(day): Path<String>,
    Query(query): Query<OffsetQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let offset = query.offset.unwrap_or(0);
    match state.dashboard_service.get_dashboard(&day, offset).await {
        Ok(dashboard) => Json(dashboard).into_response(),
        Err(error) => error_response(error),
    }
}

/// Per-device channel drilldown for one evaluation day.
pub async fn get_device_detail(
    Path((day, device_id)): Path<(String, String)>,
    Query(query): Query<OffsetQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let offset = query.offset.unwrap_or(0);
    match state
        .dashboard_service
        .get_device_detail(&day, offset, &device_id)
        .await
    {
        Ok(detail) => Json(detail).into_response(),
        Err(error) => error_response(error),
    }
}

/// All-or-nothing: a failed render returns an error status, never a partial
/// chart payload.
fn error_response(error: StatsError) -> Response {
    let status = match &error {
        StatsError::InvalidDate(_) => StatusCode::BAD_REQUEST,
        StatsError::StoreUnavailable(_) => StatusCode::BAD_GATEWAY,
    };
    tracing::error!("dashboard request failed: {}", error);
    (
        status,
        Json(serde_json::json!({ "error": error.to_string() })),
    )
        .into_response()
}
