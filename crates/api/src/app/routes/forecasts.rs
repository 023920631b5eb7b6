use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use stockpilot_planner::PlanningService;

use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/feed", post(ingest_feed))
        .route("/daily", get(daily_rollups))
}

/// Ingest a raw forecast feed (newline-delimited, ten comma-separated fields
/// per line, no header).
async fn ingest_feed(
    Extension(service): Extension<Arc<PlanningService>>,
    body: String,
) -> axum::response::Response {
    match service.ingest_forecast_feed(&body) {
        Ok(count) => Json(json!({ "ingested": count })).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

async fn daily_rollups(
    Extension(service): Extension<Arc<PlanningService>>,
) -> axum::response::Response {
    match service.daily_rollups() {
        Ok(rollups) => Json(rollups).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
