use std::sync::Arc;

use axum::{Json, Router, extract::Extension, response::IntoResponse, routing::get};

use stockpilot_planner::PlanningService;

use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/summary", get(get_summary))
}

async fn get_summary(
    Extension(service): Extension<Arc<PlanningService>>,
) -> axum::response::Response {
    match service.dashboard_summary() {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
