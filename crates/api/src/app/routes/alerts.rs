use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;

use stockpilot_core::AlertId;
use stockpilot_planner::PlanningService;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_alerts))
        .route("/refresh", post(refresh_alerts))
        .route("/:id/read", post(mark_read))
}

async fn list_alerts(
    Extension(service): Extension<Arc<PlanningService>>,
    Query(query): Query<dto::AlertsQuery>,
) -> axum::response::Response {
    let mut alerts = service.alert_book().all();
    if query.unread_only {
        alerts.retain(|a| !a.read);
    }
    Json(alerts).into_response()
}

/// Re-run the rule engine over the current snapshot; returns the alerts this
/// pass produced (they are also retained).
async fn refresh_alerts(
    Extension(service): Extension<Arc<PlanningService>>,
) -> axum::response::Response {
    match service.refresh_alerts(Utc::now()) {
        Ok(produced) => Json(produced).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

/// Idempotent: marking an already-read or unknown alert is a no-op.
async fn mark_read(
    Extension(service): Extension<Arc<PlanningService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match id.parse::<AlertId>() {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match service.mark_alert_read(id) {
        Ok(found) => Json(json!({ "read": found })).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
