use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use stockpilot_catalog::InventoryRow;
use stockpilot_core::ProductId;
use stockpilot_planner::PlanningService;

use crate::app::errors;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/sync", post(sync_inventory))
        .route("/:id", get(get_product))
        .route("/:id/reorder", get(get_reorder_recommendation))
}

async fn list_products(
    Extension(service): Extension<Arc<PlanningService>>,
) -> axum::response::Response {
    match service.list_products() {
        Ok(products) => Json(products).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

async fn get_product(
    Extension(service): Extension<Arc<PlanningService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match ProductId::new(id) {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match service.get_product(&id) {
        Ok(product) => Json(product).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

/// Replace/extend the catalog from an external inventory snapshot (rows in
/// the upstream field naming; missing optional columns are defaulted).
async fn sync_inventory(
    Extension(service): Extension<Arc<PlanningService>>,
    Json(rows): Json<Vec<InventoryRow>>,
) -> axum::response::Response {
    match service.sync_inventory(rows) {
        Ok(count) => Json(json!({ "synced": count })).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}

/// The reorder query: recommended quantity plus the full reasoning
/// breakdown.
async fn get_reorder_recommendation(
    Extension(service): Extension<Arc<PlanningService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match ProductId::new(id) {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };
    match service.reorder_recommendation(&id) {
        Ok(recommendation) => Json(recommendation).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
