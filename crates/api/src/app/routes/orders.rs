use std::sync::Arc;

use axum::{
    Json, Router, extract::Extension, response::IntoResponse, routing::post,
};
use chrono::Utc;
use serde_json::json;

use stockpilot_core::ProductId;
use stockpilot_planner::{PlaceOrder, PlanningService};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new().route("/", post(place_order))
}

async fn place_order(
    Extension(service): Extension<Arc<PlanningService>>,
    Json(body): Json<dto::PlaceOrderRequest>,
) -> axum::response::Response {
    let product_id = match ProductId::new(body.product_id) {
        Ok(id) => id,
        Err(err) => return errors::domain_error_to_response(err),
    };

    let order = PlaceOrder {
        product_id,
        quantity: body.quantity,
        delivery_date: body.delivery_date,
        supplier: body.supplier,
        notes: body.notes,
        placed_at: Utc::now(),
    };

    match service.place_order(order) {
        Ok(()) => Json(json!({ "success": true })).into_response(),
        Err(err) => errors::domain_error_to_response(err),
    }
}
