//! Router assembly and service wiring.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower::ServiceBuilder;

use stockpilot_alerts::AlertBook;
use stockpilot_forecast::parse_feed;
use stockpilot_planner::PlanningService;
use stockpilot_store::{
    InMemoryForecasts, InMemoryProducts, InMemorySales, InMemorySocial, InMemoryWeather,
};

pub mod dto;
pub mod errors;
pub mod routes;

/// Assemble the full router over a planning service.
pub fn build_app(service: Arc<PlanningService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/dashboard", routes::dashboard::router())
        .nest("/products", routes::products::router())
        .nest("/orders", routes::orders::router())
        .nest("/alerts", routes::alerts::router())
        .nest("/forecasts", routes::forecasts::router())
        .layer(ServiceBuilder::new().layer(axum::Extension(service)))
}

async fn health() -> &'static str {
    "ok"
}

/// Wire a planning service over in-memory repositories seeded with the demo
/// dataset for `seed`.
///
/// This is the dev/demo wiring; live deployments back the same repository
/// traits with the surrounding system's fetch layer.
pub fn seeded_service(seed: u64) -> Arc<PlanningService> {
    let dataset = stockpilot_fixtures::demo_dataset(seed);
    let forecasts = parse_feed(&dataset.forecast_feed).expect("fixture feed is well-formed");

    tracing::info!(
        seed,
        products = dataset.products.len(),
        forecast_records = forecasts.len(),
        "seeding in-memory repositories"
    );

    Arc::new(PlanningService::new(
        Arc::new(InMemoryProducts::with_products(dataset.products)),
        Arc::new(InMemorySales::with_records(dataset.sales)),
        Arc::new(InMemoryForecasts::with_records(forecasts)),
        Arc::new(InMemoryWeather::with_signals(dataset.weather)),
        Arc::new(InMemorySocial::with_signals(dataset.social)),
        Arc::new(AlertBook::new()),
    ))
}
