#[tokio::main]
async fn main() {
    stockpilot_observability::init();

    let seed = std::env::var("STOCKPILOT_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            tracing::warn!("STOCKPILOT_SEED not set; seeding demo data with default seed");
            stockpilot_fixtures::FALLBACK_SEED
        });

    let service = stockpilot_api::app::seeded_service(seed);
    let app = stockpilot_api::app::build_app(service);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
