use reqwest::StatusCode;
use serde_json::{Value, json};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(seed: u64) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let service = stockpilot_api::app::seeded_service(seed);
        let app = stockpilot_api::app::build_app(service);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_and_summary_respond() {
    let srv = TestServer::spawn(7).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/dashboard/summary", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let summary: Value = res.json().await.unwrap();
    assert_eq!(summary["total_products"], 12);
    assert!(summary["top_selling_products"].as_array().unwrap().len() <= 5);
}

#[tokio::test]
async fn reorder_query_carries_full_reasoning() {
    let srv = TestServer::spawn(7).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/products/P101/reorder", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let rec: Value = res.json().await.unwrap();
    assert_eq!(rec["product_id"], "P101");
    assert!(rec["recommended_quantity"].as_u64().is_some());
    for field in [
        "current_stock",
        "predicted_stock",
        "avg_daily_demand",
        "lead_time_days",
        "safety_stock",
        "weather_impact",
        "social_impact",
    ] {
        assert!(
            !rec["reasoning"][field].is_null(),
            "missing reasoning field {field}"
        );
    }
}

#[tokio::test]
async fn unknown_product_maps_to_404() {
    let srv = TestServer::spawn(7).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/products/NOPE/reorder", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].as_str().unwrap().contains("NOPE"));
}

#[tokio::test]
async fn placing_an_order_increments_stock_and_raises_an_alert() {
    let srv = TestServer::spawn(7).await;
    let client = reqwest::Client::new();

    let before: Value = client
        .get(format!("{}/products/P101", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let stock_before = before["stock_level"].as_i64().unwrap();

    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&json!({
            "product_id": "P101",
            "quantity": 25,
            "delivery_date": "2025-04-20",
            "supplier": "Acme Wholesale",
            "notes": "rush"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);

    let after: Value = client
        .get(format!("{}/products/P101", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(after["stock_level"].as_i64().unwrap(), stock_before + 25);

    let alerts: Value = client
        .get(format!("{}/alerts", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let alerts = alerts.as_array().unwrap();
    assert!(
        alerts
            .iter()
            .any(|a| a["kind"] == "reorder" && a["message"].as_str().unwrap().contains("25 units"))
    );
}

#[tokio::test]
async fn invalid_order_quantity_is_rejected() {
    let srv = TestServer::spawn(7).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/orders", srv.base_url))
        .json(&json!({
            "product_id": "P101",
            "quantity": 0,
            "delivery_date": "2025-04-20",
            "supplier": "Acme Wholesale"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn inventory_sync_defaults_columns_and_enables_override_mode() {
    let srv = TestServer::spawn(7).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/products/sync", srv.base_url))
        .json(&json!([{
            "Product": "Desk Heater",
            "Current_Stock": 8,
            "Recommended_Order": 25,
            "Status": "Low Stock"
        }]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["synced"], 1);

    // The synthesized id resolves, with defaulted columns filled in.
    let product: Value = client
        .get(format!("{}/products/DESK-HEATER", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(product["category"], "Uncategorized");
    assert_eq!(product["stock_level"], 8);

    // The positive Recommended_Order puts the product in override mode.
    let rec: Value = client
        .get(format!("{}/products/DESK-HEATER/reorder", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(rec["recommended_quantity"], 25);
    assert_eq!(rec["source"]["mode"], "override");
}

#[tokio::test]
async fn alert_refresh_then_mark_read_is_idempotent() {
    let srv = TestServer::spawn(7).await;
    let client = reqwest::Client::new();

    let produced: Value = client
        .post(format!("{}/alerts/refresh", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let produced = produced.as_array().unwrap();
    assert!(!produced.is_empty(), "seeded fleet should trigger alerts");

    let id = produced[0]["id"].as_str().unwrap();
    for _ in 0..2 {
        let res = client
            .post(format!("{}/alerts/{id}/read", srv.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["read"], true);
    }

    let unread: Value = client
        .get(format!("{}/alerts?unread_only=true", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(
        unread
            .as_array()
            .unwrap()
            .iter()
            .all(|a| a["id"].as_str().unwrap() != id)
    );
}

#[tokio::test]
async fn feed_ingest_rejects_malformed_lines_with_context() {
    let srv = TestServer::spawn(7).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/forecasts/feed", srv.base_url))
        .body("2025-04-01,P101,Laptop,69,4,3,71,1200,85200,91\nnot,enough,fields")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "parse_error");
    assert!(body["message"].as_str().unwrap().contains("line 2"));

    // A clean feed ingests and shows up in the daily rollups.
    let res = client
        .post(format!("{}/forecasts/feed", srv.base_url))
        .body("2031-01-01,P101,Laptop,69,4,3,71,1200,85200,91")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["ingested"], 1);

    let rollups: Value = client
        .get(format!("{}/forecasts/daily", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(
        rollups
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r["date"] == "2031-01-01")
    );
}
