use chrono::NaiveDate;
use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub product_id: String,
    pub quantity: i64,
    pub delivery_date: NaiveDate,
    pub supplier: String,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlertsQuery {
    /// When set, only unread alerts are returned.
    #[serde(default)]
    pub unread_only: bool,
}
