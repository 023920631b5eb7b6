use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpilot_core::{AlertId, ProductId};

/// Category of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LowStock,
    Overstock,
    TrendingProduct,
    WeatherAlert,
    Reorder,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::LowStock => "low_stock",
            AlertKind::Overstock => "overstock",
            AlertKind::TrendingProduct => "trending_product",
            AlertKind::WeatherAlert => "weather_alert",
            AlertKind::Reorder => "reorder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// A derived alert record.
///
/// Created unread by the rule engine (or as an order-placement notice);
/// mutated only by the mark-read operation; never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub kind: AlertKind,
    /// Absent for location-scoped alerts (weather).
    pub product_id: Option<ProductId>,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Alert {
    pub fn new(
        kind: AlertKind,
        product_id: Option<ProductId>,
        message: impl Into<String>,
        severity: Severity,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AlertId::new(),
            kind,
            product_id,
            message: message.into(),
            severity,
            created_at,
            read: false,
        }
    }
}
