use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockpilot_core::ProductId;

/// One product-day of the demand forecast feed.
///
/// Numeric fields mirror the feed verbatim as `f64`; cells that failed
/// numeric conversion arrive as `NaN` rather than as parse errors, so check
/// [`DailyForecastRecord::is_finite`] before doing arithmetic that must not
/// poison downstream aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastRecord {
    pub date: NaiveDate,
    pub product_id: ProductId,
    pub product_name: String,
    pub current_stock_level: f64,
    pub weather_impact: f64,
    pub social_impact: f64,
    pub predicted_stock: f64,
    pub price: f64,
    pub revenue: f64,
    /// Monotonically increasing ordinal used for sequencing; not validated
    /// against `date`.
    pub day_number: f64,
}

impl DailyForecastRecord {
    /// Whether every numeric field parsed cleanly.
    pub fn is_finite(&self) -> bool {
        self.current_stock_level.is_finite()
            && self.weather_impact.is_finite()
            && self.social_impact.is_finite()
            && self.predicted_stock.is_finite()
            && self.price.is_finite()
            && self.revenue.is_finite()
            && self.day_number.is_finite()
    }
}
