use serde::{Deserialize, Serialize};

use stockpilot_catalog::Product;
use stockpilot_core::ProductId;
use stockpilot_forecast::DailyForecastRecord;
use stockpilot_signals::BlendWeights;

/// Tunable parameters of the replenishment formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplenishConfig {
    /// Days of average demand held as a buffer against variability during
    /// lead time.
    pub safety_stock_days: f64,
    pub weights: BlendWeights,
}

impl Default for ReplenishConfig {
    fn default() -> Self {
        Self {
            safety_stock_days: 5.0,
            weights: BlendWeights::default(),
        }
    }
}

/// Where the recommended quantity came from.
///
/// Kept as an explicit two-variant type (rather than an implicit "if field
/// present" branch) so the decision is auditable downstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QuantitySource {
    /// The product record carried an externally supplied reorder amount; it
    /// is used verbatim and the formula inputs are reported for display only.
    Override { external: f64 },
    /// The quantity was derived from the replenishment formula.
    Computed,
}

/// Every intermediate value of the formula, reported alongside the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderReasoning {
    pub current_stock: i64,
    /// Latest predicted stock from the history (0 when the history is empty).
    pub predicted_stock: f64,
    pub avg_daily_demand: f64,
    pub lead_time_days: i64,
    pub safety_stock: f64,
    /// Average weather impact over the history.
    pub weather_impact: f64,
    /// Average social impact over the history.
    pub social_impact: f64,
}

/// A reorder recommendation for one product.
///
/// Derived and recomputed on demand; never authoritative state. Always
/// reproducible from the product snapshot and forecast history that fed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderRecommendation {
    pub product_id: ProductId,
    pub recommended_quantity: u64,
    pub source: QuantitySource,
    pub reasoning: ReorderReasoning,
}

/// Compute the reorder recommendation for `product` from its forecast
/// history.
///
/// The demand series is the history's `predicted_stock` column (the feed's
/// per-day predicted demand). An empty history degrades every mean to zero,
/// so the result falls back to `max(0, safety_stock - stock_level)` without
/// ever dividing by zero. The blended signal adjustment is unbounded in both
/// directions; the final quantity is clamped at zero.
///
/// When the product carries an external `recommended_order`, that value wins
/// verbatim (override mode) and the reasoning is still populated for display.
pub fn recommend(
    product: &Product,
    history: &[DailyForecastRecord],
    config: &ReplenishConfig,
) -> ReorderRecommendation {
    let avg_daily_demand = mean(history.iter().map(|r| r.predicted_stock));
    let avg_weather = mean(history.iter().map(|r| r.weather_impact));
    let avg_social = mean(history.iter().map(|r| r.social_impact));

    let lead_time_demand = avg_daily_demand * product.lead_time_days() as f64;
    let safety_stock = avg_daily_demand * config.safety_stock_days;
    let blended = config.weights.blend(avg_weather, avg_social);

    let computed =
        lead_time_demand + safety_stock - product.stock_level() as f64 + blended;

    let (recommended_quantity, source) = match product.recommended_order() {
        Some(external) => (clamp_round(external), QuantitySource::Override { external }),
        None => (clamp_round(computed), QuantitySource::Computed),
    };

    ReorderRecommendation {
        product_id: product.id().clone(),
        recommended_quantity,
        source,
        reasoning: ReorderReasoning {
            current_stock: product.stock_level(),
            predicted_stock: history.last().map_or(0.0, |r| r.predicted_stock),
            avg_daily_demand,
            lead_time_days: product.lead_time_days(),
            safety_stock,
            weather_impact: avg_weather,
            social_impact: avg_social,
        },
    }
}

fn clamp_round(quantity: f64) -> u64 {
    let rounded = quantity.round().max(0.0);
    if rounded.is_finite() { rounded as u64 } else { 0 }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    if count == 0 { 0.0 } else { sum / count as f64 }
}
