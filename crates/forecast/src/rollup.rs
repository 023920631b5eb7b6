//! Grouping and daily rollups over parsed forecast records.
//!
//! All functions are pure and stable under repeated calls. Grouping uses
//! ordered maps so iteration order is deterministic; the relative order of
//! records within a group always matches the input.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockpilot_core::ProductId;

use crate::record::DailyForecastRecord;

/// Per-date rollup of the feed for analytics display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRollup {
    pub date: NaiveDate,
    /// Sum of `current_stock_level` across that date's records.
    pub total_stock: f64,
    /// Sum of `revenue` across that date's records.
    pub total_revenue: f64,
    pub avg_predicted_stock: f64,
    pub avg_weather_impact: f64,
    pub avg_social_impact: f64,
}

/// Group records by product, preserving each record's relative input order
/// within its group.
pub fn group_by_product(
    records: &[DailyForecastRecord],
) -> BTreeMap<ProductId, Vec<DailyForecastRecord>> {
    let mut groups: BTreeMap<ProductId, Vec<DailyForecastRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.product_id.clone())
            .or_default()
            .push(record.clone());
    }
    groups
}

/// Group records by calendar date, preserving relative input order within
/// each group.
pub fn group_by_date(
    records: &[DailyForecastRecord],
) -> BTreeMap<NaiveDate, Vec<DailyForecastRecord>> {
    let mut groups: BTreeMap<NaiveDate, Vec<DailyForecastRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.date).or_default().push(record.clone());
    }
    groups
}

/// Roll the feed up per date, sorted ascending by calendar date.
///
/// Averages are arithmetic means over the group's record count; a date only
/// enters the output when at least one record carries it, so the divisor is
/// never zero.
pub fn aggregate_daily(records: &[DailyForecastRecord]) -> Vec<DailyRollup> {
    group_by_date(records)
        .into_iter()
        .map(|(date, group)| {
            let n = group.len() as f64;
            DailyRollup {
                date,
                total_stock: group.iter().map(|r| r.current_stock_level).sum(),
                total_revenue: group.iter().map(|r| r.revenue).sum(),
                avg_predicted_stock: group.iter().map(|r| r.predicted_stock).sum::<f64>() / n,
                avg_weather_impact: group.iter().map(|r| r.weather_impact).sum::<f64>() / n,
                avg_social_impact: group.iter().map(|r| r.social_impact).sum::<f64>() / n,
            }
        })
        .collect()
}

/// Deduplicated product names appearing in the feed.
pub fn unique_product_names(records: &[DailyForecastRecord]) -> Vec<String> {
    let names: BTreeSet<&str> = records.iter().map(|r| r.product_name.as_str()).collect();
    names.into_iter().map(str::to_string).collect()
}
