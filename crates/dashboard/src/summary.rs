use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use stockpilot_alerts::Alert;
use stockpilot_catalog::{Product, SalesRecord};
use stockpilot_core::ProductId;

/// How many top sellers and recent alerts the summary carries.
pub const TOP_SELLERS_LIMIT: usize = 5;
pub const RECENT_ALERTS_LIMIT: usize = 5;

/// One entry of the top-sellers leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopSeller {
    pub product_id: ProductId,
    pub name: String,
    pub units_sold: i64,
    pub revenue: f64,
}

/// Ephemeral fleet-wide aggregate for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_products: usize,
    pub low_stock_count: usize,
    pub overstock_count: usize,
    /// Sum of `unit_price * stock_level` across the catalog.
    pub total_value: f64,
    /// Unread alerts.
    pub alerts_count: usize,
    pub top_selling_products: Vec<TopSeller>,
    /// Most recently created alerts, newest first. Read state does not
    /// affect the ordering.
    pub recent_alerts: Vec<Alert>,
}

/// Compute the dashboard summary from a snapshot. No side effects.
///
/// Top sellers rank by total units sold descending; ties keep the original
/// catalog order (stable sort). Recent alerts order purely by `created_at`
/// descending.
pub fn summarize(
    products: &[Product],
    sales: &[SalesRecord],
    alerts: &[Alert],
) -> DashboardSummary {
    let mut sold: HashMap<&ProductId, (i64, f64)> = HashMap::new();
    for sale in sales {
        let entry = sold.entry(&sale.product_id).or_insert((0, 0.0));
        entry.0 += sale.quantity;
        entry.1 += sale.revenue;
    }

    // Catalog order in, stable sort by units: ties keep catalog order.
    let mut top: Vec<TopSeller> = products
        .iter()
        .map(|p| {
            let (units_sold, revenue) = sold.get(p.id()).copied().unwrap_or((0, 0.0));
            TopSeller {
                product_id: p.id().clone(),
                name: p.name().to_string(),
                units_sold,
                revenue,
            }
        })
        .collect();
    top.sort_by(|a, b| b.units_sold.cmp(&a.units_sold));
    top.truncate(TOP_SELLERS_LIMIT);

    let mut recent: Vec<Alert> = alerts.to_vec();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent.truncate(RECENT_ALERTS_LIMIT);

    DashboardSummary {
        total_products: products.len(),
        low_stock_count: products.iter().filter(|p| p.is_below_reorder_point()).count(),
        overstock_count: products.iter().filter(|p| p.is_overstocked()).count(),
        total_value: products.iter().map(Product::inventory_value).sum(),
        alerts_count: alerts.iter().filter(|a| !a.read).count(),
        top_selling_products: top,
        recent_alerts: recent,
    }
}
