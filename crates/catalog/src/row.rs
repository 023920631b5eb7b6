//! External inventory snapshot rows and their defaulting rules.
//!
//! The upstream repository hands us sheet-shaped records: identity, current
//! stock, an optional reorder override, a status string, and a handful of
//! optional columns. Filling the gaps here guarantees the calculator always
//! receives complete inputs.

use serde::{Deserialize, Serialize};

use stockpilot_core::{DomainError, DomainResult, LocationId, ProductId};

use crate::product::{Product, ProductDraft, StockStatus};

/// Replenishment parameters assumed when the upstream snapshot omits them.
///
/// The external sheet only carries identity, stock, status and (optionally)
/// pricing; thresholds and lead time are planning-side policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowDefaults {
    pub category: String,
    pub supplier: String,
    pub location: LocationId,
    pub min_stock_level: i64,
    pub max_stock_level: i64,
    pub reorder_point: i64,
    pub lead_time_days: i64,
    pub unit_price: f64,
    pub sales_velocity: f64,
}

impl Default for RowDefaults {
    fn default() -> Self {
        Self {
            category: "Uncategorized".to_string(),
            supplier: "Unknown".to_string(),
            location: LocationId::fallback(),
            min_stock_level: 10,
            max_stock_level: 100,
            reorder_point: 20,
            lead_time_days: 7,
            unit_price: 0.0,
            sales_velocity: 0.0,
        }
    }
}

/// One row of the external inventory snapshot, field names exactly as the
/// upstream service emits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Current_Stock")]
    pub current_stock: f64,
    #[serde(rename = "Recommended_Order")]
    pub recommended_order: f64,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "SKU", default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "Price", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "Supplier", default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(rename = "Location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "Id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl InventoryRow {
    /// Convert the row into a complete [`Product`].
    ///
    /// Missing optional columns fall back to `defaults`; the id and SKU are
    /// synthesized from the product name when absent. A `Recommended_Order`
    /// of zero (or a non-finite value) means "no override": the calculator
    /// runs in computed mode for that product.
    pub fn into_product(self, defaults: &RowDefaults) -> DomainResult<Product> {
        if self.product.trim().is_empty() {
            return Err(DomainError::validation("snapshot row has no product name"));
        }
        let id = match non_empty(self.id) {
            Some(id) => ProductId::new(id)?,
            None => ProductId::new(synthesize_key(&self.product))?,
        };
        let sku = non_empty(self.sku).unwrap_or_else(|| synthesize_key(&self.product));
        let location = match non_empty(self.location) {
            Some(l) => LocationId::new(l)?,
            None => defaults.location.clone(),
        };

        let stock_level = if self.current_stock.is_finite() {
            self.current_stock.round().max(0.0) as i64
        } else {
            0
        };
        let status = StockStatus::parse(&self.status)
            .unwrap_or_else(|| StockStatus::derive(stock_level, defaults.reorder_point));
        let recommended_order = (self.recommended_order.is_finite()
            && self.recommended_order > 0.0)
            .then_some(self.recommended_order);

        Product::new(ProductDraft {
            id,
            sku,
            name: self.product,
            category: non_empty(self.category).unwrap_or_else(|| defaults.category.clone()),
            unit_price: self
                .price
                .filter(|p| p.is_finite() && *p >= 0.0)
                .unwrap_or(defaults.unit_price),
            stock_level,
            min_stock_level: defaults.min_stock_level,
            max_stock_level: defaults.max_stock_level,
            reorder_point: defaults.reorder_point,
            lead_time_days: defaults.lead_time_days,
            supplier: non_empty(self.supplier).unwrap_or_else(|| defaults.supplier.clone()),
            sales_velocity: defaults.sales_velocity,
            location,
            recommended_order,
            market_signal: None,
            status,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Synthesize a stable key from a product name
/// (`"Espresso Machine"` -> `"ESPRESSO-MACHINE"`).
fn synthesize_key(name: &str) -> String {
    name.trim()
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_row() -> InventoryRow {
        InventoryRow {
            product: "Espresso Machine".to_string(),
            current_stock: 42.0,
            recommended_order: 0.0,
            status: "In Stock".to_string(),
            sku: None,
            category: None,
            price: None,
            supplier: None,
            location: None,
            id: None,
        }
    }

    #[test]
    fn missing_optionals_are_defaulted() {
        let product = bare_row().into_product(&RowDefaults::default()).unwrap();

        assert_eq!(product.id().as_str(), "ESPRESSO-MACHINE");
        assert_eq!(product.sku(), "ESPRESSO-MACHINE");
        assert_eq!(product.category(), "Uncategorized");
        assert_eq!(product.supplier(), "Unknown");
        assert_eq!(product.location(), &LocationId::fallback());
        assert_eq!(product.unit_price(), 0.0);
        assert_eq!(product.stock_level(), 42);
        assert_eq!(product.status(), StockStatus::InStock);
    }

    #[test]
    fn zero_recommended_order_means_computed_mode() {
        let product = bare_row().into_product(&RowDefaults::default()).unwrap();
        assert_eq!(product.recommended_order(), None);
    }

    #[test]
    fn positive_recommended_order_becomes_override() {
        let mut row = bare_row();
        row.recommended_order = 25.0;
        let product = row.into_product(&RowDefaults::default()).unwrap();
        assert_eq!(product.recommended_order(), Some(25.0));
    }

    #[test]
    fn unknown_status_is_derived_from_stock() {
        let mut row = bare_row();
        row.status = "???".to_string();
        row.current_stock = 0.0;
        let product = row.into_product(&RowDefaults::default()).unwrap();
        assert_eq!(product.status(), StockStatus::OutOfStock);
    }

    #[test]
    fn explicit_columns_win_over_defaults() {
        let mut row = bare_row();
        row.id = Some("P900".to_string());
        row.sku = Some("SKU-900".to_string());
        row.category = Some("Appliances".to_string());
        row.price = Some(349.99);
        row.supplier = Some("BrewCo".to_string());
        row.location = Some("WEST-2".to_string());

        let product = row.into_product(&RowDefaults::default()).unwrap();
        assert_eq!(product.id().as_str(), "P900");
        assert_eq!(product.sku(), "SKU-900");
        assert_eq!(product.category(), "Appliances");
        assert_eq!(product.unit_price(), 349.99);
        assert_eq!(product.supplier(), "BrewCo");
        assert_eq!(product.location().as_str(), "WEST-2");
    }

    #[test]
    fn blank_product_name_is_rejected() {
        let mut row = bare_row();
        row.product = "   ".to_string();
        let err = row.into_product(&RowDefaults::default()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn row_deserializes_from_upstream_field_names() {
        let json = r#"{
            "Product": "Desk Fan",
            "Current_Stock": 8,
            "Recommended_Order": 12,
            "Status": "Low Stock",
            "Category": "Home"
        }"#;
        let row: InventoryRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.product, "Desk Fan");
        assert_eq!(row.recommended_order, 12.0);
        assert_eq!(row.category.as_deref(), Some("Home"));
        assert_eq!(row.sku, None);
    }
}
