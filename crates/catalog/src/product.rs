use serde::{Deserialize, Serialize};

use stockpilot_core::{DomainError, DomainResult, LocationId, ProductId};

/// Stock status as reported by the external inventory snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Parse the upstream status string.
    ///
    /// Unknown values yield `None`; the snapshot layer then derives a status
    /// from the stock level instead of failing the whole row.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "In Stock" => Some(StockStatus::InStock),
            "Low Stock" => Some(StockStatus::LowStock),
            "Out of Stock" => Some(StockStatus::OutOfStock),
            _ => None,
        }
    }

    /// Derive a status from a stock level and reorder point.
    pub fn derive(stock_level: i64, reorder_point: i64) -> Self {
        if stock_level <= 0 {
            StockStatus::OutOfStock
        } else if stock_level < reorder_point {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// Optional market context attached to a product by upstream enrichment.
///
/// Tagged so all consumers share one contract; upstream systems attach these
/// ad hoc and we refuse to carry them as untyped blobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarketSignal {
    /// How well the product matches the owning location's audience.
    AudienceFit { score: f64 },
    /// A free-form upstream prediction with its confidence.
    Prediction { label: String, confidence: f64 },
}

/// Field set for constructing a [`Product`].
///
/// Plain data so callers (snapshot mappers, fixtures, tests) can fill it
/// incrementally; validation happens in [`Product::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub stock_level: i64,
    pub min_stock_level: i64,
    pub max_stock_level: i64,
    pub reorder_point: i64,
    pub lead_time_days: i64,
    pub supplier: String,
    pub sales_velocity: f64,
    pub location: LocationId,
    pub recommended_order: Option<f64>,
    pub market_signal: Option<MarketSignal>,
    pub status: StockStatus,
}

/// Catalog product enriched with replenishment parameters.
///
/// Invariants (checked at construction):
/// - `min_stock_level <= reorder_point <= max_stock_level`
/// - `stock_level >= 0`
///
/// State changes only through [`Product::receive_stock`] (the order-placement
/// side effect) or a full re-sync from the external repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    category: String,
    unit_price: f64,
    stock_level: i64,
    min_stock_level: i64,
    max_stock_level: i64,
    reorder_point: i64,
    lead_time_days: i64,
    supplier: String,
    sales_velocity: f64,
    location: LocationId,
    recommended_order: Option<f64>,
    market_signal: Option<MarketSignal>,
    status: StockStatus,
}

impl Product {
    pub fn new(draft: ProductDraft) -> DomainResult<Self> {
        if draft.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if draft.sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if !draft.unit_price.is_finite() || draft.unit_price < 0.0 {
            return Err(DomainError::validation("unit_price must be finite and >= 0"));
        }
        if !draft.sales_velocity.is_finite() || draft.sales_velocity < 0.0 {
            return Err(DomainError::validation(
                "sales_velocity must be finite and >= 0",
            ));
        }
        if draft.lead_time_days < 0 {
            return Err(DomainError::validation("lead_time_days must be >= 0"));
        }
        if draft.stock_level < 0 {
            return Err(DomainError::invariant("stock_level cannot be negative"));
        }
        if draft.min_stock_level > draft.reorder_point {
            return Err(DomainError::invariant(
                "min_stock_level must not exceed reorder_point",
            ));
        }
        if draft.reorder_point > draft.max_stock_level {
            return Err(DomainError::invariant(
                "reorder_point must not exceed max_stock_level",
            ));
        }
        if let Some(q) = draft.recommended_order {
            if !q.is_finite() || q < 0.0 {
                return Err(DomainError::validation(
                    "recommended_order override must be finite and >= 0",
                ));
            }
        }

        Ok(Self {
            id: draft.id,
            sku: draft.sku,
            name: draft.name,
            category: draft.category,
            unit_price: draft.unit_price,
            stock_level: draft.stock_level,
            min_stock_level: draft.min_stock_level,
            max_stock_level: draft.max_stock_level,
            reorder_point: draft.reorder_point,
            lead_time_days: draft.lead_time_days,
            supplier: draft.supplier,
            sales_velocity: draft.sales_velocity,
            location: draft.location,
            recommended_order: draft.recommended_order,
            market_signal: draft.market_signal,
            status: draft.status,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn stock_level(&self) -> i64 {
        self.stock_level
    }

    pub fn min_stock_level(&self) -> i64 {
        self.min_stock_level
    }

    pub fn max_stock_level(&self) -> i64 {
        self.max_stock_level
    }

    pub fn reorder_point(&self) -> i64 {
        self.reorder_point
    }

    pub fn lead_time_days(&self) -> i64 {
        self.lead_time_days
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn sales_velocity(&self) -> f64 {
        self.sales_velocity
    }

    pub fn location(&self) -> &LocationId {
        &self.location
    }

    /// External reorder override, when the upstream record carries one.
    /// Presence of this value selects override mode in the calculator.
    pub fn recommended_order(&self) -> Option<f64> {
        self.recommended_order
    }

    pub fn market_signal(&self) -> Option<&MarketSignal> {
        self.market_signal.as_ref()
    }

    pub fn status(&self) -> StockStatus {
        self.status
    }

    pub fn is_below_reorder_point(&self) -> bool {
        self.stock_level < self.reorder_point
    }

    pub fn is_below_min_stock(&self) -> bool {
        self.stock_level < self.min_stock_level
    }

    pub fn is_overstocked(&self) -> bool {
        self.stock_level > self.max_stock_level
    }

    /// Value of the stock on hand at the current unit price.
    pub fn inventory_value(&self) -> f64 {
        self.unit_price * self.stock_level as f64
    }

    /// Receive stock from a placed order.
    ///
    /// The only in-core mutation of a product; everything else is external
    /// sync. Recomputes the stock status from the new level.
    pub fn receive_stock(&mut self, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Err(DomainError::validation("received quantity must be > 0"));
        }
        self.stock_level += quantity;
        self.status = StockStatus::derive(self.stock_level, self.reorder_point);
        Ok(())
    }
}
