use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockpilot_core::{DomainError, DomainResult, ProductId};

/// A recorded sale.
///
/// Immutable once recorded; `revenue` is quantity times the unit price at the
/// time of sale, so it is carried rather than recomputed from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub product_id: ProductId,
    pub quantity: i64,
    pub revenue: f64,
}

impl SalesRecord {
    pub fn new(
        date: NaiveDate,
        product_id: ProductId,
        quantity: i64,
        revenue: f64,
    ) -> DomainResult<Self> {
        if quantity < 0 {
            return Err(DomainError::validation("sale quantity cannot be negative"));
        }
        if !revenue.is_finite() || revenue < 0.0 {
            return Err(DomainError::validation(
                "sale revenue must be finite and >= 0",
            ));
        }
        Ok(Self {
            date,
            product_id,
            quantity,
            revenue,
        })
    }
}
