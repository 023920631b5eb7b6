use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stockpilot_alerts::{Alert, AlertBook, AlertKind, AlertPolicy, Severity, evaluate};
use stockpilot_catalog::{InventoryRow, Product, RowDefaults};
use stockpilot_core::{AlertId, DomainError, DomainResult, ProductId};
use stockpilot_dashboard::{DashboardSummary, summarize};
use stockpilot_forecast::{DailyRollup, aggregate_daily, parse_feed};
use stockpilot_replenish::{ReorderRecommendation, ReplenishConfig, recommend};
use stockpilot_store::{
    ForecastRepository, PlanningSnapshot, ProductRepository, SalesRepository, SocialRepository,
    WeatherRepository,
};

/// An order placement request.
///
/// `placed_at` is supplied by the caller (the transport layer stamps it) so
/// the service stays deterministic under test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrder {
    pub product_id: ProductId,
    pub quantity: i64,
    pub delivery_date: NaiveDate,
    pub supplier: String,
    pub notes: Option<String>,
    pub placed_at: DateTime<Utc>,
}

/// Orchestrates repositories, engines and the alert book.
///
/// Every computation is a pure function over a snapshot pulled on demand;
/// the service itself retains nothing beyond the injected stores.
pub struct PlanningService {
    products: Arc<dyn ProductRepository>,
    sales: Arc<dyn SalesRepository>,
    forecasts: Arc<dyn ForecastRepository>,
    weather: Arc<dyn WeatherRepository>,
    social: Arc<dyn SocialRepository>,
    alerts: Arc<AlertBook>,
    replenish: ReplenishConfig,
    alert_policy: AlertPolicy,
    row_defaults: RowDefaults,
}

impl PlanningService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        sales: Arc<dyn SalesRepository>,
        forecasts: Arc<dyn ForecastRepository>,
        weather: Arc<dyn WeatherRepository>,
        social: Arc<dyn SocialRepository>,
        alerts: Arc<AlertBook>,
    ) -> Self {
        Self {
            products,
            sales,
            forecasts,
            weather,
            social,
            alerts,
            replenish: ReplenishConfig::default(),
            alert_policy: AlertPolicy::default(),
            row_defaults: RowDefaults::default(),
        }
    }

    pub fn with_replenish_config(mut self, config: ReplenishConfig) -> Self {
        self.replenish = config;
        self
    }

    pub fn with_alert_policy(mut self, policy: AlertPolicy) -> Self {
        self.alert_policy = policy;
        self
    }

    pub fn with_row_defaults(mut self, defaults: RowDefaults) -> Self {
        self.row_defaults = defaults;
        self
    }

    pub fn alert_book(&self) -> &AlertBook {
        &self.alerts
    }

    pub fn list_products(&self) -> DomainResult<Vec<Product>> {
        self.products.list()
    }

    pub fn get_product(&self, id: &ProductId) -> DomainResult<Product> {
        self.products
            .get(id)?
            .ok_or_else(|| DomainError::not_found("product", id))
    }

    /// Materialize all five inputs; a failing source becomes
    /// [`DomainError::Upstream`] naming it.
    pub fn snapshot(&self) -> DomainResult<PlanningSnapshot> {
        PlanningSnapshot::load(
            self.products.as_ref(),
            self.sales.as_ref(),
            self.forecasts.as_ref(),
            self.weather.as_ref(),
            self.social.as_ref(),
        )
    }

    /// The reorder query: recommendation for one product.
    ///
    /// Records whose numeric cells failed to parse (NaN) are dropped from
    /// the history before the math, so one bad feed line cannot poison the
    /// recommendation.
    pub fn reorder_recommendation(
        &self,
        product_id: &ProductId,
    ) -> DomainResult<ReorderRecommendation> {
        let product = self.get_product(product_id)?;
        let history: Vec<_> = self
            .forecasts
            .list_for(product_id)?
            .into_iter()
            .filter(|r| r.is_finite())
            .collect();

        let recommendation = recommend(&product, &history, &self.replenish);
        tracing::debug!(
            product_id = %product_id,
            quantity = recommendation.recommended_quantity,
            history_len = history.len(),
            "computed reorder recommendation"
        );
        Ok(recommendation)
    }

    /// Place a replenishment order: increments the product's stock and
    /// appends an informational alert. Fails outright (no partial effect)
    /// when the product is unknown or the quantity invalid.
    pub fn place_order(&self, order: PlaceOrder) -> DomainResult<()> {
        if order.quantity <= 0 {
            return Err(DomainError::validation("order quantity must be > 0"));
        }
        if order.supplier.trim().is_empty() {
            return Err(DomainError::validation("supplier cannot be empty"));
        }

        let mut product = self.get_product(&order.product_id)?;
        product.receive_stock(order.quantity)?;
        let new_level = product.stock_level();
        self.products.put(product)?;

        let note = order
            .notes
            .as_deref()
            .map(|n| format!(" ({n})"))
            .unwrap_or_default();
        self.alerts.append(Alert::new(
            AlertKind::Reorder,
            Some(order.product_id.clone()),
            format!(
                "Order placed: {} units of {} from {}, delivery {}{note}",
                order.quantity, order.product_id, order.supplier, order.delivery_date,
            ),
            Severity::Low,
            order.placed_at,
        ));

        tracing::info!(
            product_id = %order.product_id,
            quantity = order.quantity,
            supplier = %order.supplier,
            new_level,
            "order placed"
        );
        Ok(())
    }

    /// Run the alert rules over the current snapshot and retain the results.
    /// Returns the alerts produced by this pass.
    pub fn refresh_alerts(&self, now: DateTime<Utc>) -> DomainResult<Vec<Alert>> {
        let snapshot = self.snapshot()?;
        let produced = evaluate(
            &snapshot.products,
            &snapshot.weather,
            &snapshot.social,
            now,
            &self.alert_policy,
        );
        self.alerts.extend(produced.iter().cloned());
        tracing::info!(count = produced.len(), "alert refresh pass completed");
        Ok(produced)
    }

    pub fn mark_alert_read(&self, id: AlertId) -> DomainResult<bool> {
        Ok(self.alerts.mark_read(id))
    }

    pub fn dashboard_summary(&self) -> DomainResult<DashboardSummary> {
        let products = self.products.list()?;
        let sales = self.sales.list()?;
        let alerts = self.alerts.all();
        Ok(summarize(&products, &sales, &alerts))
    }

    /// Parse a raw forecast feed and retain its records. Returns how many
    /// records were ingested.
    pub fn ingest_forecast_feed(&self, raw: &str) -> DomainResult<usize> {
        let records = parse_feed(raw)?;
        let count = records.len();
        self.forecasts.append_all(records)?;
        tracing::info!(count, "forecast feed ingested");
        Ok(count)
    }

    pub fn daily_rollups(&self) -> DomainResult<Vec<DailyRollup>> {
        Ok(aggregate_daily(&self.forecasts.list()?))
    }

    /// Sync the catalog from an external inventory snapshot.
    ///
    /// Every row is converted (with defaulting) before the first write, so a
    /// malformed row fails the whole sync with no partial effect. Existing
    /// products are replaced in place; new ones append in row order.
    pub fn sync_inventory(&self, rows: Vec<InventoryRow>) -> DomainResult<usize> {
        let products: Vec<Product> = rows
            .into_iter()
            .map(|row| row.into_product(&self.row_defaults))
            .collect::<DomainResult<_>>()?;

        let count = products.len();
        for product in products {
            self.products.put(product)?;
        }
        tracing::info!(count, "inventory snapshot synced");
        Ok(count)
    }
}
