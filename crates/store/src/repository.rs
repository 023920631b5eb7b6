//! Repository traits the planning core reads through.
//!
//! The core never holds hidden state between invocations; it asks these
//! traits for a consistent snapshot and computes. Implementations decide
//! where the data actually lives (in-memory cache, remote service, fallback
//! dataset); the core behaves identically on all of them.

use stockpilot_catalog::{Product, SalesRecord};
use stockpilot_core::{DomainResult, ProductId};
use stockpilot_forecast::DailyForecastRecord;
use stockpilot_signals::{SocialSignal, WeatherSignal};

/// Product catalog access. The one repository the core also writes to:
/// order placement persists the stock increment through `put`.
pub trait ProductRepository: Send + Sync {
    fn get(&self, id: &ProductId) -> DomainResult<Option<Product>>;

    /// All products, in catalog order. The order is meaningful: dashboard
    /// tie-breaking is defined against it.
    fn list(&self) -> DomainResult<Vec<Product>>;

    /// Insert or update, keyed by product id. Updates keep the product's
    /// catalog position.
    fn put(&self, product: Product) -> DomainResult<()>;

    /// Remove a product. Returns whether anything was removed.
    fn delete(&self, id: &ProductId) -> DomainResult<bool>;
}

/// Sales history access (append-only; records are immutable once recorded).
pub trait SalesRepository: Send + Sync {
    fn list(&self) -> DomainResult<Vec<SalesRecord>>;
    fn append(&self, record: SalesRecord) -> DomainResult<()>;
}

/// Parsed forecast feed access.
pub trait ForecastRepository: Send + Sync {
    fn list(&self) -> DomainResult<Vec<DailyForecastRecord>>;
    fn list_for(&self, product_id: &ProductId) -> DomainResult<Vec<DailyForecastRecord>>;
    fn append_all(&self, records: Vec<DailyForecastRecord>) -> DomainResult<()>;
}

/// Weather signal feed access.
pub trait WeatherRepository: Send + Sync {
    fn list(&self) -> DomainResult<Vec<WeatherSignal>>;
    fn append(&self, signal: WeatherSignal) -> DomainResult<()>;
}

/// Social sentiment feed access.
pub trait SocialRepository: Send + Sync {
    fn list(&self) -> DomainResult<Vec<SocialSignal>>;
    fn append(&self, signal: SocialSignal) -> DomainResult<()>;
}
