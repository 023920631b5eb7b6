//! In-memory repositories.
//!
//! Each store is a `Mutex<Vec<_>>`: the explicit serialization point that
//! replaces an unguarded shared list. Vec keeps insertion order, which is
//! the catalog order downstream tie-breaking relies on.

use std::sync::Mutex;

use stockpilot_catalog::{Product, SalesRecord};
use stockpilot_core::{DomainResult, ProductId};
use stockpilot_forecast::DailyForecastRecord;
use stockpilot_signals::{SocialSignal, WeatherSignal};

use crate::repository::{
    ForecastRepository, ProductRepository, SalesRepository, SocialRepository, WeatherRepository,
};

#[derive(Debug, Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryProducts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            rows: Mutex::new(products.into_iter().collect()),
        }
    }
}

impl ProductRepository for InMemoryProducts {
    fn get(&self, id: &ProductId) -> DomainResult<Option<Product>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.id() == id).cloned())
    }

    fn list(&self) -> DomainResult<Vec<Product>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn put(&self, product: Product) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|p| p.id() == product.id()) {
            Some(existing) => *existing = product,
            None => rows.push(product),
        }
        Ok(())
    }

    fn delete(&self, id: &ProductId) -> DomainResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id() != id);
        Ok(rows.len() < before)
    }
}

#[derive(Debug, Default)]
pub struct InMemorySales {
    rows: Mutex<Vec<SalesRecord>>,
}

impl InMemorySales {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = SalesRecord>) -> Self {
        Self {
            rows: Mutex::new(records.into_iter().collect()),
        }
    }
}

impl SalesRepository for InMemorySales {
    fn list(&self) -> DomainResult<Vec<SalesRecord>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn append(&self, record: SalesRecord) -> DomainResult<()> {
        self.rows.lock().unwrap().push(record);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryForecasts {
    rows: Mutex<Vec<DailyForecastRecord>>,
}

impl InMemoryForecasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = DailyForecastRecord>) -> Self {
        Self {
            rows: Mutex::new(records.into_iter().collect()),
        }
    }
}

impl ForecastRepository for InMemoryForecasts {
    fn list(&self) -> DomainResult<Vec<DailyForecastRecord>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn list_for(&self, product_id: &ProductId) -> DomainResult<Vec<DailyForecastRecord>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| &r.product_id == product_id)
            .cloned()
            .collect())
    }

    fn append_all(&self, records: Vec<DailyForecastRecord>) -> DomainResult<()> {
        self.rows.lock().unwrap().extend(records);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryWeather {
    rows: Mutex<Vec<WeatherSignal>>,
}

impl InMemoryWeather {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signals(signals: impl IntoIterator<Item = WeatherSignal>) -> Self {
        Self {
            rows: Mutex::new(signals.into_iter().collect()),
        }
    }
}

impl WeatherRepository for InMemoryWeather {
    fn list(&self) -> DomainResult<Vec<WeatherSignal>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn append(&self, signal: WeatherSignal) -> DomainResult<()> {
        self.rows.lock().unwrap().push(signal);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct InMemorySocial {
    rows: Mutex<Vec<SocialSignal>>,
}

impl InMemorySocial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_signals(signals: impl IntoIterator<Item = SocialSignal>) -> Self {
        Self {
            rows: Mutex::new(signals.into_iter().collect()),
        }
    }
}

impl SocialRepository for InMemorySocial {
    fn list(&self) -> DomainResult<Vec<SocialSignal>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn append(&self, signal: SocialSignal) -> DomainResult<()> {
        self.rows.lock().unwrap().push(signal);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpilot_catalog::{ProductDraft, StockStatus};
    use stockpilot_core::LocationId;

    fn product(id: &str, stock: i64) -> Product {
        Product::new(ProductDraft {
            id: ProductId::new(id).unwrap(),
            sku: format!("SKU-{id}"),
            name: format!("{id}-name"),
            category: "Electronics".to_string(),
            unit_price: 10.0,
            stock_level: stock,
            min_stock_level: 10,
            max_stock_level: 50,
            reorder_point: 15,
            lead_time_days: 5,
            supplier: "Acme Wholesale".to_string(),
            sales_velocity: 1.0,
            location: LocationId::fallback(),
            recommended_order: None,
            market_signal: None,
            status: StockStatus::derive(stock, 15),
        })
        .unwrap()
    }

    #[test]
    fn put_updates_in_place_preserving_catalog_order() {
        let repo = InMemoryProducts::with_products([product("P1", 5), product("P2", 7)]);

        repo.put(product("P1", 99)).unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id().as_str(), "P1");
        assert_eq!(listed[0].stock_level(), 99);
        assert_eq!(listed[1].id().as_str(), "P2");
    }

    #[test]
    fn get_and_delete_by_id() {
        let repo = InMemoryProducts::with_products([product("P1", 5)]);
        let id = ProductId::new("P1").unwrap();

        assert!(repo.get(&id).unwrap().is_some());
        assert!(repo.delete(&id).unwrap());
        assert!(repo.get(&id).unwrap().is_none());
        assert!(!repo.delete(&id).unwrap());
    }
}
