//! Snapshot materialization.

use serde::{Deserialize, Serialize};

use stockpilot_catalog::{Product, SalesRecord};
use stockpilot_core::{DomainError, DomainResult};
use stockpilot_forecast::DailyForecastRecord;
use stockpilot_signals::{SocialSignal, WeatherSignal};

use crate::repository::{
    ForecastRepository, ProductRepository, SalesRepository, SocialRepository, WeatherRepository,
};

/// A consistent, point-in-time materialization of every input the planning
/// engines need for one computation pass.
///
/// The five sources have no ordering dependency between them; the surrounding
/// system may fetch them concurrently, but all must be present before the
/// engines run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningSnapshot {
    pub products: Vec<Product>,
    pub sales: Vec<SalesRecord>,
    pub forecasts: Vec<DailyForecastRecord>,
    pub weather: Vec<WeatherSignal>,
    pub social: Vec<SocialSignal>,
}

impl PlanningSnapshot {
    /// Pull every input out of the repositories.
    ///
    /// A failing source surfaces as [`DomainError::Upstream`] naming it; the
    /// caller decides whether to retry, fail, or substitute the fallback
    /// dataset.
    pub fn load(
        products: &dyn ProductRepository,
        sales: &dyn SalesRepository,
        forecasts: &dyn ForecastRepository,
        weather: &dyn WeatherRepository,
        social: &dyn SocialRepository,
    ) -> DomainResult<Self> {
        Ok(Self {
            products: products
                .list()
                .map_err(|e| DomainError::upstream("products", e.to_string()))?,
            sales: sales
                .list()
                .map_err(|e| DomainError::upstream("sales", e.to_string()))?,
            forecasts: forecasts
                .list()
                .map_err(|e| DomainError::upstream("forecasts", e.to_string()))?,
            weather: weather
                .list()
                .map_err(|e| DomainError::upstream("weather", e.to_string()))?,
            social: social
                .list()
                .map_err(|e| DomainError::upstream("social", e.to_string()))?,
        })
    }
}
