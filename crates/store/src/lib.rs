//! Repositories and snapshot materialization.
//!
//! The external services (catalog, sales history, forecast feed, weather,
//! sentiment) are consumed through narrow repository traits owned by the
//! caller. The in-memory implementations here are caches with single-writer
//! discipline (one mutex each), not a persistence layer; live deployments
//! back the same traits with whatever the surrounding system fetches.

pub mod memory;
pub mod repository;
pub mod snapshot;

pub use memory::{
    InMemoryForecasts, InMemoryProducts, InMemorySales, InMemorySocial, InMemoryWeather,
};
pub use repository::{
    ForecastRepository, ProductRepository, SalesRepository, SocialRepository, WeatherRepository,
};
pub use snapshot::PlanningSnapshot;
