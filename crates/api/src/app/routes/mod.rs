pub mod alerts;
pub mod dashboard;
pub mod forecasts;
pub mod orders;
pub mod products;
