//! Forecast feed parsing and aggregation.
//!
//! The upstream feed is newline-delimited text, ten comma-separated fields
//! per line, no header and no quoting. This crate turns it into typed
//! records and computes the grouped rollups the dashboard displays. All
//! functions are pure and deterministic over their inputs.

pub mod parser;
pub mod record;
pub mod rollup;

pub use parser::{FEED_FIELD_COUNT, parse_feed};
pub use record::DailyForecastRecord;
pub use rollup::{DailyRollup, aggregate_daily, group_by_date, group_by_product, unique_product_names};
