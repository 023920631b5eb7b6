//! Fleet-wide dashboard KPIs.
//!
//! A pure projection over a (products, sales, alerts) snapshot. Owned by no
//! one, recomputed each request; safe to call concurrently and repeatedly.

pub mod summary;

pub use summary::{DashboardSummary, TopSeller, summarize};
