//! Catalog domain: products, sales history, and the external inventory
//! snapshot rows.
//!
//! Everything here is deterministic domain data (no IO, no HTTP, no storage).
//! The product carries the replenishment parameters the planning engines
//! read; the snapshot row module owns the defaulting rules that guarantee
//! those parameters are always complete.

pub mod product;
pub mod row;
pub mod sales;

pub use product::{MarketSignal, Product, ProductDraft, StockStatus};
pub use row::{InventoryRow, RowDefaults};
pub use sales::SalesRecord;
