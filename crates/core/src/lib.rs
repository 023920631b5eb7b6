//! `stockpilot-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (identifiers and the error
//! taxonomy) shared by every planning crate. No IO, no HTTP, no storage.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{AlertId, LocationId, ProductId};
