//! Reorder recommendation calculator.
//!
//! Turns a product plus its forecast history into a single recommended order
//! quantity with a full reasoning breakdown, so the number is auditable
//! without recomputation. Deterministic: same inputs, same recommendation.

pub mod recommend;

pub use recommend::{
    QuantitySource, ReorderReasoning, ReorderRecommendation, ReplenishConfig, recommend,
};
