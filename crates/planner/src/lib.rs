//! Planning orchestration.
//!
//! [`PlanningService`] is the seam the presentation layer talks to: it pulls
//! snapshots out of the repositories, runs the deterministic engines, and
//! owns the two explicit side effects the system has (stock increment on
//! order placement, alert retention).

pub mod service;

pub use service::{PlaceOrder, PlanningService};
