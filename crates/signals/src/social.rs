use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockpilot_core::ProductId;

/// One day of social sentiment for a product.
///
/// `sentiment` is in [-1, 1]; `volume` counts mentions and is never
/// negative. `trending` is set by the upstream source when mention volume
/// spikes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialSignal {
    pub date: NaiveDate,
    pub product_id: ProductId,
    pub sentiment: f64,
    pub volume: u64,
    pub trending: bool,
}
