use serde::{Deserialize, Serialize};

/// Weights applied when folding the impact scores into the replenishment
/// formula.
///
/// The blended output is an ad-hoc bonus/penalty count on the order quantity,
/// not sales units: weather is scaled by 10, social sentiment by 15, and both
/// are added straight into the recommended quantity. The weights live here as
/// configuration so they can be tuned without touching the formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub weather: f64,
    pub social: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            weather: 10.0,
            social: 15.0,
        }
    }
}

impl BlendWeights {
    /// Fold weather and social impact scores into one scalar adjustment.
    ///
    /// Inputs are nominally in [-1, 1] but are not clamped here, and neither
    /// is the output; extreme values are absorbed by the non-negativity clamp
    /// on the final recommended quantity.
    pub fn blend(&self, weather_impact: f64, social_impact: f64) -> f64 {
        weather_impact * self.weather + social_impact * self.social
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_weights_reproduce_observed_scaling() {
        let weights = BlendWeights::default();
        assert_eq!(weights.blend(0.2, 0.1), 3.5);
    }

    #[test]
    fn output_is_not_clamped() {
        let weights = BlendWeights::default();
        assert_eq!(weights.blend(-2.0, -2.0), -50.0);
        assert_eq!(weights.blend(3.0, 0.0), 30.0);
    }

    proptest! {
        /// Property: blending is linear in each input.
        #[test]
        fn blend_is_linear(w in -1.0f64..1.0, s in -1.0f64..1.0) {
            let weights = BlendWeights::default();
            let doubled = weights.blend(2.0 * w, 2.0 * s);
            prop_assert!((doubled - 2.0 * weights.blend(w, s)).abs() < 1e-9);
        }
    }
}
