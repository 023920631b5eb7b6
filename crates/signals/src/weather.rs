use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockpilot_core::LocationId;

/// Observed or forecast weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Stormy => "stormy",
            WeatherCondition::Snowy => "snowy",
        }
    }

    /// Conditions that warrant an operational alert on their own, regardless
    /// of the elasticity score.
    pub fn is_severe(&self) -> bool {
        matches!(self, WeatherCondition::Stormy | WeatherCondition::Snowy)
    }
}

/// One day of weather for a location, with its pre-computed demand impact.
///
/// `impact` is a dimensionless sales-elasticity score, nominally in [-1, 1]
/// but not clamped at the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSignal {
    pub date: NaiveDate,
    pub location: LocationId,
    pub condition: WeatherCondition,
    pub temperature: f64,
    pub precipitation: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub impact: f64,
}
