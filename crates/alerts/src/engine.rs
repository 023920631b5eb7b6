//! Deterministic alert rules over a product/signal snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpilot_catalog::Product;
use stockpilot_signals::{SocialSignal, WeatherSignal};

use crate::alert::{Alert, AlertKind, Severity};

/// Tunable thresholds of the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertPolicy {
    /// A product with `reorder_point <= stock < reorder_point * factor` is
    /// flagged as approaching its threshold.
    pub reorder_soon_factor: f64,
    /// Absolute weather impact at which a non-severe condition still raises
    /// an alert.
    pub weather_impact_threshold: f64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            reorder_soon_factor: 1.2,
            weather_impact_threshold: 0.5,
        }
    }
}

/// Evaluate every rule over the snapshot, producing zero or one alert per
/// triggering condition. A product may emit several alert kinds at once.
///
/// All alerts are created unread with the supplied `now`; the caller owns
/// retention (see [`crate::AlertBook`]).
pub fn evaluate(
    products: &[Product],
    weather: &[WeatherSignal],
    social: &[SocialSignal],
    now: DateTime<Utc>,
    policy: &AlertPolicy,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for product in products {
        alerts.extend(stock_alerts(product, policy, now));

        for signal in social.iter().filter(|s| s.trending) {
            if &signal.product_id == product.id() {
                alerts.push(Alert::new(
                    AlertKind::TrendingProduct,
                    Some(product.id().clone()),
                    format!(
                        "{} ({}) is trending on social channels: sentiment {:.2}, {} mentions on {}",
                        product.name(),
                        product.id(),
                        signal.sentiment,
                        signal.volume,
                        signal.date,
                    ),
                    Severity::Medium,
                    now,
                ));
            }
        }
    }

    for signal in weather {
        if signal.condition.is_severe()
            || signal.impact.abs() >= policy.weather_impact_threshold
        {
            alerts.push(Alert::new(
                AlertKind::WeatherAlert,
                None,
                format!(
                    "{} weather on {} near {} may shift demand (impact {:+.2})",
                    signal.condition.as_str(),
                    signal.date,
                    signal.location,
                    signal.impact,
                ),
                Severity::Medium,
                now,
            ));
        }
    }

    alerts
}

fn stock_alerts(product: &Product, policy: &AlertPolicy, now: DateTime<Utc>) -> Vec<Alert> {
    let mut alerts = Vec::new();
    let stock = product.stock_level();
    let reorder_point = product.reorder_point();

    if product.is_below_reorder_point() {
        let severity = if product.is_below_min_stock() {
            Severity::High
        } else {
            Severity::Medium
        };
        alerts.push(Alert::new(
            AlertKind::LowStock,
            Some(product.id().clone()),
            format!(
                "{} ({}) is below its reorder point: {} on hand, reorder at {}",
                product.name(),
                product.id(),
                stock,
                reorder_point,
            ),
            severity,
            now,
        ));
    } else if (stock as f64) < reorder_point as f64 * policy.reorder_soon_factor {
        alerts.push(Alert::new(
            AlertKind::Reorder,
            Some(product.id().clone()),
            format!(
                "{} ({}) is approaching its reorder point: {} on hand, reorder at {}",
                product.name(),
                product.id(),
                stock,
                reorder_point,
            ),
            Severity::Low,
            now,
        ));
    }

    if product.is_overstocked() {
        alerts.push(Alert::new(
            AlertKind::Overstock,
            Some(product.id().clone()),
            format!(
                "{} ({}) exceeds its maximum stock level: {} on hand, max {}",
                product.name(),
                product.id(),
                stock,
                product.max_stock_level(),
            ),
            Severity::Low,
            now,
        ));
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stockpilot_catalog::{ProductDraft, StockStatus};
    use stockpilot_core::{LocationId, ProductId};
    use stockpilot_signals::WeatherCondition;

    fn product(id: &str, stock: i64) -> Product {
        Product::new(ProductDraft {
            id: ProductId::new(id).unwrap(),
            sku: format!("SKU-{id}"),
            name: format!("{id}-name"),
            category: "Electronics".to_string(),
            unit_price: 100.0,
            stock_level: stock,
            min_stock_level: 10,
            max_stock_level: 50,
            reorder_point: 15,
            lead_time_days: 5,
            supplier: "Acme Wholesale".to_string(),
            sales_velocity: 1.0,
            location: LocationId::fallback(),
            recommended_order: None,
            market_signal: None,
            status: StockStatus::derive(stock, 15),
        })
        .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    fn kinds(alerts: &[Alert]) -> Vec<AlertKind> {
        alerts.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn stock_below_min_raises_high_severity_low_stock() {
        let alerts = evaluate(&[product("P101", 5)], &[], &[], Utc::now(), &AlertPolicy::default());
        assert_eq!(kinds(&alerts), vec![AlertKind::LowStock]);
        assert_eq!(alerts[0].severity, Severity::High);
        assert!(!alerts[0].read);
        assert!(alerts[0].message.contains("5 on hand"));
    }

    #[test]
    fn stock_between_min_and_reorder_is_medium_severity() {
        let alerts = evaluate(&[product("P101", 12)], &[], &[], Utc::now(), &AlertPolicy::default());
        assert_eq!(kinds(&alerts), vec![AlertKind::LowStock]);
        assert_eq!(alerts[0].severity, Severity::Medium);
    }

    #[test]
    fn stock_just_above_reorder_point_raises_reorder_soon() {
        // reorder_point = 15, factor 1.2 -> window is [15, 18).
        let alerts = evaluate(&[product("P101", 17)], &[], &[], Utc::now(), &AlertPolicy::default());
        assert_eq!(kinds(&alerts), vec![AlertKind::Reorder]);
        assert_eq!(alerts[0].severity, Severity::Low);

        let quiet = evaluate(&[product("P101", 18)], &[], &[], Utc::now(), &AlertPolicy::default());
        assert!(quiet.is_empty());
    }

    #[test]
    fn overstock_raises_low_severity() {
        let alerts = evaluate(&[product("P101", 60)], &[], &[], Utc::now(), &AlertPolicy::default());
        assert_eq!(kinds(&alerts), vec![AlertKind::Overstock]);
        assert_eq!(alerts[0].severity, Severity::Low);
    }

    #[test]
    fn trending_signal_raises_alert_for_matching_product_only() {
        let signal = SocialSignal {
            date: date(3),
            product_id: ProductId::new("P101").unwrap(),
            sentiment: 0.8,
            volume: 12_000,
            trending: true,
        };
        let quiet_signal = SocialSignal {
            date: date(3),
            product_id: ProductId::new("P202").unwrap(),
            sentiment: 0.9,
            volume: 9_000,
            trending: false,
        };

        let alerts = evaluate(
            &[product("P101", 20), product("P202", 20)],
            &[],
            &[signal, quiet_signal],
            Utc::now(),
            &AlertPolicy::default(),
        );

        assert_eq!(kinds(&alerts), vec![AlertKind::TrendingProduct]);
        assert_eq!(
            alerts[0].product_id.as_ref().unwrap().as_str(),
            "P101"
        );
        assert_eq!(alerts[0].severity, Severity::Medium);
    }

    #[test]
    fn severe_weather_always_alerts_mild_weather_needs_impact() {
        let storm = WeatherSignal {
            date: date(3),
            location: LocationId::fallback(),
            condition: WeatherCondition::Stormy,
            temperature: 12.0,
            precipitation: 30.0,
            humidity: 90.0,
            wind_speed: 80.0,
            impact: -0.1,
        };
        let drizzle = WeatherSignal {
            condition: WeatherCondition::Rainy,
            impact: -0.2,
            ..storm.clone()
        };
        let downpour = WeatherSignal {
            condition: WeatherCondition::Rainy,
            impact: -0.7,
            ..storm.clone()
        };

        let alerts = evaluate(
            &[],
            &[storm, drizzle, downpour],
            &[],
            Utc::now(),
            &AlertPolicy::default(),
        );

        assert_eq!(alerts.len(), 2);
        assert!(alerts.iter().all(|a| a.kind == AlertKind::WeatherAlert));
        assert!(alerts.iter().all(|a| a.product_id.is_none()));
        assert!(alerts[0].message.contains("stormy"));
        assert!(alerts[1].message.contains("-0.70"));
    }

    #[test]
    fn a_product_can_emit_multiple_alert_kinds_at_once() {
        let signal = SocialSignal {
            date: date(3),
            product_id: ProductId::new("P101").unwrap(),
            sentiment: 0.9,
            volume: 20_000,
            trending: true,
        };
        let alerts = evaluate(
            &[product("P101", 5)],
            &[],
            &[signal],
            Utc::now(),
            &AlertPolicy::default(),
        );
        assert_eq!(
            kinds(&alerts),
            vec![AlertKind::LowStock, AlertKind::TrendingProduct]
        );
    }
}
