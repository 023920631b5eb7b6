//! Seeded demo and fallback datasets.
//!
//! Generates relational planning data with a seeded RNG: same seed, same
//! dataset, every time. This is the injected randomness source for demos and
//! tests (the engines themselves are fully deterministic), and it doubles as
//! the explicit fallback dataset the surrounding system substitutes when an
//! upstream repository is unavailable.

use chrono::{Days, NaiveDate};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use stockpilot_catalog::{Product, ProductDraft, SalesRecord, StockStatus};
use stockpilot_core::{LocationId, ProductId};
use stockpilot_signals::{SocialSignal, WeatherCondition, WeatherSignal};

/// Seed used for the explicit fallback dataset.
pub const FALLBACK_SEED: u64 = 42;

const PRODUCTS: usize = 12;
const HISTORY_DAYS: u64 = 30;

const PRODUCT_NAMES: &[&str] = &[
    "Laptop",
    "Wireless Mouse",
    "Mechanical Keyboard",
    "USB-C Hub",
    "Espresso Machine",
    "Desk Fan",
    "Air Purifier",
    "Standing Desk",
    "Monitor Arm",
    "Webcam",
    "Desk Lamp",
    "Office Chair",
];

const CATEGORIES: &[&str] = &["Electronics", "Appliances", "Furniture", "Accessories"];

const SUPPLIERS: &[&str] = &[
    "Acme Wholesale",
    "Northline Supply",
    "Harbor Trade Co",
    "Summit Goods",
];

const LOCATIONS: &[&str] = &["MAIN", "WEST-2", "EAST-1"];

const CONDITIONS: &[WeatherCondition] = &[
    WeatherCondition::Sunny,
    WeatherCondition::Cloudy,
    WeatherCondition::Rainy,
    WeatherCondition::Stormy,
    WeatherCondition::Snowy,
];

/// A complete, self-consistent planning dataset.
#[derive(Debug, Clone)]
pub struct DemoDataset {
    pub products: Vec<Product>,
    pub sales: Vec<SalesRecord>,
    /// Raw feed text in the upstream wire format, so the parser path gets
    /// exercised too.
    pub forecast_feed: String,
    pub weather: Vec<WeatherSignal>,
    pub social: Vec<SocialSignal>,
}

/// Generate the dataset for `seed`.
pub fn demo_dataset(seed: u64) -> DemoDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let base_date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();

    let products: Vec<Product> = (0..PRODUCTS).map(|i| gen_product(&mut rng, i)).collect();

    let mut sales = Vec::new();
    let mut feed = String::new();
    let mut social = Vec::new();

    for day in 0..HISTORY_DAYS {
        let date = base_date + Days::new(day);
        for (i, product) in products.iter().enumerate() {
            let quantity = rng.gen_range(0..12);
            sales.push(
                SalesRecord::new(
                    date,
                    product.id().clone(),
                    quantity,
                    quantity as f64 * product.unit_price(),
                )
                .expect("generated sale is valid"),
            );

            let predicted = rng.gen_range(1.0..10.0);
            let weather_impact = rng.gen_range(-0.5..0.5);
            let social_impact = rng.gen_range(-0.5..0.5);
            let stock = rng.gen_range(0..120);
            feed.push_str(&format!(
                "{date},{id},{name},{stock},{weather_impact:.2},{social_impact:.2},{predicted:.1},{price},{revenue:.0},{day_no}\n",
                id = product.id(),
                name = product.name(),
                price = product.unit_price(),
                revenue = predicted * product.unit_price(),
                day_no = day + 1,
            ));

            if rng.gen_bool(0.05) {
                social.push(SocialSignal {
                    date,
                    product_id: product.id().clone(),
                    sentiment: rng.gen_range(-1.0..1.0),
                    volume: rng.gen_range(100..50_000),
                    trending: rng.gen_bool(0.4),
                });
            }
        }
    }

    let mut weather = Vec::new();
    for day in 0..HISTORY_DAYS {
        let date = base_date + Days::new(day);
        for location in LOCATIONS {
            let condition = CONDITIONS[rng.gen_range(0..CONDITIONS.len())];
            weather.push(WeatherSignal {
                date,
                location: LocationId::new(*location).expect("fixture location id"),
                condition,
                temperature: rng.gen_range(-5.0..35.0),
                precipitation: rng.gen_range(0.0..40.0),
                humidity: rng.gen_range(20.0..100.0),
                wind_speed: rng.gen_range(0.0..90.0),
                impact: rng.gen_range(-1.0..1.0),
            });
        }
    }

    DemoDataset {
        products,
        sales,
        forecast_feed: feed,
        weather,
        social,
    }
}

/// The dataset the surrounding system substitutes when an upstream source is
/// unavailable. Substitution is always explicit; the engines cannot tell the
/// difference.
pub fn fallback_dataset() -> DemoDataset {
    demo_dataset(FALLBACK_SEED)
}

fn gen_product(rng: &mut StdRng, index: usize) -> Product {
    let name = PRODUCT_NAMES[index % PRODUCT_NAMES.len()];
    let min = rng.gen_range(5..20);
    let reorder = min + rng.gen_range(0..15);
    let max = reorder + rng.gen_range(20..80);
    // Roughly a quarter of the fleet starts below its reorder point.
    let stock = if rng.gen_bool(0.25) {
        rng.gen_range(0..reorder.max(1))
    } else {
        rng.gen_range(reorder..max + 20)
    };

    Product::new(ProductDraft {
        id: ProductId::new(format!("P{}", 101 + index)).expect("fixture product id"),
        sku: format!("SKU-{:04}", 101 + index),
        name: name.to_string(),
        category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string(),
        unit_price: rng.gen_range(10.0..1500.0f64).round(),
        stock_level: stock,
        min_stock_level: min,
        max_stock_level: max,
        reorder_point: reorder,
        lead_time_days: rng.gen_range(2..14),
        supplier: SUPPLIERS[rng.gen_range(0..SUPPLIERS.len())].to_string(),
        sales_velocity: (rng.gen_range(0.5..8.0f64) * 10.0).round() / 10.0,
        location: LocationId::new(LOCATIONS[rng.gen_range(0..LOCATIONS.len())])
            .expect("fixture location id"),
        recommended_order: None,
        market_signal: None,
        status: StockStatus::derive(stock, reorder),
    })
    .expect("generated product satisfies invariants")
}
