//! Forecast feed parser.

use chrono::NaiveDate;

use stockpilot_core::{DomainError, DomainResult, ProductId};

use crate::record::DailyForecastRecord;

/// Fixed field order: `date, productId, productName, currentStockLevel,
/// weatherImpact, socialImpact, predictedStock, price, revenue, dayNumber`.
pub const FEED_FIELD_COUNT: usize = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a raw feed into typed records, in input order.
///
/// Empty or whitespace-only input yields an empty vec. A line with the wrong
/// field count or an unparseable date fails the whole feed with a
/// [`DomainError::Parse`] carrying the 1-based line number. Numeric cells
/// that fail conversion become `NaN` and are *not* errors; rejecting
/// non-finite records is the caller's decision.
pub fn parse_feed(raw: &str) -> DomainResult<Vec<DailyForecastRecord>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for (idx, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        records.push(parse_line(idx + 1, line)?);
    }
    Ok(records)
}

fn parse_line(line_no: usize, line: &str) -> DomainResult<DailyForecastRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FEED_FIELD_COUNT {
        return Err(DomainError::parse(
            line_no,
            format!(
                "expected {FEED_FIELD_COUNT} fields, got {}",
                fields.len()
            ),
        ));
    }

    let date = NaiveDate::parse_from_str(fields[0].trim(), DATE_FORMAT)
        .map_err(|e| DomainError::parse(line_no, format!("bad date {:?}: {e}", fields[0].trim())))?;
    let product_id = ProductId::new(fields[1].trim())
        .map_err(|e| DomainError::parse(line_no, e.to_string()))?;

    Ok(DailyForecastRecord {
        date,
        product_id,
        product_name: fields[2].trim().to_string(),
        current_stock_level: numeric(fields[3]),
        weather_impact: numeric(fields[4]),
        social_impact: numeric(fields[5]),
        predicted_stock: numeric(fields[6]),
        price: numeric(fields[7]),
        revenue: numeric(fields[8]),
        day_number: numeric(fields[9]),
    })
}

/// Bad numeric cells deliberately flow through as NaN.
fn numeric(field: &str) -> f64 {
    field.trim().parse::<f64>().unwrap_or(f64::NAN)
}
