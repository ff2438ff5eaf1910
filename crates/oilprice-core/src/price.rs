//! Price extraction (panic-free).
//!
//! Rules:
//! - A cell's price is its trimmed text minus the leading currency symbol.
//! - Every reading is rounded to cents before the minimum is taken.
//! - One unparsable cell fails the whole locator; the caller keeps the old value.

use scraper::Html;

use crate::error::{OilPriceError, Result};
use crate::series::Locator;

/// Round to 2 decimal places, half away from zero.
fn round_cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Parse one price cell such as `"$3.49"`.
pub fn parse_price(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    if chars.next().is_none() {
        return Err(OilPriceError::Parse("empty price cell".into()));
    }

    let amount = chars.as_str();
    let price: f64 = amount
        .parse()
        .map_err(|e| OilPriceError::Parse(format!("failed to convert {trimmed:?} to price: {e}")))?;

    if !price.is_finite() {
        return Err(OilPriceError::Parse(format!("price {trimmed:?} is not finite")));
    }

    Ok(round_cents(price))
}

/// Return the lowest price among all cells matched by `locator`.
pub fn extract_minimum_price(doc: &Html, locator: &Locator) -> Result<f64> {
    let mut matched = 0usize;
    let mut lowest = f64::MAX;
    let mut failure = None;

    for cell in doc.select(locator.selector()) {
        matched += 1;
        let text: String = cell.text().collect();
        match parse_price(&text) {
            Ok(price) => lowest = lowest.min(price),
            Err(e) => {
                tracing::error!(locator = %locator, cell = %text.trim(), error = %e, "failed to convert text to price");
                failure.get_or_insert(e);
            }
        }
    }

    if matched == 0 {
        return Err(OilPriceError::NotFound(locator.to_string()));
    }
    if let Some(e) = failure {
        return Err(e);
    }

    tracing::debug!(locator = %locator, cells = matched, price = lowest, "price cells parsed");
    Ok(lowest)
}
