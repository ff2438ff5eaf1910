//! Price series definitions.
//!
//! A series pairs a CSS locator (where its price cells live on the page) with
//! the gauge it is published under. Series are fixed at startup.

use std::fmt;

use scraper::Selector;

use crate::error::{OilPriceError, Result};

/// Cells of the cash pricing table: third row, last column.
pub const CASH_LOCATOR: &str = "table.paywithcash tr:nth-child(3) td:last-child";
/// Cells of the credit pricing table: third row, last column.
pub const CREDIT_LOCATOR: &str = "table.paybycredit tr:nth-child(3) td:last-child";

/// Compiled CSS selector plus the source it was built from.
#[derive(Clone)]
pub struct Locator {
    source: String,
    selector: Selector,
}

impl Locator {
    /// Compile a locator. Invalid selectors are configuration errors.
    pub fn parse(source: &str) -> Result<Self> {
        let selector = Selector::parse(source)
            .map_err(|e| OilPriceError::Config(format!("invalid locator {source:?}: {e}")))?;
        Ok(Self {
            source: source.to_string(),
            selector,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }
}

impl fmt::Debug for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Locator").field(&self.source).finish()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// One independently tracked price metric.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    /// Logical name (e.g. "cash").
    pub name: String,
    /// Where the series' price cells are.
    pub locator: Locator,
    /// Gauge name the lowest price is published under.
    pub metric: String,
    /// `# HELP` text for the gauge.
    pub help: String,
}

impl PriceSeries {
    pub fn new(name: &str, locator: &str, metric: &str, help: &str) -> Result<Self> {
        Ok(Self {
            name: name.to_string(),
            locator: Locator::parse(locator)?,
            metric: metric.to_string(),
            help: help.to_string(),
        })
    }

    /// `cash` series published as `oil_lowest_price_cash`.
    pub fn cash() -> Result<Self> {
        Self::new(
            "cash",
            CASH_LOCATOR,
            "oil_lowest_price_cash",
            "The lowest cash price per gallon available in USD",
        )
    }

    /// `credit` series published as `oil_lowest_price_credit`.
    pub fn credit() -> Result<Self> {
        Self::new(
            "credit",
            CREDIT_LOCATOR,
            "oil_lowest_price_credit",
            "The lowest credit price per gallon available in USD",
        )
    }

    /// Single-series layout: the cash table published as `oil_lowest_price`.
    pub fn single() -> Result<Self> {
        Self::new(
            "cash",
            CASH_LOCATOR,
            "oil_lowest_price",
            "The lowest price per gallon available in USD",
        )
    }
}
