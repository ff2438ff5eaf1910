//! Shared error type across oilprice crates.

use thiserror::Error;

/// Stable error categories (used as the `kind` field in logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fetch failed, timed out, or returned a non-200 status.
    Network,
    /// Body or price cell could not be parsed.
    Parse,
    /// Locator matched no cells.
    NotFound,
    /// Invalid flags, config file, or locator.
    Config,
    /// Local socket failure (bind/serve).
    Io,
}

impl ErrorKind {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Network => "NETWORK",
            ErrorKind::Parse => "PARSE",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Config => "CONFIG",
            ErrorKind::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, OilPriceError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum OilPriceError {
    #[error("network: {0}")]
    Network(String),
    #[error("parse: {0}")]
    Parse(String),
    #[error("failed to find selector in document: {0}")]
    NotFound(String),
    #[error("config: {0}")]
    Config(String),
    #[error("io: {0}")]
    Io(String),
}

impl OilPriceError {
    /// Map the error to its stable category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OilPriceError::Network(_) => ErrorKind::Network,
            OilPriceError::Parse(_) => ErrorKind::Parse,
            OilPriceError::NotFound(_) => ErrorKind::NotFound,
            OilPriceError::Config(_) => ErrorKind::Config,
            OilPriceError::Io(_) => ErrorKind::Io,
        }
    }
}
