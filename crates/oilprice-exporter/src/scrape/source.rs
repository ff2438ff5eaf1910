use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use oilprice_core::error::{OilPriceError, Result};

/// Where scrape cycles get their HTML from.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the page body. Anything but a 200 response is a `Network` error.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Plain HTTP GET via `reqwest`.
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| OilPriceError::Config(format!("http client init failed: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| OilPriceError::Network(format!("failed to make http request: {e}")))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(OilPriceError::Network(format!(
                "expected status code 200, got {}",
                status.as_u16()
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| OilPriceError::Network(format!("failed to read response body: {e}")))?;

        String::from_utf8(body.to_vec())
            .map_err(|e| OilPriceError::Parse(format!("response body is not valid UTF-8: {e}")))
    }
}
