//! Public page fetch client
//!
//! Wraps all outbound HTTP GETs to the public blog site.

use crate::config::Config;
use crate::error::ExtractError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Fetches the HTML of a public page.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// One GET; any transport failure or non-2xx status is an error.
    async fn fetch_html(&self, url: &str) -> Result<String, ExtractError>;
}

/// reqwest-backed [`PageFetcher`] with a bounded timeout.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, ExtractError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ExtractError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::transport(url, format!("HTTP {}", status)));
        }

        let html = response
            .text()
            .await
            .map_err(|e| ExtractError::transport(url, e))?;

        debug!("fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
