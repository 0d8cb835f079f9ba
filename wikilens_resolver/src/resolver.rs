use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use wikilens_core::{PageSummary, Script, SummaryProvider};

use crate::config::LookupConfig;
use crate::page::parse_summary;

/// Resolves sanitized lookup keys against the configured Wikipedia hosts.
///
/// Every transport, status or parse problem collapses into `None`: the
/// orchestrator just leaves that term off the card. Lookups are never
/// retried.
#[derive(Clone)]
pub struct WikipediaResolver {
    client: Client,
    config: LookupConfig,
}

impl WikipediaResolver {
    pub fn new(config: LookupConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Replace both base addresses, keeping the rest of the config.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.ja_base_url = base_url.to_string();
        self.config.en_base_url = base_url.to_string();
        self
    }

    /// Fetch one page body, or `None` on any transport or status failure.
    async fn fetch(&self, url: &str) -> Option<String> {
        let response = match self
            .client
            .get(url)
            .header("User-Agent", &self.config.user_agent)
            .header("Accept", "text/html")
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
        {
            Ok(response) => response,
            Err(e) => {
                debug!("Lookup fetch failed for {url}: {e}");
                return None;
            }
        };

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("Failed to read response body for {url}: {e}");
                return None;
            }
        };

        if bytes.len() > self.config.max_size {
            debug!(
                "Response too large for {url}: {} bytes (max: {})",
                bytes.len(),
                self.config.max_size
            );
            return None;
        }

        Some(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait]
impl SummaryProvider for WikipediaResolver {
    async fn resolve(&self, script: Script, term: &str) -> Option<PageSummary> {
        let url = format!("{}{}", self.config.base_url(script), term);
        let html = self.fetch(&url).await?;
        parse_summary(&html, &url)
    }
}
