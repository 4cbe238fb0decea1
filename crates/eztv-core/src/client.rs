//! HTTP client for EZTV
//!
//! This module provides the document fetch used by every query: one GET per
//! call, no retries and no throttling. The body is returned whatever the
//! status; only transport failures are errors.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};

use crate::error::Result;

/// Base URL for EZTV
const EZTV_BASE_URL: &str = "https://eztv.ag";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Configuration for the EZTV HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site root that request paths are appended to (default: https://eztv.ag)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: EZTV_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client for EZTV
pub struct EztvClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Site root without a trailing slash
    base_url: String,
}

impl EztvClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static(DEFAULT_ACCEPT_LANGUAGE),
        );

        let client = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Site root requests are made against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for a site path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch HTML content from an EZTV path
    ///
    /// # Arguments
    /// * `path` - Path on the site, appended verbatim (e.g., "/showlist/")
    ///
    /// # Returns
    /// The response body as a string, for error statuses as well
    ///
    /// # Errors
    /// - `EztvError::Fetch` - Connection, timeout or body read failure
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        tracing::debug!(url = %url, "fetching document");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "received response");

        let body = response.text().await?;
        tracing::trace!(url = %url, bytes = body.len(), "read response body");

        Ok(body)
    }
}
