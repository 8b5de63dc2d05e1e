//! HTTP-based rule table source.
//!
//! Fetches the table with transport caching disabled so every attempt sees
//! the current content.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};

use super::RuleSource;
use crate::error::LoadError;

/// Location of the curated campaign rule table.
pub const DEFAULT_RULES_URL: &str = "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/For%20Chat%202%20-%20Sheet1%20%286%29-VVLsv7PQq7nIYonIIF0cE81JbNmjFv.csv";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Source that GETs the rule table from an HTTP/HTTPS URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
    client: Option<reqwest::Client>,
}

impl HttpSource {
    /// Create a source for `url` with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
            client: None,
        }
    }

    /// Set the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a caller-built [`reqwest::Client`] (proxies, TLS settings).
    /// The per-request timeout still applies.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn client(&self) -> Result<reqwest::Client, LoadError> {
        match &self.client {
            Some(client) => Ok(client.clone()),
            None => reqwest::Client::builder()
                .build()
                .map_err(|e| LoadError::Http(format!("failed to build HTTP client: {e}"))),
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_RULES_URL)
    }
}

#[async_trait]
impl RuleSource for HttpSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        tracing::debug!(url = %self.url, "fetching rule table");

        let response = self
            .client()?
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LoadError::Http(format!("request failed for {}: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let content = response
            .text()
            .await
            .map_err(|e| LoadError::Http(format!("failed to read response body: {e}")))?;

        tracing::debug!(url = %self.url, bytes = content.len(), "fetched rule table");
        Ok(content)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
