//! HTTP content source - the client's fetch of `GET /api/portfolio`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::portfolio::ContentDocument;
use crate::ports::{ContentError, ContentSource};

/// Path of the content endpoint, relative to the API base URL.
pub const PORTFOLIO_PATH: &str = "/api/portfolio";

/// How long a content fetch may take before the page gives up on it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the content document from the API server.
#[derive(Debug, Clone)]
pub struct HttpContentSource {
    client: Client,
    base_url: String,
}

impl HttpContentSource {
    /// Creates a source for the API at `base_url` (e.g. `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ContentError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a source whose requests fail after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ContentError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates a source sharing an existing HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the content endpoint.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, PORTFOLIO_PATH)
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn load(&self) -> Result<ContentDocument, ContentError> {
        let response = self
            .client
            .get(self.url())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ContentError::network(format!("Request to {} timed out", self.url()))
                } else {
                    ContentError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<ContentDocument>()
            .await
            .map_err(|e| ContentError::malformed(e.to_string()))
    }
}
