//! HTTP contact gateway - the client's `POST /api/contact`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::contact::ContactSubmission;
use crate::ports::{ContactGateway, GatewayError};

/// Path of the relay endpoint, relative to the API base URL.
pub const CONTACT_PATH: &str = "/api/contact";

/// How long a submission may wait for the relay's answer.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Posts contact submissions to the API server.
#[derive(Debug, Clone)]
pub struct HttpContactGateway {
    client: Client,
    base_url: String,
}

/// Either shape the relay endpoint answers with.
#[derive(Debug, Deserialize)]
struct RelayResponse {
    message: Option<String>,
    error: Option<String>,
}

impl HttpContactGateway {
    /// Creates a gateway for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a gateway whose submissions fail after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates a gateway sharing an existing HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the relay endpoint.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, CONTACT_PATH)
    }
}

#[async_trait]
impl ContactGateway for HttpContactGateway {
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(self.url())
            .json(submission)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::network(format!("Request to {} timed out", self.url()))
                } else {
                    GatewayError::network(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response.json::<RelayResponse>().await.ok();

        if status.is_success() {
            Ok(body.and_then(|b| b.message).unwrap_or_default())
        } else {
            let message = body
                .and_then(|b| b.error)
                .unwrap_or_else(|| status.to_string());
            Err(GatewayError::rejected(status.as_u16(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(
            HttpContactGateway::new("http://localhost:5000/").unwrap().url(),
            "http://localhost:5000/api/contact"
        );
    }

    #[test]
    fn relay_response_accepts_either_shape() {
        let ok: RelayResponse =
            serde_json::from_str(r#"{"message":"Email sent successfully!"}"#).unwrap();
        assert_eq!(ok.message.as_deref(), Some("Email sent successfully!"));
        assert!(ok.error.is_none());

        let err: RelayResponse = serde_json::from_str(r#"{"error":"Failed to send email"}"#).unwrap();
        assert_eq!(err.error.as_deref(), Some("Failed to send email"));
    }

    #[tokio::test]
    async fn stalled_relay_times_out_as_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        let gateway =
            HttpContactGateway::with_timeout(format!("http://{}", addr), Duration::from_millis(200))
                .unwrap();
        let submission = ContactSubmission::new("A", "a@b.com", "Hi", "Test");

        let result = tokio::time::timeout(Duration::from_secs(5), gateway.submit(&submission))
            .await
            .expect("submit should give up before the outer deadline");

        assert!(matches!(result, Err(GatewayError::Network(_))));
    }
}
