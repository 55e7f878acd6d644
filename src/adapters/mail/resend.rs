//! Resend Mail Transport - Implementation of MailTransport over the Resend HTTP API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ResendConfig::new("me@example.com", api_key)
//!     .with_base_url("https://api.resend.com")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let transport = ResendMailTransport::new(config)?;
//! ```
//!
//! One `POST /emails` per message; no retries.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::EmailConfig;
use crate::domain::contact::ContactMessage;
use crate::ports::{MailError, MailReceipt, MailTransport};

/// Configuration for the Resend transport.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// Relay mailbox; used as the sender address.
    pub account: String,
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.resend.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ResendConfig {
    /// Creates a new configuration with the given mailbox and API key.
    pub fn new(account: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl TryFrom<&EmailConfig> for ResendConfig {
    type Error = MailError;

    fn try_from(config: &EmailConfig) -> Result<Self, Self::Error> {
        let api_key = config.api_key.as_ref().ok_or(MailError::NotConfigured)?;
        Ok(ResendConfig::new(config.account.clone(), api_key.expose_secret().clone())
            .with_base_url(config.api_base_url.clone())
            .with_timeout(config.timeout()))
    }
}

/// Resend API transport.
pub struct ResendMailTransport {
    config: ResendConfig,
    client: Client,
}

impl ResendMailTransport {
    /// Creates a new transport with the given configuration.
    pub fn new(config: ResendConfig) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| MailError::unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the send endpoint URL.
    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }

    /// Sends the request.
    async fn send_request(&self, request: &ResendEmailRequest<'_>) -> Result<Response, MailError> {
        self.client
            .post(self.emails_url())
            .bearer_auth(self.config.api_key())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MailError::network(format!(
                        "request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    MailError::network(format!("Connection failed: {}", e))
                } else {
                    MailError::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and body.
    async fn parse_response(response: Response) -> Result<MailReceipt, MailError> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), &body));
        }

        // Resend answers `{ "id": "..." }`; a body we cannot read is still a delivery.
        let provider_id = response
            .json::<ResendEmailResponse>()
            .await
            .ok()
            .map(|r| r.id);

        Ok(MailReceipt::new(provider_id))
    }
}

#[async_trait]
impl MailTransport for ResendMailTransport {
    async fn send(&self, message: &ContactMessage) -> Result<MailReceipt, MailError> {
        let request = ResendEmailRequest::from_message(message, &self.config.account);
        tracing::debug!(message_id = %message.id, url = %self.emails_url(), "Sending email via Resend");

        let response = self.send_request(&request).await?;
        Self::parse_response(response).await
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}

/// Maps a non-success HTTP status to a mail error.
fn error_for_status(status: u16, body: &str) -> MailError {
    match status {
        401 | 403 => MailError::AuthenticationFailed,
        429 => MailError::QuotaExceeded,
        400..=499 => MailError::rejected(provider_message(body).unwrap_or_else(|| {
            format!("status {}", status)
        })),
        500..=599 => MailError::unavailable(format!("Server error {}", status)),
        _ => MailError::network(format!("Unexpected status {}", status)),
    }
}

/// Extracts `message` from a Resend error body.
fn provider_message(body: &str) -> Option<String> {
    serde_json::from_str::<ResendErrorResponse>(body)
        .ok()
        .map(|e| e.message)
        .filter(|m| !m.is_empty())
}

// ════════════════════════════════════════════════════════════════════════════════
// Resend API Types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ResendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl<'a> ResendEmailRequest<'a> {
    fn from_message(message: &'a ContactMessage, sender: &'a str) -> Self {
        let from = if sender.is_empty() { message.from.as_str() } else { sender };
        Self {
            from,
            to: vec![message.to.as_str()],
            subject: &message.subject,
            html: &message.html,
            text: &message.text,
            reply_to: message.reply_to.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ResendEmailResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ResendErrorResponse {
    #[serde(default)]
    message: String,
}
