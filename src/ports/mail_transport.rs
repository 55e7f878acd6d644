//! Mail transport port.
//!
//! The relay endpoint hands a composed [`ContactMessage`] to a transport and
//! reports success or failure. Transports make exactly one delivery attempt.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::contact::ContactMessage;

/// Port for delivering contact messages as email.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Delivers one message.
    async fn send(&self, message: &ContactMessage) -> Result<MailReceipt, MailError>;

    /// Short transport name for logs.
    fn name(&self) -> &'static str;
}

/// Acknowledgement returned by the transport on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailReceipt {
    /// Provider-assigned id, when the provider returns one.
    pub provider_id: Option<String>,
}

impl MailReceipt {
    pub fn new(provider_id: Option<String>) -> Self {
        Self { provider_id }
    }
}

/// Errors from mail delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    /// Credentials are missing from configuration.
    #[error("mail transport is not configured")]
    NotConfigured,

    /// Provider rejected the credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Sending quota or rate limit exhausted.
    #[error("quota exceeded")]
    QuotaExceeded,

    /// Provider refused the message.
    #[error("message rejected: {0}")]
    Rejected(String),

    /// Provider is unavailable.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),
}

impl MailError {
    /// Creates a rejection error.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Returns true when the failure lies with this server's setup rather
    /// than the provider or the network.
    pub fn is_configuration_problem(&self) -> bool {
        matches!(self, Self::NotConfigured | Self::AuthenticationFailed)
    }
}
