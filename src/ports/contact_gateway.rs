//! Contact gateway port.
//!
//! Client-side counterpart of the relay endpoint: submits the form fields
//! and reports whether the server accepted them.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::contact::ContactSubmission;

/// Port for submitting the contact form.
#[async_trait]
pub trait ContactGateway: Send + Sync {
    /// Submits once. `Ok` carries the server's confirmation message.
    async fn submit(&self, submission: &ContactSubmission) -> Result<String, GatewayError>;
}

/// Errors from submitting the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with an error status.
    #[error("server returned {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl GatewayError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a rejection error.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}
