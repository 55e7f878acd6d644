//! Mock mail transport for testing.
//!
//! Records every message handed to it and optionally fails each delivery
//! with a configured error, so relay logic can be tested without a real
//! mail provider.
//!
//! # Example
//!
//! ```ignore
//! let transport = Arc::new(MockMailTransport::new());
//! let handler = SendContactMessageHandler::new(transport.clone(), "me@example.com");
//!
//! handler.handle(cmd).await?;
//! assert_eq!(transport.sent_messages().len(), 1);
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::contact::ContactMessage;
use crate::ports::{MailError, MailReceipt, MailTransport};

/// Mock mail transport for testing.
#[derive(Debug, Clone, Default)]
pub struct MockMailTransport {
    /// Messages delivered successfully.
    sent: Arc<Mutex<Vec<ContactMessage>>>,
    /// Number of delivery attempts, successful or not.
    attempts: Arc<Mutex<usize>>,
    /// Error returned from every attempt, if set.
    failure: Option<MailError>,
    /// Provider id placed in successful receipts.
    provider_id: Option<String>,
}

impl MockMailTransport {
    /// Creates a transport that accepts every message.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport that fails every attempt with `error`.
    pub fn failing(error: MailError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Sets the provider id returned in receipts.
    pub fn with_provider_id(mut self, id: impl Into<String>) -> Self {
        self.provider_id = Some(id.into());
        self
    }

    /// Returns all successfully delivered messages.
    pub fn sent_messages(&self) -> Vec<ContactMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Returns the number of delivery attempts.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl MailTransport for MockMailTransport {
    async fn send(&self, message: &ContactMessage) -> Result<MailReceipt, MailError> {
        *self.attempts.lock().unwrap() += 1;

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        self.sent.lock().unwrap().push(message.clone());
        Ok(MailReceipt::new(self.provider_id.clone()))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
