//! SendContactMessageHandler - Command handler relaying a contact submission by email.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info};

use crate::domain::contact::{ContactMessage, ContactSubmission};
use crate::domain::foundation::{MessageId, ValidationError};
use crate::ports::{MailError, MailReceipt, MailTransport};

/// Command to relay one contact form submission.
#[derive(Debug, Clone)]
pub struct SendContactMessageCommand {
    pub submission: ContactSubmission,
}

/// Result of a successful relay.
#[derive(Debug, Clone)]
pub struct SendContactMessageResult {
    pub message_id: MessageId,
    pub receipt: MailReceipt,
}

/// Errors from relaying a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("invalid submission: {0}")]
    Invalid(#[from] ValidationError),

    #[error("delivery failed: {0}")]
    Delivery(#[from] MailError),
}

/// Handler for the contact relay.
///
/// Validates the submission, composes the email addressed to the relay
/// mailbox and makes exactly one delivery attempt.
pub struct SendContactMessageHandler {
    transport: Arc<dyn MailTransport>,
    mailbox: String,
}

impl SendContactMessageHandler {
    pub fn new(transport: Arc<dyn MailTransport>, mailbox: impl Into<String>) -> Self {
        Self {
            transport,
            mailbox: mailbox.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: SendContactMessageCommand,
    ) -> Result<SendContactMessageResult, ContactError> {
        // 1. Validate
        cmd.submission.validate()?;

        // 2. Compose
        let message = ContactMessage::compose(&cmd.submission, &self.mailbox);

        // 3. Deliver, once
        match self.transport.send(&message).await {
            Ok(receipt) => {
                info!(
                    message_id = %message.id,
                    transport = self.transport.name(),
                    provider_id = receipt.provider_id.as_deref().unwrap_or("-"),
                    "Contact message relayed"
                );
                Ok(SendContactMessageResult {
                    message_id: message.id,
                    receipt,
                })
            }
            Err(err) => {
                error!(
                    message_id = %message.id,
                    transport = self.transport.name(),
                    error = %err,
                    "Error sending email"
                );
                Err(ContactError::Delivery(err))
            }
        }
    }
}
