//! HTTP handlers for the contact relay.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::dto::{ErrorResponse, MessageResponse};
use crate::application::handlers::{
    ContactError, SendContactMessageCommand, SendContactMessageHandler,
};
use crate::domain::contact::ContactSubmission;
use crate::ports::MailTransport;

/// Body of a successful relay.
pub const SENT_MESSAGE: &str = "Email sent successfully!";
/// Body of a failed delivery. Provider details stay in the logs.
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send email";
/// Body of a request that is not a JSON object.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the contact relay.
#[derive(Clone)]
pub struct ContactAppState {
    pub mail_transport: Arc<dyn MailTransport>,
    /// Relay mailbox: both sender and recipient of every message.
    pub mailbox: String,
}

impl ContactAppState {
    pub fn new(mail_transport: Arc<dyn MailTransport>, mailbox: impl Into<String>) -> Self {
        Self {
            mail_transport,
            mailbox: mailbox.into(),
        }
    }

    pub fn send_contact_message_handler(&self) -> SendContactMessageHandler {
        SendContactMessageHandler::new(self.mail_transport.clone(), self.mailbox.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/contact - Relay a contact form submission by email
pub async fn send_contact(
    State(state): State<ContactAppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<impl IntoResponse, ContactApiError> {
    let Json(submission) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected contact request body");
        ContactApiError::InvalidBody
    })?;

    let handler = state.send_contact_message_handler();
    handler
        .handle(SendContactMessageCommand { submission })
        .await?;

    Ok(Json(MessageResponse::new(SENT_MESSAGE)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for the contact relay.
#[derive(Debug)]
pub enum ContactApiError {
    InvalidBody,
    Contact(ContactError),
}

impl From<ContactError> for ContactApiError {
    fn from(err: ContactError) -> Self {
        ContactApiError::Contact(err)
    }
}

impl IntoResponse for ContactApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ContactApiError::InvalidBody => {
                (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE.to_string())
            }
            ContactApiError::Contact(ContactError::Invalid(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            ContactApiError::Contact(ContactError::Delivery(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                DELIVERY_FAILED_MESSAGE.to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
