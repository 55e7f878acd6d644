//! Contact form state.
//!
//! Field values, the in-flight flag and the status banner. The only local
//! check is "required"; everything else is left to the relay endpoint.

use thiserror::Error;
use tracing::error;

use crate::domain::contact::ContactSubmission;
use crate::ports::{ContactGateway, GatewayError};

/// One editable input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// Input `name` attribute, matching the JSON key posted to the relay.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your full name",
            FormField::Email => "your.email@example.com",
            FormField::Subject => "What's this about?",
            FormField::Message => "Tell me about your project or just say hello!",
        }
    }
}

/// Outcome banner of the last submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmitStatus {
    /// Banner text, if any.
    pub fn message(self) -> Option<&'static str> {
        match self {
            SubmitStatus::Idle => None,
            SubmitStatus::Success => Some("Message sent successfully! I'll get back to you soon."),
            SubmitStatus::Error => {
                Some("Failed to send message. Please try again or contact me directly.")
            }
        }
    }
}

/// Reasons a submission is not started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    is_submitting: bool,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Email => &self.fields.email,
            FormField::Subject => &self.fields.subject,
            FormField::Message => &self.fields.message,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.fields.name,
            FormField::Email => &mut self.fields.email,
            FormField::Subject => &mut self.fields.subject,
            FormField::Message => &mut self.fields.message,
        }
    }

    /// Blank fields the view should mark as required.
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.field(*field).trim().is_empty())
            .collect()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Submit button text.
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    /// Marks a submission as in flight and hands back the values to send.
    ///
    /// Clears the previous banner. Fails while another submission is in
    /// flight.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, FormError> {
        if self.is_submitting {
            return Err(FormError::AlreadySubmitting);
        }
        self.is_submitting = true;
        self.status = SubmitStatus::Idle;
        Ok(self.fields.clone())
    }

    /// Records the outcome of the in-flight submission.
    ///
    /// Success clears every field; failure keeps them for another attempt.
    pub fn finish_submit(&mut self, outcome: Result<String, GatewayError>) {
        match outcome {
            Ok(_) => {
                self.status = SubmitStatus::Success;
                self.fields = ContactSubmission::default();
            }
            Err(err) => {
                error!(error = %err, "Error sending message");
                self.status = SubmitStatus::Error;
            }
        }
        self.is_submitting = false;
    }

    /// Sends the form once through `gateway`.
    pub async fn submit(&mut self, gateway: &dyn ContactGateway) -> Result<SubmitStatus, FormError> {
        let submission = self.begin_submit()?;
        let outcome = gateway.submit(&submission).await;
        self.finish_submit(outcome);
        Ok(self.status)
    }
}
