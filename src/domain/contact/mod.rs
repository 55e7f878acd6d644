//! Contact relay domain: the submitted form and the email composed from it.

mod message;
mod submission;

pub use message::{escape_html, ContactMessage, SUBJECT_PREFIX};
pub use submission::{
    is_plausible_email, ContactSubmission, MAX_EMAIL_CHARS, MAX_MESSAGE_CHARS,
    MAX_SHORT_FIELD_CHARS,
};
