//! Outbound email built from a contact submission.

use super::submission::{is_plausible_email, ContactSubmission};
use crate::domain::foundation::MessageId;

/// Prefix prepended to every relayed subject line.
pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// An email ready to hand to a mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: MessageId,
    pub from: String,
    pub to: String,
    /// The submitter's address, when it looks deliverable.
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl ContactMessage {
    /// Builds the relay email for `submission`, sent from and to `mailbox`.
    pub fn compose(submission: &ContactSubmission, mailbox: &str) -> Self {
        let reply_to = is_plausible_email(&submission.email)
            .then(|| submission.email.trim().to_string());

        Self {
            id: MessageId::new(),
            from: mailbox.to_string(),
            to: mailbox.to_string(),
            reply_to,
            subject: format!("{}{}", SUBJECT_PREFIX, submission.subject),
            html: render_html(submission),
            text: render_text(submission),
        }
    }
}

fn render_html(submission: &ContactSubmission) -> String {
    format!(
        "<h3>New contact form submission</h3>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Subject:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n",
        escape_html(&submission.name),
        escape_html(&submission.email),
        escape_html(&submission.subject),
        escape_html(&submission.message).replace('\n', "<br>"),
    )
}

fn render_text(submission: &ContactSubmission) -> String {
    format!(
        "New contact form submission\n\n\
         Name: {}\n\
         Email: {}\n\
         Subject: {}\n\n\
         Message:\n{}\n",
        submission.name, submission.email, submission.subject, submission.message,
    )
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
