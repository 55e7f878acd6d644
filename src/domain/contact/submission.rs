//! Contact form submission.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Longest accepted name or subject, in characters.
pub const MAX_SHORT_FIELD_CHARS: usize = 200;
/// Longest accepted email address (RFC 5321 path limit).
pub const MAX_EMAIL_CHARS: usize = 254;
/// Longest accepted message body, in characters.
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// The four fields posted by the contact form.
///
/// Missing JSON fields deserialize as empty strings so that the relay can
/// answer with a field-specific validation error instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Checks presence, email shape and field lengths.
    ///
    /// Fields are checked in form order so the first reported error matches
    /// the first field a user would need to fix.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name, MAX_SHORT_FIELD_CHARS)?;
        require("email", &self.email, MAX_EMAIL_CHARS)?;
        if !is_plausible_email(&self.email) {
            return Err(ValidationError::invalid_format(
                "email",
                "expected an address like name@example.com",
            ));
        }
        require("subject", &self.subject, MAX_SHORT_FIELD_CHARS)?;
        require("message", &self.message, MAX_MESSAGE_CHARS)?;
        Ok(())
    }

    /// Names of the fields that are blank, in form order.
    pub fn blank_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

fn require(field: &'static str, value: &str, max_chars: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if value.chars().count() > max_chars {
        return Err(ValidationError::too_long(field, max_chars));
    }
    Ok(())
}

/// One `@`, non-empty local part, dotted domain, no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactSubmission {
        ContactSubmission::new("A", "a@b.com", "Hi", "Test")
    }

    #[test]
    fn valid_submission_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected_first() {
        let submission = ContactSubmission {
            name: "   ".to_string(),
            subject: String::new(),
            ..valid()
        };
        assert_eq!(
            submission.validate(),
            Err(ValidationError::empty_field("name"))
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["nobody", "a@b", "@b.com", "a@@b.com", "a b@c.com", "a@.com"] {
            let submission = ContactSubmission {
                email: email.to_string(),
                ..valid()
            };
            assert!(
                matches!(
                    submission.validate(),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "expected {} to be rejected",
                email
            );
        }
    }

    #[test]
    fn overlong_message_is_rejected() {
        let submission = ContactSubmission {
            message: "x".repeat(MAX_MESSAGE_CHARS + 1),
            ..valid()
        };
        assert_eq!(
            submission.validate(),
            Err(ValidationError::too_long("message", MAX_MESSAGE_CHARS))
        );
    }

    #[test]
    fn length_limits_count_characters_not_bytes() {
        let submission = ContactSubmission {
            subject: "é".repeat(MAX_SHORT_FIELD_CHARS),
            ..valid()
        };
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn blank_fields_lists_missing_in_form_order() {
        let submission = ContactSubmission::new("", "a@b.com", " ", "");
        assert_eq!(submission.blank_fields(), vec!["name", "subject", "message"]);
        assert!(valid().blank_fields().is_empty());
    }

    #[test]
    fn missing_json_fields_default_to_empty() {
        let submission: ContactSubmission = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert_eq!(submission.name, "A");
        assert_eq!(submission.email, "");
        assert_eq!(submission.blank_fields(), vec!["email", "subject", "message"]);
    }
}
