//! Email configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::contact::is_plausible_email;

/// Email configuration (Resend HTTP API)
///
/// `account` is the relay mailbox: contact messages are sent from it and
/// delivered to it. Missing credentials do not block startup; the relay
/// endpoint then answers every submission with a failure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Mailbox address used as sender and recipient
    #[serde(default)]
    pub account: String,

    /// Resend API key
    #[serde(default)]
    pub api_key: Option<Secret<String>>,

    /// API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl EmailConfig {
    /// True when both the mailbox and the API key are present
    pub fn is_configured(&self) -> bool {
        !self.account.trim().is_empty()
            && self
                .api_key
                .as_ref()
                .map(|key| !key.expose_secret().trim().is_empty())
                .unwrap_or(false)
    }

    /// Outbound request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.account.trim().is_empty() && !is_plausible_email(&self.account) {
            return Err(ValidationError::InvalidMailAccount);
        }
        if !(self.api_base_url.starts_with("https://") || self.api_base_url.starts_with("http://")) {
            return Err(ValidationError::InvalidMailApiUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidMailTimeout);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            account: String::new(),
            api_key: None,
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> EmailConfig {
        EmailConfig {
            account: "me@example.com".to_string(),
            api_key: Some(Secret::new("re_abcd1234".to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.api_base_url, "https://api.resend.com");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(!config.is_configured());
    }

    #[test]
    fn test_is_configured_requires_both_credentials() {
        assert!(configured().is_configured());

        let no_key = EmailConfig {
            api_key: None,
            ..configured()
        };
        assert!(!no_key.is_configured());

        let blank_key = EmailConfig {
            api_key: Some(Secret::new("  ".to_string())),
            ..configured()
        };
        assert!(!blank_key.is_configured());

        let no_account = EmailConfig {
            account: String::new(),
            ..configured()
        };
        assert!(!no_account.is_configured());
    }

    #[test]
    fn test_unconfigured_is_still_valid() {
        assert!(EmailConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_account() {
        let config = EmailConfig {
            account: "invalid-email".to_string(),
            ..configured()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMailAccount));
    }

    #[test]
    fn test_validation_invalid_base_url() {
        let config = EmailConfig {
            api_base_url: "api.resend.com".to_string(),
            ..configured()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMailApiUrl));
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = EmailConfig {
            timeout_secs: 0,
            ..configured()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidMailTimeout));
    }

    #[test]
    fn test_api_key_is_redacted_in_debug() {
        let rendered = format!("{:?}", configured());
        assert!(!rendered.contains("re_abcd1234"));
    }
}
