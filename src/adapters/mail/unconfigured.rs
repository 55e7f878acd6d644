//! Transport used when no mail credentials are configured.

use async_trait::async_trait;

use crate::domain::contact::ContactMessage;
use crate::ports::{MailError, MailReceipt, MailTransport};

/// Fails every delivery with [`MailError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredMailTransport;

#[async_trait]
impl MailTransport for UnconfiguredMailTransport {
    async fn send(&self, _message: &ContactMessage) -> Result<MailReceipt, MailError> {
        Err(MailError::NotConfigured)
    }

    fn name(&self) -> &'static str {
        "unconfigured"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ContactSubmission;

    #[tokio::test]
    async fn always_reports_not_configured() {
        let message = ContactMessage::compose(
            &ContactSubmission::new("A", "a@b.com", "Hi", "Test"),
            "",
        );
        assert_eq!(
            UnconfiguredMailTransport.send(&message).await,
            Err(MailError::NotConfigured)
        );
    }
}
