//! Mail transport implementations.
//!
//! - `ResendMailTransport` - Production transport over the Resend HTTP API
//! - `UnconfiguredMailTransport` - Stand-in when credentials are missing
//! - `MockMailTransport` - Recording transport for tests

mod mock;
mod resend;
mod unconfigured;

pub use mock::MockMailTransport;
pub use resend::{ResendConfig, ResendMailTransport};
pub use unconfigured::UnconfiguredMailTransport;

use std::sync::Arc;

use tracing::warn;

use crate::config::EmailConfig;
use crate::ports::{MailError, MailTransport};

/// Builds the transport described by `config`.
///
/// Missing credentials yield an [`UnconfiguredMailTransport`] so the server
/// still starts; every relay attempt then fails with `NotConfigured`.
pub fn transport_from_config(config: &EmailConfig) -> Result<Arc<dyn MailTransport>, MailError> {
    if !config.is_configured() {
        warn!("Mail credentials missing; contact submissions will fail until configured");
        return Ok(Arc::new(UnconfiguredMailTransport));
    }

    let resend = ResendConfig::try_from(config)?;
    Ok(Arc::new(ResendMailTransport::new(resend)?))
}
