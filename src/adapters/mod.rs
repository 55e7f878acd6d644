//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `content` - Content sources (in-memory, content file, HTTP, fallback)
//! - `mail` - Mail transports (Resend HTTP API, unconfigured, mock)
//! - `contact` - Client-side contact form submission over HTTP
//! - `http` - Axum routes for the API and the static client bundle

pub mod contact;
pub mod content;
pub mod http;
pub mod mail;

pub use contact::HttpContactGateway;
pub use content::{FallbackContentSource, HttpContentSource, StaticContentSource};
pub use mail::{MockMailTransport, ResendMailTransport, UnconfiguredMailTransport};
