//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContentSource` - Yields the content document (static on the server,
//!   fetched over HTTP on the client)
//! - `MailTransport` - Delivers a composed contact message
//! - `ContactGateway` - Client-side submission of the contact form

mod contact_gateway;
mod content_source;
mod mail_transport;

pub use contact_gateway::{ContactGateway, GatewayError};
pub use content_source::{ContentError, ContentSource};
pub use mail_transport::{MailError, MailReceipt, MailTransport};
