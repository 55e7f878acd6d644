//! HTTP adapter for the contact relay.
//!
//! - `POST /api/contact` - Relay a contact form submission by email

mod handlers;
mod routes;

pub use handlers::{
    send_contact, ContactApiError, ContactAppState, DELIVERY_FAILED_MESSAGE,
    INVALID_BODY_MESSAGE, SENT_MESSAGE,
};
pub use routes::contact_router;
