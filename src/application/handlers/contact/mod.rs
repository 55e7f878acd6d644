//! Contact relay command handlers.

mod send_contact_message;

pub use send_contact_message::{
    ContactError, SendContactMessageCommand, SendContactMessageHandler,
    SendContactMessageResult,
};
