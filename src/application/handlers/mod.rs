//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod contact;
pub mod portfolio;

pub use contact::{
    ContactError, SendContactMessageCommand, SendContactMessageHandler,
    SendContactMessageResult,
};
pub use portfolio::{GetPortfolioHandler, GetPortfolioQuery};
