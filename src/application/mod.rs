//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Reads (the content document) and writes (the contact relay) live in
//! separate handlers.

pub mod handlers;

pub use handlers::{
    ContactError, GetPortfolioHandler, GetPortfolioQuery, SendContactMessageCommand,
    SendContactMessageHandler, SendContactMessageResult,
};
