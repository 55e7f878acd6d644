//! Portfolio Site - Personal portfolio server and client state.
//!
//! The server publishes a static content document and relays contact form
//! submissions by email. The client side loads that document once per page,
//! falls back to built-in content when the API is unreachable, and drives the
//! contact form, project filter and navigation.

pub mod adapters;
pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
