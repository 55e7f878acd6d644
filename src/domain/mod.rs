//! Domain layer containing the portfolio's value types and pure logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `portfolio` - The content document, its built-in default and the project filter
//! - `contact` - Contact submissions and the outbound message built from them

pub mod contact;
pub mod foundation;
pub mod portfolio;
