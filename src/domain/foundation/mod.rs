//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the portfolio domain.

mod errors;
mod ids;
mod skill_level;

pub use errors::ValidationError;
pub use ids::MessageId;
pub use skill_level::SkillLevel;
