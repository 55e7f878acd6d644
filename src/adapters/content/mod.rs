//! Content source implementations.
//!
//! - `StaticContentSource` - In-memory document the server hands out
//! - `load_document_file` - Reads a JSON/YAML document at startup
//! - `HttpContentSource` - Client-side fetch from `GET /api/portfolio`
//! - `FallbackContentSource` - Substitutes the built-in document on any error

mod fallback;
mod file;
mod http_source;
mod static_source;

pub use fallback::FallbackContentSource;
pub use file::load_document_file;
pub use http_source::HttpContentSource;
pub use static_source::StaticContentSource;
