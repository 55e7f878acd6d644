//! Content source port.
//!
//! A single capability for obtaining the content document. The server reads
//! an in-memory document; the client fetches it from the API and wraps the
//! fetch in a fallback so pages never see an error.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::portfolio::ContentDocument;

/// Port for loading the content document.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Loads the full document.
    async fn load(&self) -> Result<ContentDocument, ContentError>;
}

#[async_trait]
impl<T: ContentSource + ?Sized> ContentSource for Arc<T> {
    async fn load(&self) -> Result<ContentDocument, ContentError> {
        (**self).load().await
    }
}

/// Errors from loading the content document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The body could not be decoded as a content document.
    #[error("malformed content document: {0}")]
    Malformed(String),

    /// A content file could not be read.
    #[error("failed to read content file {path}: {message}")]
    Io { path: String, message: String },
}

impl ContentError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a malformed-body error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }

    /// Creates a file read error.
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }
}
