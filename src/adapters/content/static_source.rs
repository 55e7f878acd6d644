//! In-memory content source used by the server.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ContentConfig;
use crate::domain::portfolio::{default_document, ContentDocument};
use crate::ports::{ContentError, ContentSource};

use super::file::load_document_file;

/// Serves one immutable document created at startup.
#[derive(Debug, Clone)]
pub struct StaticContentSource {
    document: Arc<ContentDocument>,
}

impl StaticContentSource {
    /// Serves `document`.
    pub fn new(document: ContentDocument) -> Self {
        Self {
            document: Arc::new(document),
        }
    }

    /// Serves the built-in document.
    pub fn with_default() -> Self {
        Self::new(default_document().clone())
    }

    /// Serves the configured content file, or the built-in document when
    /// no file is configured.
    pub fn from_config(config: &ContentConfig) -> Result<Self, ContentError> {
        match &config.path {
            Some(path) => Ok(Self::new(load_document_file(path)?)),
            None => Ok(Self::with_default()),
        }
    }

    /// The shared document.
    pub fn document(&self) -> &Arc<ContentDocument> {
        &self.document
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn load(&self) -> Result<ContentDocument, ContentError> {
        Ok(self.document.as_ref().clone())
    }
}
