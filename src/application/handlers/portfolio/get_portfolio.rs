//! GetPortfolioHandler - Query handler for the content document.

use std::sync::Arc;

use crate::domain::portfolio::ContentDocument;
use crate::ports::{ContentError, ContentSource};

/// Query for the full content document. Takes no parameters.
#[derive(Debug, Clone, Default)]
pub struct GetPortfolioQuery;

/// Handler for reading the content document.
pub struct GetPortfolioHandler {
    source: Arc<dyn ContentSource>,
}

impl GetPortfolioHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self, _query: GetPortfolioQuery) -> Result<ContentDocument, ContentError> {
        self.source.load().await
    }
}
