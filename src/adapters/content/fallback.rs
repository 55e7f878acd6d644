//! Fallback content source.
//!
//! Wraps any source and replaces every failure with the built-in document,
//! so a page always has a name and title to show. Failures are logged and
//! never retried.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::portfolio::{default_document, ContentDocument};
use crate::ports::{ContentError, ContentSource};

/// Source that never fails: errors from `inner` yield the built-in document.
#[derive(Debug, Clone)]
pub struct FallbackContentSource<S> {
    inner: S,
}

impl<S: ContentSource> FallbackContentSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Loads from the inner source, substituting the built-in document on error.
    pub async fn load_or_default(&self) -> ContentDocument {
        match self.inner.load().await {
            Ok(document) => document,
            Err(err) => {
                warn!(error = %err, "Error fetching portfolio data; using built-in content");
                default_document().clone()
            }
        }
    }

    /// The wrapped source.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: ContentSource> ContentSource for FallbackContentSource<S> {
    async fn load(&self) -> Result<ContentDocument, ContentError> {
        Ok(self.load_or_default().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::content::StaticContentSource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingSource {
        calls: AtomicUsize,
    }

    impl FailingSource {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ContentSource for FailingSource {
        async fn load(&self) -> Result<ContentDocument, ContentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ContentError::network("connection refused"))
        }
    }

    #[tokio::test]
    async fn passes_through_successful_loads() {
        let mut custom = default_document().clone();
        custom.about.name = "Grace Hopper".to_string();
        let source = FallbackContentSource::new(StaticContentSource::new(custom));

        let document = source.load().await.unwrap();

        assert_eq!(document.about.name, "Grace Hopper");
    }

    #[tokio::test]
    async fn substitutes_default_on_failure() {
        let source = FallbackContentSource::new(FailingSource::new());

        let document = source.load().await.unwrap();

        assert_eq!(&document, default_document());
        assert!(!document.about.name.is_empty());
        assert!(!document.about.title.is_empty());
    }

    #[tokio::test]
    async fn does_not_retry_failed_load() {
        let source = FallbackContentSource::new(FailingSource::new());

        source.load_or_default().await;

        assert_eq!(source.inner().calls.load(Ordering::SeqCst), 1);
    }
}
