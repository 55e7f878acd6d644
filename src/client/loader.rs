//! Page content loading.

use std::sync::Arc;

use crate::adapters::content::FallbackContentSource;
use crate::domain::portfolio::ContentDocument;
use crate::ports::ContentSource;

/// Where a page is in its single content load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Arc<ContentDocument>),
}

/// Loads the content document once per page mount.
///
/// Failed loads are replaced with the built-in document, so a mounted page
/// is always `Ready` with something to render.
pub struct PageLoader<S> {
    source: FallbackContentSource<S>,
    state: LoadState,
}

impl<S: ContentSource> PageLoader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: FallbackContentSource::new(source),
            state: LoadState::Loading,
        }
    }

    /// Issues the page's one load. Later calls return the loaded document
    /// without touching the source.
    pub async fn mount(&mut self) -> Arc<ContentDocument> {
        if let LoadState::Ready(document) = &self.state {
            return document.clone();
        }

        let document = Arc::new(self.source.load_or_default().await);
        self.state = LoadState::Ready(document.clone());
        document
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// True until `mount` completes; drives the loading indicator.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn document(&self) -> Option<&Arc<ContentDocument>> {
        match &self.state {
            LoadState::Ready(document) => Some(document),
            LoadState::Loading => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::default_document;
    use crate::ports::ContentError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingSource {
        calls: Mutex<usize>,
        result: Result<ContentDocument, ContentError>,
    }

    impl RecordingSource {
        fn returning(result: Result<ContentDocument, ContentError>) -> Self {
            Self {
                calls: Mutex::new(0),
                result,
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl ContentSource for RecordingSource {
        async fn load(&self) -> Result<ContentDocument, ContentError> {
            *self.calls.lock().unwrap() += 1;
            self.result.clone()
        }
    }

    fn custom_document() -> ContentDocument {
        let mut document = default_document().clone();
        document.about.name = "Ada Lovelace".to_string();
        document
    }

    #[tokio::test]
    async fn starts_loading() {
        let loader = PageLoader::new(RecordingSource::returning(Ok(custom_document())));

        assert!(loader.is_loading());
        assert!(loader.document().is_none());
    }

    #[tokio::test]
    async fn mount_loads_document_once() {
        let source = Arc::new(RecordingSource::returning(Ok(custom_document())));
        let mut loader = PageLoader::new(source.clone());

        let first = loader.mount().await;
        let second = loader.mount().await;

        assert!(!loader.is_loading());
        assert_eq!(first.about.name, "Ada Lovelace");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn failed_load_becomes_ready_with_builtin_content() {
        let source = Arc::new(RecordingSource::returning(Err(ContentError::Status {
            status: 500,
        })));
        let mut loader = PageLoader::new(source.clone());

        let document = loader.mount().await;

        assert_eq!(loader.state(), &LoadState::Ready(document.clone()));
        assert_eq!(document.as_ref(), default_document());
        assert_eq!(source.calls(), 1);
    }
}
