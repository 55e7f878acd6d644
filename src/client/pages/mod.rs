//! Page view models.
//!
//! Each page owns a `PageLoader`; once mounted, its view model is derived
//! from the loaded document. A failed fetch still yields the built-in
//! document, so no page renders without a name and title.

mod about;
mod contact;
mod home;
mod projects;

pub use about::{AboutView, SkillBar, Specialty, TimelineEntry, TimelineSide};
pub use contact::ContactView;
pub use home::{CallToAction, HomeView, QuickStat};
pub use projects::{EmptyState, ProjectCard, ProjectsView};

use std::sync::Arc;

use super::loader::PageLoader;
use crate::domain::portfolio::ContentDocument;
use crate::ports::ContentSource;

/// A view model built from the content document.
pub trait PageView {
    fn from_document(document: Arc<ContentDocument>) -> Self;
}

/// An external link with its accessible label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: String,
}

impl SocialLink {
    pub fn new(label: &'static str, href: impl Into<String>) -> Self {
        Self {
            label,
            href: href.into(),
        }
    }
}

/// A page: its content load plus the view derived from it.
pub struct Page<V, S> {
    loader: PageLoader<S>,
    view: Option<V>,
}

impl<V: PageView, S: ContentSource> Page<V, S> {
    pub fn new(source: S) -> Self {
        Self {
            loader: PageLoader::new(source),
            view: None,
        }
    }

    /// Loads the document on first mount and builds the view.
    pub async fn mount(&mut self) -> &mut V {
        let document = self.loader.mount().await;
        self.view.get_or_insert_with(|| V::from_document(document))
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn view(&self) -> Option<&V> {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> Option<&mut V> {
        self.view.as_mut()
    }
}
