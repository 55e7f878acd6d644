//! Projects page: technology filter and project cards.

use std::sync::Arc;

use super::PageView;
use crate::domain::portfolio::{technology_tags, ContentDocument, Project, ProjectFilter};

/// A rendered project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: u32,
    /// Image placeholder letter.
    pub initial: Option<char>,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub code_link: String,
    pub live_link: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            initial: project.initial(),
            title: project.title.clone(),
            description: project.description.clone(),
            technologies: project.technologies.clone(),
            code_link: project.github_link.clone(),
            live_link: project.live_link.clone(),
        }
    }
}

/// Shown in place of the grid when the filter matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub heading: &'static str,
    pub hint: &'static str,
}

pub const NO_PROJECTS: EmptyState = EmptyState {
    heading: "No projects found",
    hint: "Try selecting a different technology filter",
};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectsView {
    document: Arc<ContentDocument>,
    tags: Vec<String>,
    filter: ProjectFilter,
}

impl PageView for ProjectsView {
    fn from_document(document: Arc<ContentDocument>) -> Self {
        let tags = technology_tags(&document.projects);
        Self {
            document,
            tags,
            filter: ProjectFilter::All,
        }
    }
}

impl ProjectsView {
    /// Filter buttons, one per distinct technology in first-seen order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    /// Tag button click; `"all"` restores the unfiltered list.
    pub fn select(&mut self, tag: &str) {
        self.filter = ProjectFilter::parse(tag);
    }

    pub fn select_all(&mut self) {
        self.filter = ProjectFilter::All;
    }

    /// Swaps in a new document, keeping the selected filter.
    pub fn set_document(&mut self, document: Arc<ContentDocument>) {
        self.tags = technology_tags(&document.projects);
        self.document = document;
    }

    /// Whether the button for `tag` is highlighted.
    pub fn is_active(&self, tag: &str) -> bool {
        match &self.filter {
            ProjectFilter::All => false,
            ProjectFilter::Technology(_) => ProjectFilter::parse(tag) == self.filter,
        }
    }

    /// Whether the "All Projects" button is highlighted.
    pub fn is_all_active(&self) -> bool {
        self.filter == ProjectFilter::All
    }

    /// Projects passing the current filter, in document order.
    pub fn visible(&self) -> Vec<&Project> {
        self.filter.apply(&self.document.projects)
    }

    pub fn cards(&self) -> Vec<ProjectCard> {
        self.visible().into_iter().map(ProjectCard::from).collect()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        self.visible().is_empty().then_some(NO_PROJECTS)
    }
}
