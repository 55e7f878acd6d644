//! Technology filter for the projects listing.

use std::collections::HashSet;
use std::fmt;

use super::document::Project;

/// Filter value selecting which projects are visible.
///
/// A technology filter is stored lower-cased and matches any project with at
/// least one tag containing it as a case-insensitive substring.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Technology(String),
}

impl ProjectFilter {
    /// Keyword that selects every project.
    pub const ALL_KEYWORD: &'static str = "all";

    /// Builds a filter from a button value. `"all"` (any case) or a blank
    /// value select everything.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(Self::ALL_KEYWORD) {
            ProjectFilter::All
        } else {
            ProjectFilter::Technology(value.to_lowercase())
        }
    }

    /// Returns true if the project passes this filter.
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Technology(needle) => project
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(needle.as_str())),
        }
    }

    /// Projects passing this filter, in source order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    /// The value a filter button compares against (`"all"` or the lower-cased tag).
    pub fn as_key(&self) -> &str {
        match self {
            ProjectFilter::All => Self::ALL_KEYWORD,
            ProjectFilter::Technology(tech) => tech,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// Distinct technology tags across all projects, in first-seen order.
pub fn technology_tags(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    projects
        .iter()
        .flat_map(|p| p.technologies.iter().map(String::as_str))
        .filter(|tech| seen.insert(*tech))
        .map(str::to_string)
        .collect()
}
