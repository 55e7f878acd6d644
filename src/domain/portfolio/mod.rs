//! Portfolio content: the document model, its built-in default and the
//! project technology filter.

mod defaults;
mod document;
mod filter;

pub use defaults::default_document;
pub use document::{
    About, ContactInfo, ContentDocument, Education, Experience, Project, Skill, SocialLinks,
};
pub use filter::{technology_tags, ProjectFilter};
