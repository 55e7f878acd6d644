//! The content document served to the client.
//!
//! Field names follow Rust conventions; the serde attributes pin the JSON
//! shape the client bundle reads (`about.resume`, `project.github`,
//! `project.live`, and social links flattened into `contact`).

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SkillLevel;

/// The full aggregate of biography, skills, experience, education,
/// projects and contact data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub about: About,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
}

/// Biography block shown on the home and about pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "resume")]
    pub resume_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: u32,
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// A portfolio project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Technology tags in display order.
    pub technologies: Vec<String>,
    #[serde(rename = "github")]
    pub github_link: String,
    #[serde(rename = "live")]
    pub live_link: String,
}

/// Contact details shown on the contact page and in the home hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(flatten)]
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}

impl ContentDocument {
    /// Looks up a project by id.
    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// `mailto:` link for the contact email.
    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }
}

impl About {
    /// First character of the name, used for the avatar placeholder.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

impl Project {
    /// First character of the title, used for the card image placeholder.
    pub fn initial(&self) -> Option<char> {
        self.title.chars().next()
    }
}
