//! About page: profile, skills, experience timeline and education.

use std::sync::Arc;

use super::PageView;
use crate::domain::portfolio::{ContentDocument, Education, Experience};

/// A skill with its progress bar value and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillBar {
    pub name: String,
    pub level: u8,
    pub label: String,
}

/// Which side of the timeline an entry sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub experience: Experience,
    pub side: TimelineSide,
}

/// A "What I Do" card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialty {
    pub title: &'static str,
    pub tools: &'static str,
}

pub const SPECIALTIES: [Specialty; 3] = [
    Specialty {
        title: "Frontend",
        tools: "React, TypeScript, HTML5, CSS3, Tailwind",
    },
    Specialty {
        title: "Backend",
        tools: "Node.js, Express, MongoDB, PostgreSQL",
    },
    Specialty {
        title: "Design",
        tools: "Figma, Adobe Creative Suite, UI/UX",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct AboutView {
    /// Avatar placeholder letter.
    pub initial: Option<char>,
    pub name: String,
    pub title: String,
    pub description: String,
    pub resume_link: String,
    pub skills: Vec<SkillBar>,
    pub specialties: &'static [Specialty],
    pub timeline: Vec<TimelineEntry>,
    pub education: Vec<Education>,
}

impl PageView for AboutView {
    fn from_document(document: Arc<ContentDocument>) -> Self {
        let about = &document.about;

        let skills = document
            .skills
            .iter()
            .map(|skill| SkillBar {
                name: skill.name.clone(),
                level: skill.level.value(),
                label: skill.level.to_string(),
            })
            .collect();

        let timeline = document
            .experience
            .iter()
            .enumerate()
            .map(|(index, experience)| TimelineEntry {
                experience: experience.clone(),
                side: if index % 2 == 0 {
                    TimelineSide::Left
                } else {
                    TimelineSide::Right
                },
            })
            .collect();

        Self {
            initial: about.initial(),
            name: about.name.clone(),
            title: about.title.clone(),
            description: about.description.clone(),
            resume_link: about.resume_link.clone(),
            skills,
            specialties: &SPECIALTIES,
            timeline,
            education: document.education.clone(),
        }
    }
}
