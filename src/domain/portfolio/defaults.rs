//! Built-in content document.
//!
//! One document seeds the server when no content file is configured and is
//! also what the client shows whenever loading fails. Pages never carry
//! their own copies of these values.

use once_cell::sync::Lazy;

use super::document::{
    About, ContactInfo, ContentDocument, Education, Experience, Project, Skill, SocialLinks,
};
use crate::domain::foundation::SkillLevel;

static DEFAULT_DOCUMENT: Lazy<ContentDocument> = Lazy::new(build_default_document);

/// Returns the shared built-in document.
pub fn default_document() -> &'static ContentDocument {
    &DEFAULT_DOCUMENT
}

fn build_default_document() -> ContentDocument {
    ContentDocument {
        about: About {
            name: "Your Name".to_string(),
            title: "Full Stack Developer".to_string(),
            description: "Passionate developer with expertise in modern web technologies. \
                          I love creating innovative solutions and bringing ideas to life through code."
                .to_string(),
            image: "/images/profile.jpg".to_string(),
            resume_link: "/files/resume.pdf".to_string(),
        },
        skills: [
            ("JavaScript", 90),
            ("React", 85),
            ("Node.js", 80),
            ("Python", 75),
            ("MongoDB", 70),
            ("AWS", 65),
        ]
        .into_iter()
        .map(|(name, level)| Skill {
            name: name.to_string(),
            level: SkillLevel::new(level),
        })
        .collect(),
        experience: vec![
            Experience {
                id: 1,
                company: "Tech Company Inc.".to_string(),
                position: "Senior Developer".to_string(),
                duration: "2022 - Present".to_string(),
                description: "Led development of scalable web applications using modern technologies"
                    .to_string(),
            },
            Experience {
                id: 2,
                company: "StartupXYZ".to_string(),
                position: "Full Stack Developer".to_string(),
                duration: "2020 - 2022".to_string(),
                description: "Developed and maintained multiple client projects with React and Node.js"
                    .to_string(),
            },
        ],
        education: vec![Education {
            id: 1,
            institution: "University of Technology".to_string(),
            degree: "Bachelor of Computer Science".to_string(),
            year: "2018 - 2022".to_string(),
        }],
        projects: default_projects(),
        contact: ContactInfo {
            email: "your.email@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "Your City, Country".to_string(),
            social_links: SocialLinks {
                github: "https://github.com/yourusername".to_string(),
                linkedin: "https://linkedin.com/in/yourprofile".to_string(),
                twitter: "https://twitter.com/yourusername".to_string(),
            },
        },
    }
}

fn default_projects() -> Vec<Project> {
    let project = |id: u32, title: &str, slug: &str, site: &str, description: &str, tech: &[&str]| {
        Project {
            id,
            title: title.to_string(),
            description: description.to_string(),
            image: format!("/images/project{}.jpg", id),
            technologies: tech.iter().map(|t| t.to_string()).collect(),
            github_link: format!("https://github.com/yourusername/{}", slug),
            live_link: format!("https://{}.com", site),
        }
    };

    vec![
        project(
            1,
            "E-commerce Platform",
            "ecommerce",
            "your-ecommerce-site",
            "Full-stack e-commerce application with React, Node.js, and MongoDB. Features include \
             user authentication, product catalog, shopping cart, and payment integration.",
            &["React", "Node.js", "MongoDB", "Stripe", "Express"],
        ),
        project(
            2,
            "Task Management App",
            "taskmanager",
            "your-task-app",
            "Collaborative task management tool with real-time updates using Socket.io. Features \
             drag-and-drop functionality and team collaboration tools.",
            &["React", "Socket.io", "Express", "PostgreSQL", "TypeScript"],
        ),
        project(
            3,
            "Weather Dashboard",
            "weather-dashboard",
            "your-weather-app",
            "Real-time weather dashboard with location-based forecasts and interactive charts. \
             Includes weather alerts and historical data visualization.",
            &["React", "OpenWeather API", "Chart.js", "CSS3"],
        ),
        project(
            4,
            "Social Media Dashboard",
            "social-dashboard",
            "your-social-dashboard",
            "Analytics dashboard for social media management with real-time metrics, post \
             scheduling, and engagement tracking.",
            &["React", "Node.js", "MongoDB", "Chart.js", "REST API"],
        ),
        project(
            5,
            "Portfolio Website",
            "portfolio",
            "your-portfolio",
            "Modern responsive portfolio website built with React and TypeScript. Features smooth \
             animations and optimized performance.",
            &["React", "TypeScript", "Framer Motion", "CSS3"],
        ),
        project(
            6,
            "Chat Application",
            "chat-app",
            "your-chat-app",
            "Real-time chat application with private messaging, group chats, and file sharing \
             capabilities.",
            &["React", "Socket.io", "Node.js", "MongoDB", "Express"],
        ),
    ]
}
