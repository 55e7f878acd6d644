//! Home page: hero, social links and the quick about preview.

use std::sync::Arc;

use super::{PageView, SocialLink};
use crate::client::nav::Route;
use crate::domain::portfolio::ContentDocument;

/// A hero button leading to another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub route: Route,
}

/// A headline figure in the about preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const CALLS_TO_ACTION: [CallToAction; 2] = [
    CallToAction {
        label: "View My Work",
        route: Route::Projects,
    },
    CallToAction {
        label: "Get In Touch",
        route: Route::Contact,
    },
];

pub const QUICK_STATS: [QuickStat; 3] = [
    QuickStat {
        value: "50+",
        label: "Projects Completed",
    },
    QuickStat {
        value: "3+",
        label: "Years Experience",
    },
    QuickStat {
        value: "100%",
        label: "Client Satisfaction",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub greeting: String,
    pub title: String,
    pub description: String,
    pub social_links: Vec<SocialLink>,
    pub calls_to_action: &'static [CallToAction],
    pub quick_stats: &'static [QuickStat],
}

impl PageView for HomeView {
    fn from_document(document: Arc<ContentDocument>) -> Self {
        let about = &document.about;
        let social = &document.contact.social_links;

        Self {
            greeting: format!("Hi, I'm {}", about.name),
            title: about.title.clone(),
            description: about.description.clone(),
            social_links: vec![
                SocialLink::new("GitHub", &social.github),
                SocialLink::new("LinkedIn", &social.linkedin),
                SocialLink::new("Email", document.mailto_link()),
            ],
            calls_to_action: &CALLS_TO_ACTION,
            quick_stats: &QUICK_STATS,
        }
    }
}
