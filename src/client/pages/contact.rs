//! Contact page: contact details, social links and the contact form.

use std::sync::Arc;

use super::{PageView, SocialLink};
use crate::client::contact_form::ContactForm;
use crate::domain::portfolio::ContentDocument;

#[derive(Debug, Clone)]
pub struct ContactView {
    pub email: String,
    pub mailto_link: String,
    pub phone: String,
    pub tel_link: String,
    pub location: String,
    pub social_links: Vec<SocialLink>,
    pub form: ContactForm,
}

impl PageView for ContactView {
    fn from_document(document: Arc<ContentDocument>) -> Self {
        let contact = &document.contact;
        let social = &contact.social_links;

        Self {
            email: contact.email.clone(),
            mailto_link: document.mailto_link(),
            phone: contact.phone.clone(),
            tel_link: format!("tel:{}", contact.phone),
            location: contact.location.clone(),
            social_links: vec![
                SocialLink::new("GitHub", &social.github),
                SocialLink::new("LinkedIn", &social.linkedin),
                SocialLink::new("Twitter", &social.twitter),
            ],
            form: ContactForm::new(),
        }
    }
}
