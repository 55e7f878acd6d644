//! Client-side state for the portfolio pages.
//!
//! Everything the browser bundle decides, expressed as plain state machines
//! so it can be driven from tests or any rendering layer:
//! - `loader` - One content load per page mount, with fallback content
//! - `contact_form` - Contact form fields and submission status
//! - `nav` - Routes and navigation bar state
//! - `pages` - View models for the four pages

pub mod contact_form;
pub mod loader;
pub mod nav;
pub mod pages;

pub use contact_form::{ContactForm, FormError, FormField, SubmitStatus};
pub use loader::{LoadState, PageLoader};
pub use nav::{NavLink, Navbar, Route};
pub use pages::{AboutView, ContactView, HomeView, Page, PageView, ProjectsView};
