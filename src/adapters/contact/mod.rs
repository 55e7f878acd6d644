//! Client-side contact form submission.

mod http_gateway;

pub use http_gateway::{HttpContactGateway, CONTACT_PATH};
