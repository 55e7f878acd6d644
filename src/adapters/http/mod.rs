//! HTTP adapters - REST API and static bundle serving.
//!
//! - `GET /api/health` - Liveness message
//! - `GET /api/portfolio` - Full content document
//! - `POST /api/contact` - Contact relay
//! - Production only: the client bundle, with unmatched routes served the
//!   bundle's `index.html`

pub mod contact;
pub mod dto;
pub mod portfolio;
mod router;

pub use contact::{contact_router, ContactAppState};
pub use dto::{ErrorResponse, MessageResponse};
pub use portfolio::{portfolio_router, PortfolioAppState};
pub use router::{api_router, app_router};
