//! HTTP adapter for content endpoints.
//!
//! - `GET /api/health` - Liveness message
//! - `GET /api/portfolio` - Full content document

mod handlers;
mod routes;

pub use handlers::{get_portfolio, health, PortfolioApiError, PortfolioAppState, HEALTH_MESSAGE};
pub use routes::portfolio_router;
