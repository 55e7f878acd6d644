//! Axum router configuration for content endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_portfolio, health, PortfolioAppState};

/// Create the content router, for mounting under `/api`.
///
/// # Routes
/// - `GET /health` - Liveness message
/// - `GET /portfolio` - Full content document
pub fn portfolio_router() -> Router<PortfolioAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/portfolio", get(get_portfolio))
}
