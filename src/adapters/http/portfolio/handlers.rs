//! HTTP handlers for content endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::dto::{ErrorResponse, MessageResponse};
use crate::application::handlers::{GetPortfolioHandler, GetPortfolioQuery};
use crate::ports::{ContentError, ContentSource};

/// Body of the health check.
pub const HEALTH_MESSAGE: &str = "Server is running!";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for content endpoints.
#[derive(Clone)]
pub struct PortfolioAppState {
    pub content_source: Arc<dyn ContentSource>,
}

impl PortfolioAppState {
    pub fn new(content_source: Arc<dyn ContentSource>) -> Self {
        Self { content_source }
    }

    /// Create handlers on demand from the shared state.
    pub fn get_portfolio_handler(&self) -> GetPortfolioHandler {
        GetPortfolioHandler::new(self.content_source.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/health - Liveness message
pub async fn health() -> Json<MessageResponse> {
    Json(MessageResponse::new(HEALTH_MESSAGE))
}

/// GET /api/portfolio - Full content document
pub async fn get_portfolio(
    State(state): State<PortfolioAppState>,
) -> Result<impl IntoResponse, PortfolioApiError> {
    let handler = state.get_portfolio_handler();
    let document = handler.handle(GetPortfolioQuery).await?;
    Ok(Json(document))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for content endpoints.
///
/// The server's static source never fails, so this only surfaces with a
/// misbehaving custom source.
#[derive(Debug)]
pub struct PortfolioApiError(ContentError);

impl From<ContentError> for PortfolioApiError {
    fn from(err: ContentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PortfolioApiError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = %self.0, "Failed to load content document");
        let body = ErrorResponse::new("Failed to load portfolio data");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
