//! Application router: API routes, middleware and the production bundle.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::{Json, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::contact::{contact_router, ContactAppState};
use super::dto::ErrorResponse;
use super::portfolio::{portfolio_router, PortfolioAppState};
use crate::config::ServerConfig;

/// All API routes with their state applied, for mounting under `/api`.
///
/// Unknown API paths answer 404 `{ error }` rather than falling through to
/// the client bundle.
pub fn api_router(portfolio: PortfolioAppState, contact: ContactAppState) -> Router {
    Router::new()
        .merge(portfolio_router().with_state(portfolio))
        .merge(contact_router().with_state(contact))
        .fallback(api_not_found)
}

/// The complete application.
///
/// In production every path outside `/api` is resolved against
/// `static_dir`, and paths with no matching file get `index.html` so the
/// client router can handle them.
pub fn app_router(
    config: &ServerConfig,
    portfolio: PortfolioAppState,
    contact: ContactAppState,
) -> Router {
    let mut router = Router::new().nest("/api", api_router(portfolio, contact));

    if config.is_production() {
        let bundle = ServeDir::new(&config.static_dir)
            .fallback(ServeFile::new(config.index_file()));
        router = router.fallback_service(bundle);
    }

    router
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(CompressionLayer::new())
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not found")))
}
