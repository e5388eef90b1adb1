/**
 * Router Assembly
 *
 * Combines the auth and user route groups into the final application
 * router, with CORS and a JSON 404 fallback for unmatched routes.
 */

use axum::{
    http::{header, HeaderValue, Method, Uri},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::error::ApiError;
use crate::routes::api_routes::{auth_routes, user_routes};
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create the application router
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .merge(auth_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .fallback(route_not_found)
        .layer(cors_layer(&config.allowed_origins))
        .with_state(state)
}

/// JSON 404 for unmatched routes
async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}

/// CORS from the configured origins; permissive when none are configured
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PATCH])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
