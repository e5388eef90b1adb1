/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Authentication (public, rate limited)
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Users (behind the auth gate)
 * - `GET /api/users/profile` - Current user's profile
 * - `PATCH /api/users/update-profile` - Partial name/email update
 * - `PATCH /api/users/update-password` - Password change
 * - `PATCH /api/users/update-picture` - Avatar reference update
 */

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::auth::handlers::{login, register};
use crate::middleware::{limit_requests, require_auth};
use crate::server::state::AppState;
use crate::users::handlers::{profile, update_password, update_picture, update_profile};

/// The public authentication routes, rate limited
pub fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .layer(axum::middleware::from_fn_with_state(state, limit_requests))
}

/// The protected user routes, behind the auth gate
pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/users/profile", get(profile))
        .route("/api/users/update-profile", patch(update_profile))
        .route("/api/users/update-password", patch(update_password))
        .route("/api/users/update-picture", patch(update_picture))
        .layer(axum::middleware::from_fn_with_state(state, require_auth))
}
