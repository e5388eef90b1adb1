/**
 * Login Handler
 *
 * POST /api/auth/login
 *
 * # Authentication Process
 *
 * 1. Look up the user by normalized email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a JWT token
 * 4. Return the token and sanitized user
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `404 Not Found` - no user with this email
/// * `401 Unauthorized` - wrong password
/// * `500 Internal Server Error` - lookup, verification or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for email: {}", request.email);

    let (user, token) = state.auth.login(&request.email, &request.password).await?;

    Ok(Json(AuthResponse { token, user }))
}
