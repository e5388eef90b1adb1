/**
 * Registration Handler
 *
 * POST /api/auth/register
 *
 * # Registration Process
 *
 * 1. Validate name, email and password
 * 2. Reject already-registered emails
 * 3. Hash the password
 * 4. Create the user record
 * 5. Issue a JWT token
 * 6. Return 201 with the token and sanitized user
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, invalid email, short password,
///   or an already-registered email
/// * `500 Internal Server Error` - hashing, persistence or signing failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    tracing::info!("Register request for email: {}", request.email);

    let (user, token) = state
        .auth
        .register(&request.name, &request.email, &request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}
