/**
 * Protected Route Handlers
 *
 * Handlers for the authenticated user endpoints. All of them run behind
 * the auth gate, which has already resolved the bearer token to an
 * identity and attached it to the request.
 *
 * # Routes
 *
 * - `GET /api/users/profile` - fetch the current profile
 * - `PATCH /api/users/update-profile` - partial name/email update
 * - `PATCH /api/users/update-password` - password change
 * - `PATCH /api/users/update-picture` - store a new avatar reference
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::middleware::auth::CurrentUser;
use crate::server::state::AppState;
use crate::users::Identity;

/// Partial profile update request; absent fields keep their prior value
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Password change request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    #[serde(default)]
    pub old_password: String,
    #[serde(default)]
    pub new_password: String,
}

/// Avatar reference update request
///
/// Carries a reference produced by the file storage collaborator; the
/// upload itself never passes through this backend core.
#[derive(Debug, Deserialize)]
pub struct UpdatePictureRequest {
    #[serde(default)]
    pub avatar: String,
}

/// Confirmation envelope for operations without a data payload
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /api/users/profile
pub async fn profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Identity>, ApiError> {
    let identity = state.profiles.profile(user.id).await?;
    Ok(Json(identity))
}

/// PATCH /api/users/update-profile
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<Identity>, ApiError> {
    let identity = state
        .profiles
        .update_profile(user.id, request.name, request.email)
        .await?;
    Ok(Json(identity))
}

/// PATCH /api/users/update-password
pub async fn update_password(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<UpdatePasswordRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .profiles
        .change_password(user.id, &request.old_password, &request.new_password)
        .await?;

    Ok(Json(MessageResponse {
        status: "success",
        message: "Password updated successfully!",
    }))
}

/// PATCH /api/users/update-picture
pub async fn update_picture(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(request): Json<UpdatePictureRequest>,
) -> Result<Json<Identity>, ApiError> {
    let identity = state.profiles.update_avatar(user.id, request.avatar).await?;
    Ok(Json(identity))
}
