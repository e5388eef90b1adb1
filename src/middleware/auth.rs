/**
 * Authentication Gate
 *
 * Middleware protecting the user routes. For every request it extracts
 * the bearer token from the Authorization header, verifies it, resolves
 * the asserted identity against the user directory and attaches the
 * sanitized identity to the request before any handler runs.
 *
 * # Outcomes
 *
 * 1. Header absent or not `Bearer <token>` → 401 missing credential
 * 2. Token fails verification → 401 invalid token / token expired
 * 3. Verified subject unknown to the directory → 404
 * 4. Directory failure → 500, never a silent pass-through
 * 5. Otherwise the request proceeds with `CurrentUser` attached
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::Identity;

/// The authenticated identity resolved by the gate
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Identity);

/// Authentication middleware
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::MissingCredential
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header not in Bearer format");
        ApiError::MissingCredential
    })?;

    let user_id = state.tokens.verified_subject(token)?;

    let record = state
        .directory
        .find_by_id(user_id)
        .await
        .map_err(|e| ApiError::internal(format!("auth lookup failed: {e}")))?
        .ok_or_else(|| {
            tracing::warn!("Token subject not found: {}", user_id);
            ApiError::IdentityNotFound
        })?;

    request.extensions_mut().insert(CurrentUser(record.sanitized()));

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(ApiError::MissingCredential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;
    use uuid::Uuid;

    fn identity() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            avatar: None,
            verified: false,
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_extractor_reads_attached_identity() {
        let user = identity();
        let mut request = HttpRequest::builder().uri("/").body(()).unwrap();
        request.extensions_mut().insert(CurrentUser(user.clone()));
        let (mut parts, _) = request.into_parts();

        let extracted = CurrentUser::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(extracted.0.id, user.id);
    }

    #[tokio::test]
    async fn test_extractor_missing_identity() {
        let request = HttpRequest::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = request.into_parts();

        match CurrentUser::from_request_parts(&mut parts, &()).await {
            Err(ApiError::MissingCredential) => {}
            other => panic!("expected MissingCredential, got {:?}", other),
        }
    }
}
