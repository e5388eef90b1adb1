/**
 * API Error Taxonomy
 *
 * Every failure the backend can report to a client is one of the variants
 * below, checked by pattern match rather than type introspection. Each
 * variant knows its HTTP status; 4xx errors render their own message,
 * 5xx errors render a generic one and keep the detail in the logs.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors returned from API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input (400)
    #[error("{message}")]
    Validation { message: String },

    /// Registration or profile update hit an email that is already taken (400)
    #[error("Email already registered.")]
    DuplicateEmail,

    /// Login or password change with a wrong password (401)
    #[error("Invalid credentials.")]
    InvalidCredentials,

    /// Authorization header absent or not `Bearer <token>` (401)
    #[error("Authorization header missing or in the wrong format.")]
    MissingCredential,

    /// Token failed signature or claim validation (401)
    #[error("Invalid token.")]
    InvalidToken,

    /// Token was valid once but its expiry has passed (401)
    #[error("Token has expired.")]
    TokenExpired,

    /// No user record behind the requested or asserted identity (404)
    #[error("User not found.")]
    IdentityNotFound,

    /// No route matched the request (404)
    #[error("Can't find {path} on this server.")]
    RouteNotFound { path: String },

    /// Rate limit tripped on the public auth routes (429)
    #[error("Too many requests, please try again later.")]
    TooManyRequests,

    /// Registration failed for a reason other than a duplicate email (500)
    #[error("Failed to register user.")]
    RegistrationFailed,

    /// Any other unexpected failure (500)
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    /// Create a validation error with a caller-supplied message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an internal error; the message is logged, never sent to clients
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::DuplicateEmail => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials
            | Self::MissingCredential
            | Self::InvalidToken
            | Self::TokenExpired => StatusCode::UNAUTHORIZED,
            Self::IdentityNotFound | Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::RegistrationFailed | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// "fail" for client errors, "error" for server errors
    pub fn status_label(&self) -> &'static str {
        if self.status_code().is_client_error() {
            "fail"
        } else {
            "error"
        }
    }

    /// The message rendered to clients
    ///
    /// 4xx errors carry an actionable message. 5xx errors always render a
    /// generic message so that internals never leak.
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Something went wrong. Please try again later.".to_string()
        } else {
            self.to_string()
        }
    }
}
