/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register and login handlers.
 * Request fields default to empty strings so missing fields surface as
 * the service's "x, y are required fields." validation error instead of
 * a body-deserialization rejection.
 */

use serde::{Deserialize, Serialize};

use crate::users::Identity;

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address (normalized before storage)
    #[serde(default)]
    pub email: String,
    /// Password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Returned by register and login: a bearer token plus the sanitized
/// identity. Never carries the raw or hashed password.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: Identity,
}
