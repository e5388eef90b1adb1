/**
 * Authentication Service
 *
 * Orchestrates registration and login: input validation, email
 * normalization, uniqueness checks, password hashing, persistence and
 * token issuance. Returns the sanitized identity plus a token; never the
 * raw or hashed password.
 */

use std::sync::Arc;

use crate::auth::password;
use crate::auth::tokens::TokenIssuer;
use crate::error::ApiError;
use crate::users::directory::{DirectoryError, NewUser, UserDirectory};
use crate::users::Identity;
use crate::validate::{is_valid_email, normalize_email, require_fields, MIN_PASSWORD_LEN};

/// Registration and login orchestration
#[derive(Clone)]
pub struct AuthService {
    directory: Arc<dyn UserDirectory>,
    tokens: Arc<TokenIssuer>,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        tokens: Arc<TokenIssuer>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            directory,
            tokens,
            bcrypt_cost,
        }
    }

    /// Register a new user
    ///
    /// # Errors
    ///
    /// * `Validation` - missing fields, bad email format, short password
    /// * `DuplicateEmail` - the normalized email is already registered,
    ///   whether caught by the pre-check or by the store's uniqueness
    ///   constraint under a concurrent registration
    /// * `RegistrationFailed` - any other persistence failure
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(Identity, String), ApiError> {
        require_fields(&[("name", name), ("email", email), ("password", password)])?;

        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ApiError::validation("Invalid email format."));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(ApiError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters."
            )));
        }

        let existing = self
            .directory
            .find_by_email(&email)
            .await
            .map_err(|e| ApiError::internal(format!("email lookup failed: {e}")))?;
        if existing.is_some() {
            return Err(ApiError::DuplicateEmail);
        }

        let password_hash = password::hash_password(password, self.bcrypt_cost).await?;

        let record = self
            .directory
            .create(NewUser {
                name: name.trim().to_string(),
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                DirectoryError::DuplicateEmail => ApiError::DuplicateEmail,
                DirectoryError::Database(err) => {
                    tracing::error!("failed to create user: {err}");
                    ApiError::RegistrationFailed
                }
            })?;

        let token = self.tokens.issue(record.id)?;

        tracing::info!("User registered: {}", record.email);
        Ok((record.sanitized(), token))
    }

    /// Authenticate an existing user
    ///
    /// # Errors
    ///
    /// * `Validation` - missing fields
    /// * `IdentityNotFound` - no record for the normalized email
    /// * `InvalidCredentials` - the password does not match
    pub async fn login(&self, email: &str, password: &str) -> Result<(Identity, String), ApiError> {
        require_fields(&[("email", email), ("password", password)])?;

        let email = normalize_email(email);

        let record = self
            .directory
            .find_by_email(&email)
            .await
            .map_err(|e| ApiError::internal(format!("email lookup failed: {e}")))?
            .ok_or(ApiError::IdentityNotFound)?;

        let valid = password::verify_password(password, &record.password_hash).await?;
        if !valid {
            tracing::warn!("Invalid password for user: {}", record.email);
            return Err(ApiError::InvalidCredentials);
        }

        let token = self.tokens.issue(record.id)?;

        tracing::info!("User logged in: {}", record.email);
        Ok((record.sanitized(), token))
    }
}
