/**
 * Profile Service
 *
 * Authenticated operations against a resolved identity: profile fetch,
 * partial profile update, password change and avatar-reference update.
 * Every operation is an explicit read → build-new-value → write-back
 * sequence against the user directory; there is no dirty tracking.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::auth::password;
use crate::error::ApiError;
use crate::users::directory::{DirectoryError, UserChanges, UserDirectory};
use crate::users::Identity;
use crate::validate::{is_valid_email, normalize_email, MIN_PASSWORD_LEN};

/// Authenticated profile operations
#[derive(Clone)]
pub struct ProfileService {
    directory: Arc<dyn UserDirectory>,
    bcrypt_cost: u32,
}

impl ProfileService {
    pub fn new(directory: Arc<dyn UserDirectory>, bcrypt_cost: u32) -> Self {
        Self {
            directory,
            bcrypt_cost,
        }
    }

    /// Fetch the sanitized profile for `user_id`
    pub async fn profile(&self, user_id: Uuid) -> Result<Identity, ApiError> {
        let record = self
            .directory
            .find_by_id(user_id)
            .await
            .map_err(|e| ApiError::internal(format!("user lookup failed: {e}")))?
            .ok_or(ApiError::IdentityNotFound)?;

        Ok(record.sanitized())
    }

    /// Partially update name and/or email
    ///
    /// Only the provided fields are overwritten. A changed email is
    /// re-normalized, re-validated and re-checked for uniqueness; the
    /// directory's own constraint still backs the check under concurrency.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Identity, ApiError> {
        // Read first so an unknown id is a 404 rather than a silent no-op
        let record = self
            .directory
            .find_by_id(user_id)
            .await
            .map_err(|e| ApiError::internal(format!("user lookup failed: {e}")))?
            .ok_or(ApiError::IdentityNotFound)?;

        let name = match name {
            Some(name) if !name.trim().is_empty() => Some(name.trim().to_string()),
            _ => None,
        };

        let email = match email {
            Some(email) => {
                let email = normalize_email(&email);
                if !is_valid_email(&email) {
                    return Err(ApiError::validation("Invalid email format."));
                }
                if email != record.email {
                    let taken = self
                        .directory
                        .find_by_email(&email)
                        .await
                        .map_err(|e| ApiError::internal(format!("email lookup failed: {e}")))?;
                    if taken.is_some() {
                        return Err(ApiError::DuplicateEmail);
                    }
                    Some(email)
                } else {
                    None
                }
            }
            None => None,
        };

        self.write_back(
            user_id,
            UserChanges {
                name,
                email,
                ..Default::default()
            },
        )
        .await
    }

    /// Change the password after verifying the old one
    ///
    /// The stored hash is untouched unless the old password matches and
    /// the new one passes validation. Outstanding tokens stay valid.
    pub async fn change_password(
        &self,
        user_id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let record = self
            .directory
            .find_by_id(user_id)
            .await
            .map_err(|e| ApiError::internal(format!("user lookup failed: {e}")))?
            .ok_or(ApiError::IdentityNotFound)?;

        if old_password.is_empty()
            || new_password.is_empty()
            || new_password.len() < MIN_PASSWORD_LEN
        {
            return Err(ApiError::InvalidCredentials);
        }

        let valid = password::verify_password(old_password, &record.password_hash).await?;
        if !valid {
            tracing::warn!("Password change rejected for user: {}", record.email);
            return Err(ApiError::InvalidCredentials);
        }

        let password_hash = password::hash_password(new_password, self.bcrypt_cost).await?;

        self.write_back(
            user_id,
            UserChanges {
                password_hash: Some(password_hash),
                ..Default::default()
            },
        )
        .await?;

        tracing::info!("Password changed for user: {}", record.email);
        Ok(())
    }

    /// Store a new avatar reference
    ///
    /// The reference points at an image already persisted by the file
    /// storage collaborator; no upload handling happens here.
    pub async fn update_avatar(
        &self,
        user_id: Uuid,
        avatar: String,
    ) -> Result<Identity, ApiError> {
        if avatar.trim().is_empty() {
            return Err(ApiError::validation("avatar are required fields."));
        }

        self.directory
            .find_by_id(user_id)
            .await
            .map_err(|e| ApiError::internal(format!("user lookup failed: {e}")))?
            .ok_or(ApiError::IdentityNotFound)?;

        self.write_back(
            user_id,
            UserChanges {
                avatar: Some(avatar),
                ..Default::default()
            },
        )
        .await
    }

    async fn write_back(&self, user_id: Uuid, changes: UserChanges) -> Result<Identity, ApiError> {
        let record = self
            .directory
            .update(user_id, changes)
            .await
            .map_err(|e| match e {
                DirectoryError::DuplicateEmail => ApiError::DuplicateEmail,
                DirectoryError::Database(err) => {
                    ApiError::internal(format!("user update failed: {err}"))
                }
            })?
            .ok_or(ApiError::IdentityNotFound)?;

        Ok(record.sanitized())
    }
}
