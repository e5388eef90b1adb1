/**
 * User Records and the Directory Abstraction
 *
 * The directory is a keyed document store for user records: lookup by id
 * or normalized email, creation, and partial write-back. Everything else
 * in the backend goes through this trait, so the storage engine can be
 * Postgres in production and in-memory in tests without the services
 * noticing.
 *
 * Email uniqueness is owned by the directory: the services pre-check, but
 * the store's own constraint is the final arbiter under concurrency, and
 * a violated constraint surfaces as `DirectoryError::DuplicateEmail`.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// A stored user record
///
/// Emails are stored normalized (trimmed, lowercased). Deliberately not
/// `Serialize`: external exposure always goes through
/// [`UserRecord::sanitized`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    /// Unique user ID (UUID), assigned at creation, immutable
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Unique, normalized email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Optional reference to a stored avatar image
    pub avatar: Option<String>,
    /// Email verification flag, defaults false
    pub verified: bool,
    /// Admin flag, defaults false; no authorization logic consumes it yet
    pub is_admin: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// The externally visible view of a user
///
/// Strips the password hash and the bookkeeping timestamps. This is the
/// only user shape any endpoint serializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub verified: bool,
    pub is_admin: bool,
}

impl UserRecord {
    /// The sanitized identity view of this record
    pub fn sanitized(&self) -> Identity {
        Identity {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
            verified: self.verified,
            is_admin: self.is_admin,
        }
    }
}

/// Fields required to create a record
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// A partial update: only `Some` fields are written back
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub password_hash: Option<String>,
}

/// Errors surfaced by directory implementations
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The store's email uniqueness constraint rejected the write
    #[error("email already registered")]
    DuplicateEmail,

    /// The underlying store failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Keyed document store for user records
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up a record by normalized email
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DirectoryError>;

    /// Look up a record by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, DirectoryError>;

    /// Create and persist a new record
    async fn create(&self, new_user: NewUser) -> Result<UserRecord, DirectoryError>;

    /// Write back the provided fields; `Ok(None)` when no record has this id
    async fn update(
        &self,
        id: Uuid,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, DirectoryError>;
}
