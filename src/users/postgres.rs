/**
 * Postgres User Directory
 *
 * sqlx-backed implementation of `UserDirectory`. The `users` table carries
 * a unique index over the (already normalized) email column; a unique
 * violation on insert or update is translated to
 * `DirectoryError::DuplicateEmail` so concurrent registrations race safely.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::users::directory::{
    DirectoryError, NewUser, UserChanges, UserDirectory, UserRecord,
};

const USER_COLUMNS: &str =
    "id, name, email, password_hash, avatar, verified, is_admin, created_at, updated_at";

/// Postgres-backed user directory
#[derive(Clone)]
pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn translate(err: sqlx::Error) -> DirectoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return DirectoryError::DuplicateEmail;
        }
    }
    DirectoryError::Database(err)
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DirectoryError> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, DirectoryError> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn create(&self, new_user: NewUser) -> Result<UserRecord, DirectoryError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let user = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            INSERT INTO users (id, name, email, password_hash, avatar, verified, is_admin, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NULL, FALSE, FALSE, $5, $5)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(translate)?;

        Ok(user)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        let now = Utc::now();

        let user = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            UPDATE users
            SET name = COALESCE($1, name),
                email = COALESCE($2, email),
                avatar = COALESCE($3, avatar),
                password_hash = COALESCE($4, password_hash),
                updated_at = $5
            WHERE id = $6
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(&changes.avatar)
        .bind(&changes.password_hash)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(translate)?;

        Ok(user)
    }
}
