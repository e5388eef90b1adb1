/**
 * In-Memory User Directory
 *
 * HashMap-backed implementation of `UserDirectory`, enforcing the same
 * email uniqueness the Postgres index does. Used by the test suites and
 * as the fallback store when no `DATABASE_URL` is configured.
 */

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::users::directory::{
    DirectoryError, NewUser, UserChanges, UserDirectory, UserRecord,
};

/// In-memory user directory
#[derive(Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<Uuid, UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DirectoryError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, DirectoryError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<UserRecord, DirectoryError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == new_user.email) {
            return Err(DirectoryError::DuplicateEmail);
        }

        let now = Utc::now();
        let record = UserRecord {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            avatar: None,
            verified: false,
            is_admin: false,
            created_at: now,
            updated_at: now,
        };
        users.insert(record.id, record.clone());

        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: UserChanges,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        let mut users = self.users.write().await;

        if let Some(new_email) = &changes.email {
            if users.values().any(|u| u.id != id && &u.email == new_email) {
                return Err(DirectoryError::DuplicateEmail);
            }
        }

        let Some(record) = users.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            record.name = name;
        }
        if let Some(email) = changes.email {
            record.email = email;
        }
        if let Some(avatar) = changes.avatar {
            record.avatar = Some(avatar);
        }
        if let Some(password_hash) = changes.password_hash {
            record.password_hash = password_hash;
        }
        record.updated_at = Utc::now();

        Ok(Some(record.clone()))
    }
}
