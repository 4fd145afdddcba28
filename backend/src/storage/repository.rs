use anyhow::{Context, Result};
use log::{debug, warn};
use shared::User;
use std::sync::Arc;

use super::traits::SessionStorage;

/// Reads and writes the signed-in user record as JSON under a single key
#[derive(Clone)]
pub struct SessionRepository {
    storage: Arc<dyn SessionStorage>,
    key: String,
}

impl SessionRepository {
    pub fn new(storage: Arc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored user.
    ///
    /// A record that does not parse is deleted and reported as no session; only failures of
    /// the store itself are errors.
    pub fn load(&self) -> Result<Option<User>> {
        let Some(raw) = self.storage.get(&self.key)? else {
            debug!("No stored session under '{}'", self.key);
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Discarding unreadable session record under '{}': {}", self.key, e);
                self.storage.remove(&self.key)?;
                Ok(None)
            }
        }
    }

    /// Replace the stored record with `user`
    pub fn save(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user).context("Failed to serialize user session")?;
        self.storage
            .set(&self.key, &json)
            .with_context(|| format!("Failed to persist session under '{}'", self.key))
    }

    pub fn clear(&self) -> Result<()> {
        self.storage
            .remove(&self.key)
            .with_context(|| format!("Failed to clear session under '{}'", self.key))
    }
}

impl std::fmt::Debug for SessionRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRepository").field("key", &self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemorySessionStorage;
    use shared::UserType;

    fn user() -> User {
        User {
            id: "user::1".to_string(),
            name: "a".to_string(),
            email: "a@b.com".to_string(),
            user_type: UserType::User,
        }
    }

    #[test]
    fn test_save_writes_camel_case_json() {
        let storage = Arc::new(InMemorySessionStorage::new());
        let repo = SessionRepository::new(storage.clone(), "svasthify_user");

        repo.save(&user()).unwrap();

        let raw = storage.get("svasthify_user").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["name"], "a");
        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["userType"], "user");
        assert_eq!(repo.load().unwrap(), Some(user()));
    }

    #[test]
    fn test_corrupt_record_is_cleared() {
        let storage = Arc::new(InMemorySessionStorage::with_entry("svasthify_user", "{not json"));
        let repo = SessionRepository::new(storage.clone(), "svasthify_user");

        assert_eq!(repo.load().unwrap(), None);
        assert_eq!(storage.get("svasthify_user").unwrap(), None);
    }

    #[test]
    fn test_clear() {
        let storage = Arc::new(InMemorySessionStorage::new());
        let repo = SessionRepository::new(storage, "svasthify_user");
        repo.save(&user()).unwrap();
        repo.clear().unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }
}
