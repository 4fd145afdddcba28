use anyhow::{anyhow, Result};
use backend::SessionStorage;
use gloo::storage::{LocalStorage, Storage};

/// Session storage backed by the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStorage;

impl SessionStorage for LocalStorageSessionStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| anyhow!("Failed to read '{}' from local storage: {:?}", key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| anyhow!("Failed to write '{}' to local storage: {:?}", key, e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| anyhow!("Failed to remove '{}' from local storage: {:?}", key, e))
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use backend::SessionRepository;
    use shared::{User, UserType};
    use std::sync::Arc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_round_trips_through_local_storage() {
        let repository = SessionRepository::new(Arc::new(LocalStorageSessionStorage), "svasthify_test_user");
        let user = User {
            id: "user::1".to_string(),
            name: "a".to_string(),
            email: "a@b.com".to_string(),
            user_type: UserType::Trainer,
        };

        repository.save(&user).unwrap();
        assert_eq!(repository.load().unwrap(), Some(user));

        repository.clear().unwrap();
        assert_eq!(repository.load().unwrap(), None);
        assert_eq!(LocalStorageSessionStorage.get("svasthify_test_user").unwrap(), None);
    }
}
