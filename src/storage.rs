//! Key-value persistence for the cached user and the settings blob.
//!
//! Components never touch `localStorage` directly; they pull an [`AppStore`]
//! out of context and go through its typed accessors.

use std::sync::Arc;
#[cfg(test)]
use std::{collections::HashMap, sync::Mutex};

use leptos::prelude::*;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::config::{LEGACY_TOKEN_KEY, SETTINGS_KEY, USER_KEY};
use crate::error::{GerminahError, Result};
use crate::settings::Settings;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Browser `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| GerminahError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| GerminahError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| GerminahError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| GerminahError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| GerminahError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| GerminahError::Storage(format!("{:?}", e)))
    }
}

/// In-process map standing in for the browser in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryStore {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|_| GerminahError::Storage("memory store poisoned".to_string()))
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// The user record kept in storage as a display hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// First word of a display name, for greetings.
pub fn first_word(name: &str) -> &str {
    name.split_whitespace().next().unwrap_or("Usuário")
}

/// Upper-cased first letter of a display name, for avatars.
pub fn initial_of(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}

#[derive(Clone)]
pub struct AppStore {
    kv: Arc<dyn KeyValueStore>,
}

impl AppStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    pub fn browser() -> Self {
        Self::new(Arc::new(LocalStore))
    }

    pub fn kv(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.kv)
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.kv.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.kv.set(key, &raw)
    }

    /// Cached user, or `None` when absent or unreadable.
    pub fn cached_user(&self) -> Option<CachedUser> {
        match self.read_json(USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("Ignoring unreadable cached user: {}", e);
                None
            }
        }
    }

    pub fn cache_user(&self, user: &CachedUser) -> Result<()> {
        self.write_json(USER_KEY, user)
    }

    pub fn clear_user(&self) -> Result<()> {
        self.kv.remove(USER_KEY)
    }

    /// Saved settings. Missing or corrupt blobs fall back to defaults.
    pub fn load_settings(&self) -> Settings {
        match self.read_json(SETTINGS_KEY) {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                tracing::warn!("Saved settings unreadable, using defaults: {}", e);
                Settings::default()
            }
        }
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.write_json(SETTINGS_KEY, settings)
    }

    pub fn has_legacy_token(&self) -> bool {
        matches!(self.kv.get(LEGACY_TOKEN_KEY), Ok(Some(_)))
    }

    /// Drop everything tied to the signed-in user. Settings survive.
    pub fn clear_session_cache(&self) -> Result<()> {
        self.kv.remove(LEGACY_TOKEN_KEY)?;
        self.clear_user()
    }
}

pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> AppStore {
        AppStore::new(Arc::new(MemoryStore::default()))
    }

    fn maria() -> CachedUser {
        CachedUser {
            id: "u-1".to_string(),
            name: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
        }
    }

    #[test]
    fn test_settings_round_trip() {
        let store = memory_store();
        let mut settings = Settings::default();
        settings.irrigation.min_humidity = 40;
        settings.irrigation.max_humidity = 70;
        settings.notifications.weekly_report = false;
        settings.system.units = "imperial".to_string();

        store.save_settings(&settings).unwrap();
        assert_eq!(store.load_settings(), settings);
    }

    #[test]
    fn test_missing_settings_fall_back_to_defaults() {
        assert_eq!(memory_store().load_settings(), Settings::default());
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let store = memory_store();
        store.kv().set(SETTINGS_KEY, "{not json").unwrap();
        assert_eq!(store.load_settings(), Settings::default());
    }

    #[test]
    fn test_user_cache_is_last_write_wins() {
        let store = memory_store();
        store.cache_user(&maria()).unwrap();

        let renamed = CachedUser {
            name: "Maria S.".to_string(),
            ..maria()
        };
        store.cache_user(&renamed).unwrap();

        assert_eq!(store.cached_user(), Some(renamed));
    }

    #[test]
    fn test_clear_session_cache_keeps_settings() {
        let store = memory_store();
        store.cache_user(&maria()).unwrap();
        store.kv().set(LEGACY_TOKEN_KEY, "opaque").unwrap();
        store.save_settings(&Settings::default()).unwrap();
        assert!(store.has_legacy_token());

        store.clear_session_cache().unwrap();

        assert!(!store.has_legacy_token());
        assert!(store.cached_user().is_none());
        assert!(store.kv().get(SETTINGS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_display_name_helpers() {
        assert_eq!(first_word(&maria().name), "Maria");
        assert_eq!(initial_of(&maria().name), "M");
        assert_eq!(initial_of("  édson"), "É");

        assert_eq!(first_word(""), "Usuário");
        assert_eq!(initial_of(""), "U");
    }
}
