//! Browser localStorage slot.
//!
//! `window.localStorage` is looked up on every call; when it is missing or
//! throws, loads read empty and saves are skipped.

use listpad_core::{decode, encode, Storage, StorageError};

pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl Storage for BrowserStorage {
    fn load(&self) -> Vec<String> {
        let Some(storage) = Self::local_storage() else {
            tracing::debug!("localStorage unavailable, starting empty");
            return Vec::new();
        };
        match storage.get_item(&self.key) {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = ?e, "failed to read slot");
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[String]) -> Result<(), StorageError> {
        let Some(storage) = Self::local_storage() else {
            tracing::debug!("localStorage unavailable, skipping save");
            return Ok(());
        };
        storage
            .set_item(&self.key, &encode(items))
            .map_err(|e| StorageError::Write {
                key: self.key.clone(),
                reason: format!("{:?}", e),
            })
    }
}
