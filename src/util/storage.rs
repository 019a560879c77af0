//! `localStorage`-backed [`PreferenceStore`].
//!
//! Storage can be missing (privacy modes, sandboxed iframes) or refuse
//! writes (quota). Reads then behave as "absent" and writes report a
//! [`StoreError`], which the applier logs and moves past.

use web_sys::{Storage, Window};

use crate::error::StoreError;
use crate::store::PreferenceStore;

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage.as_ref().ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::Write { key: key.to_owned(), reason: format!("{err:?}") })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| StoreError::Remove { key: key.to_owned(), reason: format!("{err:?}") })
    }
}
