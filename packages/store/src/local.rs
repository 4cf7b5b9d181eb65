//! # `localStorage` store: browser-side persistence
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It reads and writes the browser's `window.localStorage` through
//! [`web_sys::Storage`], so accounts and the session pointer survive page
//! reloads within one browser profile.
//!
//! ## Connection management
//!
//! `LocalStore` is a zero-size struct that looks up `window.localStorage` on
//! every operation. The lookup is cheap and avoids holding a non-`Send`
//! JavaScript handle inside long-lived state.
//!
//! ## Error handling
//!
//! Reads swallow errors (`None`), so a disabled or unavailable storage area
//! degrades to "no data". Writes report a [`StoreError`] carrying the
//! JavaScript exception text (typically a quota error).

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::kv::{KeyValueStore, StoreError};

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: describe(e),
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage.remove_item(key).map_err(|e| StoreError::Remove {
            key: key.to_string(),
            reason: describe(e),
        })
    }
}
