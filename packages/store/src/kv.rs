//! # Key-value persistence seam
//!
//! Everything the demo persists lives in a flat, string-keyed, string-valued
//! store scoped to one browser profile. [`KeyValueStore`] is the seam: the web
//! build plugs in [`crate::LocalStore`] (browser `localStorage`), tests and
//! native builds plug in [`crate::MemoryStore`].
//!
//! ## JSON values
//!
//! Values are JSON documents. [`load_json`] and [`save_json`] wrap the raw
//! string API:
//!
//! | Helper | Absent key | Malformed value | Write failure |
//! |--------|-----------|-----------------|---------------|
//! | [`load_json`] | `None` | `None` (logged at `warn`) | — |
//! | [`save_json`] | — | — | [`StoreError`] |
//!
//! There is no schema versioning and no transaction spanning several keys:
//! every write replaces the whole value stored under one key.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Failure to write to, or remove from, the underlying storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove key `{key}`: {reason}")]
    Remove { key: String, reason: String },
    #[error("failed to encode value for key `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Synchronous string key-value storage.
///
/// Reads are infallible from the caller's point of view: an unreadable store
/// behaves like an empty one.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// Read and decode the JSON value stored under `key`.
///
/// Returns `None` when the key is absent or its value does not decode as `T`.
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Ignoring malformed value under `{}`: {}", key, e);
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`, replacing any previous value.
pub fn save_json<T, S>(store: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    store.set_item(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_load_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(load_json::<Vec<String>, _>(&store, "nothing"), None);
    }

    #[test]
    fn test_load_malformed_value_is_none() {
        let store = MemoryStore::new();
        store.set_item("users", "{not json").unwrap();
        assert_eq!(load_json::<Vec<String>, _>(&store, "users"), None);

        // Valid JSON of the wrong shape is treated the same way
        store.set_item("users", "42").unwrap();
        assert_eq!(load_json::<Vec<String>, _>(&store, "users"), None);
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save_json(&store, "flag", &true).unwrap();
        assert_eq!(store.get_item("flag").as_deref(), Some("true"));
        assert_eq!(load_json::<bool, _>(&store, "flag"), Some(true));
    }

    #[test]
    fn test_save_replaces_whole_value() {
        let store = MemoryStore::new();
        save_json(&store, "list", &vec!["a", "b"]).unwrap();
        save_json(&store, "list", &vec!["c"]).unwrap();
        assert_eq!(
            load_json::<Vec<String>, _>(&store, "list"),
            Some(vec!["c".to_string()])
        );
    }
}
