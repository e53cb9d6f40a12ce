//! Lightweight preference storage contracts and adapters.
//!
//! Values are stored as JSON text per key. The contract is synchronous: every backing store the
//! dashboard targets (`localStorage`, in-memory maps) answers immediately.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures surfaced by [`PrefsStore`] implementations and the typed helpers.
pub enum PrefsError {
    /// The host has no usable storage (private mode, non-browser target, quota disabled).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The backing store rejected a read, write, or delete.
    #[error("preference storage {operation} failed for `{key}`: {reason}")]
    Backend {
        /// `load`, `save`, or `delete`.
        operation: &'static str,
        /// Key being accessed.
        key: String,
        /// Host-provided failure text.
        reason: String,
    },
    /// The stored value is not valid JSON for the requested type.
    #[error("preference `{key}` could not be decoded: {reason}")]
    Decode {
        /// Key being decoded.
        key: String,
        /// Decoder failure text.
        reason: String,
    },
    /// The value could not be serialized.
    #[error("preference `{key}` could not be encoded: {reason}")]
    Encode {
        /// Key being encoded.
        key: String,
        /// Encoder failure text.
        reason: String,
    },
}

/// Host service for lightweight preference values.
pub trait PrefsStore {
    /// Loads the raw JSON text stored under `key`.
    fn load_raw(&self, key: &str) -> Result<Option<String>, PrefsError>;

    /// Stores raw JSON text under `key`, replacing any previous value.
    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), PrefsError>;

    /// Removes `key`. Removing a missing key succeeds.
    fn delete(&self, key: &str) -> Result<(), PrefsError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Preference store that never persists anything.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_raw(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Ok(None)
    }

    fn save_raw(&self, _key: &str, _raw_json: &str) -> Result<(), PrefsError> {
        Ok(())
    }

    fn delete(&self, _key: &str) -> Result<(), PrefsError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store. Clones share the same map.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), PrefsError> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), PrefsError> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

/// Loads and deserializes a typed preference value.
///
/// # Errors
///
/// Returns an error when the store fails or the stored JSON does not decode as `T`.
pub fn load_pref_with<S: PrefsStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> Result<Option<T>, PrefsError> {
    let Some(raw) = store.load_raw(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|err| PrefsError::Decode {
            key: key.to_string(),
            reason: err.to_string(),
        })
}

/// Serializes and saves a typed preference value.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn save_pref_with<S: PrefsStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), PrefsError> {
    let raw = serde_json::to_string(value).map_err(|err| PrefsError::Encode {
        key: key.to_string(),
        reason: err.to_string(),
    })?;
    store.save_raw(key, &raw)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct SidebarPref {
        collapsed: bool,
    }

    #[test]
    fn memory_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_raw("pref.key", "{\"k\":1}").expect("save");
        assert_eq!(
            store_obj.load_raw("pref.key").expect("load"),
            Some("{\"k\":1}".to_string())
        );
        store_obj.delete("pref.key").expect("delete");
        assert_eq!(store_obj.load_raw("pref.key").expect("load"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn clones_share_the_same_backing_map() {
        let store = MemoryPrefsStore::default();
        let other = store.clone();
        save_pref_with(&store, "dashboard.sidebar", &SidebarPref { collapsed: true })
            .expect("save typed");

        let loaded: Option<SidebarPref> =
            load_pref_with(&other, "dashboard.sidebar").expect("load typed");
        assert_eq!(loaded, Some(SidebarPref { collapsed: true }));
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn undecodable_value_reports_the_key() {
        let store = MemoryPrefsStore::default();
        store.save_raw("dashboard.sidebar", "not json").expect("save");

        let err = load_pref_with::<_, SidebarPref>(&store, "dashboard.sidebar")
            .expect_err("decode should fail");
        assert!(matches!(err, PrefsError::Decode { ref key, .. } if key == "dashboard.sidebar"));
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        assert_eq!(store.load_raw("k").expect("load"), None);
        store.save_raw("k", "{}").expect("save");
        store.delete("k").expect("delete");
    }
}
