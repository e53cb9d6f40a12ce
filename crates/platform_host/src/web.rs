//! `localStorage`-backed preference store.
//!
//! On non-`wasm32` targets there is no browser storage; reads return nothing and writes report
//! [`PrefsError::Unavailable`] so callers can log and continue.

use crate::prefs::{PrefsError, PrefsStore};

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl WebPrefsStore {
    #[cfg(target_arch = "wasm32")]
    fn storage() -> Result<web_sys::Storage, PrefsError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(PrefsError::Unavailable)
    }
}

impl PrefsStore for WebPrefsStore {
    fn load_raw(&self, key: &str) -> Result<Option<String>, PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::storage()?
                .get_item(key)
                .map_err(|err| PrefsError::Backend {
                    operation: "load",
                    key: key.to_string(),
                    reason: format!("{err:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::storage()?
                .set_item(key, raw_json)
                .map_err(|err| PrefsError::Backend {
                    operation: "save",
                    key: key.to_string(),
                    reason: format!("{err:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Err(PrefsError::Unavailable)
        }
    }

    fn delete(&self, key: &str) -> Result<(), PrefsError> {
        #[cfg(target_arch = "wasm32")]
        {
            Self::storage()?
                .remove_item(key)
                .map_err(|err| PrefsError::Backend {
                    operation: "delete",
                    key: key.to_string(),
                    reason: format!("{err:?}"),
                })
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(PrefsError::Unavailable)
        }
    }
}
