//! Typed host-service contracts consumed by the dashboard runtime.
//!
//! The runtime only talks to [`PrefsStore`]; concrete adapters are picked by the entry layer:
//! [`WebPrefsStore`] in the browser, [`MemoryPrefsStore`] in tests and native builds.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod prefs;
pub mod web;

pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore,
};
pub use web::WebPrefsStore;
