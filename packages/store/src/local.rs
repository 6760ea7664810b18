//! # localStorage preference store
//!
//! [`LocalStore`] is the [`PreferenceStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through `web-sys`.
//!
//! The storage handle is looked up on every call; `LocalStore` itself holds
//! nothing and is free to clone. Errors (no window, storage disabled by
//! privacy settings, quota exceeded) are swallowed: reads return `None` and
//! writes are dropped, so the site falls back to the system theme.

use crate::preferences::PreferenceStore;

/// `window.localStorage`-backed PreferenceStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
}
