//! # Theme preference persistence
//!
//! The theme is the only piece of state the site keeps across visits. It is
//! stored as a single key/value pair through a [`PreferenceStore`]:
//!
//! | Platform | Store |
//! |----------|-------|
//! | Web (WASM + `web` feature) | [`crate::LocalStore`], backed by `window.localStorage` |
//! | Everything else | [`crate::MemoryStore`], process memory only |
//!
//! [`ThemePreference`] binds a store to a key and implements the load and
//! toggle rules on top of it.

use crate::theme::Theme;

/// Synchronous string key/value storage.
///
/// Implementations never fail loudly: an unavailable backend reads as empty
/// and drops writes.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}

/// Decide the theme shown on first render.
///
/// A stored value always wins over the system query, so a stored value that
/// is not `"dark"` (including an unrecognized one) yields [`Theme::Light`].
/// With nothing stored, the system dark-mode preference decides.
pub fn resolve_initial_theme(stored: Option<&str>, system_prefers_dark: bool) -> Theme {
    match stored {
        Some(value) => Theme::from_stored(value).unwrap_or(Theme::Light),
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// A [`PreferenceStore`] bound to the key holding the theme.
#[derive(Clone, Debug)]
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The stored theme, if a recognized value is present.
    pub fn stored(&self) -> Option<Theme> {
        self.store
            .get(&self.key)
            .and_then(|value| Theme::from_stored(&value))
    }

    /// Theme to show on load. See [`resolve_initial_theme`].
    pub fn initial(&self, system_prefers_dark: bool) -> Theme {
        let stored = self.store.get(&self.key);
        resolve_initial_theme(stored.as_deref(), system_prefers_dark)
    }

    pub fn save(&self, theme: Theme) {
        self.store.set(&self.key, theme.as_str());
    }

    /// Flip `current`, persist the result with a single write and return it.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        self.save(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_resolve_prefers_stored_value() {
        assert_eq!(resolve_initial_theme(Some("dark"), false), Theme::Dark);
        assert_eq!(resolve_initial_theme(Some("light"), true), Theme::Light);
    }

    #[test]
    fn test_resolve_falls_back_to_system() {
        assert_eq!(resolve_initial_theme(None, true), Theme::Dark);
        assert_eq!(resolve_initial_theme(None, false), Theme::Light);
    }

    #[test]
    fn test_resolve_unknown_stored_value_is_light() {
        assert_eq!(resolve_initial_theme(Some("sepia"), true), Theme::Light);
        assert_eq!(resolve_initial_theme(Some(""), true), Theme::Light);
    }

    #[test]
    fn test_initial_reads_configured_key() {
        let store = MemoryStore::new();
        store.set("portfolio-theme", "dark");
        let pref = ThemePreference::new(store.clone(), "theme");
        assert_eq!(pref.initial(false), Theme::Light);

        let pref = ThemePreference::new(store, "portfolio-theme");
        assert_eq!(pref.initial(false), Theme::Dark);
        assert_eq!(pref.stored(), Some(Theme::Dark));
    }

    #[test]
    fn test_toggle_writes_once_per_call() {
        let store = MemoryStore::new();
        let pref = ThemePreference::new(store.clone(), "theme");

        let theme = pref.initial(false);
        assert_eq!(store.write_count(), 0);

        let theme = pref.toggle(theme);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.write_count(), 1);

        let theme = pref.toggle(theme);
        assert_eq!(theme, Theme::Light);
        assert_eq!(store.get("theme").as_deref(), Some("light"));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_toggle_result_survives_reload() {
        let store = MemoryStore::new();
        let pref = ThemePreference::new(store.clone(), "theme");
        let toggled = pref.toggle(pref.initial(true));
        assert_eq!(toggled, Theme::Light);

        // A fresh load ignores the system preference once something is stored
        let reloaded = ThemePreference::new(store, "theme");
        assert_eq!(reloaded.initial(true), Theme::Light);
    }
}
