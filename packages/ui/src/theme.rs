//! Theme context shared by every page.
//!
//! The app root provides a [`ThemeSignal`] and calls
//! [`load_theme_from_storage`] once mounted. The navbar toggle goes through
//! [`toggle_theme`], which updates the signal, the stored preference and the
//! `dark` class on `<html>` together.

use dioxus::prelude::*;
use store::{PreferenceStore, Theme, ThemePreference};

use crate::site_config;

/// The active theme, provided as context by the app root.
pub type ThemeSignal = Signal<Theme>;

/// Consume the [`ThemeSignal`] from context.
pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Platform-appropriate theme preference bound to the configured key.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Elsewhere**: a throwaway in-memory store, so nothing survives a reload
pub fn theme_preference() -> ThemePreference<impl PreferenceStore> {
    let key = site_config().theme.storage_key.as_str();
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        ThemePreference::new(store::LocalStore::new(), key)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        ThemePreference::new(store::MemoryStore::new(), key)
    }
}

/// Whether the OS asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Reflect `theme` onto the root element's `dark` class.
pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

/// Initialize the signal from the stored preference or the system query.
pub fn load_theme_from_storage(theme: &mut ThemeSignal) {
    let initial = theme_preference().initial(system_prefers_dark());
    tracing::debug!("Initial theme: {}", initial);
    apply_theme(initial);
    theme.set(initial);
}

/// Flip the theme, persisting the new value once.
pub fn toggle_theme(theme: &mut ThemeSignal) {
    let current = *theme.peek();
    let next = theme_preference().toggle(current);
    apply_theme(next);
    theme.set(next);
}
