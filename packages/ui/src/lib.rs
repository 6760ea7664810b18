//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
pub mod brand_icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::*;
}

pub mod views;

pub const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
pub use components::COMPONENTS_CSS;

/// Route of the cover-letter page, opened from the navbar in a new tab.
pub const COVER_LETTER_PATH: &str = "/cover-letter";

mod config;
pub use config::site_config;

pub mod js;

mod theme;
pub use theme::{
    apply_theme, load_theme_from_storage, system_prefers_dark, theme_preference, toggle_theme,
    use_theme, ThemeSignal,
};

pub mod scroll;
pub use scroll::{scroll_to_section, use_scroll_spy, ScrollSpy};

pub mod export;
pub use export::ExportError;

mod navbar;
pub use navbar::Navbar;

pub mod sections;

mod cover_letter;
pub use cover_letter::CoverLetterGenerator;
