pub mod preferences;
pub mod theme;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use preferences::{resolve_initial_theme, PreferenceStore, ThemePreference};
pub use theme::Theme;
