//! # Site configuration (`site.toml`)
//!
//! The few tunables of the site live in a TOML document compiled into the
//! binary from `packages/content/site.toml`. There is no runtime lookup; a
//! deploy changes the file and rebuilds.
//!
//! ## Structure
//!
//! ```toml
//! [theme]
//! storage_key = "theme"       # localStorage key of the theme preference
//!
//! [navigation]
//! scroll_threshold = 50.0     # px scrolled before the navbar turns solid
//! nav_height = 64.0           # px hidden behind the fixed navbar
//!
//! [signature]
//! name = "Talha Akbar"        # sender block of the cover letter
//! title = "React Native Developer"
//! email = "..."
//! phone = "..."
//! portfolio_url = "..."
//! ```
//!
//! Every section and key has a default, so an empty document is the default
//! configuration.

use serde::Deserialize;

use crate::cover_letter::Signature;

/// The configuration document compiled into the site.
pub const EMBEDDED_SITE_TOML: &str = include_str!("../site.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid site configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub signature: Signature,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ThemeConfig {
    /// localStorage key holding `"dark"` or `"light"`.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "theme".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavigationConfig {
    /// Scroll offset in pixels past which the navbar switches to its scrolled style.
    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold: f64,
    /// Height of the fixed navbar in pixels.
    #[serde(default = "default_nav_height")]
    pub nav_height: f64,
}

fn default_scroll_threshold() -> f64 {
    50.0
}

fn default_nav_height() -> f64 {
    64.0
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: default_scroll_threshold(),
            nav_height: default_nav_height(),
        }
    }
}

impl SiteConfig {
    /// Parse and check a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml(EMBEDDED_SITE_TOML)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "theme.storage_key must not be empty".to_string(),
            ));
        }
        let nav = &self.navigation;
        if !nav.scroll_threshold.is_finite() || nav.scroll_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "navigation.scroll_threshold must be a non-negative number, got {}",
                nav.scroll_threshold
            )));
        }
        if !nav.nav_height.is_finite() || nav.nav_height < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "navigation.nav_height must be a non-negative number, got {}",
                nav.nav_height
            )));
        }
        Ok(())
    }
}
