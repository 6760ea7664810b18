use std::sync::OnceLock;

use content::SiteConfig;

/// The site configuration, parsed once from the embedded `site.toml`.
///
/// A broken document is logged and replaced by the defaults so the page
/// still renders.
pub fn site_config() -> &'static SiteConfig {
    static CONFIG: OnceLock<SiteConfig> = OnceLock::new();
    CONFIG.get_or_init(|| match SiteConfig::embedded() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Falling back to default site configuration: {}", e);
            SiteConfig::default()
        }
    })
}
