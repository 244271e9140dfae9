//! Frontend configuration

use inflow_core::{ConfigError, SiteConfig};

/// Page-level constants
pub struct AppConfig;

impl AppConfig {
    /// Element the home page's "See Demo" button scrolls to
    pub const DEMO_SECTION_ID: &'static str = "video-section";

    /// Privacy policy inside the main shell, opened from the standalone pages
    pub const PRIVACY_URL: &'static str = "/#privacy";

    pub const LANDING_URL: &'static str = "/";
}

/// Site configuration from values baked in at build time
///
/// Set `INFLOW_PROVIDER_URL` and `INFLOW_PROVIDER_ANON_KEY` when building.
pub fn site_config() -> Result<SiteConfig, ConfigError> {
    SiteConfig::from_parts(
        option_env!("INFLOW_PROVIDER_URL"),
        option_env!("INFLOW_PROVIDER_ANON_KEY"),
    )
}
