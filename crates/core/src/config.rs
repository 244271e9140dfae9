//! Site configuration

use crate::error::ConfigError;
use crate::identity::OAuthProvider;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Settings for the identity provider and the page views
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the hosted backend-as-a-service project
    pub provider_url: String,
    /// Public (anon) API key sent with every provider request
    pub anon_key: String,
    /// Recipient of contact-form mail
    pub contact_email: String,
    /// Substrings marking persisted keys and cookies as auth state
    pub storage_markers: Vec<String>,
    /// Table that receives the profile upsert after sign-in
    pub profile_table: String,
    pub profile_conflict_key: String,
    pub oauth_provider: OAuthProvider,
    pub oauth_query_params: BTreeMap<String, String>,
    /// How long the contact confirmation stays up before the form returns
    pub contact_reset_ms: u32,
    /// Delay before rebroadcasting navigation after a cross-page jump
    pub cross_page_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            provider_url: String::new(),
            anon_key: String::new(),
            contact_email: "info@inflow.com".to_string(),
            storage_markers: vec!["supabase".to_string(), "auth".to_string()],
            profile_table: "users".to_string(),
            profile_conflict_key: "id".to_string(),
            oauth_provider: OAuthProvider::Google,
            oauth_query_params: BTreeMap::from([
                ("access_type".to_string(), "offline".to_string()),
                ("prompt".to_string(), "select_account".to_string()),
            ]),
            contact_reset_ms: 3_000,
            cross_page_delay_ms: 100,
        }
    }
}

impl SiteConfig {
    /// Defaults plus the two values that differ per deployment
    pub fn from_parts(
        provider_url: Option<&str>,
        anon_key: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            provider_url: provider_url
                .filter(|s| !s.is_empty())
                .ok_or(ConfigError::Missing("provider_url"))?
                .trim_end_matches('/')
                .to_string(),
            anon_key: anon_key
                .filter(|s| !s.is_empty())
                .ok_or(ConfigError::Missing("anon_key"))?
                .to_string(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON override document; absent fields keep their defaults
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            serde_json::from_str(document).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.provider_url = config.provider_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anon_key.is_empty() {
            return Err(ConfigError::Missing("anon_key"));
        }
        let url = Url::parse(&self.provider_url).map_err(|e| ConfigError::InvalidUrl {
            url: self.provider_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: self.provider_url.clone(),
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }
        Ok(())
    }
}
