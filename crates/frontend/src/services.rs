//! Long-lived application services, built once before the first render

use crate::browser::{DocumentCookies, WasmSpawner, WebStorage, WindowNavigator};
use inflow_core::{
    ClientStorage, ConfigError, KeyValueStore, Navigator, ProviderError, SessionManager, SiteConfig,
};
use inflow_http::{HostedIdentityProvider, is_redirect_fragment, start_session};
use std::rc::Rc;
use thiserror::Error;
use tracing::error;
use yew::prelude::*;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Built once at startup; equality is identity
#[derive(Clone)]
pub struct AppServices {
    pub config: Rc<SiteConfig>,
    pub provider: Rc<HostedIdentityProvider>,
    pub manager: Rc<SessionManager>,
    pub navigator: Rc<dyn Navigator>,
}

impl PartialEq for AppServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.manager, &other.manager)
    }
}

impl AppServices {
    pub fn from_browser(config: SiteConfig) -> Result<Self, StartupError> {
        let config = Rc::new(config);
        let local: Rc<dyn KeyValueStore> = Rc::new(WebStorage::local());
        let provider = Rc::new(HostedIdentityProvider::from_config(&config, local.clone())?);
        let storage = ClientStorage::new(
            local,
            Rc::new(WebStorage::session()),
            Rc::new(DocumentCookies),
        );
        let navigator: Rc<dyn Navigator> = Rc::new(WindowNavigator);

        let manager = SessionManager::new(
            provider.clone(),
            storage,
            navigator.clone(),
            Rc::new(WasmSpawner),
            config.clone(),
        );

        Ok(Self {
            config,
            provider,
            manager,
            navigator,
        })
    }

    /// Start the session manager and consume any redirect left in the fragment
    ///
    /// Must finish before the router reads the fragment.
    pub async fn start(&self) {
        let hash = self.navigator.hash();
        if let Err(e) = start_session(&self.manager, &self.provider, &hash).await {
            error!(error = %e, "Redirect sign-in failed");
        }
        if is_redirect_fragment(&hash) {
            crate::browser::strip_fragment();
        }
    }
}

/// Full-page navigation for views, compared by identity
#[derive(Clone)]
pub struct NavigatorHandle(pub Rc<dyn Navigator>);

impl PartialEq for NavigatorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[hook]
pub fn use_navigator() -> Rc<dyn Navigator> {
    use_context::<NavigatorHandle>()
        .expect("NavigatorHandle not found. Make sure to wrap your component with the App root")
        .0
}

#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>()
        .expect("SiteConfig not found. Make sure to wrap your component with the App root")
}
