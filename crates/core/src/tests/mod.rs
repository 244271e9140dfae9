//! Test doubles for the session layer
//!
//! Exposed behind the `tests` feature so host crates can drive a
//! [`SessionManager`] without a browser or a network.

mod provider;

pub use platform::{QueuedSpawner, RecordingNavigator};
pub use provider::ScriptedProvider;

use crate::config::SiteConfig;
use crate::identity::{IdentityProvider, ProviderSession, RemoteUser};
use crate::session::SessionManager;
use crate::storage::{ClientStorage, MemoryCookieJar, MemoryStore};
use serde_json::{Map, Value};
use std::rc::Rc;

/// Origin reported by the harness navigator
pub const TEST_ORIGIN: &str = "https://inflow.test";

/// A session for `id` whose metadata username is `<id>-name`
pub fn session_for(id: &str, email: &str) -> ProviderSession {
    let mut user_metadata = Map::new();
    user_metadata.insert("username".to_string(), Value::String(format!("{id}-name")));
    ProviderSession {
        access_token: format!("access-{id}"),
        refresh_token: format!("refresh-{id}"),
        expires_at: Some(chrono::Utc::now().timestamp() + 3_600),
        token_type: "bearer".to_string(),
        user: RemoteUser {
            id: id.to_string(),
            email: Some(email.to_string()),
            user_metadata,
        },
    }
}

/// A session manager wired to in-memory collaborators
pub struct Harness<P> {
    pub manager: Rc<SessionManager>,
    pub provider: Rc<P>,
    pub navigator: Rc<RecordingNavigator>,
    pub spawner: Rc<QueuedSpawner>,
    pub local_store: Rc<MemoryStore>,
    pub session_store: Rc<MemoryStore>,
    pub cookies: Rc<MemoryCookieJar>,
}

impl Harness<ScriptedProvider> {
    pub fn new(provider: ScriptedProvider) -> Self {
        Self::with_provider(Rc::new(provider))
    }
}

impl<P: IdentityProvider + 'static> Harness<P> {
    /// Browser stores are seeded with one auth key, one unrelated key, and matching cookies
    pub fn with_provider(provider: Rc<P>) -> Self {
        let navigator = Rc::new(RecordingNavigator::new(TEST_ORIGIN));
        let spawner = Rc::new(QueuedSpawner::default());
        let local_store = Rc::new(MemoryStore::with_entries([
            ("sb-inflow-auth-token", "{}"),
            ("theme", "light"),
        ]));
        let session_store = Rc::new(MemoryStore::with_entries([("pkce-verifier", "v")]));
        let cookies = Rc::new(MemoryCookieJar::with_names(["sb-access-auth", "consent"]));
        let storage = ClientStorage::new(local_store.clone(), session_store.clone(), cookies.clone());

        let manager = SessionManager::new(
            provider.clone(),
            storage,
            navigator.clone(),
            spawner.clone(),
            Rc::new(SiteConfig::default()),
        );

        Self {
            manager,
            provider,
            navigator,
            spawner,
            local_store,
            session_store,
            cookies,
        }
    }
}
