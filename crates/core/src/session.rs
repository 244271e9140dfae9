//! Session manager: reconciles local auth state with the identity provider
//!
//! Lifecycle: `Uninitialized -> Loading -> {Authenticated, Anonymous}`, with
//! `SigningOut` as a transient sub-state entered by [`SessionManager::sign_out`].
//! Change notifications are applied in arrival order and the last one wins.

use crate::config::SiteConfig;
use crate::error::AuthError;
use crate::identity::{
    AuthChangeEvent, IdentityProvider, OAuthRequest, ProviderSession, SignUpRequest,
    Subscription, UpsertRequest, User,
};
use crate::platform::{Navigator, Spawner};
use crate::storage::{ClientStorage, PurgeScope};
use serde_json::{Map, Value, json};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, error, info};

/// Where sign-out lands; a full document load, not a client-side route change
pub const LANDING_ROUTE: &str = "/";

/// Coarse authentication state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Uninitialized,
    Loading,
    Authenticated,
    Anonymous,
    SigningOut,
}

/// What views render from
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSnapshot {
    pub user: Option<User>,
    pub loading: bool,
}

/// Identifies an observer registered with [`SessionManager::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Rc<dyn Fn(&AuthSnapshot)>;

#[derive(Debug)]
struct SessionState {
    phase: AuthPhase,
    user: Option<User>,
    signing_out: bool,
}

/// Single long-lived owner of the signed-in user
pub struct SessionManager {
    provider: Rc<dyn IdentityProvider>,
    storage: ClientStorage,
    navigator: Rc<dyn Navigator>,
    spawner: Rc<dyn Spawner>,
    config: Rc<SiteConfig>,
    state: RefCell<SessionState>,
    observers: RefCell<Vec<(ObserverId, Observer)>>,
    next_observer: Cell<u64>,
    subscription: RefCell<Option<Subscription>>,
}

impl SessionManager {
    pub fn new(
        provider: Rc<dyn IdentityProvider>,
        storage: ClientStorage,
        navigator: Rc<dyn Navigator>,
        spawner: Rc<dyn Spawner>,
        config: Rc<SiteConfig>,
    ) -> Rc<Self> {
        Rc::new(Self {
            provider,
            storage,
            navigator,
            spawner,
            config,
            state: RefCell::new(SessionState {
                phase: AuthPhase::Uninitialized,
                user: None,
                signing_out: false,
            }),
            observers: RefCell::new(Vec::new()),
            next_observer: Cell::new(0),
            subscription: RefCell::new(None),
        })
    }

    pub fn phase(&self) -> AuthPhase {
        let state = self.state.borrow();
        if state.signing_out {
            AuthPhase::SigningOut
        } else {
            state.phase
        }
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    /// True while initializing or signing out
    pub fn is_loading(&self) -> bool {
        let state = self.state.borrow();
        state.phase == AuthPhase::Loading || state.signing_out
    }

    pub fn snapshot(&self) -> AuthSnapshot {
        AuthSnapshot {
            user: self.user(),
            loading: self.is_loading(),
        }
    }

    pub fn subscribe(&self, observer: Rc<dyn Fn(&AuthSnapshot)>) -> ObserverId {
        let id = ObserverId(self.next_observer.get());
        self.next_observer.set(id.0 + 1);
        self.observers.borrow_mut().push((id, observer));
        id
    }

    pub fn unsubscribe(&self, id: ObserverId) {
        self.observers.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(&snapshot);
        }
    }

    /// Subscribe to provider notifications and restore any existing session
    ///
    /// Runs once; later calls are ignored. Lookup failures are logged and
    /// treated as "no session".
    pub async fn initialize(self: &Rc<Self>) {
        {
            let mut state = self.state.borrow_mut();
            if state.phase != AuthPhase::Uninitialized {
                debug!("Session manager already initialized");
                return;
            }
            state.phase = AuthPhase::Loading;
        }
        self.notify();

        let manager = Rc::downgrade(self);
        let subscription = self
            .provider
            .on_session_change(Rc::new(move |event, session| {
                if let Some(manager) = manager.upgrade() {
                    manager.handle_change(event, session);
                }
            }));
        *self.subscription.borrow_mut() = Some(subscription);

        let result = self.provider.get_session().await;

        {
            let mut state = self.state.borrow_mut();
            if state.phase != AuthPhase::Loading {
                debug!("Initial session lookup superseded by a change notification");
                return;
            }
            match result {
                Ok(Some(session)) => {
                    let user = session.to_user();
                    info!(user_id = %user.id, "Restored existing session");
                    state.user = Some(user);
                    state.phase = AuthPhase::Authenticated;
                }
                Ok(None) => {
                    debug!("No existing session");
                    state.user = None;
                    state.phase = AuthPhase::Anonymous;
                }
                Err(e) => {
                    error!(error = %e, "Failed to get initial session");
                    state.user = None;
                    state.phase = AuthPhase::Anonymous;
                }
            }
        }
        self.notify();
    }

    /// Apply one provider change notification
    pub fn handle_change(&self, event: AuthChangeEvent, session: Option<ProviderSession>) {
        info!(
            event = %event,
            user_id = session.as_ref().map_or("no user", |s| s.user.id.as_str()),
            "Auth state change"
        );

        match (event, session) {
            (AuthChangeEvent::SignedOut, _) | (_, None) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.user = None;
                    state.phase = AuthPhase::Anonymous;
                }
                self.notify();
                self.storage
                    .purge(&self.config.storage_markers, PurgeScope::Storage);
            }
            (AuthChangeEvent::SignedIn | AuthChangeEvent::TokenRefreshed, Some(session)) => {
                {
                    let mut state = self.state.borrow_mut();
                    state.user = Some(session.to_user());
                    state.phase = AuthPhase::Authenticated;
                }
                self.notify();
                self.spawn_profile_upsert(&session);
            }
            (other, Some(_)) => {
                debug!(event = %other, "Ignoring auth event");
            }
        }
    }

    /// Record the profile row without blocking later notifications
    fn spawn_profile_upsert(&self, session: &ProviderSession) {
        let request = UpsertRequest {
            table: self.config.profile_table.clone(),
            record: json!({
                "id": session.user.id,
                "email": session.user.email,
                "created_at": chrono::Utc::now().to_rfc3339(),
            }),
            on_conflict: self.config.profile_conflict_key.clone(),
        };
        let provider = self.provider.clone();
        let user_id = session.user.id.clone();
        self.spawner.spawn(Box::pin(async move {
            match provider.upsert(request).await {
                Ok(()) => debug!(user_id = %user_id, "Upserted user profile"),
                Err(e) => error!(user_id = %user_id, error = %e, "Error upserting user"),
            }
        }));
    }

    fn redirect_target(&self) -> String {
        format!("{}/", self.navigator.origin())
    }

    /// Register a new account
    ///
    /// Returns the signed-in user only when the provider skips email
    /// verification.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<Option<User>, AuthError> {
        let mut metadata = Map::new();
        metadata.insert("username".to_string(), Value::String(username.to_string()));
        let request = SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            metadata,
            redirect_to: self.redirect_target(),
        };

        match self.provider.sign_up(request).await {
            Ok(session) => {
                info!(email = %email, verified = session.is_some(), "Signup succeeded");
                Ok(session.map(|s| s.to_user()))
            }
            Err(e) => {
                error!(error = %e, "Signup error");
                Err(e.into())
            }
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        match self.provider.sign_in_with_password(email, password).await {
            Ok(session) => Ok(session.to_user()),
            Err(e) => {
                error!(error = %e, "Login error");
                Err(e.into())
            }
        }
    }

    /// End the session; never fails outward
    ///
    /// Provider errors are logged and local cleanup and the landing-page
    /// reload happen regardless. A call made while another sign-out is in
    /// flight returns immediately.
    pub async fn sign_out(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.signing_out {
                info!("Sign out already in progress");
                return;
            }
            state.signing_out = true;
        }
        info!("Starting sign out process");
        self.notify();

        match self.provider.sign_out().await {
            Ok(()) => info!("Provider sign out successful"),
            Err(e) => error!(error = %e, "Provider sign out error"),
        }

        self.storage
            .purge(&self.config.storage_markers, PurgeScope::Everything);

        {
            let mut state = self.state.borrow_mut();
            state.user = None;
            state.phase = AuthPhase::Anonymous;
            state.signing_out = false;
        }
        self.notify();

        info!("Redirecting to landing page");
        self.navigator.replace(LANDING_ROUTE);
    }

    /// Start the OAuth flow; the browser leaves the application on success
    pub async fn sign_in_with_google(&self) -> Result<(), AuthError> {
        let request = OAuthRequest {
            provider: self.config.oauth_provider,
            redirect_to: self.redirect_target(),
            query_params: self.config.oauth_query_params.clone(),
        };

        match self.provider.sign_in_with_oauth(request).await {
            Ok(url) => {
                info!(provider = self.config.oauth_provider.as_str(), "Redirecting to OAuth provider");
                self.navigator.assign(&url);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Google OAuth error");
                Err(e.into())
            }
        }
    }
}

impl Drop for SessionManager {
    fn drop(&mut self) {
        if let Some(subscription) = self.subscription.get_mut().take() {
            subscription.unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::identity::mock::MockProvider;
    use crate::tests::{Harness, ScriptedProvider, session_for};
    use crate::storage::KeyValueStore;

    #[tokio::test]
    async fn initialize_restores_existing_session() {
        let provider = ScriptedProvider::new();
        provider.set_session(Some(session_for("u-1", "jane@x.com")));
        let harness = Harness::new(provider);

        assert_eq!(harness.manager.phase(), AuthPhase::Uninitialized);
        harness.manager.initialize().await;

        assert_eq!(harness.manager.phase(), AuthPhase::Authenticated);
        let user = harness.manager.user().unwrap();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.username.as_deref(), Some("u-1-name"));
        assert!(!harness.manager.is_loading());
    }

    #[tokio::test]
    async fn initialize_failure_means_signed_out() {
        let provider = ScriptedProvider::new();
        provider.fail_get_session(ProviderError::Transport("offline".into()));
        let harness = Harness::new(provider);

        harness.manager.initialize().await;

        assert_eq!(harness.manager.phase(), AuthPhase::Anonymous);
        assert_eq!(harness.manager.user(), None);
        assert!(!harness.manager.is_loading());
    }

    #[tokio::test]
    async fn observers_see_loading_then_settled_state() {
        let harness = Harness::new(ScriptedProvider::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        harness
            .manager
            .subscribe(Rc::new(move |snapshot: &AuthSnapshot| {
                sink.borrow_mut().push(snapshot.loading);
            }));

        harness.manager.initialize().await;

        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn sign_in_notification_populates_user_and_upserts_later() {
        let harness = Harness::new(ScriptedProvider::new());
        harness.manager.initialize().await;

        harness
            .provider
            .emit(AuthChangeEvent::SignedIn, Some(session_for("u-7", "a@b.c")));

        assert_eq!(harness.manager.phase(), AuthPhase::Authenticated);
        assert_eq!(harness.manager.user().unwrap().email, "a@b.c");
        // the upsert is queued, not awaited
        assert!(harness.provider.upserts().is_empty());
        assert_eq!(harness.spawner.pending(), 1);

        harness.spawner.run_all().await;
        let upserts = harness.provider.upserts();
        assert_eq!(upserts.len(), 1);
        assert_eq!(upserts[0].table, "users");
        assert_eq!(upserts[0].on_conflict, "id");
        assert_eq!(upserts[0].record["id"], "u-7");
    }

    #[tokio::test]
    async fn failed_upsert_is_only_logged() {
        let harness = Harness::new(ScriptedProvider::new());
        harness
            .provider
            .fail_upsert(ProviderError::rejected(409, "conflict"));
        harness.manager.initialize().await;
        harness
            .provider
            .emit(AuthChangeEvent::TokenRefreshed, Some(session_for("u-1", "a@b.c")));

        harness.spawner.run_all().await;

        assert_eq!(harness.manager.phase(), AuthPhase::Authenticated);
    }

    #[tokio::test]
    async fn event_sequences_ending_in_sign_out_leave_no_user() {
        let endings = [
            (AuthChangeEvent::SignedOut, None),
            (AuthChangeEvent::SignedOut, Some(session_for("u-1", "a@b.c"))),
            (AuthChangeEvent::TokenRefreshed, None),
            (AuthChangeEvent::UserUpdated, None),
        ];

        for (event, session) in endings {
            let harness = Harness::new(ScriptedProvider::new());
            harness.manager.initialize().await;
            harness
                .provider
                .emit(AuthChangeEvent::SignedIn, Some(session_for("u-1", "a@b.c")));
            harness
                .provider
                .emit(AuthChangeEvent::TokenRefreshed, Some(session_for("u-1", "a@b.c")));
            harness.provider.emit(event, session);

            assert_eq!(harness.manager.user(), None, "after {event}");
            assert!(!harness.manager.is_loading(), "after {event}");
            assert!(harness.session_store.is_empty());
        }
    }

    #[tokio::test]
    async fn sign_out_notification_during_loading_wins_over_lookup() {
        let provider = ScriptedProvider::new();
        provider.set_session(Some(session_for("u-1", "a@b.c")));
        provider.emit_during_get_session(AuthChangeEvent::SignedOut, None);
        let harness = Harness::new(provider);

        harness.manager.initialize().await;

        assert_eq!(harness.manager.user(), None);
        assert_eq!(harness.manager.phase(), AuthPhase::Anonymous);
    }

    #[tokio::test]
    async fn sign_out_clears_state_and_reloads_landing_page() {
        let harness = Harness::new(ScriptedProvider::new());
        harness.manager.initialize().await;
        harness
            .provider
            .emit(AuthChangeEvent::SignedIn, Some(session_for("u-1", "a@b.c")));

        harness.manager.sign_out().await;

        assert_eq!(harness.manager.user(), None);
        assert!(!harness.manager.is_loading());
        assert_eq!(harness.navigator.replaced(), vec![LANDING_ROUTE.to_string()]);
        assert_eq!(harness.local_store.keys().unwrap(), vec!["theme".to_string()]);
        assert!(harness.session_store.is_empty());
        assert!(!harness.cookies.contains("sb-access-auth"));
        assert!(harness.cookies.contains("consent"));
    }

    #[tokio::test]
    async fn sign_out_completes_when_provider_fails() {
        let harness = Harness::new(ScriptedProvider::new());
        harness
            .provider
            .fail_sign_out(ProviderError::Transport("offline".into()));
        harness.manager.initialize().await;
        harness
            .provider
            .emit(AuthChangeEvent::SignedIn, Some(session_for("u-1", "a@b.c")));

        harness.manager.sign_out().await;

        assert_eq!(harness.manager.user(), None);
        assert_eq!(harness.navigator.replaced(), vec!["/".to_string()]);
        assert!(harness.session_store.is_empty());
    }

    #[tokio::test]
    async fn sign_out_survives_disabled_storage() {
        let harness = Harness::new(ScriptedProvider::new());
        harness.local_store.set_unavailable(true);
        harness.session_store.set_unavailable(true);
        harness.manager.initialize().await;

        harness.manager.sign_out().await;

        assert_eq!(harness.navigator.replaced(), vec!["/".to_string()]);
        assert!(!harness.manager.is_loading());
    }

    #[tokio::test]
    async fn concurrent_sign_out_calls_provider_once() {
        let harness = Harness::new(ScriptedProvider::new());
        harness.manager.initialize().await;
        let release = harness.provider.hold_sign_out();

        let first = harness.manager.sign_out();
        let second = async {
            assert_eq!(harness.manager.phase(), AuthPhase::SigningOut);
            assert!(harness.manager.is_loading());
            harness.manager.sign_out().await;
            release.send(()).ok();
        };
        futures::join!(first, second);

        assert_eq!(harness.provider.sign_out_calls(), 1);
        assert_eq!(harness.navigator.replaced().len(), 1);
        assert_eq!(harness.manager.phase(), AuthPhase::Anonymous);
    }

    #[tokio::test]
    async fn sign_up_passes_username_and_redirect() {
        let harness = Harness::new(ScriptedProvider::new());

        let user = harness
            .manager
            .sign_up("jane@x.com", "hunter22", "jane")
            .await
            .unwrap();

        assert_eq!(user, None);
        let requests = harness.provider.sign_ups();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].metadata["username"], "jane");
        assert_eq!(requests[0].redirect_to, "https://inflow.test/");
    }

    #[tokio::test]
    async fn rejected_sign_in_carries_provider_message() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_in_with_password()
            .withf(|email, password| email == "jane@x.com" && password == "wrong")
            .times(1)
            .returning(|_, _| Err(ProviderError::rejected(400, "Invalid login credentials")));
        let harness = Harness::with_provider(Rc::new(provider));

        let err = harness
            .manager
            .sign_in("jane@x.com", "wrong")
            .await
            .unwrap_err();

        assert_eq!(err, AuthError::Provider("Invalid login credentials".into()));
    }

    #[tokio::test]
    async fn rejected_sign_up_carries_provider_message() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_up()
            .times(1)
            .returning(|_| Err(ProviderError::rejected(422, "User already registered")));
        let harness = Harness::with_provider(Rc::new(provider));

        let err = harness
            .manager
            .sign_up("jane@x.com", "pw", "jane")
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "User already registered");
    }

    #[tokio::test]
    async fn google_sign_in_navigates_to_authorize_url() {
        let harness = Harness::new(ScriptedProvider::new());

        harness.manager.sign_in_with_google().await.unwrap();

        let requests = harness.provider.oauth_requests();
        assert_eq!(requests[0].redirect_to, "https://inflow.test/");
        assert_eq!(
            requests[0].query_params.get("access_type").map(String::as_str),
            Some("offline")
        );
        assert_eq!(
            harness.navigator.assigned(),
            vec!["https://provider.test/authorize?provider=google".to_string()]
        );
        // no session until the redirect comes back
        assert_eq!(harness.manager.user(), None);
    }

    #[tokio::test]
    async fn google_sign_in_failure_is_surfaced() {
        let mut provider = MockProvider::new();
        provider
            .expect_sign_in_with_oauth()
            .returning(|_| Err(ProviderError::rejected(400, "Unsupported provider")));
        let harness = Harness::with_provider(Rc::new(provider));

        let err = harness.manager.sign_in_with_google().await.unwrap_err();

        assert_eq!(err.user_message(), "Unsupported provider");
        assert!(harness.navigator.assigned().is_empty());
    }

    #[tokio::test]
    async fn dropping_manager_unsubscribes() {
        let harness = Harness::new(ScriptedProvider::new());
        harness.manager.initialize().await;
        assert_eq!(harness.provider.listener_count(), 1);

        let Harness { manager, provider, .. } = harness;
        drop(manager);

        assert_eq!(provider.listener_count(), 0);
    }
}
