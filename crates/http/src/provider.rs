//! [`IdentityProvider`] backed by the hosted auth and REST endpoints

use crate::client::ProviderClient;
use crate::session_store::{SessionStore, storage_key_for};
use crate::types::SignUpResponse;
use async_trait::async_trait;
use chrono::Utc;
use inflow_core::{
    AuthChangeEvent, ChangeListener, IdentityProvider, KeyValueStore, OAuthRequest,
    ProviderError, ProviderSession, SignUpRequest, SiteConfig, Subscription, UpsertRequest,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info, warn};
use url::form_urlencoded;

/// Stored sessions expiring within this many seconds are refreshed before use
pub const REFRESH_MARGIN_SECS: i64 = 10;

type Listeners = Rc<RefCell<Vec<(u64, ChangeListener)>>>;

pub struct HostedIdentityProvider {
    client: ProviderClient,
    store: SessionStore,
    listeners: Listeners,
    next_listener: Cell<u64>,
}

impl HostedIdentityProvider {
    pub fn new(client: ProviderClient, store: SessionStore) -> Self {
        Self {
            client,
            store,
            listeners: Rc::default(),
            next_listener: Cell::new(0),
        }
    }

    /// Client and session store for the configured project
    pub fn from_config(
        config: &SiteConfig,
        storage: Rc<dyn KeyValueStore>,
    ) -> Result<Self, ProviderError> {
        let client = ProviderClient::new(&config.provider_url, &config.anon_key)?;
        let key = storage_key_for(&config.provider_url)?;
        Ok(Self::new(client, SessionStore::new(storage, key)))
    }

    pub fn client(&self) -> &ProviderClient {
        &self.client
    }

    fn now() -> i64 {
        Utc::now().timestamp()
    }

    fn emit(&self, event: AuthChangeEvent, session: Option<&ProviderSession>) {
        debug!(event = %event, listeners = self.listeners.borrow().len(), "Emitting auth event");
        let listeners: Vec<ChangeListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(event, session.cloned());
        }
    }

    /// Persist a new session and announce it
    fn establish(
        &self,
        event: AuthChangeEvent,
        session: ProviderSession,
    ) -> Result<ProviderSession, ProviderError> {
        self.store.save(&session)?;
        self.emit(event, Some(&session));
        Ok(session)
    }

    fn drop_local_session(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear persisted session");
        }
        self.emit(AuthChangeEvent::SignedOut, None);
    }

    async fn refresh(
        &self,
        session: &ProviderSession,
    ) -> Result<Option<ProviderSession>, ProviderError> {
        match self.client.refresh_grant(&session.refresh_token).await {
            Ok(response) => {
                let refreshed = response.into_session(Self::now());
                info!(user_id = %refreshed.user.id, "Refreshed session");
                self.establish(AuthChangeEvent::TokenRefreshed, refreshed)
                    .map(Some)
            }
            Err(e) if e.is_rejection() => {
                warn!(error = %e, "Refresh token rejected; discarding session");
                self.drop_local_session();
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Complete an OAuth or email-link redirect from the URL fragment
    ///
    /// Returns `Ok(None)` when the fragment carries no tokens. A fragment
    /// carrying an error description is reported as a rejection.
    pub async fn detect_session_in_url(
        &self,
        fragment: &str,
    ) -> Result<Option<ProviderSession>, ProviderError> {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let params: Vec<(String, String)> = form_urlencoded::parse(fragment.as_bytes())
            .into_owned()
            .collect();
        let param = |name: &str| fragment_param(&params, name);

        if let Some(description) = param("error_description").or_else(|| param("error")) {
            return Err(ProviderError::rejected(400, description));
        }
        let Some(access_token) = param("access_token") else {
            return Ok(None);
        };
        let refresh_token = param("refresh_token")
            .ok_or_else(|| ProviderError::Decode("redirect is missing refresh_token".into()))?;

        let now = Self::now();
        let expires_at = match param("expires_at").and_then(|v| v.parse::<i64>().ok()) {
            Some(at) => Some(at),
            None => param("expires_in")
                .and_then(|v| v.parse::<i64>().ok())
                .map(|lifetime| {
                    now.checked_add(lifetime).ok_or_else(|| {
                        ProviderError::Decode(format!("expires_in {lifetime} is out of range"))
                    })
                })
                .transpose()?,
        };
        let user = self.client.get_user(access_token).await?;

        let session = ProviderSession {
            access_token: access_token.to_string(),
            refresh_token: refresh_token.to_string(),
            expires_at,
            token_type: param("token_type").unwrap_or("bearer").to_string(),
            user,
        };
        info!(user_id = %session.user.id, "Session established from redirect");
        self.establish(AuthChangeEvent::SignedIn, session).map(Some)
    }
}

fn fragment_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[async_trait(?Send)]
impl IdentityProvider for HostedIdentityProvider {
    async fn get_session(&self) -> Result<Option<ProviderSession>, ProviderError> {
        match self.store.load()? {
            Some(session) if session.expires_within(Self::now(), REFRESH_MARGIN_SECS) => {
                debug!("Stored session is expiring; refreshing");
                self.refresh(&session).await
            }
            other => Ok(other),
        }
    }

    fn on_session_change(&self, listener: ChangeListener) -> Subscription {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));

        let listeners = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(existing, _)| *existing != id);
            }
        })
    }

    async fn sign_up(
        &self,
        request: SignUpRequest,
    ) -> Result<Option<ProviderSession>, ProviderError> {
        let response = self
            .client
            .sign_up(
                &request.email,
                &request.password,
                &request.metadata,
                &request.redirect_to,
            )
            .await?;

        match response {
            SignUpResponse::Session(tokens) => {
                let session = tokens.into_session(Self::now());
                self.establish(AuthChangeEvent::SignedIn, session).map(Some)
            }
            SignUpResponse::PendingVerification(user) => {
                debug!(user_id = %user.id, "Sign-up awaiting email verification");
                Ok(None)
            }
        }
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProviderError> {
        let tokens = self.client.password_grant(email, password).await?;
        self.establish(AuthChangeEvent::SignedIn, tokens.into_session(Self::now()))
    }

    /// Revoke remotely, then always drop the local session
    async fn sign_out(&self) -> Result<(), ProviderError> {
        let session = self.store.load().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read persisted session");
            None
        });

        let result = match &session {
            Some(session) => self
                .client
                .logout(&session.access_token)
                .await
                .map_err(ProviderError::from),
            None => Ok(()),
        };

        self.drop_local_session();
        result
    }

    async fn sign_in_with_oauth(&self, request: OAuthRequest) -> Result<String, ProviderError> {
        Ok(self.client.authorize_url(&request)?)
    }

    async fn upsert(&self, request: UpsertRequest) -> Result<(), ProviderError> {
        let bearer = self
            .store
            .load()
            .ok()
            .flatten()
            .map(|session| session.access_token);
        self.client
            .upsert(
                &request.table,
                &request.record,
                &request.on_conflict,
                bearer.as_deref(),
            )
            .await?;
        Ok(())
    }
}
