//! Identity provider capability and the session types it exchanges

use crate::error::ProviderError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// The signed-in identity as the application sees it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: Option<String>,
}

/// User record as returned by the provider
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Map<String, Value>,
}

impl RemoteUser {
    /// Username stored in profile metadata at sign-up
    pub fn username(&self) -> Option<String> {
        self.user_metadata
            .get("username")
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}

impl From<&RemoteUser> for User {
    fn from(remote: &RemoteUser) -> Self {
        Self {
            id: remote.id.clone(),
            email: remote.email.clone().unwrap_or_default(),
            username: remote.username(),
        }
    }
}

/// A provider-issued session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) when the access token expires
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: RemoteUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl ProviderSession {
    pub fn to_user(&self) -> User {
        User::from(&self.user)
    }

    /// Whether the access token expires within `margin` seconds of `now`
    pub fn expires_within(&self, now: i64, margin: i64) -> bool {
        self.expires_at
            .is_some_and(|at| at.saturating_sub(margin) <= now)
    }
}

/// Kinds of change notification a provider emits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthChangeEvent {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    PasswordRecovery,
}

impl AuthChangeEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InitialSession => "INITIAL_SESSION",
            Self::SignedIn => "SIGNED_IN",
            Self::SignedOut => "SIGNED_OUT",
            Self::TokenRefreshed => "TOKEN_REFRESHED",
            Self::UserUpdated => "USER_UPDATED",
            Self::PasswordRecovery => "PASSWORD_RECOVERY",
        }
    }
}

impl fmt::Display for AuthChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Third-party identity providers reachable through OAuth
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    #[default]
    Google,
}

impl OAuthProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Google => "google",
        }
    }
}

/// Registration parameters
#[derive(Clone, Debug, PartialEq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    /// Stored by the provider as user metadata
    pub metadata: Map<String, Value>,
    /// Where email verification links send the user
    pub redirect_to: String,
}

/// OAuth redirect parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OAuthRequest {
    pub provider: OAuthProvider,
    pub redirect_to: String,
    pub query_params: BTreeMap<String, String>,
}

/// Insert-or-update of a row in the provider's backing store
#[derive(Clone, Debug, PartialEq)]
pub struct UpsertRequest {
    pub table: String,
    pub record: Value,
    pub on_conflict: String,
}

/// Callback receiving provider change notifications
pub type ChangeListener = Rc<dyn Fn(AuthChangeEvent, Option<ProviderSession>)>;

/// Handle returned by [`IdentityProvider::on_session_change`]
///
/// Dropping the handle unsubscribes the listener.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to cancel
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Remote identity service operations consumed by the session manager
#[async_trait(?Send)]
pub trait IdentityProvider {
    /// Current session, if the provider still holds one
    async fn get_session(&self) -> Result<Option<ProviderSession>, ProviderError>;

    /// Register for change notifications
    fn on_session_change(&self, listener: ChangeListener) -> Subscription;

    /// Create an account; yields a session only when no verification step is required
    async fn sign_up(
        &self,
        request: SignUpRequest,
    ) -> Result<Option<ProviderSession>, ProviderError>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ProviderSession, ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Produce the URL the browser must visit to start the OAuth flow
    async fn sign_in_with_oauth(&self, request: OAuthRequest) -> Result<String, ProviderError>;

    async fn upsert(&self, request: UpsertRequest) -> Result<(), ProviderError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub Provider {}

        #[async_trait(?Send)]
        impl IdentityProvider for Provider {
            async fn get_session(&self) -> Result<Option<ProviderSession>, ProviderError>;
            fn on_session_change(&self, listener: ChangeListener) -> Subscription;
            async fn sign_up(&self, request: SignUpRequest) -> Result<Option<ProviderSession>, ProviderError>;
            async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<ProviderSession, ProviderError>;
            async fn sign_out(&self) -> Result<(), ProviderError>;
            async fn sign_in_with_oauth(&self, request: OAuthRequest) -> Result<String, ProviderError>;
            async fn upsert(&self, request: UpsertRequest) -> Result<(), ProviderError>;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn user_from_remote_record() {
        let remote: RemoteUser = serde_json::from_value(json!({
            "id": "u-1",
            "email": "jane@x.com",
            "user_metadata": { "username": "jane" }
        }))
        .unwrap();

        let user = User::from(&remote);
        assert_eq!(user.id, "u-1");
        assert_eq!(user.email, "jane@x.com");
        assert_eq!(user.username.as_deref(), Some("jane"));
    }

    #[test]
    fn missing_email_becomes_empty() {
        let remote = RemoteUser {
            id: "u-2".into(),
            ..RemoteUser::default()
        };
        let user = User::from(&remote);
        assert_eq!(user.email, "");
        assert_eq!(user.username, None);
    }

    #[test]
    fn expiry_margin() {
        let session = ProviderSession {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: Some(1_000),
            token_type: default_token_type(),
            user: RemoteUser::default(),
        };
        assert!(!session.expires_within(900, 10));
        assert!(session.expires_within(990, 10));
        assert!(session.expires_within(2_000, 10));

        let open_ended = ProviderSession {
            expires_at: None,
            ..session
        };
        assert!(!open_ended.expires_within(i64::MAX - 100, 10));
    }

    #[test]
    fn expiry_margin_saturates_at_extremes() {
        let session = ProviderSession {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: Some(i64::MIN + 5),
            token_type: default_token_type(),
            user: RemoteUser::default(),
        };
        assert!(session.expires_within(0, 10));
    }

    #[test]
    fn subscription_cancels_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        subscription.unsubscribe();
        assert_eq!(calls.get(), 1);

        let counter = calls.clone();
        drop(Subscription::new(move || counter.set(counter.get() + 1)));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn event_names_match_wire_format() {
        assert_eq!(
            serde_json::to_value(AuthChangeEvent::TokenRefreshed).unwrap(),
            json!("TOKEN_REFRESHED")
        );
        assert_eq!(AuthChangeEvent::SignedOut.to_string(), "SIGNED_OUT");
    }
}
