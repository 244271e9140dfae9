//! Wire types for the hosted auth endpoints

use inflow_core::{ProviderSession, RemoteUser};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sign-up request body
#[derive(Debug, Serialize)]
pub struct SignUpBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
    /// Stored as `user_metadata`
    pub data: &'a Map<String, Value>,
}

/// Password grant body
#[derive(Debug, Serialize)]
pub struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Refresh grant body
#[derive(Debug, Serialize)]
pub struct RefreshGrant<'a> {
    pub refresh_token: &'a str,
}

/// Token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: RemoteUser,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl TokenResponse {
    /// Convert to a session, deriving the absolute expiry from `now` when absent
    pub fn into_session(self, now: i64) -> ProviderSession {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|lifetime| now.saturating_add(lifetime)));
        ProviderSession {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            token_type: self.token_type,
            user: self.user,
        }
    }
}

/// Sign-up answers with a session when verification is off, otherwise the pending user
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SignUpResponse {
    Session(TokenResponse),
    PendingVerification(RemoteUser),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sign_up_response_variants() {
        let pending: SignUpResponse = serde_json::from_value(json!({
            "id": "u-1",
            "email": "jane@x.com",
            "confirmation_sent_at": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(matches!(pending, SignUpResponse::PendingVerification(user) if user.id == "u-1"));

        let session: SignUpResponse = serde_json::from_value(json!({
            "access_token": "a",
            "refresh_token": "r",
            "expires_in": 3600,
            "token_type": "bearer",
            "user": { "id": "u-1" }
        }))
        .unwrap();
        assert!(matches!(session, SignUpResponse::Session(_)));
    }

    #[test]
    fn expiry_derived_from_lifetime() {
        let response: TokenResponse = serde_json::from_value(json!({
            "access_token": "a",
            "refresh_token": "r",
            "expires_in": 3600,
            "user": { "id": "u-1" }
        }))
        .unwrap();
        let session = response.into_session(1_000);
        assert_eq!(session.expires_at, Some(4_600));
        assert_eq!(session.token_type, "bearer");
    }

    #[test]
    fn huge_lifetime_saturates() {
        let response: TokenResponse = serde_json::from_value(json!({
            "access_token": "a",
            "refresh_token": "r",
            "expires_in": i64::MAX,
            "user": { "id": "u-1" }
        }))
        .unwrap();
        assert_eq!(response.into_session(1_000).expires_at, Some(i64::MAX));
    }
}
