//! Auth endpoint methods

use super::{ClientError, ProviderClient};
use crate::types::{PasswordGrant, RefreshGrant, SignUpBody, SignUpResponse, TokenResponse};
use inflow_core::{OAuthRequest, RemoteUser};
use reqwest::Method;
use serde_json::{Map, Value};
use url::Url;

impl ProviderClient {
    /// Register an account; `redirect_to` is where the verification link lands
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        data: &Map<String, Value>,
        redirect_to: &str,
    ) -> Result<SignUpResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/v1/signup")
            .query(&[("redirect_to", redirect_to)])
            .json(&SignUpBody {
                email,
                password,
                data,
            });
        self.execute(req).await
    }

    pub async fn password_grant(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/v1/token")
            .query(&[("grant_type", "password")])
            .json(&PasswordGrant { email, password });
        self.execute(req).await
    }

    pub async fn refresh_grant(&self, refresh_token: &str) -> Result<TokenResponse, ClientError> {
        let req = self
            .request(Method::POST, "/auth/v1/token")
            .query(&[("grant_type", "refresh_token")])
            .json(&RefreshGrant { refresh_token });
        self.execute(req).await
    }

    /// The user owning `access_token`
    pub async fn get_user(&self, access_token: &str) -> Result<RemoteUser, ClientError> {
        let req = self.request_as(Method::GET, "/auth/v1/user", access_token);
        self.execute(req).await
    }

    /// Revoke the session owning `access_token`
    pub async fn logout(&self, access_token: &str) -> Result<(), ClientError> {
        let req = self.request_as(Method::POST, "/auth/v1/logout", access_token);
        self.execute_empty(req).await
    }

    /// URL that starts the OAuth flow in the browser
    pub fn authorize_url(&self, request: &OAuthRequest) -> Result<String, ClientError> {
        let mut url = Url::parse(&format!("{}/auth/v1/authorize", self.base_url()))
            .map_err(|e| ClientError::Configuration(e.to_string()))?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("provider", request.provider.as_str())
                .append_pair("redirect_to", &request.redirect_to);
            for (key, value) in &request.query_params {
                query.append_pair(key, value);
            }
        }
        Ok(url.into())
    }
}
