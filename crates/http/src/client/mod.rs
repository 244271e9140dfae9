//! HTTP client for the hosted auth and REST endpoints

pub mod auth;
pub mod error;
pub mod rest;

use error::ClientError;
use reqwest::{Client, ClientBuilder, StatusCode, header};
use serde_json::Value;
use std::time::Duration;

/// Header carrying the project's public key on every request
pub const API_KEY_HEADER: &str = "apikey";

/// Provider API client
#[derive(Clone)]
pub struct ProviderClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl ProviderClient {
    /// Create a new client with default configuration
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).anon_key(anon_key).build()
    }

    pub fn builder() -> ProviderClientBuilder {
        ProviderClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder authorized with the anon key
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.request_as(method, path, &self.anon_key)
    }

    /// Create a request builder authorized as a signed-in user
    pub fn request_as(
        &self,
        method: reqwest::Method,
        path: &str,
        bearer: &str,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, &self.anon_key)
            .header(header::AUTHORIZATION, format!("Bearer {bearer}"))
    }

    /// Execute a request and decode its JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::from_status(status, error_message(status, &body)))
        }
    }

    /// Execute a request whose success body is ignored
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::from_status(status, error_message(status, &body)))
        }
    }
}

/// Human-readable message from an error body
///
/// Auth endpoints use `msg` or `error_description`, REST endpoints use
/// `message`, and OAuth-style errors use `error`.
pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            ["msg", "error_description", "message", "error"]
                .into_iter()
                .find_map(|field| value.get(field).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}

/// Builder for ProviderClient
#[derive(Default)]
pub struct ProviderClientBuilder {
    base_url: Option<String>,
    anon_key: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ProviderClientBuilder {
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the project's public (anon) key
    pub fn anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = Some(key.into());
        self
    }

    /// Set the request timeout (ignored in the browser)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ProviderClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let anon_key = self
            .anon_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ClientError::Configuration("anon_key is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(timeout) = self.timeout {
                client_builder = client_builder.timeout(timeout);
            }
            client_builder = client_builder
                .user_agent(self.user_agent.unwrap_or_else(|| "inflow-site/0.1.0".to_string()));
        }

        let client = client_builder.build()?;

        Ok(ProviderClient {
            client,
            base_url,
            anon_key,
        })
    }
}
