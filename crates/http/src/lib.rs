//! Inflow HTTP module: a client for the hosted identity provider
//!
//! [`HostedIdentityProvider`] implements [`inflow_core::IdentityProvider`]
//! over the provider's auth and REST endpoints, persisting the session in a
//! [`inflow_core::KeyValueStore`].

pub mod client;
pub mod provider;
pub mod redirect;
pub mod session_store;
pub mod types;

pub use client::{ProviderClient, ProviderClientBuilder, error::ClientError};
pub use provider::HostedIdentityProvider;
pub use redirect::{is_redirect_fragment, start_session};
pub use session_store::{SessionStore, storage_key_for};
