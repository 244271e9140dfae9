//! Inflow site core: session management, page routing, and form state
//!
//! Everything here is host-independent. The browser binds the traits in
//! [`platform`], [`storage`], and [`identity`] to real APIs.

pub mod config;
pub mod error;
pub mod forms;
pub mod identity;
pub mod platform;
pub mod routing;
pub mod session;
pub mod storage;

#[cfg(any(test, feature = "tests"))]
pub mod tests;

pub use config::SiteConfig;
pub use error::{AuthError, ConfigError, ProviderError, StorageError};
pub use forms::{ContactDraft, ContactForm, LoginDraft, SignupDraft};
pub use identity::{
    AuthChangeEvent, ChangeListener, IdentityProvider, OAuthProvider, OAuthRequest,
    ProviderSession, RemoteUser, SignUpRequest, Subscription, UpsertRequest, User,
};
pub use platform::{LocalTask, Navigator, Spawner};
pub use routing::{Navigation, PageId, PageRouter, Route, StandalonePage};
pub use session::{AuthPhase, AuthSnapshot, ObserverId, SessionManager};
pub use storage::{ClientStorage, CookieJar, KeyValueStore, PurgeScope};
