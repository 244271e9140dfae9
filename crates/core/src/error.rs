//! Error types shared by the session layer and its collaborators

use thiserror::Error;

/// Message fragment the identity provider uses for unverified accounts
pub const EMAIL_NOT_CONFIRMED: &str = "Email not confirmed";

/// Friendlier prompt shown in place of the provider's unverified-email rejection
pub const EMAIL_NOT_CONFIRMED_HINT: &str = "Email not confirmed. Please check your inbox (and spam) for a verification link. If needed, try signing up again.";

/// Failures an identity provider implementation can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider answered and refused the request
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The provider could not be reached
    #[error("Provider unreachable: {0}")]
    Transport(String),

    /// The provider answered with something we could not read
    #[error("Unexpected provider response: {0}")]
    Decode(String),

    /// Client-side configuration is unusable
    #[error("Invalid provider configuration: {0}")]
    Configuration(String),

    /// Persisted session material could not be read or written
    #[error("Session storage failed: {0}")]
    Storage(String),
}

impl ProviderError {
    /// Create a rejection error
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// The message a user-facing layer should carry forward
    pub fn message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Errors surfaced by the session manager to page views
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The provider rejected or failed the operation
    #[error("{0}")]
    Provider(String),

    /// Local form validation failed before any provider call
    #[error("{0}")]
    Validation(String),
}

impl AuthError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Text to show inline in a form
    pub fn user_message(&self) -> String {
        match self {
            Self::Provider(message) if message.contains(EMAIL_NOT_CONFIRMED) => {
                EMAIL_NOT_CONFIRMED_HINT.to_string()
            }
            Self::Provider(message) | Self::Validation(message) => message.clone(),
        }
    }
}

impl From<ProviderError> for AuthError {
    fn from(err: ProviderError) -> Self {
        Self::Provider(err.message())
    }
}

/// Browser-persisted storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage is unavailable: {0}")]
    Unavailable(String),

    #[error("Storage operation failed: {0}")]
    Operation(String),
}

impl From<StorageError> for ProviderError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Site configuration problems
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing configuration value: {0}")]
    Missing(&'static str),

    #[error("Invalid provider URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Malformed configuration document: {0}")]
    Malformed(String),
}
