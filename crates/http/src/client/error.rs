//! Client error types

use inflow_core::ProviderError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Credentials or token rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status of a provider rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the provider answered and refused, as opposed to being unreachable
    pub fn is_rejection(&self) -> bool {
        self.status().is_some()
    }
}

impl From<ClientError> for ProviderError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::BadRequest(message) => Self::rejected(400, message),
            ClientError::AuthenticationFailed(message) => Self::rejected(401, message),
            ClientError::Forbidden(message) => Self::rejected(403, message),
            ClientError::NotFound(message) => Self::rejected(404, message),
            ClientError::ServerError { status, message } => Self::rejected(status, message),
            ClientError::Request(e) if e.is_decode() => Self::Decode(e.to_string()),
            ClientError::Request(e) => Self::Transport(e.to_string()),
            ClientError::Serialization(e) => Self::Decode(e.to_string()),
            ClientError::Configuration(message) => Self::Configuration(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn rejections_keep_status_and_message() {
        let err = ClientError::from_status(StatusCode::BAD_REQUEST, "Invalid login credentials".into());
        assert!(err.is_rejection());
        assert_eq!(
            ProviderError::from(err),
            ProviderError::rejected(400, "Invalid login credentials")
        );

        let err = ClientError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "weak password".into());
        assert_eq!(err.status(), Some(422));
        assert_eq!(ProviderError::from(err).message(), "weak password");
    }

    #[test]
    fn configuration_is_not_a_rejection() {
        let err = ClientError::Configuration("base_url is required".into());
        assert!(!err.is_rejection());
        assert!(matches!(
            ProviderError::from(err),
            ProviderError::Configuration(_)
        ));
    }
}
