//! Errors raised while framing requests or interpreting responses.

use cognito_idp_json::JsonError;
use cognito_idp_model::CognitoError;

/// Failure of a request/response exchange.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The body could not be marshalled or unmarshalled.
    #[error("JSON error: {0}")]
    Json(#[from] JsonError),

    /// The service answered with an error.
    #[error(transparent)]
    Service(#[from] CognitoError),

    /// The HTTP request could not be assembled.
    #[error("HTTP error: {0}")]
    Http(#[from] http::Error),

    /// The configured endpoint is not a valid URI.
    #[error("invalid endpoint '{0}'")]
    InvalidEndpoint(String),
}

impl ProtocolError {
    /// The service error, if this is one.
    #[must_use]
    pub fn as_service_error(&self) -> Option<&CognitoError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}
