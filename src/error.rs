//! Error types for Auth0 API client operations.
//!
//! Failures fall into two groups. Data that is legitimately absent (an empty
//! response body, a missing header) is never an error and is reported as
//! `None` by the relevant operation. Data that is present but does not match
//! the contract of the remote service is surfaced through [`Auth0Error`].
//!
//! Quota header parsing is the one exception: it is best-effort telemetry and
//! swallows malformed input, see [`crate::quota`].

use crate::rate_limit::RateLimit;

/// Main error type for Auth0 API client operations.
#[derive(Debug, thiserror::Error)]
pub enum Auth0Error {
    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response body had a shape the endpoint is not documented to return
    #[error("Unexpected response payload: {message}")]
    UnexpectedPayload { message: String },

    /// A caller-supplied argument was rejected before any request was made
    #[error("Invalid argument '{parameter}': {message}")]
    InvalidArgument { parameter: String, message: String },

    /// Client configuration is incomplete or malformed
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A wire string did not match any variant of the target enum
    #[error("Unknown value '{value}' for {type_name}")]
    UnknownWireValue {
        type_name: &'static str,
        value: String,
    },

    /// The remote service rejected the call with an error status
    #[error("API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    /// The remote service answered 429 Too Many Requests
    #[error("Rate limit exceeded")]
    RateLimited { rate_limit: Box<RateLimit> },

    /// Errors raised by the transport implementation
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// ID token verification failed
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

/// Errors raised while verifying a signed ID token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The token is not a three-part compact JWS
    #[error("Malformed token: {message}")]
    Malformed { message: String },

    /// The token header names an algorithm this decoder does not verify
    #[error("Unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The signature does not match the token content
    #[error("Invalid token signature")]
    InvalidSignature,

    /// A token segment was not valid base64url
    #[error("Invalid token encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// A token segment was not valid JSON
    #[error("Invalid token JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// Convenience methods for creating common errors
impl Auth0Error {
    /// Create an unexpected payload error
    pub fn unexpected_payload(message: impl Into<String>) -> Self {
        Self::UnexpectedPayload {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create an API error for a non-success status code
    pub fn api(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status_code,
            message: message.into(),
        }
    }

    /// Create a rate-limited error from the headers of a 429 response.
    pub fn rate_limited(headers: Option<&crate::quota::ResponseHeaders>) -> Self {
        Self::RateLimited {
            rate_limit: Box::new(RateLimit::from_headers(headers)),
        }
    }

    /// Wrap a transport error
    pub fn connection<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection(Box::new(error))
    }

    /// The rate-limit envelope, if this error carries one.
    pub fn rate_limit(&self) -> Option<&RateLimit> {
        match self {
            Self::RateLimited { rate_limit } => Some(rate_limit),
            _ => None,
        }
    }
}

impl TokenError {
    /// Create a malformed token error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

// Result type aliases for convenience
pub type Auth0Result<T> = Result<T, Auth0Error>;
pub type TokenResult<T> = Result<T, TokenError>;
