//! Transport seam between resource clients and an HTTP implementation.
//!
//! This crate does not ship an HTTP client. Applications provide a
//! [`ManagementConnection`] backed by whichever client they already use;
//! resource clients hand it fully built URIs and headers and get back the
//! decoded response body as text.

use crate::error::Auth0Result;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// HTTP methods used by the Management API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Executes requests against the Management API.
///
/// Implementations own retries, timeouts and status handling. Non-success
/// responses should be reported as [`crate::Auth0Error::Api`], and 429
/// responses as [`crate::Auth0Error::rate_limited`] so callers can inspect
/// the quota headers.
#[async_trait]
pub trait ManagementConnection: Send + Sync {
    /// Perform a GET request.
    ///
    /// Returns the response body, or `None` if the body was empty.
    async fn get(&self, uri: &str, headers: &HashMap<String, String>)
    -> Auth0Result<Option<String>>;

    /// Perform a request with an optional JSON body.
    ///
    /// Returns the response body, or `None` if the body was empty.
    async fn send(
        &self,
        method: HttpMethod,
        uri: &str,
        body: Option<&Value>,
        headers: &HashMap<String, String>,
    ) -> Auth0Result<Option<String>>;
}
