//! Configuration of Management API clients.
//!
//! [`ManagementApiConfig`] holds the API base URL and the headers sent with
//! every request (typically `Authorization`). Build it with
//! [`ManagementApiConfigBuilder`]:
//!
//! ```rust
//! use auth0_core::config::ManagementApiConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ManagementApiConfig::builder()
//!     .with_domain("tenant.auth0.com")
//!     .with_header("Authorization", "Bearer token")
//!     .build()?;
//!
//! assert_eq!(config.base_url, "https://tenant.auth0.com/api/v2");
//! # Ok(())
//! # }
//! ```

use crate::error::{Auth0Error, Auth0Result};
use std::collections::HashMap;

/// Path of the Management API below a tenant domain.
pub const MANAGEMENT_API_PATH: &str = "/api/v2";

/// Settings shared by all Management API resource clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementApiConfig {
    /// Base URL without trailing slash, e.g. `https://tenant.auth0.com/api/v2`
    pub base_url: String,

    /// Headers added to every request.
    pub default_headers: HashMap<String, String>,
}

impl ManagementApiConfig {
    pub fn builder() -> ManagementApiConfigBuilder {
        ManagementApiConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// The base URL must be non-empty and use http or https.
    pub fn validate(&self) -> Auth0Result<()> {
        if self.base_url.is_empty() {
            return Err(Auth0Error::invalid_configuration("Base URL cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(Auth0Error::invalid_configuration(
                "Base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }

    /// Join a resource path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Builder for [`ManagementApiConfig`].
#[derive(Debug, Default)]
pub struct ManagementApiConfigBuilder {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl ManagementApiConfigBuilder {
    /// Target a tenant domain such as `tenant.auth0.com`.
    ///
    /// A missing scheme defaults to https; the Management API path is
    /// appended.
    pub fn with_domain(mut self, domain: impl AsRef<str>) -> Self {
        let domain = domain.as_ref().trim_end_matches('/');
        let base = if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        };
        self.base_url = Some(format!("{}{}", base, MANAGEMENT_API_PATH));
        self
    }

    /// Use a complete base URL, e.g. a proxy in front of the API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Auth0Error::InvalidConfiguration`] if no domain or base URL
    /// was set, or if the URL is not http(s).
    pub fn build(self) -> Auth0Result<ManagementApiConfig> {
        let base_url = self
            .base_url
            .ok_or_else(|| Auth0Error::invalid_configuration("A domain or base URL is required"))?;

        let config = ManagementApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            default_headers: self.default_headers,
        };
        config.validate()?;
        Ok(config)
    }
}
