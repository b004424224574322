//! Entry point bundling a connection with its configuration.

use crate::config::ManagementApiConfig;
use crate::connection::ManagementConnection;
use crate::error::Auth0Result;
use crate::jobs::JobsClient;
use std::sync::Arc;

/// Management API client.
///
/// Cheap to clone; resource clients share the same connection and
/// configuration.
///
/// ```rust,no_run
/// use auth0_core::{ManagementApiClient, config::ManagementApiConfig};
/// # use auth0_core::connection::{HttpMethod, ManagementConnection};
/// # use auth0_core::Auth0Result;
/// # use std::collections::HashMap;
/// # struct MyConnection;
/// # #[async_trait::async_trait]
/// # impl ManagementConnection for MyConnection {
/// #     async fn get(&self, _: &str, _: &HashMap<String, String>) -> Auth0Result<Option<String>> { Ok(None) }
/// #     async fn send(&self, _: HttpMethod, _: &str, _: Option<&serde_json::Value>, _: &HashMap<String, String>) -> Auth0Result<Option<String>> { Ok(None) }
/// # }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ManagementApiConfig::builder()
///     .with_domain("tenant.auth0.com")
///     .with_header("Authorization", "Bearer token")
///     .build()?;
/// let client = ManagementApiClient::new(MyConnection, config)?;
///
/// if let Some(details) = client.jobs().get_error_details("job_abc").await? {
///     println!("{:?}", details);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ManagementApiClient<C: ManagementConnection> {
    connection: Arc<C>,
    config: Arc<ManagementApiConfig>,
}

impl<C: ManagementConnection> Clone for ManagementApiClient<C> {
    fn clone(&self) -> Self {
        Self {
            connection: Arc::clone(&self.connection),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C: ManagementConnection> ManagementApiClient<C> {
    /// Create a client, validating the configuration.
    pub fn new(connection: C, config: ManagementApiConfig) -> Auth0Result<Self> {
        Self::with_shared_connection(Arc::new(connection), config)
    }

    /// Create a client around a connection that is shared elsewhere.
    pub fn with_shared_connection(
        connection: Arc<C>,
        config: ManagementApiConfig,
    ) -> Auth0Result<Self> {
        config.validate()?;
        Ok(Self {
            connection,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ManagementApiConfig {
        &self.config
    }

    /// Client for the `/jobs` resource.
    pub fn jobs(&self) -> JobsClient<C> {
        JobsClient::new(Arc::clone(&self.connection), Arc::clone(&self.config))
    }
}
