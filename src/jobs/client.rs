//! Client for the `/jobs` Management API resource.

use super::resolver::resolve;
use super::types::{Job, JobErrorDetails, UsersExportsJobRequest, VerifyEmailJobRequest};
use crate::config::ManagementApiConfig;
use crate::connection::{HttpMethod, ManagementConnection};
use crate::error::{Auth0Error, Auth0Result};
use log::debug;
use std::sync::Arc;

/// Operations on asynchronous jobs.
///
/// Obtain one through [`crate::ManagementApiClient::jobs`] or build it
/// directly from a connection and a configuration.
pub struct JobsClient<C: ManagementConnection> {
    connection: Arc<C>,
    config: Arc<ManagementApiConfig>,
}

impl<C: ManagementConnection> Clone for JobsClient<C> {
    fn clone(&self) -> Self {
        Self {
            connection: Arc::clone(&self.connection),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C: ManagementConnection> JobsClient<C> {
    pub fn new(connection: Arc<C>, config: Arc<ManagementApiConfig>) -> Self {
        Self { connection, config }
    }

    /// Retrieve a job by id.
    pub async fn get(&self, job_id: &str) -> Auth0Result<Job> {
        let uri = self.config.url(&format!("jobs/{}", checked_job_id(job_id)?));
        debug!("GET {}", uri);

        let body = self.connection.get(&uri, &self.config.default_headers).await?;
        decode_job(body)
    }

    /// Retrieve the error details of a job.
    ///
    /// Returns `Ok(None)` when the job has no errors (yet). See
    /// [`super::resolve`] for how the two payload shapes are told apart.
    pub async fn get_error_details(&self, job_id: &str) -> Auth0Result<Option<JobErrorDetails>> {
        let uri = self
            .config
            .url(&format!("jobs/{}/errors", checked_job_id(job_id)?));
        debug!("GET {}", uri);

        let body = self.connection.get(&uri, &self.config.default_headers).await?;
        resolve(body.as_deref())
    }

    /// Send an email verification email to a user.
    pub async fn send_verification_email(&self, request: &VerifyEmailJobRequest) -> Auth0Result<Job> {
        if request.user_id.is_empty() {
            return Err(Auth0Error::invalid_argument("user_id", "must not be empty"));
        }
        self.post_job("jobs/verification-email", serde_json::to_value(request)?)
            .await
    }

    /// Start a user export job.
    pub async fn export_users(&self, request: &UsersExportsJobRequest) -> Auth0Result<Job> {
        self.post_job("jobs/users-exports", serde_json::to_value(request)?)
            .await
    }

    async fn post_job(&self, path: &str, body: serde_json::Value) -> Auth0Result<Job> {
        let uri = self.config.url(path);
        debug!("POST {}", uri);

        let response = self
            .connection
            .send(HttpMethod::Post, &uri, Some(&body), &self.config.default_headers)
            .await?;
        decode_job(response)
    }
}

fn checked_job_id(job_id: &str) -> Auth0Result<&str> {
    if job_id.is_empty() {
        return Err(Auth0Error::invalid_argument("job_id", "must not be empty"));
    }
    if job_id.contains(['/', '?', '#']) {
        return Err(Auth0Error::invalid_argument(
            "job_id",
            "must not contain '/', '?' or '#'",
        ));
    }
    Ok(job_id)
}

fn decode_job(body: Option<String>) -> Auth0Result<Job> {
    let body = body
        .filter(|body| !body.trim().is_empty())
        .ok_or_else(|| Auth0Error::unexpected_payload("expected a job, got an empty body"))?;
    Ok(serde_json::from_str(&body)?)
}
