//! Job resources and job error payloads.

use crate::models::wire::wire_enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An asynchronous job (user import, user export, verification email).
///
/// The service omits fields that do not apply to a job type, so everything
/// except the identifier is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: String,
    /// Job type, e.g. `users_import`, `users_export`, `verification_email`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    /// Job status, e.g. `pending`, `processing`, `completed`, `failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    /// Name of the connection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Download location of a completed export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_done: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_left_seconds: Option<u64>,
    /// Export file format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Why the job failed, set when `status` is `failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
    /// Import counters, set once an import has run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<JobSummary>,
}

impl Job {
    /// Whether the service reported the job as failed.
    pub fn is_failed(&self) -> bool {
        self.status.as_deref() == Some("failed")
    }
}

/// Counters of a user import job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub updated: u64,
    #[serde(default)]
    pub inserted: u64,
    #[serde(default)]
    pub total: u64,
}

/// One validation error of an imported user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobImportError {
    /// Error code, e.g. `INVALID_FORMAT`
    pub code: String,
    #[serde(default)]
    pub message: String,
    /// Path of the offending property in the user record
    #[serde(default)]
    pub path: String,
}

/// The errors of a single user record rejected by an import job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobImportErrorDetails {
    /// The user record as submitted, passed through untouched
    #[serde(default)]
    pub user: Value,
    #[serde(default)]
    pub errors: Vec<JobImportError>,
}

/// Error details of a job.
///
/// The error endpoint answers with a list of per-record errors when an
/// import ran but rejected some users, and with the job itself when the job
/// as a whole failed. Exactly one of the two applies.
#[derive(Debug, Clone, PartialEq)]
pub enum JobErrorDetails {
    /// Per-record import errors; never empty
    ImportErrors(Vec<JobImportErrorDetails>),
    /// The failed job, with `status_details` explaining the failure
    JobFailure(Job),
}

impl JobErrorDetails {
    pub fn import_errors(&self) -> Option<&[JobImportErrorDetails]> {
        match self {
            Self::ImportErrors(errors) => Some(errors),
            Self::JobFailure(_) => None,
        }
    }

    pub fn job_failure(&self) -> Option<&Job> {
        match self {
            Self::JobFailure(job) => Some(job),
            Self::ImportErrors(_) => None,
        }
    }
}

/// Identity to verify when a user has several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailVerificationIdentity {
    /// User id of the identity, without the provider prefix
    pub user_id: String,
    /// Identity provider, e.g. `google-oauth2` or `email`
    pub provider: String,
}

/// Body of a verification email job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyEmailJobRequest {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<EmailVerificationIdentity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

wire_enum! {
    /// File format of a user export.
    pub enum UsersExportsJobFormat {
        Csv => "csv",
        Json => "json",
    }
}

/// A user field to include in an export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersExportsJobField {
    pub name: String,
    /// Column name in the exported file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_as: Option<String>,
}

/// Body of a user export job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersExportsJobRequest {
    /// Export only users of this connection; all users when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    pub format: UsersExportsJobFormat,
    /// Maximum number of users to export
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<UsersExportsJobField>,
}
