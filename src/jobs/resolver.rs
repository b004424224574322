//! Decoding of the job error details payload.
//!
//! `GET /jobs/{id}/errors` returns a JSON array of per-record errors when an
//! import rejected some users, and a JSON object (the job itself) when the
//! whole job failed. The first significant character decides which.

use super::types::{Job, JobErrorDetails, JobImportErrorDetails};
use crate::error::{Auth0Error, Auth0Result};
use log::trace;

/// Resolve a raw job error details body.
///
/// Returns `Ok(None)` when there is nothing to report: no body, a blank
/// body, or an empty array. A body that is neither an array nor an object,
/// or that does not decode, is an error.
///
/// # Examples
///
/// ```rust
/// use auth0_core::jobs::{resolve, JobErrorDetails};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// assert!(resolve(Some("[]"))?.is_none());
///
/// let details = resolve(Some(r#"{"id":"job_abc","status":"failed","status_details":"bad file"}"#))?;
/// match details {
///     Some(JobErrorDetails::JobFailure(job)) => assert!(job.is_failed()),
///     other => panic!("unexpected: {:?}", other),
/// }
/// # Ok(())
/// # }
/// ```
pub fn resolve(raw_json: Option<&str>) -> Auth0Result<Option<JobErrorDetails>> {
    let Some(body) = raw_json.map(str::trim_start).filter(|body| !body.is_empty()) else {
        trace!("No job error details in response");
        return Ok(None);
    };

    match body.chars().next() {
        Some('[') => {
            let errors: Vec<JobImportErrorDetails> = serde_json::from_str(body)?;
            trace!("Job error details hold {} rejected records", errors.len());
            if errors.is_empty() {
                Ok(None)
            } else {
                Ok(Some(JobErrorDetails::ImportErrors(errors)))
            }
        }
        Some('{') => {
            let job: Job = serde_json::from_str(body)?;
            trace!("Job error details describe failed job {}", job.id);
            Ok(Some(JobErrorDetails::JobFailure(job)))
        }
        _ => Err(Auth0Error::unexpected_payload(format!(
            "job error details must be a JSON array or object, got: {}",
            preview(body)
        ))),
    }
}

fn preview(body: &str) -> String {
    const MAX: usize = 64;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
