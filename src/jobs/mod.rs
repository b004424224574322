//! Asynchronous jobs: user imports, user exports and verification emails.
//!
//! - [`resolve`] - decodes the job error details payload
//! - [`JobsClient`] - calls the `/jobs` endpoints through a
//!   [`crate::connection::ManagementConnection`]

pub mod client;
pub mod resolver;
pub mod types;

pub use client::JobsClient;
pub use resolver::resolve;
pub use types::{
    EmailVerificationIdentity, Job, JobErrorDetails, JobImportError, JobImportErrorDetails,
    JobSummary, UsersExportsJobField, UsersExportsJobFormat, UsersExportsJobRequest,
    VerifyEmailJobRequest,
};
