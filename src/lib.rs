//! Core of an Auth0 SDK for Rust.
//!
//! Transport-agnostic building blocks for talking to the Auth0 Management
//! and Authentication APIs: response header interpretation, job error
//! payload decoding, request/response models and small authentication
//! helpers. HTTP itself is plugged in through [`ManagementConnection`].
//!
//! # Core Components
//!
//! - [`quota`] - parses the `Auth0-Client-Quota-Limit` and
//!   `Auth0-Organization-Quota-Limit` headers
//! - [`jobs::resolve`] - tells the two shapes of a job error payload apart
//! - [`RateLimit`] - rate limit and quota state of a response
//! - [`ManagementApiClient`] - resource clients over a pluggable connection
//! - [`authentication`] - forwarded-for headers and HS256 token checks
//!
//! # Quick Start
//!
//! ```rust
//! use auth0_core::{JobErrorDetails, quota::parse_client_limit};
//!
//! let limit = parse_client_limit(Some("b=per_hour;q=10;r=9;t=924")).unwrap();
//! assert_eq!(limit.per_hour.unwrap().remaining, 9);
//!
//! let details = auth0_core::jobs::resolve(Some(r#"{"id":"job_1","status":"failed"}"#))
//!     .unwrap()
//!     .unwrap();
//! assert!(matches!(details, JobErrorDetails::JobFailure(_)));
//! ```

pub mod authentication;
pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod jobs;
pub mod models;
pub mod quota;
pub mod rate_limit;

// Re-export commonly used types for convenience
pub use client::ManagementApiClient;
pub use config::{ManagementApiConfig, ManagementApiConfigBuilder};
pub use connection::{HttpMethod, ManagementConnection};
pub use error::{Auth0Error, Auth0Result, TokenError, TokenResult};
pub use jobs::{Job, JobErrorDetails, JobImportError, JobImportErrorDetails, JobsClient};
pub use models::WireEnum;
pub use quota::{
    ClientQuotaLimit, OrganizationQuotaLimit, QuotaBucket, QuotaLimit, QuotaLimitHeaders,
    ResponseHeaders,
};
pub use rate_limit::RateLimit;
