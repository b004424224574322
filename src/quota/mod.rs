//! Quota limit headers reported by the Management API.
//!
//! Every Management API response may carry `Auth0-Client-Quota-Limit` and
//! `Auth0-Organization-Quota-Limit` headers describing how much of the
//! hourly and daily token quota is left. The value is a comma separated list
//! of buckets, each a semicolon separated list of `key=value` pairs:
//!
//! ```text
//! b=per_hour;q=10;r=9;t=924,b=per_day;q=100;r=99;t=924
//! ```
//!
//! Quota information is telemetry. A malformed or newer header format must
//! never fail an API call, so every public entry point here returns `None`
//! (or skips the offending bucket) instead of an error.
//!
//! # Examples
//!
//! ```rust
//! use auth0_core::quota::{parse_client_limit, QuotaBucket};
//!
//! let limit = parse_client_limit(Some("b=per_hour;q=10;r=9;t=924,b=per_day;q=100;r=99;t=924"))
//!     .unwrap();
//! assert_eq!(limit.per_hour.unwrap().remaining, 9);
//! assert_eq!(limit.per_day.unwrap().quota, 100);
//!
//! let bucket: QuotaBucket = "b=per_hour;q=2;r=1;t=3452".parse().unwrap();
//! assert_eq!(bucket.name, "per_hour");
//! ```

pub mod parser;
pub mod types;

pub use parser::{
    QuotaLimitHeaders, extract_header_value, parse_bucket_segment, parse_client_limit,
    parse_organization_limit, parse_quota_limit,
};
pub use types::{
    ClientQuotaLimit, OrganizationQuotaLimit, QuotaBucket, QuotaLimit, QuotaParseError,
    ResponseHeaders,
};

/// Header carrying the quota of the calling client.
pub const CLIENT_QUOTA_LIMIT_HEADER: &str = "Auth0-Client-Quota-Limit";

/// Header carrying the quota of the organization the call was made for.
pub const ORGANIZATION_QUOTA_LIMIT_HEADER: &str = "Auth0-Organization-Quota-Limit";

/// Bucket name of the hourly window.
pub const PER_HOUR_BUCKET: &str = "per_hour";

/// Bucket name of the daily window.
pub const PER_DAY_BUCKET: &str = "per_day";
