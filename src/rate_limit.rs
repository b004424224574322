//! Rate limit information attached to API responses.
//!
//! Besides the quota headers handled by [`crate::quota`], the Management API
//! reports the classic `x-ratelimit-*` triple. [`RateLimit`] gathers all of
//! them from one response so callers can back off when a call is rejected
//! with 429.

use crate::quota::{
    ClientQuotaLimit, OrganizationQuotaLimit, QuotaLimitHeaders, ResponseHeaders,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Header with the number of requests allowed in the current window.
pub const RATE_LIMIT_LIMIT_HEADER: &str = "x-ratelimit-limit";

/// Header with the number of requests left in the current window.
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Header with the Unix time (seconds) at which the window resets.
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate limit state reported by a single response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateLimit {
    /// Requests allowed in the current window
    pub limit: Option<i64>,
    /// Requests left in the current window
    pub remaining: Option<i64>,
    /// When the current window resets
    pub reset: Option<DateTime<Utc>>,
    /// Quota of the calling client
    pub client_quota_limit: Option<ClientQuotaLimit>,
    /// Quota of the organization
    pub organization_quota_limit: Option<OrganizationQuotaLimit>,
}

impl RateLimit {
    /// Collect rate limit information from response headers.
    ///
    /// Missing or unparseable headers leave the matching field unset; this
    /// never fails.
    pub fn from_headers(headers: Option<&ResponseHeaders>) -> Self {
        let Some(headers) = headers else {
            return Self::default();
        };

        let reset = parse_header_i64(headers, RATE_LIMIT_RESET_HEADER)
            .and_then(|epoch| DateTime::<Utc>::from_timestamp(epoch, 0));

        Self {
            limit: parse_header_i64(headers, RATE_LIMIT_LIMIT_HEADER),
            remaining: parse_header_i64(headers, RATE_LIMIT_REMAINING_HEADER),
            reset,
            client_quota_limit: headers.client_quota_limit(),
            organization_quota_limit: headers.organization_quota_limit(),
        }
    }
}

// Transports disagree on header casing for these, so match loosely.
fn header_value_ignore_case<'a>(headers: &'a ResponseHeaders, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, values)| values.first())
        .map(String::as_str)
}

fn parse_header_i64(headers: &ResponseHeaders, name: &str) -> Option<i64> {
    header_value_ignore_case(headers, name)?.trim().parse().ok()
}
