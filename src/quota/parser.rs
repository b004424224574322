//! Parsing of the quota limit header value.

use super::types::{
    ClientQuotaLimit, OrganizationQuotaLimit, QuotaBucket, QuotaLimit, QuotaParseError,
    ResponseHeaders,
};
use super::{CLIENT_QUOTA_LIMIT_HEADER, ORGANIZATION_QUOTA_LIMIT_HEADER, PER_HOUR_BUCKET};
use log::{debug, trace};
use std::collections::HashMap;
use std::str::FromStr;

/// Parse one `b=<bucket>;q=<quota>;r=<remaining>;t=<reset>` segment.
///
/// Each pair is split on its first `=` only, so values may themselves
/// contain `=`. Unknown keys are ignored. A repeated key, a pair without a
/// key or value, a missing required field or a number outside
/// `0..=i32::MAX` rejects the whole segment.
pub fn parse_bucket_segment(segment: &str) -> Result<QuotaBucket, QuotaParseError> {
    if segment.is_empty() {
        return Err(QuotaParseError::Empty);
    }

    let mut pairs: HashMap<&str, &str> = HashMap::new();
    for pair in segment.split(';') {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| QuotaParseError::MissingSeparator(pair.to_string()))?;

        if key.is_empty() {
            return Err(QuotaParseError::EmptyKey(pair.to_string()));
        }
        if value.is_empty() {
            return Err(QuotaParseError::EmptyValue(key.to_string()));
        }
        if pairs.insert(key, value).is_some() {
            return Err(QuotaParseError::DuplicateKey(key.to_string()));
        }
    }

    let name = required(&pairs, "b")?;
    let quota = required_number(&pairs, "q")?;
    let remaining = required_number(&pairs, "r")?;
    let reset_after = required_number(&pairs, "t")?;

    Ok(QuotaBucket {
        name: name.to_string(),
        limit: QuotaLimit::new(quota, remaining, reset_after),
    })
}

fn required<'a>(
    pairs: &HashMap<&str, &'a str>,
    field: &'static str,
) -> Result<&'a str, QuotaParseError> {
    pairs
        .get(field)
        .copied()
        .ok_or(QuotaParseError::MissingField(field))
}

fn required_number(
    pairs: &HashMap<&str, &str>,
    field: &'static str,
) -> Result<u32, QuotaParseError> {
    let raw = required(pairs, field)?;
    // Bounded by the signed 32-bit range the service documents.
    raw.trim()
        .parse::<i32>()
        .ok()
        .and_then(|value| u32::try_from(value).ok())
        .ok_or_else(|| QuotaParseError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

impl FromStr for QuotaBucket {
    type Err = QuotaParseError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        parse_bucket_segment(segment)
    }
}

/// Parse a single bucket, discarding malformed input.
///
/// The whole input is treated as one segment; use [`parse_client_limit`] or
/// [`parse_organization_limit`] for a full comma separated header.
pub fn parse_quota_limit(header_value: Option<&str>) -> Option<QuotaBucket> {
    let header_value = header_value.filter(|value| !value.is_empty())?;

    match parse_bucket_segment(header_value) {
        Ok(bucket) => Some(bucket),
        Err(e) => {
            debug!("Discarding malformed quota segment '{}': {}", header_value, e);
            None
        }
    }
}

/// Route every valid bucket of a header into the hourly or daily slot.
///
/// Only `per_hour` lands in the hourly slot; any other bucket name, known or
/// not, lands in the daily slot. Later buckets overwrite earlier ones.
fn route_buckets(header_value: &str) -> (Option<QuotaLimit>, Option<QuotaLimit>) {
    let mut per_hour = None;
    let mut per_day = None;

    for segment in header_value.split(',') {
        match parse_bucket_segment(segment) {
            Ok(bucket) if bucket.name == PER_HOUR_BUCKET => per_hour = Some(bucket.limit),
            Ok(bucket) => {
                trace!("Routing quota bucket '{}' to per_day", bucket.name);
                per_day = Some(bucket.limit);
            }
            Err(e) => debug!("Skipping malformed quota segment '{}': {}", segment, e),
        }
    }

    (per_hour, per_day)
}

/// Parse the value of the `Auth0-Client-Quota-Limit` header.
///
/// Returns `None` only when the header is absent or empty. A present header
/// always yields a value, possibly with both windows unset if no segment
/// could be parsed.
pub fn parse_client_limit(header_value: Option<&str>) -> Option<ClientQuotaLimit> {
    let header_value = header_value.filter(|value| !value.is_empty())?;
    let (per_hour, per_day) = route_buckets(header_value);
    Some(ClientQuotaLimit { per_hour, per_day })
}

/// Parse the value of the `Auth0-Organization-Quota-Limit` header.
///
/// Same rules as [`parse_client_limit`].
pub fn parse_organization_limit(header_value: Option<&str>) -> Option<OrganizationQuotaLimit> {
    let header_value = header_value.filter(|value| !value.is_empty())?;
    let (per_hour, per_day) = route_buckets(header_value);
    Some(OrganizationQuotaLimit { per_hour, per_day })
}

/// First value of the header `name`, matched case-sensitively.
pub fn extract_header_value<'a>(
    headers: Option<&'a ResponseHeaders>,
    name: &str,
) -> Option<&'a str> {
    headers?.get(name)?.first().map(String::as_str)
}

/// Quota accessors on a response header map.
pub trait QuotaLimitHeaders {
    /// Quota of the calling client, from `Auth0-Client-Quota-Limit`.
    fn client_quota_limit(&self) -> Option<ClientQuotaLimit>;

    /// Quota of the organization, from `Auth0-Organization-Quota-Limit`.
    fn organization_quota_limit(&self) -> Option<OrganizationQuotaLimit>;
}

impl QuotaLimitHeaders for ResponseHeaders {
    fn client_quota_limit(&self) -> Option<ClientQuotaLimit> {
        parse_client_limit(extract_header_value(Some(self), CLIENT_QUOTA_LIMIT_HEADER))
    }

    fn organization_quota_limit(&self) -> Option<OrganizationQuotaLimit> {
        parse_organization_limit(extract_header_value(
            Some(self),
            ORGANIZATION_QUOTA_LIMIT_HEADER,
        ))
    }
}
