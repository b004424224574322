//! Value types produced by the quota header parser.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Response headers as handed over by the transport: name to values.
pub type ResponseHeaders = HashMap<String, Vec<String>>;

/// Usage of a single quota window.
///
/// All values are non-negative and no larger than `i32::MAX`; the parser
/// rejects anything outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuotaLimit {
    /// Total number of calls allowed in the window
    pub quota: u32,
    /// Calls left in the current window
    pub remaining: u32,
    /// Seconds until the window resets
    pub reset_after: u32,
}

impl QuotaLimit {
    pub fn new(quota: u32, remaining: u32, reset_after: u32) -> Self {
        Self {
            quota,
            remaining,
            reset_after,
        }
    }

    /// Whether the window has no calls left.
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// One successfully parsed `b=..;q=..;r=..;t=..` segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuotaBucket {
    /// Bucket name exactly as sent, e.g. `per_hour`
    pub name: String,
    pub limit: QuotaLimit,
}

impl fmt::Display for QuotaBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "b={};q={};r={};t={}",
            self.name, self.limit.quota, self.limit.remaining, self.limit.reset_after
        )
    }
}

/// Hourly and daily quota of the calling client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientQuotaLimit {
    pub per_hour: Option<QuotaLimit>,
    pub per_day: Option<QuotaLimit>,
}

/// Hourly and daily quota of the organization the call was made for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationQuotaLimit {
    pub per_hour: Option<QuotaLimit>,
    pub per_day: Option<QuotaLimit>,
}

/// Reasons a quota segment is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuotaParseError {
    /// The segment was empty
    #[error("Empty quota segment")]
    Empty,

    /// A `key=value` pair had no `=`
    #[error("Pair '{0}' has no '=' separator")]
    MissingSeparator(String),

    /// A pair had nothing before the `=`
    #[error("Pair '{0}' has an empty key")]
    EmptyKey(String),

    /// A pair had nothing after the `=`
    #[error("Key '{0}' has an empty value")]
    EmptyValue(String),

    /// The same key appeared twice in one segment
    #[error("Duplicate key '{0}'")]
    DuplicateKey(String),

    /// One of `b`, `q`, `r`, `t` was not present
    #[error("Required field '{0}' is missing")]
    MissingField(&'static str),

    /// A numeric field was not an integer in `0..=i32::MAX`
    #[error("Field '{field}' has invalid value '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}
