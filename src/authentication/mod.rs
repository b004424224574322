//! Authentication API helpers.
//!
//! - [`forwarded_for_headers`] - the `auth0-forwarded-for` header used by
//!   trusted backends to pass the end user's IP address
//! - [`tokens::SymmetricSignedDecoder`] - HS256 ID token signature checks

pub mod tokens;

pub use tokens::{JwtSignatureAlgorithm, SymmetricSignedDecoder};

use crate::error::{Auth0Error, Auth0Result};
use std::collections::HashMap;
use std::net::IpAddr;

/// Header carrying the end user's IP address on token requests.
pub const FORWARDED_FOR_HEADER: &str = "auth0-forwarded-for";

/// Build the `auth0-forwarded-for` header for a token request.
///
/// Returns `Ok(None)` when no address is given. The value must be an IPv4
/// or IPv6 literal; host names are rejected.
///
/// ```rust
/// use auth0_core::authentication::forwarded_for_headers;
///
/// let headers = forwarded_for_headers(Some("192.168.1.1")).unwrap().unwrap();
/// assert_eq!(headers["auth0-forwarded-for"], "192.168.1.1");
///
/// assert!(forwarded_for_headers(None).unwrap().is_none());
/// assert!(forwarded_for_headers(Some("example.com")).is_err());
/// ```
pub fn forwarded_for_headers(
    forwarded_for_ip: Option<&str>,
) -> Auth0Result<Option<HashMap<String, String>>> {
    let Some(ip) = forwarded_for_ip.filter(|ip| !ip.is_empty()) else {
        return Ok(None);
    };

    if ip.parse::<IpAddr>().is_err() {
        return Err(Auth0Error::invalid_argument(
            "forwarded_for_ip",
            format!("'{}' is not a valid IPv4 or IPv6 address", ip),
        ));
    }

    let mut headers = HashMap::new();
    headers.insert(FORWARDED_FOR_HEADER.to_string(), ip.to_string());
    Ok(Some(headers))
}
