//! Signature verification for ID tokens signed with the client secret.
//!
//! Clients configured for HS256 receive ID tokens signed with HMAC-SHA256,
//! keyed with the ASCII bytes of the client secret. Only the signature is
//! checked here; claim validation (issuer, audience, expiry) is left to the
//! caller.

use crate::error::{TokenError, TokenResult};
use crate::models::wire::{WireEnum, wire_enum};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

wire_enum! {
    /// Algorithms ID tokens may be signed with.
    pub enum JwtSignatureAlgorithm {
        /// RSA signature with SHA-256, verified against the tenant's JWKS
        Rs256 => "RS256",
        /// HMAC with SHA-256, keyed with the client secret
        Hs256 => "HS256",
    }
}

#[derive(Debug, Deserialize)]
struct JoseHeader {
    alg: String,
}

/// Verifies HS256 signed tokens.
pub struct SymmetricSignedDecoder {
    key: Vec<u8>,
}

impl std::fmt::Debug for SymmetricSignedDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricSignedDecoder")
            .field("key", &"<redacted>")
            .finish()
    }
}

impl SymmetricSignedDecoder {
    pub fn new(client_secret: &str) -> Self {
        Self {
            key: client_secret.as_bytes().to_vec(),
        }
    }

    pub fn algorithm(&self) -> JwtSignatureAlgorithm {
        JwtSignatureAlgorithm::Hs256
    }

    /// Verify the signature of a compact JWT and return its claims.
    ///
    /// # Errors
    ///
    /// - [`TokenError::Malformed`] if the token is not `header.payload.signature`
    /// - [`TokenError::UnsupportedAlgorithm`] if the header names anything but HS256
    /// - [`TokenError::InvalidSignature`] if the signature does not verify
    /// - [`TokenError::Encoding`] / [`TokenError::Json`] for undecodable segments
    pub fn decode(&self, token: &str) -> TokenResult<Value> {
        let mut parts = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::malformed("expected three dot-separated segments"));
        };

        let jose: JoseHeader = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(header)?)?;
        if JwtSignatureAlgorithm::from_wire_str(&jose.alg) != Some(self.algorithm()) {
            return Err(TokenError::UnsupportedAlgorithm(jose.alg));
        }

        let signature = URL_SAFE_NO_PAD.decode(signature)?;
        let mut mac = self.mac()?;
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        // verify_slice compares in constant time
        mac.verify_slice(&signature).map_err(|_| {
            debug!("Rejecting token with invalid HS256 signature");
            TokenError::InvalidSignature
        })?;

        Ok(serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload)?)?)
    }

    /// Sign claims into a compact HS256 JWT.
    pub fn encode(&self, claims: &Value) -> TokenResult<String> {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);

        let mut mac = self.mac()?;
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{}.{}.{}", header, payload, signature))
    }

    fn mac(&self) -> TokenResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.key)
            .map_err(|e| TokenError::malformed(format!("unusable client secret: {}", e)))
    }
}
