// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! TC3-HMAC-SHA256 signature generation
//!
//! The Authorization header has the form:
//!
//! ```text
//! TC3-HMAC-SHA256 Credential=<SecretId>/<Date>/<service>/tc3_request, SignedHeaders=content-type;host;x-tc-action, Signature=<hex>
//! ```
//!
//! The signature is computed in four steps:
//!
//! 1. Canonical request: method, URI, query, canonical headers, signed
//!    headers and the hex SHA-256 of the payload, joined by `\n`
//! 2. String to sign: algorithm, timestamp, credential scope and the hex
//!    SHA-256 of the canonical request
//! 3. Signing key: `HMAC("TC3" + SecretKey, Date)` -> service -> `tc3_request`
//! 4. Signature: hex `HMAC(SigningKey, StringToSign)`

use chrono::DateTime;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::credential::Credential;
use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "TC3-HMAC-SHA256";
pub const SIGNED_HEADERS: &str = "content-type;host;x-tc-action";
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
const TERMINATOR: &str = "tc3_request";

/// Request signer bound to one service endpoint
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    host: String,
    content_type: String,
}

impl RequestSigner {
    /// Create a signer for `service` (e.g. "cvm") reached at `host`
    /// (e.g. "cvm.tencentcloudapi.com")
    pub fn new(service: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            host: host.into(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Hex SHA-256 of the payload, or of the literal `UNSIGNED-PAYLOAD`
    pub fn hashed_payload(payload: &[u8], unsigned_payload: bool) -> String {
        if unsigned_payload {
            sha256_hex(UNSIGNED_PAYLOAD.as_bytes())
        } else {
            sha256_hex(payload)
        }
    }

    /// Build the canonical request for a POST to `/`
    pub fn canonical_request(&self, action: &str, hashed_payload: &str) -> String {
        let canonical_headers = format!(
            "content-type:{}\nhost:{}\nx-tc-action:{}\n",
            self.content_type,
            self.host,
            action.to_lowercase()
        );
        format!("POST\n/\n\n{canonical_headers}\n{SIGNED_HEADERS}\n{hashed_payload}")
    }

    /// `<date>/<service>/tc3_request`, where the date is the UTC day of
    /// `timestamp`
    pub fn credential_scope(&self, timestamp: i64) -> Result<String, AuthError> {
        Ok(format!(
            "{}/{}/{TERMINATOR}",
            utc_date(timestamp)?,
            self.service
        ))
    }

    pub fn string_to_sign(
        &self,
        timestamp: i64,
        canonical_request: &str,
    ) -> Result<String, AuthError> {
        Ok(format!(
            "{ALGORITHM}\n{timestamp}\n{}\n{}",
            self.credential_scope(timestamp)?,
            sha256_hex(canonical_request.as_bytes())
        ))
    }

    /// Derive the signing key and sign `string_to_sign`
    pub fn signature(
        &self,
        secret_key: &str,
        timestamp: i64,
        string_to_sign: &str,
    ) -> Result<String, AuthError> {
        let date = utc_date(timestamp)?;
        let secret_date = hmac_sha256(format!("TC3{secret_key}").as_bytes(), date.as_bytes())?;
        let secret_service = hmac_sha256(&secret_date, self.service.as_bytes())?;
        let secret_signing = hmac_sha256(&secret_service, TERMINATOR.as_bytes())?;
        Ok(hex::encode(hmac_sha256(
            &secret_signing,
            string_to_sign.as_bytes(),
        )?))
    }

    /// Compute the full Authorization header value
    pub fn authorization_header(
        &self,
        credential: &Credential,
        action: &str,
        timestamp: i64,
        payload: &[u8],
        unsigned_payload: bool,
    ) -> Result<String, AuthError> {
        let hashed = Self::hashed_payload(payload, unsigned_payload);
        let canonical = self.canonical_request(action, &hashed);
        let string_to_sign = self.string_to_sign(timestamp, &canonical)?;
        let signature = self.signature(credential.secret_key(), timestamp, &string_to_sign)?;

        Ok(format!(
            "{ALGORITHM} Credential={}/{}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
            credential.secret_id(),
            self.credential_scope(timestamp)?
        ))
    }
}

/// Lowercase hex SHA-256 digest
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>, AuthError> {
    let mut mac =
        HmacSha256::new_from_slice(key).map_err(|e| AuthError::SigningError(e.to_string()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn utc_date(timestamp: i64) -> Result<String, AuthError> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .ok_or_else(|| AuthError::SigningError(format!("timestamp {timestamp} out of range")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_empty() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_credential_scope_uses_utc_date() {
        let signer = RequestSigner::new("cvm", "cvm.tencentcloudapi.com");
        // 2019-02-25T08:44:25Z
        assert_eq!(
            signer.credential_scope(1551113065).unwrap(),
            "2019-02-25/cvm/tc3_request"
        );
        // one second before midnight UTC stays on the same day
        assert_eq!(
            signer.credential_scope(1551139199).unwrap(),
            "2019-02-25/cvm/tc3_request"
        );
    }

    #[test]
    fn test_canonical_request_lowercases_action() {
        let signer = RequestSigner::new("cvm", "cvm.tencentcloudapi.com");
        let canonical = signer.canonical_request("DescribeInstances", "abc");
        assert_eq!(
            canonical,
            "POST\n/\n\ncontent-type:application/json\nhost:cvm.tencentcloudapi.com\n\
             x-tc-action:describeinstances\n\ncontent-type;host;x-tc-action\nabc"
        );
    }

    #[test]
    fn test_unsigned_payload_ignores_body() {
        assert_eq!(
            RequestSigner::hashed_payload(b"{\"a\":1}", true),
            RequestSigner::hashed_payload(b"{\"b\":2}", true)
        );
        assert_ne!(
            RequestSigner::hashed_payload(b"{\"a\":1}", false),
            RequestSigner::hashed_payload(b"{\"b\":2}", false)
        );
    }
}
