// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Tencent Cloud API Authentication Library
//!
//! This library provides credential handling and TC3-HMAC-SHA256 request
//! signing for Tencent Cloud API 3.0 services. It supports:
//!
//! - Static SecretId/SecretKey credentials, with optional STS session token
//! - Credentials from `TENCENTCLOUD_*` environment variables
//! - Credentials from the INI file at `~/.tencentcloud/credentials`
//! - Signed and unsigned (`UNSIGNED-PAYLOAD`) request bodies
//!
//! # Authentication Flow
//!
//! 1. Resolve a [`Credential`] through a [`ProvideCredential`] implementation
//! 2. For each HTTP request:
//!    a. Take the current Unix timestamp (sent as `X-TC-Timestamp`)
//!    b. Build the canonical request from host, action and payload hash
//!    c. Derive the per-day signing key and sign the string to sign
//!    d. Send the resulting `Authorization` header
//!
//! # Example
//!
//! ```ignore
//! use tencentcloud_auth::{Credential, sign_request};
//!
//! let credential = Credential::new("AKID...", "secret");
//! let signed = sign_request(
//!     &credential,
//!     "cvm",
//!     "cvm.tencentcloudapi.com",
//!     "DescribeInstances",
//!     br#"{"Limit":1}"#,
//!     false,
//! )?;
//! ```

pub mod credential;
pub mod error;
pub mod provider;
pub mod signature;

pub use credential::Credential;
pub use error::AuthError;
pub use provider::{DefaultProviderChain, EnvProvider, ProfileProvider, ProvideCredential};
pub use signature::{RequestSigner, sha256_hex};

/// Headers produced by signing one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// Value for `X-TC-Timestamp`
    pub timestamp: i64,
    /// Value for `Authorization`
    pub authorization: String,
    /// Value for `X-TC-Token`, when the credential carries a session token
    pub token: Option<String>,
    /// Value for `X-TC-Content-SHA256`, set only for unsigned payloads
    pub content_sha256: Option<&'static str>,
}

/// Sign a request at the current time
///
/// # Arguments
/// * `credential` - The resolved API key pair
/// * `service` - Service name, e.g. "cvm"
/// * `host` - Host header value, e.g. "cvm.tencentcloudapi.com"
/// * `action` - Action name, e.g. "DescribeInstances"
/// * `payload` - Exact JSON body bytes that will be sent
/// * `unsigned_payload` - Skip hashing the body
pub fn sign_request(
    credential: &Credential,
    service: &str,
    host: &str,
    action: &str,
    payload: &[u8],
    unsigned_payload: bool,
) -> Result<SignedHeaders, AuthError> {
    sign_request_at(
        credential,
        service,
        host,
        action,
        payload,
        unsigned_payload,
        chrono::Utc::now().timestamp(),
    )
}

/// Sign a request at an explicit timestamp
pub fn sign_request_at(
    credential: &Credential,
    service: &str,
    host: &str,
    action: &str,
    payload: &[u8],
    unsigned_payload: bool,
    timestamp: i64,
) -> Result<SignedHeaders, AuthError> {
    credential.validate()?;
    let signer = RequestSigner::new(service, host);
    let authorization =
        signer.authorization_header(credential, action, timestamp, payload, unsigned_payload)?;

    Ok(SignedHeaders {
        timestamp,
        authorization,
        token: credential.token().map(str::to_string),
        content_sha256: unsigned_payload.then_some(signature::UNSIGNED_PAYLOAD),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_request_at_sets_optional_headers() {
        let credential = Credential::new("AKIDEXAMPLE", "secret").with_token("tok");
        let signed = sign_request_at(
            &credential,
            "cvm",
            "cvm.tencentcloudapi.com",
            "DescribeRegions",
            b"{}",
            true,
            1_700_000_000,
        )
        .unwrap();

        assert_eq!(signed.timestamp, 1_700_000_000);
        assert_eq!(signed.token.as_deref(), Some("tok"));
        assert_eq!(signed.content_sha256, Some("UNSIGNED-PAYLOAD"));
        assert!(
            signed
                .authorization
                .starts_with("TC3-HMAC-SHA256 Credential=AKIDEXAMPLE/2023-11-14/cvm/tc3_request")
        );
    }

    #[test]
    fn test_sign_request_rejects_empty_credential() {
        let credential = Credential::new("", "secret");
        let result = sign_request(&credential, "cvm", "h", "A", b"{}", false);
        assert!(matches!(result, Err(AuthError::InvalidCredential(_))));
    }
}
