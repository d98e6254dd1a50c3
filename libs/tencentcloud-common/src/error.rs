// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for the transport client

use std::time::Duration;

use serde::Deserialize;
use tencentcloud_auth::AuthError;
use thiserror::Error;

/// Code prefix shared by every throttling error the API returns
pub const RATE_LIMIT_CODE_PREFIX: &str = "RequestLimitExceeded";

/// An error reported by the service inside `Response.Error`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[TencentCloudSDKError] Code={code}, Message={message}, RequestId={request_id}")]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub request_id: String,
}

impl ApiError {
    pub fn is_rate_limited(&self) -> bool {
        self.code.starts_with(RATE_LIMIT_CODE_PREFIX)
    }
}

/// Wire shape of `Response.Error`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ErrorBody {
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Errors returned by [`crate::Client`]
#[derive(Debug, Error)]
pub enum Error {
    /// No credential provider was configured; nothing was sent
    #[error("{action} require credential")]
    MissingCredential { action: String },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status or a body that is not a response envelope
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to parse response: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl Error {
    /// Error code in the provider's dotted form
    ///
    /// API errors carry the code the service returned. Local failures use
    /// `ClientError.*` codes so callers can match on a single string.
    pub fn code(&self) -> &str {
        match self {
            Self::Api(e) => &e.code,
            Self::MissingCredential { .. } => "ClientError.MissingCredential",
            Self::Transport(_) => "ClientError.NetworkError",
            Self::HttpStatus { .. } => "ClientError.HttpStatusCodeError",
            Self::Serialize(_) => "ClientError.SerializeError",
            Self::Deserialize(_) => "ClientError.ParseJsonError",
            Self::Auth(_) => "ClientError.AuthFailure",
            Self::Timeout(_) => "ClientError.Timeout",
            Self::Config(_) => "ClientError.InvalidConfig",
        }
    }

    /// Request id assigned by the service, when the request got that far
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Api(e) if !e.request_id.is_empty() => Some(&e.request_id),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout(_) => true,
            Self::Api(e) => e.is_rate_limited(),
            _ => false,
        }
    }

    pub(crate) fn missing_credential(action: &str) -> Self {
        Self::MissingCredential {
            action: action.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(code: &str) -> Error {
        Error::Api(ApiError {
            code: code.to_string(),
            message: "slow down".to_string(),
            request_id: "req-1".to_string(),
        })
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            api("RequestLimitExceeded").to_string(),
            "[TencentCloudSDKError] Code=RequestLimitExceeded, Message=slow down, RequestId=req-1"
        );
    }

    #[test]
    fn test_missing_credential_message() {
        let err = Error::missing_credential("DescribeInstances");
        assert_eq!(err.to_string(), "DescribeInstances require credential");
        assert_eq!(err.code(), "ClientError.MissingCredential");
        assert!(err.request_id().is_none());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_rate_limit_codes_are_retryable() {
        assert!(api("RequestLimitExceeded").is_retryable());
        assert!(api("RequestLimitExceeded.UinLimitExceeded").is_retryable());
        assert!(!api("InvalidInstanceId.NotFound").is_retryable());
        assert!(!api("LimitExceeded").is_retryable());
    }

    #[test]
    fn test_request_id() {
        assert_eq!(api("AuthFailure").request_id(), Some("req-1"));
        assert_eq!(api("AuthFailure").code(), "AuthFailure");
    }
}
