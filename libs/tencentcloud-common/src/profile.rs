// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client and HTTP profiles
//!
//! Profiles control where requests go and how failures are retried. Both
//! structs deserialize with `#[serde(default)]`, so a JSON config only needs
//! the fields it wants to change.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ROOT_DOMAIN: &str = "tencentcloudapi.com";

/// Transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HttpProfile {
    /// "https" or "http"
    pub scheme: String,
    /// Domain appended to the service name ("cvm" -> "cvm.tencentcloudapi.com")
    pub root_domain: String,
    /// Full host override, e.g. "cvm.ap-guangzhou.tencentcloudapi.com" or
    /// "127.0.0.1:8080"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Whole-request timeout in seconds
    pub req_timeout_secs: u64,
    /// TCP/TLS connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpProfile {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            root_domain: DEFAULT_ROOT_DOMAIN.to_string(),
            endpoint: None,
            req_timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}

impl HttpProfile {
    /// Host that requests for `service` are sent to (and signed for)
    pub fn host_for(&self, service: &str) -> String {
        match &self.endpoint {
            Some(endpoint) if !endpoint.is_empty() => endpoint.clone(),
            _ => format!("{}.{}", service, self.root_domain),
        }
    }

    pub fn url_for(&self, service: &str) -> String {
        format!("{}://{}/", self.scheme, self.host_for(service))
    }

    pub fn req_timeout(&self) -> Duration {
        Duration::from_secs(self.req_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Response language, sent as `X-TC-Language`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zh-CN" => Ok(Self::ZhCn),
            "en-US" => Ok(Self::EnUs),
            other => Err(format!("unsupported language '{other}' (zh-CN or en-US)")),
        }
    }
}

/// Delay between retry attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Backoff {
    /// Same delay before every retry
    #[serde(rename_all = "camelCase")]
    Constant { delay_ms: u64 },
    /// `base * 2^attempt`, capped at `max`
    #[serde(rename_all = "camelCase")]
    Exponential { base_ms: u64, max_ms: u64 },
}

impl Default for Backoff {
    fn default() -> Self {
        Self::Exponential {
            base_ms: 1000,
            max_ms: 30_000,
        }
    }
}

impl Backoff {
    /// Delay before retry number `attempt` (0-based)
    pub fn delay(&self, attempt: u32) -> Duration {
        match *self {
            Self::Constant { delay_ms } => Duration::from_millis(delay_ms),
            Self::Exponential { base_ms, max_ms } => {
                let factor = 1u64.checked_shl(attempt.min(63)).unwrap_or(u64::MAX);
                Duration::from_millis(base_ms.saturating_mul(factor).min(max_ms))
            }
        }
    }
}

/// Per-client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientProfile {
    pub http_profile: HttpProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Send `UNSIGNED-PAYLOAD` instead of hashing the body
    pub unsigned_payload: bool,
    /// Retries after a transport-level failure (connect, reset, timeout)
    pub network_failure_max_retries: u32,
    pub network_failure_backoff: Backoff,
    /// Retries after a `RequestLimitExceeded*` API error
    pub rate_limit_exceeded_max_retries: u32,
    pub rate_limit_exceeded_backoff: Backoff,
    /// Client-side cap on requests per second for each action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_action: Option<u32>,
}

impl Default for ClientProfile {
    fn default() -> Self {
        Self {
            http_profile: HttpProfile::default(),
            language: None,
            unsigned_payload: false,
            network_failure_max_retries: 0,
            network_failure_backoff: Backoff::default(),
            rate_limit_exceeded_max_retries: 0,
            rate_limit_exceeded_backoff: Backoff::default(),
            rate_limit_per_action: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_host_for_service() {
        let profile = HttpProfile::default();
        assert_eq!(profile.host_for("cvm"), "cvm.tencentcloudapi.com");
        assert_eq!(profile.url_for("cvm"), "https://cvm.tencentcloudapi.com/");
    }

    #[test]
    fn test_endpoint_override() {
        let profile = HttpProfile {
            scheme: "http".to_string(),
            endpoint: Some("127.0.0.1:9000".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.host_for("cvm"), "127.0.0.1:9000");
        assert_eq!(profile.url_for("cvm"), "http://127.0.0.1:9000/");
    }

    #[test]
    fn test_empty_endpoint_is_ignored() {
        let profile = HttpProfile {
            endpoint: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(profile.host_for("cvm"), "cvm.tencentcloudapi.com");
    }

    #[test]
    fn test_exponential_backoff() {
        let backoff = Backoff::Exponential {
            base_ms: 100,
            max_ms: 1000,
        };
        assert_eq!(backoff.delay(0), Duration::from_millis(100));
        assert_eq!(backoff.delay(1), Duration::from_millis(200));
        assert_eq!(backoff.delay(3), Duration::from_millis(800));
        assert_eq!(backoff.delay(4), Duration::from_millis(1000));
        assert_eq!(backoff.delay(200), Duration::from_millis(1000));
    }

    #[test]
    fn test_constant_backoff() {
        let backoff = Backoff::Constant { delay_ms: 5 };
        assert_eq!(backoff.delay(0), backoff.delay(10));
    }

    #[test]
    fn test_profile_from_partial_json() {
        let json = r#"{
            "language": "en-US",
            "networkFailureMaxRetries": 3,
            "httpProfile": { "endpoint": "cvm.ap-shanghai.tencentcloudapi.com" },
            "rateLimitExceededBackoff": { "kind": "constant", "delayMs": 250 }
        }"#;
        let profile: ClientProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.language, Some(Language::EnUs));
        assert_eq!(profile.network_failure_max_retries, 3);
        assert_eq!(profile.http_profile.scheme, "https");
        assert_eq!(
            profile.http_profile.host_for("cvm"),
            "cvm.ap-shanghai.tencentcloudapi.com"
        );
        assert_eq!(
            profile.rate_limit_exceeded_backoff,
            Backoff::Constant { delay_ms: 250 }
        );
    }
}
