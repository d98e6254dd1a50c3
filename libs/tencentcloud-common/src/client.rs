// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Signed JSON-over-POST transport

use std::sync::Arc;
use std::time::Instant;

use http::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde_json::{Map, Value};
use tencentcloud_auth::{ProvideCredential, sign_request};

use crate::Action;
use crate::context::RequestContext;
use crate::error::{ApiError, Error, ErrorBody};
use crate::profile::{Backoff, ClientProfile};
use crate::ratelimit::ActionRateLimiter;

/// Value of `X-TC-RequestClient`
pub const REQUEST_CLIENT: &str = concat!("SDK_RUST_", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "Response")]
    response: Map<String, Value>,
}

/// Shared client for one region
///
/// Cheap to clone; clones share the HTTP connection pool, the credential
/// provider and the per-action rate limiter.
#[derive(Debug, Clone)]
pub struct Client {
    region: String,
    credential: Option<Arc<dyn ProvideCredential>>,
    profile: ClientProfile,
    http: reqwest::Client,
    custom_http: bool,
    limiter: Option<Arc<ActionRateLimiter>>,
}

impl Client {
    /// Create a client for `region` with the default profile and no
    /// credential
    ///
    /// reqwest is built without a crypto provider, so this installs ring as
    /// the process-wide rustls default unless one is already set.
    pub fn new(region: impl Into<String>) -> Result<Self, Error> {
        let _ = rustls::crypto::ring::default_provider().install_default();
        let profile = ClientProfile::default();
        Ok(Self {
            region: region.into(),
            credential: None,
            http: build_http_client(&profile)?,
            custom_http: false,
            limiter: None,
            profile,
        })
    }

    pub fn with_credential(mut self, credential: impl ProvideCredential + 'static) -> Self {
        self.credential = Some(Arc::new(credential));
        self
    }

    pub fn with_shared_credential(mut self, credential: Arc<dyn ProvideCredential>) -> Self {
        self.credential = Some(credential);
        self
    }

    /// Replace the profile, rebuilding the HTTP client for its timeouts
    /// unless one was supplied with [`Client::with_http_client`]
    pub fn with_profile(mut self, profile: ClientProfile) -> Result<Self, Error> {
        if !matches!(profile.http_profile.scheme.as_str(), "https" | "http") {
            return Err(Error::Config(format!(
                "unsupported scheme '{}'",
                profile.http_profile.scheme
            )));
        }
        if !self.custom_http {
            self.http = build_http_client(&profile)?;
        }
        self.limiter = profile
            .rate_limit_per_action
            .and_then(ActionRateLimiter::new)
            .map(Arc::new);
        self.profile = profile;
        Ok(self)
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self.custom_http = true;
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn profile(&self) -> &ClientProfile {
        &self.profile
    }

    /// The configured credential provider, if any
    pub fn credential(&self) -> Option<&Arc<dyn ProvideCredential>> {
        self.credential.as_ref()
    }

    /// Send a typed action and decode its response
    pub async fn send<A: Action>(
        &self,
        ctx: &RequestContext,
        request: &A,
    ) -> Result<A::Response, Error> {
        let credential = self.require_credential(A::NAME)?;
        let payload = serde_json::to_vec(request).map_err(Error::Serialize)?;
        let response = self
            .execute(ctx, credential, A::SERVICE, A::VERSION, A::NAME, payload)
            .await?;
        serde_json::from_value(Value::Object(response)).map_err(Error::Deserialize)
    }

    /// Send an arbitrary action with a JSON body and return the `Response`
    /// object untouched
    pub async fn send_raw(
        &self,
        ctx: &RequestContext,
        service: &str,
        version: &str,
        action: &str,
        params: &Value,
    ) -> Result<Value, Error> {
        let credential = self.require_credential(action)?;
        if !params.is_object() {
            return Err(Error::Config(format!(
                "{action} parameters must be a JSON object"
            )));
        }
        let payload = serde_json::to_vec(params).map_err(Error::Serialize)?;
        let response = self
            .execute(ctx, credential, service, version, action, payload)
            .await?;
        Ok(Value::Object(response))
    }

    fn require_credential(&self, action: &str) -> Result<&Arc<dyn ProvideCredential>, Error> {
        self.credential
            .as_ref()
            .ok_or_else(|| Error::missing_credential(action))
    }

    async fn execute(
        &self,
        ctx: &RequestContext,
        credential: &Arc<dyn ProvideCredential>,
        service: &str,
        version: &str,
        action: &str,
        payload: Vec<u8>,
    ) -> Result<Map<String, Value>, Error> {
        let call = self.send_with_retries(ctx, credential, service, version, action, &payload);
        match ctx.timeout() {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| Error::Timeout(limit))?,
            None => call.await,
        }
    }

    async fn send_with_retries(
        &self,
        ctx: &RequestContext,
        credential: &Arc<dyn ProvideCredential>,
        service: &str,
        version: &str,
        action: &str,
        payload: &[u8],
    ) -> Result<Map<String, Value>, Error> {
        let mut network_retries = 0u32;
        let mut throttle_retries = 0u32;

        loop {
            if let Some(limiter) = &self.limiter {
                limiter.acquire(action).await;
            }

            let err = match self
                .send_once(ctx, credential, service, version, action, payload)
                .await
            {
                Ok(response) => return Ok(response),
                Err(e) => e,
            };

            let retry = match &err {
                Error::Transport(_)
                    if network_retries < self.profile.network_failure_max_retries =>
                {
                    network_retries += 1;
                    Some((network_retries, self.profile.network_failure_backoff))
                }
                Error::Api(api)
                    if api.is_rate_limited()
                        && throttle_retries < self.profile.rate_limit_exceeded_max_retries =>
                {
                    throttle_retries += 1;
                    Some((throttle_retries, self.profile.rate_limit_exceeded_backoff))
                }
                _ => None,
            };
            let Some((attempt, backoff)) = retry else {
                return Err(err);
            };

            retry_sleep(action, attempt, backoff, &err).await;
        }
    }

    async fn send_once(
        &self,
        ctx: &RequestContext,
        credential: &Arc<dyn ProvideCredential>,
        service: &str,
        version: &str,
        action: &str,
        payload: &[u8],
    ) -> Result<Map<String, Value>, Error> {
        let http_profile = &self.profile.http_profile;
        let host = http_profile.host_for(service);
        let url = http_profile.url_for(service);

        let credential = credential.provide_credential().await?;
        let signed = sign_request(
            &credential,
            service,
            &host,
            action,
            payload,
            self.profile.unsigned_payload,
        )?;

        let mut headers = ctx.headers().clone();
        insert(&mut headers, "content-type", "application/json")?;
        insert(&mut headers, "x-tc-action", action)?;
        insert(&mut headers, "x-tc-version", version)?;
        insert(&mut headers, "x-tc-timestamp", &signed.timestamp.to_string())?;
        insert(&mut headers, "x-tc-requestclient", REQUEST_CLIENT)?;
        insert(&mut headers, "authorization", &signed.authorization)?;
        if !self.region.is_empty() {
            insert(&mut headers, "x-tc-region", &self.region)?;
        }
        if let Some(language) = self.profile.language {
            insert(&mut headers, "x-tc-language", language.as_str())?;
        }
        if let Some(token) = &signed.token {
            insert(&mut headers, "x-tc-token", token)?;
        }
        if let Some(content_sha256) = signed.content_sha256 {
            insert(&mut headers, "x-tc-content-sha256", content_sha256)?;
        }

        tracing::trace!(
            action,
            body = %String::from_utf8_lossy(payload),
            "request body"
        );

        let started = Instant::now();
        let response = self
            .http
            .post(&url)
            .headers(headers)
            .body(payload.to_vec())
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::trace!(action, body = %String::from_utf8_lossy(&body), "response body");

        let result = decode_envelope(status, &body);
        let request_id = match &result {
            Ok(response) => response
                .get("RequestId")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            Err(Error::Api(e)) => e.request_id.clone(),
            Err(_) => String::new(),
        };
        tracing::debug!(
            action,
            region = %self.region,
            %host,
            status = status.as_u16(),
            request_id = %request_id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "tencentcloud request"
        );
        result
    }
}

fn build_http_client(profile: &ClientProfile) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .timeout(profile.http_profile.req_timeout())
        .connect_timeout(profile.http_profile.connect_timeout())
        .build()
        .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))
}

fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<(), Error> {
    let value = HeaderValue::from_str(value)
        .map_err(|e| Error::Config(format!("invalid value for header {name}: {e}")))?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}

async fn retry_sleep(action: &str, attempt: u32, backoff: Backoff, err: &Error) {
    let delay = backoff.delay(attempt - 1);
    tracing::warn!(
        action,
        attempt,
        code = err.code(),
        delay_ms = delay.as_millis() as u64,
        "retrying request: {err}"
    );
    tokio::time::sleep(delay).await;
}

/// Split a raw body into the `Response` object or the error it reports
fn decode_envelope(status: http::StatusCode, body: &[u8]) -> Result<Map<String, Value>, Error> {
    let http_error = || Error::HttpStatus {
        status: status.as_u16(),
        body: String::from_utf8_lossy(body).into_owned(),
    };

    let Ok(Envelope { mut response }) = serde_json::from_slice::<Envelope>(body) else {
        return Err(http_error());
    };

    if let Some(error) = response.remove("Error") {
        let ErrorBody { code, message } =
            serde_json::from_value(error).map_err(Error::Deserialize)?;
        let request_id = response
            .get("RequestId")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Err(ApiError {
            code,
            message,
            request_id,
        }
        .into());
    }

    if !status.is_success() {
        return Err(http_error());
    }
    Ok(response)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_decode_success() {
        let body = br#"{"Response":{"TotalCount":0,"RequestId":"r-1"}}"#;
        let response = decode_envelope(StatusCode::OK, body).unwrap();
        assert_eq!(response["TotalCount"], 0);
    }

    #[test]
    fn test_decode_api_error() {
        let body = br#"{"Response":{"Error":{"Code":"AuthFailure.SignatureFailure","Message":"bad"},"RequestId":"r-2"}}"#;
        match decode_envelope(StatusCode::OK, body).unwrap_err() {
            Error::Api(e) => {
                assert_eq!(e.code, "AuthFailure.SignatureFailure");
                assert_eq!(e.message, "bad");
                assert_eq!(e.request_id, "r-2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_non_json_body() {
        let err = decode_envelope(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 502, .. }));
    }

    #[test]
    fn test_decode_error_status_without_envelope_error() {
        let err = decode_envelope(StatusCode::INTERNAL_SERVER_ERROR, br#"{"Response":{}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    }

    #[test]
    fn test_new_client_has_no_credential() {
        let client = Client::new("ap-guangzhou").unwrap();
        assert!(client.credential().is_none());
        assert_eq!(client.region(), "ap-guangzhou");
    }

    #[test]
    fn test_new_client_installs_crypto_provider() {
        Client::new("ap-guangzhou").unwrap();
        assert!(rustls::crypto::CryptoProvider::get_default().is_some());
    }

    #[test]
    fn test_rejects_unknown_scheme() {
        let mut profile = ClientProfile::default();
        profile.http_profile.scheme = "ftp".to_string();
        let err = Client::new("ap-guangzhou").unwrap().with_profile(profile).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
