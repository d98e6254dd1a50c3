// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Transport tests against a local stub of the API endpoint

#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tencentcloud_auth::{Credential, sign_request_at};
use tencentcloud_common::{
    Action, Backoff, Client, ClientProfile, Error, Language, RequestContext,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeZones {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeZonesResponse {
    total_count: i64,
    request_id: String,
}

impl Action for DescribeZones {
    const SERVICE: &'static str = "cvm";
    const VERSION: &'static str = "2017-03-12";
    const NAME: &'static str = "DescribeZones";
    type Response = DescribeZonesResponse;
}

struct Recorded {
    headers: HeaderMap,
    body: String,
}

#[derive(Clone, Default)]
struct Stub {
    requests: Arc<Mutex<Vec<Recorded>>>,
    replies: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
    delay: Duration,
}

impl Stub {
    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

async fn handle(
    State(stub): State<Stub>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    stub.requests.lock().unwrap().push(Recorded { headers, body });
    if !stub.delay.is_zero() {
        tokio::time::sleep(stub.delay).await;
    }
    let reply = stub.replies.lock().unwrap().pop_front();
    reply.unwrap_or_else(|| {
        (
            StatusCode::OK,
            r#"{"Response":{"TotalCount":2,"RequestId":"req-ok"}}"#.to_string(),
        )
    })
}

/// Start a stub that answers with `replies` in order, then with a default
/// successful DescribeZones response
async fn start_stub(replies: Vec<&str>, delay: Duration) -> (Stub, String) {
    let stub = Stub {
        replies: Arc::new(Mutex::new(
            replies
                .into_iter()
                .map(|r| (StatusCode::OK, r.to_string()))
                .collect(),
        )),
        delay,
        ..Default::default()
    };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let app = Router::new()
        .route("/", post(handle))
        .with_state(stub.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (stub, addr)
}

/// Start a stub that closes its first `dropped` connections without
/// answering, then serves the default successful response
async fn start_flaky_stub(dropped: usize) -> (Stub, String) {
    let stub = Stub::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let app = Router::new()
        .route("/", post(handle))
        .with_state(stub.clone());
    tokio::spawn(async move {
        for _ in 0..dropped {
            let (socket, _) = listener.accept().await.unwrap();
            drop(socket);
        }
        axum::serve(listener, app).await.unwrap();
    });
    (stub, addr)
}

fn profile_for(addr: &str) -> ClientProfile {
    let mut profile = ClientProfile::default();
    profile.http_profile.scheme = "http".to_string();
    profile.http_profile.endpoint = Some(addr.to_string());
    profile.network_failure_backoff = Backoff::Constant { delay_ms: 1 };
    profile.rate_limit_exceeded_backoff = Backoff::Constant { delay_ms: 1 };
    profile
}

fn client_for(profile: ClientProfile) -> Client {
    Client::new("ap-guangzhou")
        .unwrap()
        .with_credential(Credential::new("AKIDtest", "secret"))
        .with_profile(profile)
        .unwrap()
}

const THROTTLED: &str = r#"{"Response":{"Error":{"Code":"RequestLimitExceeded","Message":"too fast"},"RequestId":"req-throttled"}}"#;

#[tokio::test]
async fn test_send_signs_and_sets_headers() {
    let (stub, addr) = start_stub(vec![], Duration::ZERO).await;
    let client = client_for(profile_for(&addr));

    let response = client
        .send(&RequestContext::default(), &DescribeZones { limit: Some(5) })
        .await
        .unwrap();
    assert_eq!(response.total_count, 2);
    assert_eq!(response.request_id, "req-ok");

    let requests = stub.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.body, r#"{"Limit":5}"#);
    assert_eq!(req.headers["x-tc-action"], "DescribeZones");
    assert_eq!(req.headers["x-tc-version"], "2017-03-12");
    assert_eq!(req.headers["x-tc-region"], "ap-guangzhou");
    assert_eq!(req.headers["content-type"], "application/json");
    assert_eq!(req.headers["host"], addr.as_str());
    assert!(req.headers.get("x-tc-token").is_none());
    assert!(req.headers.get("x-tc-language").is_none());
    assert!(req.headers.get("x-tc-content-sha256").is_none());
    assert!(
        req.headers["x-tc-requestclient"]
            .to_str()
            .unwrap()
            .starts_with("SDK_RUST_")
    );

    // The Authorization header must match an independent signature over
    // the same host, body and timestamp.
    let timestamp: i64 = req.headers["x-tc-timestamp"].to_str().unwrap().parse().unwrap();
    let expected = sign_request_at(
        &Credential::new("AKIDtest", "secret"),
        "cvm",
        &addr,
        "DescribeZones",
        req.body.as_bytes(),
        false,
        timestamp,
    )
    .unwrap();
    assert_eq!(req.headers["authorization"], expected.authorization.as_str());
}

#[tokio::test]
async fn test_optional_headers() {
    let (stub, addr) = start_stub(vec![], Duration::ZERO).await;
    let mut profile = profile_for(&addr);
    profile.unsigned_payload = true;
    profile.language = Some(Language::EnUs);
    let client = Client::new("")
        .unwrap()
        .with_credential(Credential::new("AKIDtest", "secret").with_token("sts-token"))
        .with_profile(profile)
        .unwrap();
    let ctx = RequestContext::new()
        .with_header("X-TC-TraceId", "trace-1")
        .unwrap();

    client.send(&ctx, &DescribeZones { limit: None }).await.unwrap();

    let requests = stub.requests.lock().unwrap();
    let headers = &requests[0].headers;
    assert_eq!(requests[0].body, "{}");
    assert_eq!(headers["x-tc-token"], "sts-token");
    assert_eq!(headers["x-tc-language"], "en-US");
    assert_eq!(headers["x-tc-content-sha256"], "UNSIGNED-PAYLOAD");
    assert_eq!(headers["x-tc-traceid"], "trace-1");
    assert!(headers.get("x-tc-region").is_none());
}

#[tokio::test]
async fn test_missing_credential_sends_nothing() {
    let (stub, addr) = start_stub(vec![], Duration::ZERO).await;
    let client = Client::new("ap-guangzhou")
        .unwrap()
        .with_profile(profile_for(&addr))
        .unwrap();

    let err = client
        .send(&RequestContext::default(), &DescribeZones { limit: None })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingCredential { .. }));
    assert_eq!(err.to_string(), "DescribeZones require credential");

    let err = client
        .send_raw(
            &RequestContext::default(),
            "cvm",
            "2017-03-12",
            "DescribeRegions",
            &json!({}),
        )
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "DescribeRegions require credential");
    assert_eq!(stub.request_count(), 0);
}

#[tokio::test]
async fn test_api_error_is_decoded() {
    let (_stub, addr) = start_stub(
        vec![r#"{"Response":{"Error":{"Code":"InvalidZone.MismatchRegion","Message":"zone not in region"},"RequestId":"req-err"}}"#],
        Duration::ZERO,
    )
    .await;
    let client = client_for(profile_for(&addr));

    let err = client
        .send(&RequestContext::default(), &DescribeZones { limit: None })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "InvalidZone.MismatchRegion");
    assert_eq!(err.request_id(), Some("req-err"));
    assert_eq!(
        err.to_string(),
        "[TencentCloudSDKError] Code=InvalidZone.MismatchRegion, Message=zone not in region, RequestId=req-err"
    );
}

#[tokio::test]
async fn test_rate_limit_errors_are_retried() {
    let (stub, addr) = start_stub(vec![THROTTLED, THROTTLED], Duration::ZERO).await;
    let mut profile = profile_for(&addr);
    profile.rate_limit_exceeded_max_retries = 2;
    let client = client_for(profile);

    let response = client
        .send(&RequestContext::default(), &DescribeZones { limit: None })
        .await
        .unwrap();
    assert_eq!(response.request_id, "req-ok");
    assert_eq!(stub.request_count(), 3);
}

#[tokio::test]
async fn test_rate_limit_retries_are_bounded() {
    let (stub, addr) = start_stub(vec![THROTTLED, THROTTLED], Duration::ZERO).await;
    let mut profile = profile_for(&addr);
    profile.rate_limit_exceeded_max_retries = 1;
    let client = client_for(profile);

    let err = client
        .send(&RequestContext::default(), &DescribeZones { limit: None })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "RequestLimitExceeded");
    assert!(err.is_retryable());
    assert_eq!(stub.request_count(), 2);
}

#[tokio::test]
async fn test_no_retry_by_default() {
    let (stub, addr) = start_stub(vec![THROTTLED], Duration::ZERO).await;
    let client = client_for(profile_for(&addr));

    assert!(
        client
            .send(&RequestContext::default(), &DescribeZones { limit: None })
            .await
            .is_err()
    );
    assert_eq!(stub.request_count(), 1);
}

#[tokio::test]
async fn test_network_failure() {
    // Grab a free port and release it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);

    let mut profile = profile_for(&addr);
    profile.network_failure_max_retries = 2;
    let client = client_for(profile);

    let err = client
        .send(&RequestContext::default(), &DescribeZones { limit: None })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.code(), "ClientError.NetworkError");
}

#[tokio::test]
async fn test_network_failures_are_retried() {
    let (stub, addr) = start_flaky_stub(2).await;
    let mut profile = profile_for(&addr);
    profile.network_failure_max_retries = 2;
    let client = client_for(profile);

    let response = client
        .send(&RequestContext::default(), &DescribeZones { limit: None })
        .await
        .unwrap();
    assert_eq!(response.request_id, "req-ok");
    assert_eq!(stub.request_count(), 1);
}

#[tokio::test]
async fn test_network_retries_are_bounded() {
    let (stub, addr) = start_flaky_stub(2).await;
    let mut profile = profile_for(&addr);
    profile.network_failure_max_retries = 1;
    let client = client_for(profile);

    let err = client
        .send(&RequestContext::default(), &DescribeZones { limit: None })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(stub.request_count(), 0);
}

#[tokio::test]
async fn test_rate_limit_per_action_spaces_requests() {
    let (stub, addr) = start_stub(vec![], Duration::ZERO).await;
    let mut profile = profile_for(&addr);
    profile.rate_limit_per_action = Some(1);
    let client = client_for(profile);
    let ctx = RequestContext::default();

    let start = std::time::Instant::now();
    client.send(&ctx, &DescribeZones { limit: None }).await.unwrap();
    assert!(start.elapsed() < Duration::from_millis(900));
    client.send(&ctx, &DescribeZones { limit: None }).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(900));
    assert_eq!(stub.request_count(), 2);
}

#[tokio::test]
async fn test_context_timeout() {
    let (_stub, addr) = start_stub(vec![], Duration::from_millis(500)).await;
    let client = client_for(profile_for(&addr));
    let ctx = RequestContext::new().with_timeout(Duration::from_millis(50));

    let err = client
        .send(&ctx, &DescribeZones { limit: None })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout(d) if d == Duration::from_millis(50)));
}

#[tokio::test]
async fn test_unexpected_response_shape() {
    let (_stub, addr) = start_stub(
        vec![r#"{"Response":{"RequestId":"req-short"}}"#, "not json"],
        Duration::ZERO,
    )
    .await;
    let client = client_for(profile_for(&addr));

    let err = client
        .send(&RequestContext::default(), &DescribeZones { limit: None })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Deserialize(_)));

    let err = client
        .send(&RequestContext::default(), &DescribeZones { limit: None })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 200, .. }));
}

#[tokio::test]
async fn test_send_raw() {
    let (stub, addr) = start_stub(
        vec![r#"{"Response":{"RegionSet":[{"Region":"ap-guangzhou"}],"RequestId":"req-raw"}}"#],
        Duration::ZERO,
    )
    .await;
    let client = client_for(profile_for(&addr));

    let response = client
        .send_raw(
            &RequestContext::default(),
            "cvm",
            "2017-03-12",
            "DescribeRegions",
            &json!({ "Product": "cvm" }),
        )
        .await
        .unwrap();
    assert_eq!(response["RegionSet"][0]["Region"], "ap-guangzhou");
    assert_eq!(
        stub.requests.lock().unwrap()[0].headers["x-tc-action"],
        "DescribeRegions"
    );

    let err = client
        .send_raw(
            &RequestContext::default(),
            "cvm",
            "2017-03-12",
            "DescribeRegions",
            &json!([1, 2]),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
