// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CvmClient against a local stub of the CVM endpoint

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use cvm_client::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

type Responder = dyn Fn(&str, &Value, usize) -> Value + Send + Sync;

/// Answers every call through `respond(action, params, call_index)`, which
/// returns the content of the `Response` envelope
#[derive(Clone)]
struct Stub {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    respond: Arc<Responder>,
}

impl Stub {
    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

async fn handle(State(stub): State<Stub>, headers: HeaderMap, body: String) -> String {
    let action = headers
        .get("x-tc-action")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let params: Value = serde_json::from_str(&body).unwrap();
    let index = {
        let mut calls = stub.calls.lock().unwrap();
        calls.push((action.clone(), params.clone()));
        calls.len() - 1
    };
    let mut response = (stub.respond)(&action, &params, index);
    response["RequestId"] = json!(format!("req-{index}"));
    json!({ "Response": response }).to_string()
}

async fn start_stub<F>(respond: F) -> (Stub, CvmClient)
where
    F: Fn(&str, &Value, usize) -> Value + Send + Sync + 'static,
{
    let stub = Stub {
        calls: Arc::default(),
        respond: Arc::new(respond),
    };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    let app = Router::new()
        .route("/", post(handle))
        .with_state(stub.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut profile = ClientProfile::default();
    profile.http_profile.scheme = "http".to_string();
    profile.http_profile.endpoint = Some(addr);
    let client = CvmClient::new("ap-guangzhou")
        .unwrap()
        .with_credential(Credential::new("AKIDtest", "secret"))
        .with_profile(profile)
        .unwrap();
    (stub, client)
}

fn instance_json(id: &str, state: &str, operation_state: &str) -> Value {
    json!({
        "InstanceId": id,
        "InstanceState": state,
        "LatestOperation": "StartInstances",
        "LatestOperationState": operation_state,
        "PrivateIpAddresses": null
    })
}

/// Serves `total` instances named ins-0000.. honoring Offset and Limit
fn paged_instances(total: i64) -> impl Fn(&str, &Value, usize) -> Value + Send + Sync {
    move |_, params, _| {
        let offset = params["Offset"].as_i64().unwrap_or(0);
        let limit = params["Limit"].as_i64().unwrap_or(20);
        let set: Vec<Value> = (offset..(offset + limit).min(total))
            .map(|n| instance_json(&format!("ins-{n:04}"), "RUNNING", "SUCCESS"))
            .collect();
        json!({ "TotalCount": total, "InstanceSet": set })
    }
}

#[tokio::test]
async fn test_action_method_sends_action_and_params() {
    let (stub, client) = start_stub(|_, _, _| json!({})).await;

    let response = client
        .stop_instances(&StopInstancesRequest {
            instance_ids: vec!["ins-r8hr2upy".to_string()],
            stop_type: Some("SOFT_FIRST".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(response.request_id, "req-0");

    let calls = stub.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "StopInstances");
    assert_eq!(calls[0].1["InstanceIds"], json!(["ins-r8hr2upy"]));
    assert_eq!(calls[0].1["StopType"], "SOFT_FIRST");
}

#[tokio::test]
async fn test_missing_credential_fails_before_sending() {
    let (stub, _) = start_stub(|_, _, _| json!({})).await;
    let client = CvmClient::new("ap-guangzhou").unwrap();

    let err = client
        .describe_zones(&DescribeZonesRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingCredential { .. }));
    assert_eq!(err.to_string(), "DescribeZones require credential");
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn test_describe_all_instances_walks_every_page() {
    let (stub, client) = start_stub(paged_instances(250)).await;

    let instances = client
        .describe_all_instances(vec![Filter::new("zone", ["ap-guangzhou-3"])])
        .await
        .unwrap();
    assert_eq!(instances.len(), 250);
    assert_eq!(instances[0].instance_id, "ins-0000");
    assert_eq!(instances[249].instance_id, "ins-0249");

    let calls = stub.calls();
    let offsets: Vec<i64> = calls
        .iter()
        .map(|(_, p)| p["Offset"].as_i64().unwrap())
        .collect();
    assert_eq!(offsets, vec![0, 100, 200]);
    assert!(calls.iter().all(|(_, p)| p["Limit"] == 100));
    assert!(calls.iter().all(|(_, p)| p["Filters"][0]["Name"] == "zone"));
}

#[tokio::test]
async fn test_describe_all_instances_concurrent_keeps_order() {
    let (stub, client) = start_stub(paged_instances(430)).await;

    let instances = client
        .describe_all_instances_concurrent(vec![], 3)
        .await
        .unwrap();
    let ids: Vec<&str> = instances.iter().map(|i| i.instance_id.as_str()).collect();
    let expected: Vec<String> = (0..430).map(|n| format!("ins-{n:04}")).collect();
    assert_eq!(ids, expected);
    assert_eq!(stub.calls().len(), 5);
}

#[tokio::test]
async fn test_describe_all_key_pairs_stops_on_short_page() {
    let (stub, client) = start_stub(|_, _, _| {
        json!({
            "TotalCount": 2,
            "KeyPairSet": [
                {"KeyId": "skey-1", "KeyName": "a", "AssociatedInstanceIds": null},
                {"KeyId": "skey-2", "KeyName": "b"}
            ]
        })
    })
    .await;

    let keys = client.describe_all_key_pairs(vec![]).await.unwrap();
    assert_eq!(keys.len(), 2);
    assert_eq!(stub.calls().len(), 1);
    assert_eq!(stub.calls()[0].0, "DescribeKeyPairs");
}

#[tokio::test]
async fn test_lookup_by_id_returns_none_when_absent() {
    let (_, client) = start_stub(|action, _, _| match action {
        "DescribeInstances" => json!({"TotalCount": 0, "InstanceSet": []}),
        "DescribeImages" => json!({
            "Error": {"Code": "InvalidImageId.NotFound", "Message": "no such image"}
        }),
        _ => json!({"TotalCount": 0, "KeyPairSet": null}),
    })
    .await;

    assert!(client.describe_instance_by_id("ins-gone").await.unwrap().is_none());
    assert!(client.describe_image_by_id("img-gone").await.unwrap().is_none());
    assert!(client.describe_key_pair_by_id("skey-gone").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_by_id_maps_any_not_found_code() {
    let (_, client) = start_stub(|action, _, _| {
        let code = match action {
            "DescribeInstances" => "InvalidInstanceId.NotFound",
            _ => "InvalidKeyPairId.NotFound",
        };
        json!({"Error": {"Code": code, "Message": "not found"}})
    })
    .await;

    assert!(client.describe_instance_by_id("ins-gone").await.unwrap().is_none());
    assert!(client.describe_key_pair_by_id("skey-gone").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_by_id_propagates_other_errors() {
    let (_, client) = start_stub(|_, _, _| {
        json!({"Error": {"Code": "InvalidInstanceId.Malformed", "Message": "bad id"}})
    })
    .await;

    let err = client.describe_instance_by_id("nope").await.unwrap_err();
    assert_eq!(err.code(), "InvalidInstanceId.Malformed");
    assert_eq!(err.request_id(), Some("req-0"));
}

#[tokio::test]
async fn test_lookup_by_id_finds_instance() {
    let (stub, client) = start_stub(|_, _, _| {
        json!({
            "TotalCount": 1,
            "InstanceSet": [instance_json("ins-r8hr2upy", "STOPPED", "SUCCESS")]
        })
    })
    .await;

    let instance = client
        .describe_instance_by_id("ins-r8hr2upy")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(instance.instance_state, InstanceState::Stopped);
    assert_eq!(stub.calls()[0].1["InstanceIds"], json!(["ins-r8hr2upy"]));
}

fn fast_wait() -> WaitOptions {
    WaitOptions {
        interval: Duration::from_millis(10),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn test_wait_for_instances_until_settled() {
    let (stub, client) = start_stub(|_, _, index| {
        let (state, operation) = match index {
            0 => ("PENDING", "OPERATING"),
            1 => ("RUNNING", "OPERATING"),
            _ => ("RUNNING", "SUCCESS"),
        };
        json!({
            "TotalCount": 2,
            "InstanceSet": [
                instance_json("ins-b", state, operation),
                instance_json("ins-a", "RUNNING", "SUCCESS")
            ]
        })
    })
    .await;

    let ids = vec!["ins-a".to_string(), "ins-b".to_string()];
    let instances = client
        .wait_for_instances(&ids, InstanceState::Running, fast_wait())
        .await
        .unwrap();

    let got: Vec<&str> = instances.iter().map(|i| i.instance_id.as_str()).collect();
    assert_eq!(got, vec!["ins-a", "ins-b"]);
    assert_eq!(stub.calls().len(), 3);
    assert_eq!(stub.calls()[0].1["InstanceIds"], json!(["ins-a", "ins-b"]));
}

#[tokio::test]
async fn test_wait_for_instances_fails_on_launch_failure() {
    let (_, client) = start_stub(|_, _, _| {
        let mut failed = instance_json("ins-a", "LAUNCH_FAILED", "FAILED");
        failed["LatestOperationErrorMsg"] = json!("ResourceInsufficient.ZoneSoldOut");
        json!({ "TotalCount": 1, "InstanceSet": [failed] })
    })
    .await;

    let err = client
        .wait_for_instances(&["ins-a".to_string()], InstanceState::Running, fast_wait())
        .await
        .unwrap_err();
    match err {
        WaitError::LaunchFailed {
            instance_id,
            message,
        } => {
            assert_eq!(instance_id, "ins-a");
            assert_eq!(message, "ResourceInsufficient.ZoneSoldOut");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_wait_for_instances_fails_on_failed_operation() {
    let (_, client) = start_stub(|_, _, _| {
        json!({
            "TotalCount": 1,
            "InstanceSet": [instance_json("ins-a", "RUNNING", "FAILED")]
        })
    })
    .await;

    let err = client
        .wait_for_instances(&["ins-a".to_string()], InstanceState::Stopped, fast_wait())
        .await
        .unwrap_err();
    assert!(matches!(err, WaitError::OperationFailed { .. }));
}

#[tokio::test]
async fn test_wait_for_instances_times_out() {
    let (stub, client) = start_stub(|_, _, _| {
        json!({
            "TotalCount": 1,
            "InstanceSet": [instance_json("ins-a", "STOPPING", "OPERATING")]
        })
    })
    .await;

    let options = WaitOptions {
        interval: Duration::from_millis(20),
        timeout: Duration::from_millis(100),
    };
    let err = client
        .wait_for_instances(&["ins-a".to_string()], InstanceState::Stopped, options)
        .await
        .unwrap_err();
    assert!(err.is_timeout());
    match err {
        WaitError::Timeout { pending, .. } => assert_eq!(pending, vec!["ins-a".to_string()]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(stub.calls().len() >= 2);
}

#[tokio::test]
async fn test_wait_for_instances_with_repeated_ids() {
    let (stub, client) = start_stub(|_, _, _| {
        json!({
            "TotalCount": 1,
            "InstanceSet": [instance_json("ins-a", "RUNNING", "SUCCESS")]
        })
    })
    .await;

    let options = WaitOptions {
        interval: Duration::from_millis(20),
        timeout: Duration::from_millis(200),
    };
    let ids = vec!["ins-a".to_string(), "ins-a".to_string()];
    let instances = client
        .wait_for_instances(&ids, InstanceState::Running, options)
        .await
        .unwrap();

    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].instance_id, "ins-a");
    assert_eq!(stub.calls().len(), 1);
    assert_eq!(stub.calls()[0].1["InstanceIds"], json!(["ins-a"]));
}

#[tokio::test]
async fn test_common_client_sends_raw_actions() {
    let (stub, client) = start_stub(|_, _, _| json!({"TotalCount": 0, "ZoneSet": []})).await;

    let value = client
        .common()
        .send_raw(
            &RequestContext::default(),
            SERVICE,
            VERSION,
            "DescribeZones",
            &json!({}),
        )
        .await
        .unwrap();
    assert_eq!(value["TotalCount"], 0);
    assert_eq!(stub.calls()[0].0, "DescribeZones");
}
