// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile CLI tests against a throwaway config directory

#![allow(clippy::unwrap_used)]

mod common;

use common::{tccvm_cmd, tccvm_cmd_in};
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;

#[test]
fn test_profile_list_empty() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.args(["profile", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_profile_create_get_and_delete() {
    let (mut cmd, dir) = tccvm_cmd();
    cmd.args([
        "profile",
        "create",
        "gz",
        "--region",
        "ap-guangzhou",
        "--language",
        "en-US",
        "--secret-id",
        "AKIDexample",
        "--secret-key",
        "very-secret",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Saved profile 'gz'"))
    .stdout(predicate::str::contains("Set 'gz' as current profile"));

    let output = tccvm_cmd_in(&dir)
        .args(["profile", "get", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let profile: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(profile["name"], "gz");
    assert_eq!(profile["region"], "ap-guangzhou");
    assert_eq!(profile["language"], "en-US");
    assert_eq!(profile["secretId"], "AKIDexample");
    assert_eq!(profile["secretKey"], "********");

    tccvm_cmd_in(&dir)
        .args(["profile", "get"])
        .assert()
        .success()
        .stdout(predicate::str::contains("very-secret").not());

    tccvm_cmd_in(&dir)
        .args(["profile", "delete", "gz", "--force"])
        .assert()
        .success();

    tccvm_cmd_in(&dir)
        .args(["profile", "get", "gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read profile 'gz'"));
}

#[cfg(unix)]
#[test]
fn test_profile_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let (mut cmd, dir) = tccvm_cmd();
    cmd.args([
        "profile",
        "create",
        "gz",
        "--region",
        "ap-guangzhou",
        "--secret-id",
        "AKIDexample",
        "--secret-key",
        "very-secret",
    ])
    .assert()
    .success();

    let path = dir.path().join("config/profiles.d/gz.json");
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_profile_create_duplicate_fails() {
    let (mut cmd, dir) = tccvm_cmd();
    cmd.args(["profile", "create", "bj", "--region", "ap-beijing"])
        .assert()
        .success();

    tccvm_cmd_in(&dir)
        .args(["profile", "create", "bj", "--region", "ap-beijing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_secret_id_requires_secret_key() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.args([
        "profile",
        "create",
        "half",
        "--region",
        "ap-beijing",
        "--secret-id",
        "AKIDexample",
    ])
    .assert()
    .failure();
}

#[test]
fn test_set_current_switches_back() {
    let (mut cmd, dir) = tccvm_cmd();
    cmd.args(["profile", "create", "a", "--region", "ap-beijing"])
        .assert()
        .success();
    tccvm_cmd_in(&dir)
        .args(["profile", "create", "b", "--region", "ap-shanghai", "--use-now"])
        .assert()
        .success();

    tccvm_cmd_in(&dir)
        .args(["profile", "set-current", "-"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set 'a' as current profile"));

    tccvm_cmd_in(&dir)
        .args(["profile", "set-current", "missing"])
        .assert()
        .failure();
}

#[test]
fn test_profile_region_used_for_requests() {
    // The profile supplies the region; with no credential anywhere the
    // request stops at credential resolution
    let (mut cmd, dir) = tccvm_cmd();
    cmd.args([
        "profile",
        "create",
        "local",
        "--region",
        "ap-guangzhou",
        "--endpoint",
        "http://127.0.0.1:9",
    ])
    .assert()
    .success();

    tccvm_cmd_in(&dir)
        .args(["zone", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No region configured").not())
        .stderr(predicate::str::contains("Credential not found"));
}

#[test]
fn test_env_profile_reads_region() {
    let (mut cmd, _dir) = tccvm_cmd();
    let output = cmd
        .args(["profile", "get", "env", "--json"])
        .env("TENCENTCLOUD_REGION", "ap-singapore")
        .output()
        .unwrap();
    assert!(output.status.success());
    let profile: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(profile["name"], "env");
    assert_eq!(profile["region"], "ap-singapore");
}
