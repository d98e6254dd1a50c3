// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, argument validation, credential errors

mod common;

use common::tccvm_cmd;
use predicates::prelude::*;

#[test]
fn test_tccvm_version() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tccvm"));
}

#[test]
fn test_tccvm_help() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("instance"))
        .stdout(predicate::str::contains("placement-group"))
        .stdout(predicate::str::contains("call"));
}

#[test]
fn test_subcommand_help() {
    for sub in [
        "profile",
        "region",
        "zone",
        "instance",
        "image",
        "key",
        "placement-group",
        "launch-template",
        "reserved",
    ] {
        let (mut cmd, _dir) = tccvm_cmd();
        cmd.args([sub, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }
}

#[test]
fn test_instance_help_lists_actions() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.args(["instance", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("wait"))
        .stdout(predicate::str::contains("rename"));
}

#[test]
fn test_no_subcommand_fails() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_start_requires_instances() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.args(["instance", "start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_wait_state_rejected() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.args(["instance", "wait", "ins-r8hr2upy", "--state", "SLEEPING"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_stop_type_rejected() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.args(["instance", "stop", "ins-r8hr2upy", "--stop-type", "GENTLE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_invalid_placement_group_type_rejected() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.args(["placement-group", "create", "spread", "--type", "ROOM"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_reserved_years_out_of_range() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.args(["reserved", "offerings", "--years", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_region_is_reported() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.args(["zone", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No region configured"));
}

#[test]
fn test_missing_credential_is_reported() {
    // Nothing listens on port 9; the call must fail before connecting
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.args([
        "--region",
        "ap-guangzhou",
        "--endpoint",
        "http://127.0.0.1:9",
        "region",
        "list",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Credential not found"));
}

#[test]
fn test_call_rejects_non_object_body() {
    let (mut cmd, _dir) = tccvm_cmd();
    cmd.args([
        "--region",
        "ap-guangzhou",
        "call",
        "DescribeZones",
        "--body",
        "[1]",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("--body must be a JSON object"));
}
