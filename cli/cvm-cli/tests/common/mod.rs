// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared helpers for CLI tests

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated)]
#![allow(dead_code)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use tempfile::TempDir;

/// A tccvm command isolated from the user's config and credentials
///
/// The returned directory must outlive the command.
pub fn tccvm_cmd() -> (Command, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let cmd = tccvm_cmd_in(&dir);
    (cmd, dir)
}

/// A tccvm command whose config lives under `dir`
pub fn tccvm_cmd_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tccvm").expect("Failed to find tccvm binary");
    cmd.env("TCCVM_CONFIG_DIR", dir.path().join("config"))
        .env("HOME", dir.path())
        .env(
            "TENCENTCLOUD_CREDENTIALS_FILE",
            dir.path().join("no-such-credentials"),
        )
        .env_remove("TCCVM_PROFILE")
        .env_remove("TCCVM_ENDPOINT")
        .env_remove("TENCENTCLOUD_REGION")
        .env_remove("TENCENTCLOUD_SECRET_ID")
        .env_remove("TENCENTCLOUD_SECRET_KEY")
        .env_remove("TENCENTCLOUD_SESSION_TOKEN")
        .env_remove("TENCENTCLOUD_PROFILE")
        .env_remove("RUST_LOG");
    cmd
}
