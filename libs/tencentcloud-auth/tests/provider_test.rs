// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Credential provider tests
//!
//! Environment-based tests use dedicated variable names and run serially,
//! since `set_var`/`remove_var` are process-global.

#![allow(clippy::expect_used)]

use serial_test::serial;
use std::io::Write;
use tencentcloud_auth::{
    AuthError, Credential, DefaultProviderChain, EnvProvider, ProfileProvider, ProvideCredential,
};

const ID_VAR: &str = "TCAUTH_TEST_SECRET_ID";
const KEY_VAR: &str = "TCAUTH_TEST_SECRET_KEY";
const TOKEN_VAR: &str = "TCAUTH_TEST_SESSION_TOKEN";

fn test_env_provider() -> EnvProvider {
    EnvProvider::with_names(ID_VAR, KEY_VAR, TOKEN_VAR)
}

fn clear_test_env() {
    // SAFETY: tests touching these variables are serialised with #[serial]
    unsafe {
        std::env::remove_var(ID_VAR);
        std::env::remove_var(KEY_VAR);
        std::env::remove_var(TOKEN_VAR);
    }
}

#[tokio::test]
#[serial]
async fn test_env_provider_reads_variables() {
    clear_test_env();
    // SAFETY: serialised test; cleared again below
    unsafe {
        std::env::set_var(ID_VAR, "AKIDenv");
        std::env::set_var(KEY_VAR, "envkey");
        std::env::set_var(TOKEN_VAR, "envtoken");
    }

    let cred = test_env_provider()
        .provide_credential()
        .await
        .expect("credential from env");
    clear_test_env();

    assert_eq!(cred.secret_id(), "AKIDenv");
    assert_eq!(cred.secret_key(), "envkey");
    assert_eq!(cred.token(), Some("envtoken"));
}

#[tokio::test]
#[serial]
async fn test_env_provider_missing_key() {
    clear_test_env();
    // SAFETY: serialised test; cleared again below
    unsafe {
        std::env::set_var(ID_VAR, "AKIDenv");
    }

    let result = test_env_provider().provide_credential().await;
    clear_test_env();

    match result {
        Err(AuthError::CredentialNotFound(msg)) => assert!(msg.contains(KEY_VAR)),
        other => panic!("expected CredentialNotFound, got {:?}", other),
    }
}

#[tokio::test]
#[serial]
async fn test_env_provider_treats_blank_as_missing() {
    clear_test_env();
    // SAFETY: serialised test; cleared again below
    unsafe {
        std::env::set_var(ID_VAR, "  ");
        std::env::set_var(KEY_VAR, "key");
    }

    let result = test_env_provider().provide_credential().await;
    clear_test_env();

    assert!(matches!(result, Err(AuthError::CredentialNotFound(_))));
}

#[tokio::test]
async fn test_profile_provider_reads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "[default]\nsecret_id = AKIDfile\nsecret_key = filekey\n\n[other]\nsecret_id = o\nsecret_key = k"
    )
    .expect("write credentials");

    let cred = ProfileProvider::new()
        .with_path(file.path())
        .provide_credential()
        .await
        .expect("credential from file");
    assert_eq!(cred.secret_id(), "AKIDfile");

    let other = ProfileProvider::new()
        .with_path(file.path())
        .with_profile("other")
        .provide_credential()
        .await
        .expect("credential from named profile");
    assert_eq!(other.secret_id(), "o");
}

#[tokio::test]
async fn test_profile_provider_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = ProfileProvider::new()
        .with_path(dir.path().join("does-not-exist"))
        .provide_credential()
        .await;
    assert!(matches!(result, Err(AuthError::CredentialNotFound(_))));
}

#[tokio::test]
#[serial]
async fn test_chain_falls_through_to_file() {
    clear_test_env();
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[default]\nsecret_id = AKIDchain\nsecret_key = chainkey").expect("write");

    let chain = DefaultProviderChain::new(vec![
        Box::new(test_env_provider()),
        Box::new(ProfileProvider::new().with_path(file.path())),
    ]);
    let cred = chain.provide_credential().await.expect("credential");
    assert_eq!(cred.secret_id(), "AKIDchain");
}

#[tokio::test]
#[serial]
async fn test_chain_reports_every_failure() {
    clear_test_env();
    let dir = tempfile::tempdir().expect("temp dir");
    let chain = DefaultProviderChain::new(vec![
        Box::new(test_env_provider()),
        Box::new(ProfileProvider::new().with_path(dir.path().join("missing"))),
    ]);

    match chain.provide_credential().await {
        Err(AuthError::CredentialNotFound(msg)) => {
            assert!(msg.contains(ID_VAR));
            assert!(msg.contains("does not exist"));
        }
        other => panic!("expected CredentialNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_chain_prefers_first_provider() {
    let chain = DefaultProviderChain::new(vec![
        Box::new(Credential::new("first", "k1")),
        Box::new(Credential::new("second", "k2")),
    ]);
    let cred = chain.provide_credential().await.expect("credential");
    assert_eq!(cred.secret_id(), "first");
}
