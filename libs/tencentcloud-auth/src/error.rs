// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for tencentcloud-auth

use thiserror::Error;

/// Errors that can occur while resolving credentials or signing requests
#[derive(Error, Debug)]
pub enum AuthError {
    /// No provider was able to produce a credential
    #[error("Credential not found: {0}")]
    CredentialNotFound(String),

    /// A credential was found but is unusable (empty id or key)
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// Error during signature computation
    #[error("Signing error: {0}")]
    SigningError(String),

    /// Malformed credentials file or profile
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
