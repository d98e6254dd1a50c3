// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! API key credentials

use secrecy::{ExposeSecret, SecretString};

use crate::error::AuthError;

/// A Tencent Cloud API key pair, optionally with a temporary session token
///
/// The secret key and token are held in [`SecretString`] so they never show
/// up in `Debug` output or logs.
#[derive(Debug)]
pub struct Credential {
    secret_id: String,
    secret_key: SecretString,
    token: Option<SecretString>,
}

impl Credential {
    /// Create a credential from a SecretId/SecretKey pair
    pub fn new(secret_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: SecretString::from(secret_key.into()),
            token: None,
        }
    }

    /// Attach a temporary session token (STS credentials)
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.is_empty() {
            None
        } else {
            Some(SecretString::from(token))
        };
        self
    }

    /// The public SecretId, used in the `Credential=` part of the signature
    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    /// Expose the SecretKey for signing
    pub fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// Expose the session token, sent as `X-TC-Token`
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret())
    }

    /// Reject credentials with an empty id or key
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.secret_id.trim().is_empty() {
            return Err(AuthError::InvalidCredential(
                "secret id is empty".to_string(),
            ));
        }
        if self.secret_key().trim().is_empty() {
            return Err(AuthError::InvalidCredential(
                "secret key is empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Clone for Credential {
    fn clone(&self) -> Self {
        Self {
            secret_id: self.secret_id.clone(),
            secret_key: SecretString::from(self.secret_key().to_owned()),
            token: self.token().map(|t| SecretString::from(t.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential::new("AKIDEXAMPLE", "supersecret").with_token("sessiontoken");
        let debug = format!("{:?}", cred);
        assert!(debug.contains("AKIDEXAMPLE"));
        assert!(!debug.contains("supersecret"));
        assert!(!debug.contains("sessiontoken"));
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let cred = Credential::new("id", "key").with_token("");
        assert!(cred.token().is_none());
    }

    #[test]
    fn test_validate() {
        assert!(Credential::new("id", "key").validate().is_ok());
        assert!(matches!(
            Credential::new("", "key").validate(),
            Err(AuthError::InvalidCredential(_))
        ));
        assert!(matches!(
            Credential::new("id", "  ").validate(),
            Err(AuthError::InvalidCredential(_))
        ));
    }

    #[test]
    fn test_clone_keeps_secrets() {
        let cred = Credential::new("id", "key").with_token("tok");
        let copy = cred.clone();
        assert_eq!(copy.secret_id(), "id");
        assert_eq!(copy.secret_key(), "key");
        assert_eq!(copy.token(), Some("tok"));
    }
}
