// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Credential providers
//!
//! Credentials can come from three places:
//!
//! - A static [`Credential`] handed to the client directly
//! - Environment variables ([`EnvProvider`])
//! - The shared INI credentials file ([`ProfileProvider`])
//!
//! [`DefaultProviderChain`] tries the environment first and falls back to
//! the credentials file.

use std::path::PathBuf;

use async_trait::async_trait;
use config::{Config, File, FileFormat};

use crate::credential::Credential;
use crate::error::AuthError;

pub const ENV_SECRET_ID: &str = "TENCENTCLOUD_SECRET_ID";
pub const ENV_SECRET_KEY: &str = "TENCENTCLOUD_SECRET_KEY";
pub const ENV_SESSION_TOKEN: &str = "TENCENTCLOUD_SESSION_TOKEN";
pub const ENV_CREDENTIALS_FILE: &str = "TENCENTCLOUD_CREDENTIALS_FILE";
pub const ENV_PROFILE: &str = "TENCENTCLOUD_PROFILE";
pub const DEFAULT_PROFILE: &str = "default";

/// Something that can hand out a [`Credential`] for signing
#[async_trait]
pub trait ProvideCredential: Send + Sync + std::fmt::Debug {
    async fn provide_credential(&self) -> Result<Credential, AuthError>;
}

#[async_trait]
impl ProvideCredential for Credential {
    async fn provide_credential(&self) -> Result<Credential, AuthError> {
        self.validate()?;
        Ok(self.clone())
    }
}

/// Reads the credential from environment variables
#[derive(Debug, Clone)]
pub struct EnvProvider {
    secret_id_var: String,
    secret_key_var: String,
    token_var: String,
}

impl Default for EnvProvider {
    fn default() -> Self {
        Self::with_names(ENV_SECRET_ID, ENV_SECRET_KEY, ENV_SESSION_TOKEN)
    }
}

impl EnvProvider {
    /// Use non-standard variable names
    pub fn with_names(
        secret_id_var: impl Into<String>,
        secret_key_var: impl Into<String>,
        token_var: impl Into<String>,
    ) -> Self {
        Self {
            secret_id_var: secret_id_var.into(),
            secret_key_var: secret_key_var.into(),
            token_var: token_var.into(),
        }
    }

    fn non_empty(var: &str) -> Option<String> {
        std::env::var(var).ok().filter(|v| !v.trim().is_empty())
    }
}

#[async_trait]
impl ProvideCredential for EnvProvider {
    async fn provide_credential(&self) -> Result<Credential, AuthError> {
        let secret_id = Self::non_empty(&self.secret_id_var).ok_or_else(|| {
            AuthError::CredentialNotFound(format!("{} is not set", self.secret_id_var))
        })?;
        let secret_key = Self::non_empty(&self.secret_key_var).ok_or_else(|| {
            AuthError::CredentialNotFound(format!("{} is not set", self.secret_key_var))
        })?;

        let mut credential = Credential::new(secret_id, secret_key);
        if let Some(token) = Self::non_empty(&self.token_var) {
            credential = credential.with_token(token);
        }
        tracing::debug!(source = "env", "loaded credential");
        Ok(credential)
    }
}

/// Reads the credential from an INI credentials file
///
/// ```text
/// [default]
/// secret_id = AKID...
/// secret_key = ...
/// token = ...        # optional
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileProvider {
    path: Option<PathBuf>,
    profile: Option<String>,
}

impl ProfileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from an explicit file instead of the default location
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Read an explicit section instead of `default`
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Resolve the credentials file path
    ///
    /// Priority:
    /// 1. Explicit path
    /// 2. TENCENTCLOUD_CREDENTIALS_FILE environment variable
    /// 3. ~/.tencentcloud/credentials
    pub fn resolve_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.path {
            return Some(path.clone());
        }
        if let Ok(path) = std::env::var(ENV_CREDENTIALS_FILE)
            && !path.is_empty()
        {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(".tencentcloud").join("credentials"))
    }

    fn resolve_profile(&self) -> String {
        self.profile
            .clone()
            .or_else(|| std::env::var(ENV_PROFILE).ok().filter(|p| !p.is_empty()))
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
    }

    /// Parse credentials file contents for the given section
    pub fn parse(contents: &str, profile: &str) -> Result<Credential, AuthError> {
        let config = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Ini))
            .build()
            .map_err(|e| AuthError::ConfigError(e.to_string()))?;

        let lookup = |key: &str| -> Option<String> {
            config
                .get_string(&format!("{profile}.{key}"))
                .or_else(|_| config.get_string(&format!("{}.{key}", profile.to_lowercase())))
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let secret_id = lookup("secret_id").ok_or_else(|| {
            AuthError::CredentialNotFound(format!("profile '{profile}' has no secret_id"))
        })?;
        let secret_key = lookup("secret_key").ok_or_else(|| {
            AuthError::CredentialNotFound(format!("profile '{profile}' has no secret_key"))
        })?;

        let mut credential = Credential::new(secret_id, secret_key);
        if let Some(token) = lookup("token") {
            credential = credential.with_token(token);
        }
        Ok(credential)
    }
}

#[async_trait]
impl ProvideCredential for ProfileProvider {
    async fn provide_credential(&self) -> Result<Credential, AuthError> {
        let path = self.resolve_path().ok_or_else(|| {
            AuthError::CredentialNotFound("cannot determine home directory".to_string())
        })?;
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AuthError::CredentialNotFound(format!(
                    "{} does not exist",
                    path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        let profile = self.resolve_profile();
        let credential = Self::parse(&contents, &profile)?;
        tracing::debug!(source = "profile", path = %path.display(), %profile, "loaded credential");
        Ok(credential)
    }
}

/// Tries each provider in order and returns the first credential found
#[derive(Debug)]
pub struct DefaultProviderChain {
    providers: Vec<Box<dyn ProvideCredential>>,
}

impl Default for DefaultProviderChain {
    fn default() -> Self {
        Self {
            providers: vec![
                Box::new(EnvProvider::default()),
                Box::new(ProfileProvider::default()),
            ],
        }
    }
}

impl DefaultProviderChain {
    /// Build a chain from an explicit provider list
    pub fn new(providers: Vec<Box<dyn ProvideCredential>>) -> Self {
        Self { providers }
    }
}

#[async_trait]
impl ProvideCredential for DefaultProviderChain {
    async fn provide_credential(&self) -> Result<Credential, AuthError> {
        let mut reasons = Vec::new();
        for provider in &self.providers {
            match provider.provide_credential().await {
                Ok(credential) => return Ok(credential),
                Err(e) => reasons.push(e.to_string()),
            }
        }
        Err(AuthError::CredentialNotFound(format!(
            "no provider returned a credential ({})",
            reasons.join("; ")
        )))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_profile() {
        let ini = "[default]\nsecret_id = AKIDabc\nsecret_key = xyz\n";
        let cred = ProfileProvider::parse(ini, "default").unwrap();
        assert_eq!(cred.secret_id(), "AKIDabc");
        assert_eq!(cred.secret_key(), "xyz");
        assert!(cred.token().is_none());
    }

    #[test]
    fn test_parse_named_profile_with_token() {
        let ini = "[default]\nsecret_id = a\nsecret_key = b\n\n\
                   [prod]\nsecret_id = p_id\nsecret_key = p_key\ntoken = p_tok\n";
        let cred = ProfileProvider::parse(ini, "prod").unwrap();
        assert_eq!(cred.secret_id(), "p_id");
        assert_eq!(cred.token(), Some("p_tok"));
    }

    #[test]
    fn test_parse_missing_key() {
        let ini = "[default]\nsecret_id = only_id\n";
        let err = ProfileProvider::parse(ini, "default").unwrap_err();
        assert!(matches!(err, AuthError::CredentialNotFound(_)));
    }

    #[test]
    fn test_parse_missing_profile() {
        let ini = "[default]\nsecret_id = a\nsecret_key = b\n";
        assert!(ProfileProvider::parse(ini, "staging").is_err());
    }

    #[tokio::test]
    async fn test_static_credential_rejects_empty() {
        let result = Credential::new("", "").provide_credential().await;
        assert!(matches!(result, Err(AuthError::InvalidCredential(_))));
    }
}
