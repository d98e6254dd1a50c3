// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management types

use std::io::Write;
use std::path::Path;

use cvm_client::{ClientProfile, Credential, Language};
use serde::{Deserialize, Serialize};

/// A connection profile
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Profile name
    pub name: String,

    /// Region, e.g. ap-guangzhou
    pub region: String,

    /// Endpoint override, `host[:port]` or `scheme://host[:port]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Response language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    #[serde(default)]
    pub network_failure_max_retries: u32,

    #[serde(default)]
    pub rate_limit_exceeded_max_retries: u32,

    /// When unset, credentials come from the environment or
    /// ~/.tencentcloud/credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("language", &self.language)
            .field("network_failure_max_retries", &self.network_failure_max_retries)
            .field(
                "rate_limit_exceeded_max_retries",
                &self.rate_limit_exceeded_max_retries,
            )
            .field("secret_id", &self.secret_id)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Profile {
    /// Create a new profile
    pub fn new(name: String, region: String) -> Self {
        Self {
            name,
            region,
            endpoint: None,
            language: None,
            network_failure_max_retries: 0,
            rate_limit_exceeded_max_retries: 0,
            secret_id: None,
            secret_key: None,
        }
    }

    /// Load a profile from a file
    pub fn load(name: &str) -> anyhow::Result<Self> {
        validate_name(name)?;
        let path = super::paths::profile_path(name);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read profile '{}': {}", name, e))?;
        let profile: Profile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile '{}': {}", name, e))?;
        Ok(profile)
    }

    /// Save the profile to a file
    pub fn save(&self) -> anyhow::Result<()> {
        validate_name(&self.name)?;
        super::paths::ensure_config_dirs()?;
        let path = super::paths::profile_path(&self.name);
        let content = serde_json::to_string_pretty(self)?;
        write_private(&path, &content)?;
        Ok(())
    }

    /// Delete the profile file
    pub fn delete(name: &str) -> anyhow::Result<()> {
        validate_name(name)?;
        let path = super::paths::profile_path(name);
        std::fs::remove_file(&path)
            .map_err(|e| anyhow::anyhow!("Failed to delete profile '{}': {}", name, e))?;
        Ok(())
    }

    /// List all available profiles
    pub fn list_all() -> anyhow::Result<Vec<String>> {
        let profiles_dir = super::paths::profiles_dir();
        if !profiles_dir.exists() {
            return Ok(vec![]);
        }

        let mut profiles = vec![];
        for entry in std::fs::read_dir(&profiles_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                profiles.push(stem.to_string_lossy().to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }

    /// Credential stored in the profile, when both halves are present
    pub fn credential(&self) -> Option<Credential> {
        match (&self.secret_id, &self.secret_key) {
            (Some(id), Some(key)) if !id.is_empty() && !key.is_empty() => {
                Some(Credential::new(id.clone(), key.clone()))
            }
            _ => None,
        }
    }

    /// Transport settings derived from this profile
    pub fn client_profile(&self) -> ClientProfile {
        let mut profile = ClientProfile {
            language: self.language,
            network_failure_max_retries: self.network_failure_max_retries,
            rate_limit_exceeded_max_retries: self.rate_limit_exceeded_max_retries,
            ..Default::default()
        };
        if let Some(endpoint) = &self.endpoint {
            apply_endpoint(&mut profile, endpoint);
        }
        profile
    }
}

/// Point the transport at an explicit endpoint
///
/// A `scheme://` prefix selects the scheme, otherwise https is kept.
pub fn apply_endpoint(profile: &mut ClientProfile, endpoint: &str) {
    let host = match endpoint.split_once("://") {
        Some((scheme, rest)) => {
            profile.http_profile.scheme = scheme.to_string();
            rest
        }
        None => endpoint,
    };
    profile.http_profile.endpoint = Some(host.trim_end_matches('/').to_string());
}

/// Write a file readable only by its owner, since it may hold a SecretKey
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;

    // mode() only applies when the file is created
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(content.as_bytes())
}

fn validate_name(name: &str) -> anyhow::Result<()> {
    if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
        anyhow::bail!("Invalid profile name '{}'", name);
    }
    Ok(())
}

/// Main configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Current active profile name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Previous profile (for `tccvm profile set-current -`)
    #[serde(rename = "oldProfile", skip_serializing_if = "Option::is_none")]
    pub old_profile: Option<String>,
}

impl Config {
    /// Load the main config file
    pub fn load() -> anyhow::Result<Self> {
        let path = super::paths::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the main config file
    pub fn save(&self) -> anyhow::Result<()> {
        super::paths::ensure_config_dirs()?;
        let path = super::paths::config_file();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    pub fn current_profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn set_current_profile(&mut self, name: &str) {
        self.old_profile = self.profile.take();
        self.profile = Some(name.to_string());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_json_shape() {
        let json = r#"{
            "name": "gz",
            "region": "ap-guangzhou",
            "language": "en-US",
            "networkFailureMaxRetries": 2,
            "secretId": "AKIDabc",
            "secretKey": "xyz"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.region, "ap-guangzhou");
        assert_eq!(profile.language, Some(Language::EnUs));
        assert_eq!(profile.network_failure_max_retries, 2);
        assert_eq!(profile.rate_limit_exceeded_max_retries, 0);
        assert_eq!(profile.credential().unwrap().secret_id(), "AKIDabc");
    }

    #[test]
    fn test_credential_needs_both_halves() {
        let mut profile = Profile::new("p".into(), "ap-beijing".into());
        profile.secret_id = Some("AKIDabc".into());
        assert!(profile.credential().is_none());
        profile.secret_key = Some(String::new());
        assert!(profile.credential().is_none());
    }

    #[test]
    fn test_endpoint_with_scheme() {
        let mut profile = Profile::new("local".into(), "ap-beijing".into());
        profile.endpoint = Some("http://127.0.0.1:8080/".into());
        let client_profile = profile.client_profile();
        assert_eq!(client_profile.http_profile.scheme, "http");
        assert_eq!(
            client_profile.http_profile.endpoint.as_deref(),
            Some("127.0.0.1:8080")
        );
    }

    #[test]
    fn test_endpoint_without_scheme_keeps_https() {
        let mut client_profile = ClientProfile::default();
        apply_endpoint(&mut client_profile, "cvm.internal.tencentcloudapi.com");
        assert_eq!(client_profile.http_profile.scheme, "https");
        assert_eq!(
            client_profile.http_profile.endpoint.as_deref(),
            Some("cvm.internal.tencentcloudapi.com")
        );
    }

    #[test]
    fn test_debug_hides_secret_key() {
        let mut profile = Profile::new("gz".into(), "ap-guangzhou".into());
        profile.secret_id = Some("AKIDabc".into());
        profile.secret_key = Some("very-secret".into());
        let debug = format!("{:?}", profile);
        assert!(debug.contains("AKIDabc"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("very-secret"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        assert!(validate_name("../etc").is_err());
        assert!(validate_name("").is_err());
        assert!(validate_name("prod").is_ok());
    }

    #[test]
    fn test_set_current_profile_keeps_previous() {
        let mut config = Config::default();
        config.set_current_profile("a");
        config.set_current_profile("b");
        assert_eq!(config.current_profile(), Some("b"));
        assert_eq!(config.old_profile.as_deref(), Some("a"));
    }
}
