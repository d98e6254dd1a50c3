// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration path resolution

use std::path::PathBuf;

/// Get the tccvm configuration directory
///
/// Priority:
/// 1. TCCVM_CONFIG_DIR environment variable
/// 2. ~/.tccvm/
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TCCVM_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tccvm")
}

/// Get the profiles directory
pub fn profiles_dir() -> PathBuf {
    config_dir().join("profiles.d")
}

/// Get the path to the main config file
pub fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// Get the path to a specific profile
pub fn profile_path(name: &str) -> PathBuf {
    profiles_dir().join(format!("{}.json", name))
}

/// Ensure config directories exist
pub fn ensure_config_dirs() -> std::io::Result<()> {
    std::fs::create_dir_all(profiles_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_profile_path() {
        let path = profile_path("default");
        assert!(path.ends_with("profiles.d/default.json"));
    }

    #[test]
    #[serial]
    fn test_config_dir_env_override() {
        // SAFETY: serialised with every other test touching TCCVM_CONFIG_DIR
        unsafe { std::env::set_var("TCCVM_CONFIG_DIR", "/tmp/tccvm-test") };
        assert_eq!(config_file(), PathBuf::from("/tmp/tccvm-test/config.json"));
        unsafe { std::env::remove_var("TCCVM_CONFIG_DIR") };
    }
}
