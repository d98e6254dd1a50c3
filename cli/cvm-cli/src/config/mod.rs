// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use profile::{Config, Profile, apply_endpoint};

use anyhow::Result;

/// Name of the profile synthesised from environment variables
pub const ENV_PROFILE: &str = "env";

/// Build an "env" profile from environment variables
///
/// Credentials are left to the default provider chain, which reads
/// TENCENTCLOUD_SECRET_ID and TENCENTCLOUD_SECRET_KEY itself.
pub fn env_profile() -> Result<Profile> {
    let region = std::env::var("TENCENTCLOUD_REGION")
        .map_err(|_| anyhow::anyhow!("TENCENTCLOUD_REGION must be set"))?;

    let mut profile = Profile::new(ENV_PROFILE.to_string(), region);
    profile.endpoint = std::env::var("TCCVM_ENDPOINT").ok();
    Ok(profile)
}

/// Resolve which profile to use, if any
///
/// Priority:
/// 1. --profile argument (or TCCVM_PROFILE, which clap folds into it)
/// 2. Current profile from config.json
///
/// Returns `None` when nothing is configured, so callers can run on
/// flags and environment alone.
pub fn resolve_profile(cli_profile: Option<&str>) -> Result<Option<Profile>> {
    if let Some(name) = cli_profile {
        if name == ENV_PROFILE {
            return env_profile().map(Some);
        }
        return Profile::load(name).map(Some);
    }

    let config = Config::load()?;
    match config.current_profile() {
        Some(ENV_PROFILE) => env_profile().map(Some),
        Some(name) => Profile::load(name).map(Some),
        None => Ok(None),
    }
}
