// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management commands

use anyhow::Result;
use clap::Subcommand;
use cvm_client::Language;
use dialoguer::Input;
use serde_json::json;

use crate::config::{Config, ENV_PROFILE, Profile, env_profile};
use crate::output::{NONE, json, or_dash, table};

#[derive(Subcommand, Clone)]
pub enum ProfileCommand {
    /// List all profiles
    #[command(alias = "ls")]
    List,

    /// Get profile details
    Get {
        /// Profile name (defaults to current)
        name: Option<String>,
    },

    /// Create a new profile
    Create {
        /// Profile name
        name: Option<String>,
        /// Region, e.g. ap-guangzhou
        #[arg(long)]
        region: Option<String>,
        /// Endpoint override
        #[arg(long)]
        endpoint: Option<String>,
        /// Response language (zh-CN or en-US)
        #[arg(long, value_parser = ["zh-CN", "en-US"])]
        language: Option<String>,
        /// SecretId to store in the profile
        #[arg(long, requires = "secret_key")]
        secret_id: Option<String>,
        /// SecretKey to store in the profile
        #[arg(long, requires = "secret_id")]
        secret_key: Option<String>,
        /// Retries after network failures
        #[arg(long, default_value_t = 0)]
        network_retries: u32,
        /// Retries after RequestLimitExceeded errors
        #[arg(long, default_value_t = 0)]
        rate_limit_retries: u32,
        /// Make this the current profile
        #[arg(long)]
        use_now: bool,
    },

    /// Delete profile(s)
    #[command(alias = "rm")]
    Delete {
        /// Profile name(s)
        #[arg(required = true)]
        names: Vec<String>,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Set the current profile
    SetCurrent {
        /// Profile name (use '-' for previous)
        name: String,
    },
}

impl ProfileCommand {
    pub fn run(self, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_profiles(use_json),
            Self::Get { name } => get_profile(name, use_json),
            Self::Create {
                name,
                region,
                endpoint,
                language,
                secret_id,
                secret_key,
                network_retries,
                rate_limit_retries,
                use_now,
            } => {
                let profile = Profile {
                    name: prompt_if_missing(name, "Profile name", None)?,
                    region: prompt_if_missing(region, "Region", Some("ap-guangzhou"))?,
                    endpoint,
                    language: language.as_deref().map(parse_language),
                    network_failure_max_retries: network_retries,
                    rate_limit_exceeded_max_retries: rate_limit_retries,
                    secret_id,
                    secret_key,
                };
                create_profile(profile, use_now)
            }
            Self::Delete { names, force } => delete_profiles(&names, force),
            Self::SetCurrent { name } => set_current_profile(&name),
        }
    }
}

fn parse_language(value: &str) -> Language {
    match value {
        "zh-CN" => Language::ZhCn,
        _ => Language::EnUs,
    }
}

fn prompt_if_missing(value: Option<String>, prompt: &str, default: Option<&str>) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

fn list_profiles(use_json: bool) -> Result<()> {
    let current = Config::load()?.profile;

    let mut profiles = Vec::new();
    if let Ok(profile) = env_profile() {
        profiles.push(profile);
    }
    for name in Profile::list_all()? {
        match Profile::load(&name) {
            Ok(profile) => profiles.push(profile),
            Err(e) => tracing::warn!(profile = %name, error = %e, "skipping unreadable profile"),
        }
    }

    if use_json {
        let rows: Vec<_> = profiles
            .iter()
            .map(|p| {
                json!({
                    "name": p.name,
                    "current": current.as_deref() == Some(p.name.as_str()),
                    "region": p.region,
                    "endpoint": p.endpoint,
                })
            })
            .collect();
        return json::print_json(&rows);
    }

    table::print_rows(
        &["NAME", "CURR", "REGION", "ENDPOINT", "CREDENTIAL"],
        profiles.iter().map(|p| {
            let marker = if current.as_deref() == Some(p.name.as_str()) {
                "*"
            } else {
                ""
            };
            vec![
                p.name.clone(),
                marker.to_string(),
                p.region.clone(),
                or_dash(p.endpoint.as_deref()),
                credential_source(p).to_string(),
            ]
        }),
    );
    Ok(())
}

fn credential_source(profile: &Profile) -> &'static str {
    if profile.credential().is_some() {
        "profile"
    } else {
        "default chain"
    }
}

fn get_profile(name: Option<String>, use_json: bool) -> Result<()> {
    let profile = match name.as_deref() {
        Some(ENV_PROFILE) => env_profile()?,
        Some(n) => Profile::load(n)?,
        None => {
            let config = Config::load()?;
            let current = config
                .current_profile()
                .ok_or_else(|| anyhow::anyhow!("No current profile set"))?;
            Profile::load(current)?
        }
    };

    let masked = profile.secret_key.as_ref().map(|_| "********".to_string());
    if use_json {
        let mut value = serde_json::to_value(&profile)?;
        if let Some(masked) = masked {
            value["secretKey"] = json!(masked);
        }
        return json::print_json(&value);
    }

    table::print_fields(&[
        ("Name", profile.name.clone()),
        ("Region", profile.region.clone()),
        ("Endpoint", or_dash(profile.endpoint.as_deref())),
        (
            "Language",
            profile
                .language
                .map(|l| l.as_str().to_string())
                .unwrap_or_else(|| NONE.to_string()),
        ),
        ("Network retries", profile.network_failure_max_retries.to_string()),
        (
            "Rate limit retries",
            profile.rate_limit_exceeded_max_retries.to_string(),
        ),
        ("SecretId", or_dash(profile.secret_id.as_deref())),
        ("SecretKey", or_dash(masked.as_deref())),
    ]);
    Ok(())
}

fn create_profile(profile: Profile, use_now: bool) -> Result<()> {
    if profile.name == ENV_PROFILE {
        anyhow::bail!("'{}' is reserved for the environment profile", ENV_PROFILE);
    }
    if Profile::list_all()?.contains(&profile.name) {
        anyhow::bail!("Profile '{}' already exists", profile.name);
    }

    profile.save()?;
    println!("Saved profile '{}'", profile.name);

    let mut config = Config::load()?;
    if use_now || config.current_profile().is_none() {
        config.set_current_profile(&profile.name);
        config.save()?;
        println!("Set '{}' as current profile", profile.name);
    }
    Ok(())
}

fn delete_profiles(names: &[String], force: bool) -> Result<()> {
    let mut config = Config::load()?;

    for name in names {
        if !super::confirm(format!("Delete profile '{}'?", name), force)? {
            continue;
        }
        Profile::delete(name)?;
        println!("Deleted profile '{}'", name);

        if config.current_profile() == Some(name.as_str()) {
            config.profile = None;
            config.save()?;
        }
    }
    Ok(())
}

fn set_current_profile(name: &str) -> Result<()> {
    let mut config = Config::load()?;

    let target = if name == "-" {
        config
            .old_profile
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No previous profile to switch to"))?
    } else {
        name.to_string()
    };

    if target != ENV_PROFILE {
        Profile::load(&target)?;
    }

    config.set_current_profile(&target);
    config.save()?;
    println!("Set '{}' as current profile", target);
    Ok(())
}
