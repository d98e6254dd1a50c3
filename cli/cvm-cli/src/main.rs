// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! tccvm - command-line interface for Tencent Cloud CVM

use anyhow::Result;
use clap::{Parser, Subcommand};
use cvm_client::{CvmClient, DefaultProviderChain};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

use commands::{
    ImageCommand, InstanceCommand, KeyCommand, LaunchTemplateCommand, PlacementGroupCommand,
    ProfileCommand, RegionCommand, ReservedCommand, ZoneCommand,
};
use config::{Profile, apply_endpoint};

#[derive(Parser)]
#[command(
    name = "tccvm",
    version,
    about = "Tencent Cloud CVM management CLI",
    long_about = "Command-line interface for Tencent Cloud Virtual Machines (CVM API 2017-03-12)"
)]
struct Cli {
    /// Profile to use
    #[arg(short, long, global = true, env = "TCCVM_PROFILE")]
    profile: Option<String>,

    /// Region override, e.g. ap-guangzhou
    #[arg(short, long, global = true, env = "TENCENTCLOUD_REGION")]
    region: Option<String>,

    /// Endpoint override, host[:port] or scheme://host[:port]
    #[arg(long, global = true, env = "TCCVM_ENDPOINT")]
    endpoint: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage connection profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// List regions
    Region {
        #[command(subcommand)]
        command: RegionCommand,
    },

    /// List availability zones
    Zone {
        #[command(subcommand)]
        command: ZoneCommand,
    },

    /// Manage instances
    #[command(alias = "inst")]
    Instance {
        #[command(subcommand)]
        command: InstanceCommand,
    },

    /// List instances (shortcut for 'instance list')
    #[command(alias = "instances")]
    Insts(commands::instance::ListArgs),

    /// Manage images
    #[command(alias = "img")]
    Image {
        #[command(subcommand)]
        command: ImageCommand,
    },

    /// Manage SSH key pairs
    Key {
        #[command(subcommand)]
        command: KeyCommand,
    },

    /// Manage placement (disaster recovery) groups
    #[command(alias = "pg")]
    PlacementGroup {
        #[command(subcommand)]
        command: PlacementGroupCommand,
    },

    /// Inspect launch templates
    #[command(alias = "lt")]
    LaunchTemplate {
        #[command(subcommand)]
        command: LaunchTemplateCommand,
    },

    /// Inspect reserved instances
    Reserved {
        #[command(subcommand)]
        command: ReservedCommand,
    },

    /// Call any API action with a raw JSON body
    Call(commands::call::CallArgs),
}

impl Cli {
    /// Build a CvmClient from CLI options, environment and profile
    fn build_client(&self) -> Result<CvmClient> {
        let profile = config::resolve_profile(self.profile.as_deref())?;

        let region = self
            .region
            .clone()
            .or_else(|| profile.as_ref().map(|p| p.region.clone()))
            .filter(|r| !r.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No region configured. Pass --region, set TENCENTCLOUD_REGION, or use 'tccvm profile create'"
                )
            })?;

        let mut client_profile = profile
            .as_ref()
            .map(Profile::client_profile)
            .unwrap_or_default();
        if let Some(endpoint) = &self.endpoint {
            apply_endpoint(&mut client_profile, endpoint);
        }

        let client = CvmClient::new(region)?;
        let client = match profile.as_ref().and_then(Profile::credential) {
            Some(credential) => client.with_credential(credential),
            None => client.with_credential(DefaultProviderChain::default()),
        };
        Ok(client.with_profile(client_profile)?)
    }
}

/// Log filter for `--verbose` when RUST_LOG is unset
const VERBOSE_FILTER: &str = "tccvm=debug,cvm_client=debug,tencentcloud_common=debug,\
                              tencentcloud_auth=debug,tencentcloud_pagination=debug";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(VERBOSE_FILTER));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Profile { command } => command.clone().run(cli.json),
        Commands::Region { command } => command.clone().run(&cli.build_client()?, cli.json).await,
        Commands::Zone { command } => command.clone().run(&cli.build_client()?, cli.json).await,
        Commands::Instance { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Insts(args) => {
            let client = cli.build_client()?;
            commands::instance::list::run(args.clone(), &client, cli.json).await
        }
        Commands::Image { command } => command.clone().run(&cli.build_client()?, cli.json).await,
        Commands::Key { command } => command.clone().run(&cli.build_client()?, cli.json).await,
        Commands::PlacementGroup { command } => {
            command.clone().run(&cli.build_client()?, cli.json).await
        }
        Commands::LaunchTemplate { command } => {
            command.clone().run(&cli.build_client()?, cli.json).await
        }
        Commands::Reserved { command } => {
            command.clone().run(&cli.build_client()?, cli.json).await
        }
        Commands::Call(args) => commands::call::run(args.clone(), &cli.build_client()?).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_covers_every_crate() {
        for target in [
            "tccvm",
            "cvm_client",
            "tencentcloud_common",
            "tencentcloud_auth",
            "tencentcloud_pagination",
        ] {
            assert!(
                VERBOSE_FILTER.split(',').any(|d| d == format!("{target}=debug")),
                "missing {target}"
            );
        }
        assert!(EnvFilter::try_new(VERBOSE_FILTER).is_ok());
    }
}
