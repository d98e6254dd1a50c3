// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance wait command

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use cvm_client::{CvmClient, InstanceState, WaitOptions};

use crate::output::json;

#[derive(Args, Clone)]
pub struct WaitArgs {
    /// Instance ID(s) or name(s)
    #[arg(required = true)]
    pub instances: Vec<String>,

    /// Target state
    #[arg(long, short, default_value = "RUNNING")]
    pub state: InstanceState,

    /// Timeout in seconds
    #[arg(long, default_value = "600")]
    pub timeout: u64,

    /// Seconds between polls
    #[arg(long, default_value = "5")]
    pub interval: u64,
}

/// `--wait` and `--wait-timeout` for commands that change state
#[derive(Args, Clone)]
pub struct WaitFlags {
    /// Wait for the instances to settle
    #[arg(long, short)]
    pub wait: bool,

    /// Wait timeout in seconds
    #[arg(long, default_value = "600")]
    pub wait_timeout: u64,
}

pub async fn run(args: WaitArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let instance_ids = super::get::resolve_instances(&args.instances, client).await?;
    let options = WaitOptions {
        interval: Duration::from_secs(args.interval.max(1)),
        timeout: Duration::from_secs(args.timeout),
    };

    let instances = client
        .wait_for_instances(&instance_ids, args.state, options)
        .await?;

    if use_json {
        json::print_json(&instances)?;
    } else {
        for instance in &instances {
            println!("Instance {} is {}", instance.instance_id, instance.instance_state);
        }
    }
    Ok(())
}

/// Wait for `target` when `--wait` was given, then report
pub async fn wait_and_report(
    client: &CvmClient,
    instance_ids: &[String],
    target: InstanceState,
    flags: &WaitFlags,
    use_json: bool,
) -> Result<()> {
    if !flags.wait {
        return Ok(());
    }

    let options = WaitOptions {
        timeout: Duration::from_secs(flags.wait_timeout),
        ..Default::default()
    };
    let instances = client
        .wait_for_instances(instance_ids, target, options)
        .await?;

    if use_json {
        return json::print_json(&instances);
    }
    for instance in &instances {
        println!("Instance {} is {}", instance.instance_id, target);
    }
    Ok(())
}
