// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance lifecycle commands (start, stop, reboot)

use anyhow::Result;
use clap::Args;
use cvm_client::{
    CvmClient, InstanceState, RebootInstancesRequest, StartInstancesRequest,
    StopInstancesRequest,
};

use super::get::resolve_instances;
use super::wait::{WaitFlags, wait_and_report};

#[derive(Args, Clone)]
pub struct StartArgs {
    /// Instance ID(s) or name(s)
    #[arg(required = true)]
    pub instances: Vec<String>,

    #[command(flatten)]
    pub wait: WaitFlags,
}

#[derive(Args, Clone)]
pub struct StopArgs {
    /// Instance ID(s) or name(s)
    #[arg(required = true)]
    pub instances: Vec<String>,

    /// SOFT, HARD or SOFT_FIRST
    #[arg(long, value_parser = ["SOFT", "HARD", "SOFT_FIRST"])]
    pub stop_type: Option<String>,

    /// Stop billing while stopped (pay-as-you-go instances)
    #[arg(long)]
    pub stop_charging: bool,

    #[command(flatten)]
    pub wait: WaitFlags,
}

#[derive(Args, Clone)]
pub struct RebootArgs {
    /// Instance ID(s) or name(s)
    #[arg(required = true)]
    pub instances: Vec<String>,

    /// SOFT, HARD or SOFT_FIRST
    #[arg(long, value_parser = ["SOFT", "HARD", "SOFT_FIRST"])]
    pub stop_type: Option<String>,

    #[command(flatten)]
    pub wait: WaitFlags,
}

pub async fn start(args: StartArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let instance_ids = resolve_instances(&args.instances, client).await?;

    client
        .start_instances(&StartInstancesRequest {
            instance_ids: instance_ids.clone(),
        })
        .await?;
    println!("Starting {}", instance_ids.join(", "));

    wait_and_report(client, &instance_ids, InstanceState::Running, &args.wait, use_json).await
}

pub async fn stop(args: StopArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let instance_ids = resolve_instances(&args.instances, client).await?;

    client
        .stop_instances(&StopInstancesRequest {
            instance_ids: instance_ids.clone(),
            stop_type: args.stop_type,
            stopped_mode: args.stop_charging.then(|| "STOP_CHARGING".to_string()),
            ..Default::default()
        })
        .await?;
    println!("Stopping {}", instance_ids.join(", "));

    wait_and_report(client, &instance_ids, InstanceState::Stopped, &args.wait, use_json).await
}

pub async fn reboot(args: RebootArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let instance_ids = resolve_instances(&args.instances, client).await?;

    client
        .reboot_instances(&RebootInstancesRequest {
            instance_ids: instance_ids.clone(),
            stop_type: args.stop_type,
            ..Default::default()
        })
        .await?;
    println!("Rebooting {}", instance_ids.join(", "));

    wait_and_report(client, &instance_ids, InstanceState::Running, &args.wait, use_json).await
}
