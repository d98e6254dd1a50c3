// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance delete command

use anyhow::Result;
use clap::Args;
use cvm_client::{CvmClient, TerminateInstancesRequest};

use super::get::resolve_instances;
use crate::commands::confirm;

#[derive(Args, Clone)]
pub struct DeleteArgs {
    /// Instance ID(s) or name(s)
    #[arg(required = true)]
    pub instances: Vec<String>,

    /// Also release elastic IPs bound to the instances
    #[arg(long)]
    pub release_address: bool,

    /// Skip confirmation
    #[arg(long, short)]
    pub force: bool,
}

pub async fn run(args: DeleteArgs, client: &CvmClient) -> Result<()> {
    let instance_ids = resolve_instances(&args.instances, client).await?;

    let prompt = format!("Terminate {}?", instance_ids.join(", "));
    if !confirm(prompt, args.force)? {
        return Ok(());
    }

    let response = client
        .terminate_instances(&TerminateInstancesRequest {
            instance_ids: instance_ids.clone(),
            release_address: args.release_address.then_some(true),
            ..Default::default()
        })
        .await?;

    tracing::debug!(request_id = %response.request_id, "terminate accepted");
    println!("Terminating {}", instance_ids.join(", "));
    Ok(())
}
