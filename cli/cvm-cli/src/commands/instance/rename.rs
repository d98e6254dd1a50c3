// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance rename command

use anyhow::Result;
use clap::Args;
use cvm_client::{CvmClient, ModifyInstancesAttributeRequest};

#[derive(Args, Clone)]
pub struct RenameArgs {
    /// Instance ID or name
    pub instance: String,

    /// New name (at most 128 characters)
    pub name: String,
}

pub async fn run(args: RenameArgs, client: &CvmClient) -> Result<()> {
    if args.name.is_empty() || args.name.chars().count() > 128 {
        anyhow::bail!("Instance names must be 1 to 128 characters");
    }

    let instance_id = super::get::resolve_instance(&args.instance, client).await?;
    client
        .modify_instances_attribute(&ModifyInstancesAttributeRequest {
            instance_ids: vec![instance_id.clone()],
            instance_name: Some(args.name.clone()),
            ..Default::default()
        })
        .await?;

    println!("Renamed {} to '{}'", instance_id, args.name);
    Ok(())
}
