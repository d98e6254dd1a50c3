// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Placement group commands
//!
//! The API calls these disaster recovery groups: instances in one group are
//! spread across hosts, switches or racks.

use anyhow::Result;
use clap::{Args, Subcommand};
use cvm_client::{
    CreateDisasterRecoverGroupRequest, CvmClient, DeleteDisasterRecoverGroupsRequest,
    DescribeDisasterRecoverGroupsRequest, DisasterRecoverGroupType,
};

use super::confirm;
use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum PlacementGroupCommand {
    /// List placement groups
    #[command(alias = "ls")]
    List,
    /// Create a placement group
    Create(CreateArgs),
    /// Delete placement group(s)
    #[command(alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Clone)]
pub struct CreateArgs {
    /// Group name
    pub name: String,
    /// Spread level: HOST, SW or RACK
    #[arg(long = "type", default_value = "HOST")]
    pub group_type: DisasterRecoverGroupType,
}

#[derive(Args, Clone)]
pub struct DeleteArgs {
    /// Group ID(s)
    #[arg(required = true)]
    pub groups: Vec<String>,
    /// Skip confirmation
    #[arg(long, short)]
    pub force: bool,
}

impl PlacementGroupCommand {
    pub async fn run(self, client: &CvmClient, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_groups(client, use_json).await,
            Self::Create(args) => create_group(args, client, use_json).await,
            Self::Delete(args) => delete_groups(args, client).await,
        }
    }
}

async fn list_groups(client: &CvmClient, use_json: bool) -> Result<()> {
    let groups = client
        .describe_disaster_recover_groups(&DescribeDisasterRecoverGroupsRequest {
            limit: Some(100),
            ..Default::default()
        })
        .await?
        .disaster_recover_group_set;

    if use_json {
        return json::print_json(&groups);
    }
    table::print_rows(
        &["ID", "NAME", "TYPE", "INSTANCES", "CREATED"],
        groups.into_iter().map(|g| {
            vec![
                g.disaster_recover_group_id,
                g.name,
                g.group_type.to_string(),
                format!("{}/{}", g.current_num, g.cvm_quota_total),
                g.create_time,
            ]
        }),
    );
    Ok(())
}

async fn create_group(args: CreateArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let response = client
        .create_disaster_recover_group(&CreateDisasterRecoverGroupRequest {
            name: args.name,
            group_type: args.group_type,
            ..Default::default()
        })
        .await?;

    if use_json {
        return json::print_json(&response);
    }
    println!(
        "Created placement group {} ({}, up to {} instances)",
        response.disaster_recover_group_id, response.group_type, response.cvm_quota_total
    );
    Ok(())
}

async fn delete_groups(args: DeleteArgs, client: &CvmClient) -> Result<()> {
    if !confirm(format!("Delete {}?", args.groups.join(", ")), args.force)? {
        return Ok(());
    }

    client
        .delete_disaster_recover_groups(&DeleteDisasterRecoverGroupsRequest {
            disaster_recover_group_ids: args.groups.clone(),
        })
        .await?;
    println!("Deleted {}", args.groups.join(", "));
    Ok(())
}
