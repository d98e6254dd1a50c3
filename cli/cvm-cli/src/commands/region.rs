// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Region and zone listing

use anyhow::Result;
use clap::Subcommand;
use cvm_client::{CvmClient, DescribeRegionsRequest, DescribeZonesRequest};

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum RegionCommand {
    /// List regions available to the account
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Clone)]
pub enum ZoneCommand {
    /// List availability zones in the current region
    #[command(alias = "ls")]
    List {
        /// Only zones currently available
        #[arg(long)]
        available: bool,
    },
}

impl RegionCommand {
    pub async fn run(self, client: &CvmClient, use_json: bool) -> Result<()> {
        match self {
            Self::List => {
                let regions = client
                    .describe_regions(&DescribeRegionsRequest::default())
                    .await?
                    .region_set;
                if use_json {
                    return json::print_json(&regions);
                }
                table::print_rows(
                    &["REGION", "NAME", "STATE"],
                    regions
                        .into_iter()
                        .map(|r| vec![r.region, r.region_name, r.region_state]),
                );
                Ok(())
            }
        }
    }
}

impl ZoneCommand {
    pub async fn run(self, client: &CvmClient, use_json: bool) -> Result<()> {
        match self {
            Self::List { available } => {
                let mut zones = client
                    .describe_zones(&DescribeZonesRequest::default())
                    .await?
                    .zone_set;
                if available {
                    zones.retain(|z| z.zone_state == "AVAILABLE");
                }
                if use_json {
                    return json::print_json(&zones);
                }
                table::print_rows(
                    &["ZONE", "ID", "NAME", "STATE"],
                    zones
                        .into_iter()
                        .map(|z| vec![z.zone, z.zone_id, z.zone_name, z.zone_state]),
                );
                Ok(())
            }
        }
    }
}
