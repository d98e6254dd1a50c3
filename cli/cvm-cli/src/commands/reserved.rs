// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Reserved instance commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cvm_client::{
    CvmClient, DescribeReservedInstancesOfferingsRequest, DescribeReservedInstancesRequest,
    Filter,
};

use crate::output::{json, table};

/// One year, the shortest reservation term
const SECONDS_PER_YEAR: i64 = 31_536_000;

#[derive(Subcommand, Clone)]
pub enum ReservedCommand {
    /// List purchased reserved instances
    #[command(alias = "ls")]
    List,
    /// List reserved instance offerings
    Offerings(OfferingsArgs),
}

#[derive(Args, Clone)]
pub struct OfferingsArgs {
    /// Filter by availability zone
    #[arg(long, short = 'z')]
    pub zone: Option<String>,

    /// Filter by instance type, e.g. S5.LARGE8
    #[arg(long = "type")]
    pub instance_type: Option<String>,

    /// Term in years (1 or 3)
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=3))]
    pub years: Option<i64>,

    /// All Upfront, Partial Upfront or No Upfront
    #[arg(long)]
    pub offering_type: Option<String>,
}

impl ReservedCommand {
    pub async fn run(self, client: &CvmClient, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_reserved(client, use_json).await,
            Self::Offerings(args) => list_offerings(args, client, use_json).await,
        }
    }
}

async fn list_reserved(client: &CvmClient, use_json: bool) -> Result<()> {
    let reserved = client
        .describe_reserved_instances(&DescribeReservedInstancesRequest {
            limit: Some(100),
            ..Default::default()
        })
        .await?
        .reserved_instances_set;

    if use_json {
        return json::print_json(&reserved);
    }
    table::print_rows(
        &["ID", "TYPE", "ZONE", "COUNT", "STATE", "END"],
        reserved.into_iter().map(|r| {
            vec![
                r.reserved_instances_id,
                r.instance_type,
                r.zone,
                r.instance_count.to_string(),
                r.state,
                r.end_time,
            ]
        }),
    );
    Ok(())
}

async fn list_offerings(args: OfferingsArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let mut filters = Vec::new();
    if let Some(zone) = &args.zone {
        filters.push(Filter::new("zone", [zone.as_str()]));
    }
    if let Some(instance_type) = &args.instance_type {
        filters.push(Filter::new("instance-type", [instance_type.as_str()]));
    }
    if let Some(years) = args.years {
        filters.push(Filter::new("duration", [(years * SECONDS_PER_YEAR).to_string()]));
    }
    if let Some(offering_type) = &args.offering_type {
        filters.push(Filter::new("offering-type", [offering_type.as_str()]));
    }

    let offerings = client
        .describe_reserved_instances_offerings(&DescribeReservedInstancesOfferingsRequest {
            filters,
            limit: Some(100),
            ..Default::default()
        })
        .await?
        .reserved_instances_offerings_set;

    if use_json {
        return json::print_json(&offerings);
    }
    table::print_rows(
        &["ID", "TYPE", "ZONE", "TERM", "OFFERING", "FIXED", "HOURLY"],
        offerings.into_iter().map(|o| {
            vec![
                o.reserved_instances_offering_id,
                o.instance_type,
                o.zone,
                format!("{}y", o.duration / SECONDS_PER_YEAR),
                o.offering_type,
                format!("{:.2} {}", o.fixed_price, o.currency_code),
                format!("{:.4}", o.usage_price),
            ]
        }),
    );
    Ok(())
}
