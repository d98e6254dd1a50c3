// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance list command

use anyhow::Result;
use clap::Args;
use cvm_client::{CvmClient, DescribeInstancesRequest, Filter, Instance, InstanceState};

use crate::output::{json, or_dash, table};

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Filter by availability zone
    #[arg(long, short = 'z')]
    pub zone: Option<String>,

    /// Filter by state (RUNNING, STOPPED, ...)
    #[arg(long, short = 's')]
    pub state: Option<InstanceState>,

    /// Filter by name
    #[arg(long)]
    pub name: Option<String>,

    /// Filter by instance type, e.g. S5.MEDIUM2
    #[arg(long = "type")]
    pub instance_type: Option<String>,

    /// Filter by tag (key=value, or key alone)
    #[arg(long, short = 't')]
    pub tag: Vec<String>,

    /// Return a single page of at most this many instances
    #[arg(long)]
    pub limit: Option<i64>,

    /// Fetch pages concurrently, at most this many at a time
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,

    /// Print only instance IDs
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl ListArgs {
    fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(zone) = &self.zone {
            filters.push(Filter::new("zone", [zone.as_str()]));
        }
        if let Some(state) = self.state {
            filters.push(Filter::new("instance-state", [state.to_string()]));
        }
        if let Some(name) = &self.name {
            filters.push(Filter::new("instance-name", [name.as_str()]));
        }
        if let Some(instance_type) = &self.instance_type {
            filters.push(Filter::new("instance-type", [instance_type.as_str()]));
        }
        for tag in &self.tag {
            filters.push(tag_filter(tag));
        }
        filters
    }
}

/// `key=value` matches the value, a bare key matches any value
fn tag_filter(tag: &str) -> Filter {
    match tag.split_once('=') {
        Some((key, value)) => Filter::new(format!("tag:{key}"), [value]),
        None => Filter::new("tag-key", [tag]),
    }
}

pub async fn run(args: ListArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let filters = args.filters();

    let instances = match args.limit {
        Some(limit) => {
            let request = DescribeInstancesRequest {
                filters,
                limit: Some(limit),
                ..Default::default()
            };
            client.describe_instances(&request).await?.instance_set
        }
        None if args.concurrency > 1 => {
            client
                .describe_all_instances_concurrent(filters, args.concurrency)
                .await?
        }
        None => client.describe_all_instances(filters).await?,
    };

    if use_json {
        return json::print_json(&instances);
    }
    if args.quiet {
        for instance in &instances {
            println!("{}", instance.instance_id);
        }
        return Ok(());
    }

    table::print_rows(
        &["ID", "NAME", "TYPE", "STATE", "ZONE", "PRIMARY IP", "CREATED"],
        instances.iter().map(row),
    );
    Ok(())
}

fn row(instance: &Instance) -> Vec<String> {
    vec![
        instance.instance_id.clone(),
        instance.instance_name.clone(),
        instance.instance_type.clone(),
        instance.instance_state.to_string(),
        or_dash(instance.zone()),
        or_dash(instance.primary_ip()),
        or_dash(instance.created_time.as_deref()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_filters() {
        let filter = tag_filter("env=prod");
        assert_eq!(filter.name, "tag:env");
        assert_eq!(filter.values, vec!["prod".to_string()]);

        let filter = tag_filter("team");
        assert_eq!(filter.name, "tag-key");
        assert_eq!(filter.values, vec!["team".to_string()]);
    }
}
