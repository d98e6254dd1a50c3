// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance get command and name resolution

use anyhow::Result;
use clap::Args;
use cvm_client::{CvmClient, Filter, Instance};

use crate::output::{json, or_dash, table};

#[derive(Args, Clone)]
pub struct GetArgs {
    /// Instance ID or name
    pub instance: String,
}

pub async fn run(args: GetArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let instance_id = resolve_instance(&args.instance, client).await?;
    let instance = client
        .describe_instance_by_id(&instance_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Instance {} not found", instance_id))?;

    if use_json {
        return json::print_json(&instance);
    }

    let tags = instance
        .tags
        .iter()
        .map(|t| format!("{}={}", t.key, t.value))
        .collect::<Vec<_>>()
        .join(", ");

    table::print_fields(&[
        ("ID", instance.instance_id.clone()),
        ("Name", instance.instance_name.clone()),
        ("State", instance.instance_state.to_string()),
        ("Type", instance.instance_type.clone()),
        ("CPU", instance.cpu.to_string()),
        ("Memory", format!("{} GB", instance.memory)),
        ("Zone", or_dash(instance.zone())),
        ("Image", or_dash(instance.image_id.as_deref())),
        ("OS", or_dash(instance.os_name.as_deref())),
        ("Private IPs", join_or_dash(&instance.private_ip_addresses)),
        ("Public IPs", join_or_dash(&instance.public_ip_addresses)),
        ("Charge type", or_dash(instance.instance_charge_type.as_deref())),
        ("Created", or_dash(instance.created_time.as_deref())),
        ("Last operation", last_operation(&instance)),
        ("Tags", or_dash(Some(&tags))),
    ]);
    Ok(())
}

fn join_or_dash(values: &[String]) -> String {
    or_dash(Some(&values.join(", ")))
}

fn last_operation(instance: &Instance) -> String {
    match (&instance.latest_operation, &instance.latest_operation_state) {
        (Some(op), Some(state)) => format!("{op} ({state})"),
        (Some(op), None) => op.clone(),
        _ => or_dash(None),
    }
}

/// Turn an instance ID or name into an ID
///
/// Arguments shaped like `ins-xxxxxxxx` are taken as IDs. Anything else is
/// looked up by name and must match exactly one instance.
pub async fn resolve_instance(id_or_name: &str, client: &CvmClient) -> Result<String> {
    if is_instance_id(id_or_name) {
        return Ok(id_or_name.to_string());
    }

    let matches: Vec<Instance> = client
        .describe_all_instances(vec![Filter::new("instance-name", [id_or_name])])
        .await?
        .into_iter()
        .filter(|i| i.instance_name == id_or_name)
        .collect();

    match matches.as_slice() {
        [instance] => Ok(instance.instance_id.clone()),
        [] => Err(anyhow::anyhow!("No instance named '{}'", id_or_name)),
        _ => Err(anyhow::anyhow!(
            "{} instances are named '{}', use an instance ID",
            matches.len(),
            id_or_name
        )),
    }
}

/// Resolve several IDs or names, keeping their order
pub async fn resolve_instances(ids_or_names: &[String], client: &CvmClient) -> Result<Vec<String>> {
    let mut ids = Vec::with_capacity(ids_or_names.len());
    for value in ids_or_names {
        ids.push(resolve_instance(value, client).await?);
    }
    Ok(ids)
}

fn is_instance_id(value: &str) -> bool {
    value
        .strip_prefix("ins-")
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()))
}
