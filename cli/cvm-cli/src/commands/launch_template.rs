// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Launch template commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cvm_client::{
    CvmClient, DescribeLaunchTemplateVersionsRequest, DescribeLaunchTemplatesRequest,
};

use crate::output::{json, or_dash, table};

#[derive(Subcommand, Clone)]
pub enum LaunchTemplateCommand {
    /// List launch templates
    #[command(alias = "ls")]
    List,
    /// List the versions of a launch template
    Versions(VersionsArgs),
}

#[derive(Args, Clone)]
pub struct VersionsArgs {
    /// Launch template ID (lt-...)
    pub template: String,
}

impl LaunchTemplateCommand {
    pub async fn run(self, client: &CvmClient, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_templates(client, use_json).await,
            Self::Versions(args) => list_versions(args, client, use_json).await,
        }
    }
}

async fn list_templates(client: &CvmClient, use_json: bool) -> Result<()> {
    let templates = client
        .describe_launch_templates(&DescribeLaunchTemplatesRequest {
            limit: Some(100),
            ..Default::default()
        })
        .await?
        .launch_template_set;

    if use_json {
        return json::print_json(&templates);
    }
    table::print_rows(
        &["ID", "NAME", "DEFAULT", "LATEST", "VERSIONS", "CREATED"],
        templates.into_iter().map(|t| {
            vec![
                t.launch_template_id,
                t.launch_template_name,
                t.default_version_number.to_string(),
                t.latest_version_number.to_string(),
                t.launch_template_version_count.to_string(),
                t.creation_time,
            ]
        }),
    );
    Ok(())
}

async fn list_versions(args: VersionsArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let versions = client
        .describe_launch_template_versions(&DescribeLaunchTemplateVersionsRequest {
            launch_template_id: args.template,
            limit: Some(100),
            ..Default::default()
        })
        .await?
        .launch_template_version_set;

    if use_json {
        return json::print_json(&versions);
    }
    table::print_rows(
        &["VERSION", "DEFAULT", "INSTANCE TYPE", "IMAGE", "DESCRIPTION"],
        versions.into_iter().map(|v| {
            let data = &v.launch_template_version_data;
            vec![
                v.launch_template_version.to_string(),
                if v.is_default_version { "*" } else { "" }.to_string(),
                or_dash(data.instance_type.as_deref()),
                or_dash(data.image_id.as_deref()),
                or_dash(Some(&v.launch_template_version_description)),
            ]
        }),
    );
    Ok(())
}
