// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Image commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cvm_client::{CvmClient, DeleteImagesRequest, Filter};

use super::confirm;
use crate::output::{json, or_dash, table};

#[derive(Subcommand, Clone)]
pub enum ImageCommand {
    /// List images
    #[command(alias = "ls")]
    List(ImageListArgs),
    /// Get image details
    Get(ImageGetArgs),
    /// Delete private image(s)
    #[command(alias = "rm")]
    Delete(ImageDeleteArgs),
}

#[derive(Args, Clone)]
pub struct ImageListArgs {
    /// PRIVATE_IMAGE, PUBLIC_IMAGE, SHARED_IMAGE or MARKET_IMAGE
    #[arg(long = "type")]
    pub image_type: Option<String>,

    /// Filter by platform, e.g. Ubuntu
    #[arg(long)]
    pub platform: Option<String>,

    /// Filter by name
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Args, Clone)]
pub struct ImageGetArgs {
    /// Image ID
    pub image: String,
}

#[derive(Args, Clone)]
pub struct ImageDeleteArgs {
    /// Image ID(s)
    #[arg(required = true)]
    pub images: Vec<String>,

    /// Also delete the snapshots the images were built from
    #[arg(long)]
    pub delete_snapshots: bool,

    /// Skip confirmation
    #[arg(long, short)]
    pub force: bool,
}

impl ImageCommand {
    pub async fn run(self, client: &CvmClient, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_images(args, client, use_json).await,
            Self::Get(args) => get_image(args, client, use_json).await,
            Self::Delete(args) => delete_images(args, client).await,
        }
    }
}

async fn list_images(args: ImageListArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let mut filters = Vec::new();
    if let Some(image_type) = &args.image_type {
        filters.push(Filter::new("image-type", [image_type.as_str()]));
    }
    if let Some(platform) = &args.platform {
        filters.push(Filter::new("platform", [platform.as_str()]));
    }
    if let Some(name) = &args.name {
        filters.push(Filter::new("image-name", [name.as_str()]));
    }

    let images = client.describe_all_images(filters).await?;

    if use_json {
        return json::print_json(&images);
    }
    table::print_rows(
        &["ID", "NAME", "TYPE", "PLATFORM", "ARCH", "SIZE", "STATE"],
        images.into_iter().map(|i| {
            vec![
                i.image_id,
                i.image_name,
                i.image_type,
                i.platform,
                i.architecture,
                format!("{}G", i.image_size),
                i.image_state,
            ]
        }),
    );
    Ok(())
}

async fn get_image(args: ImageGetArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let image = client
        .describe_image_by_id(&args.image)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Image {} not found", args.image))?;

    if use_json {
        return json::print_json(&image);
    }
    table::print_fields(&[
        ("ID", image.image_id.clone()),
        ("Name", image.image_name.clone()),
        ("Description", or_dash(Some(&image.image_description))),
        ("OS", image.os_name.clone()),
        ("Type", image.image_type.clone()),
        ("Platform", image.platform.clone()),
        ("Architecture", image.architecture.clone()),
        ("Size", format!("{} GB", image.image_size)),
        ("State", image.image_state.clone()),
        ("Source", image.image_source.clone()),
        ("Created", or_dash(image.created_time.as_deref())),
    ]);
    Ok(())
}

async fn delete_images(args: ImageDeleteArgs, client: &CvmClient) -> Result<()> {
    if !confirm(format!("Delete {}?", args.images.join(", ")), args.force)? {
        return Ok(());
    }

    client
        .delete_images(&DeleteImagesRequest {
            image_ids: args.images.clone(),
            delete_binded_snap: args.delete_snapshots.then_some(true),
            ..Default::default()
        })
        .await?;
    println!("Deleted {}", args.images.join(", "));
    Ok(())
}
