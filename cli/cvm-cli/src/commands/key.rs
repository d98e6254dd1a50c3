// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! SSH key pair commands

use std::io::Read;

use anyhow::Result;
use clap::{Args, Subcommand};
use cvm_client::{CvmClient, DeleteKeyPairsRequest, ImportKeyPairRequest};

use super::confirm;
use crate::output::{json, or_dash, table};

#[derive(Subcommand, Clone)]
pub enum KeyCommand {
    /// List key pairs
    #[command(alias = "ls")]
    List,
    /// Import an existing public key
    Import(KeyImportArgs),
    /// Delete key pair(s)
    #[command(alias = "rm")]
    Delete(KeyDeleteArgs),
}

#[derive(Args, Clone)]
pub struct KeyImportArgs {
    /// Key name (letters, digits and underscores)
    #[arg(short, long)]
    pub name: String,
    /// Public key file path (or read from stdin if not provided)
    pub file: Option<String>,
    /// Project to place the key in
    #[arg(long, default_value_t = 0)]
    pub project_id: i64,
}

#[derive(Args, Clone)]
pub struct KeyDeleteArgs {
    /// Key ID(s)
    #[arg(required = true)]
    pub keys: Vec<String>,
    /// Skip confirmation
    #[arg(long, short)]
    pub force: bool,
}

impl KeyCommand {
    pub async fn run(self, client: &CvmClient, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_keys(client, use_json).await,
            Self::Import(args) => import_key(args, client, use_json).await,
            Self::Delete(args) => delete_keys(args, client).await,
        }
    }
}

async fn list_keys(client: &CvmClient, use_json: bool) -> Result<()> {
    let keys = client.describe_all_key_pairs(vec![]).await?;

    if use_json {
        return json::print_json(&keys);
    }
    table::print_rows(
        &["ID", "NAME", "INSTANCES", "CREATED"],
        keys.into_iter().map(|k| {
            vec![
                k.key_id,
                k.key_name,
                k.associated_instance_ids.len().to_string(),
                or_dash(k.created_time.as_deref()),
            ]
        }),
    );
    Ok(())
}

async fn import_key(args: KeyImportArgs, client: &CvmClient, use_json: bool) -> Result<()> {
    let public_key = match &args.file {
        Some(file) => std::fs::read_to_string(file)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file, e))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    let public_key = public_key.trim();
    if public_key.is_empty() {
        anyhow::bail!("Public key is empty");
    }

    let response = client
        .import_key_pair(&ImportKeyPairRequest {
            key_name: args.name.clone(),
            project_id: args.project_id,
            public_key: public_key.to_string(),
            ..Default::default()
        })
        .await?;

    if use_json {
        return json::print_json(&serde_json::json!({
            "keyId": response.key_id,
            "keyName": args.name,
        }));
    }
    println!("Imported key '{}' ({})", args.name, response.key_id);
    Ok(())
}

async fn delete_keys(args: KeyDeleteArgs, client: &CvmClient) -> Result<()> {
    if !confirm(format!("Delete {}?", args.keys.join(", ")), args.force)? {
        return Ok(());
    }

    client
        .delete_key_pairs(&DeleteKeyPairsRequest {
            key_ids: args.keys.clone(),
        })
        .await?;
    println!("Deleted {}", args.keys.join(", "));
    Ok(())
}
