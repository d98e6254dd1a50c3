// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance management commands

use anyhow::Result;
use clap::Subcommand;
use cvm_client::CvmClient;

pub mod delete;
pub mod get;
pub mod lifecycle;
pub mod list;
pub mod rename;
pub mod wait;

pub use list::ListArgs;

#[derive(Subcommand, Clone)]
pub enum InstanceCommand {
    /// List instances
    #[command(alias = "ls")]
    List(list::ListArgs),

    /// Get instance details
    Get(get::GetArgs),

    /// Start instance(s)
    Start(lifecycle::StartArgs),

    /// Stop instance(s)
    Stop(lifecycle::StopArgs),

    /// Reboot instance(s)
    Reboot(lifecycle::RebootArgs),

    /// Terminate instance(s)
    #[command(alias = "rm")]
    Delete(delete::DeleteArgs),

    /// Rename an instance
    Rename(rename::RenameArgs),

    /// Wait for instance(s) to reach a state
    Wait(wait::WaitArgs),
}

impl InstanceCommand {
    pub async fn run(self, client: &CvmClient, json: bool) -> Result<()> {
        match self {
            Self::List(args) => list::run(args, client, json).await,
            Self::Get(args) => get::run(args, client, json).await,
            Self::Start(args) => lifecycle::start(args, client, json).await,
            Self::Stop(args) => lifecycle::stop(args, client, json).await,
            Self::Reboot(args) => lifecycle::reboot(args, client, json).await,
            Self::Delete(args) => delete::run(args, client).await,
            Self::Rename(args) => rename::run(args, client).await,
            Self::Wait(args) => wait::run(args, client, json).await,
        }
    }
}
