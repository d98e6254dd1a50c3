// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI commands

pub mod call;
pub mod image;
pub mod instance;
pub mod key;
pub mod launch_template;
pub mod placement_group;
pub mod profile;
pub mod region;
pub mod reserved;

pub use image::ImageCommand;
pub use instance::InstanceCommand;
pub use key::KeyCommand;
pub use launch_template::LaunchTemplateCommand;
pub use placement_group::PlacementGroupCommand;
pub use profile::ProfileCommand;
pub use region::{RegionCommand, ZoneCommand};
pub use reserved::ReservedCommand;

use dialoguer::Confirm;

/// Ask before a destructive action unless `force` is set
pub(crate) fn confirm(prompt: String, force: bool) -> anyhow::Result<bool> {
    if force {
        return Ok(true);
    }
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
