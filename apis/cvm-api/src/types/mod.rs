// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CVM request, response and model types

pub mod chc;
pub mod common;
pub mod disaster_recover;
pub mod hpc;
pub mod image;
pub mod instance;
pub mod key_pair;
pub mod launch_template;
pub mod region;
pub mod reserved;

pub use chc::*;
pub use common::*;
pub use disaster_recover::*;
pub use hpc::*;
pub use image::*;
pub use instance::*;
pub use key_pair::*;
pub use launch_template::*;
pub use region::*;
pub use reserved::*;
