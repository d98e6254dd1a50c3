// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Tencent Cloud CVM Client Library
//!
//! This client provides typed access to the CVM (Cloud Virtual Machine)
//! service, API version 2017-03-12.
//!
//! ## Usage
//!
//! ```ignore
//! use cvm_client::{CvmClient, Credential, Filter, InstanceState, WaitOptions};
//!
//! let client = CvmClient::new("ap-guangzhou")?
//!     .with_credential(Credential::new(secret_id, secret_key));
//!
//! // One page at a time
//! let page = client.describe_instances(&Default::default()).await?;
//!
//! // Or everything at once
//! let running = client
//!     .describe_all_instances(vec![Filter::new("instance-state", ["RUNNING"])])
//!     .await?;
//!
//! // Block until instances settle
//! client
//!     .wait_for_instances(&ids, InstanceState::Stopped, WaitOptions::default())
//!     .await?;
//! ```
//!
//! Without a credential every call fails with
//! [`Error::MissingCredential`] before any request is sent.

mod client;
mod wait;

pub use client::{CvmClient, PAGE_SIZE};
pub use wait::{WaitError, WaitOptions};

// Re-export the action types and the transport pieces callers need
pub use cvm_api::*;
pub use tencentcloud_auth::{
    Credential, DefaultProviderChain, EnvProvider, ProfileProvider, ProvideCredential,
};
pub use tencentcloud_common::{
    ApiError, Backoff, Client, ClientProfile, Error, HttpProfile, Language, RequestContext,
};
