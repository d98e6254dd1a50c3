// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Tencent Cloud API 3.0 transport
//!
//! Every API 3.0 service speaks the same protocol: a signed JSON `POST /`
//! with the action name in `X-TC-Action`, answered by a
//! `{"Response": {...}}` envelope. [`Client`] implements that protocol once
//! so service crates only need to describe their actions.
//!
//! ```ignore
//! use tencentcloud_common::{Client, RequestContext};
//! use tencentcloud_auth::DefaultProviderChain;
//!
//! let client = Client::new("ap-guangzhou")?
//!     .with_credential(DefaultProviderChain::default());
//! let response = client.send(&RequestContext::default(), &request).await?;
//! ```

pub mod client;
pub mod context;
pub mod error;
pub mod profile;
pub mod ratelimit;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use client::{Client, REQUEST_CLIENT};
pub use context::RequestContext;
pub use error::{ApiError, Error};
pub use profile::{Backoff, ClientProfile, HttpProfile, Language};

/// A request type bound to one API action
///
/// The request serializes to the action's JSON parameters; `Response` is
/// the content of the `Response` envelope on success.
pub trait Action: Serialize + Send + Sync {
    /// Service name, also the endpoint prefix ("cvm")
    const SERVICE: &'static str;
    /// API version ("2017-03-12")
    const VERSION: &'static str;
    /// Action name ("DescribeInstances")
    const NAME: &'static str;

    type Response: DeserializeOwned + Send;
}
