// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Raw action calls
//!
//! Sends any action with a JSON body and prints the `Response` object, for
//! actions this tool has no dedicated command for.

use anyhow::{Context, Result};
use clap::Args;
use cvm_client::{CvmClient, RequestContext};
use serde_json::Value;

use crate::output::json;

#[derive(Args, Clone)]
pub struct CallArgs {
    /// Action name, e.g. DescribeInstances
    pub action: String,

    /// Service name
    #[arg(long, default_value = cvm_client::SERVICE)]
    pub service: String,

    /// API version
    #[arg(long, default_value = cvm_client::VERSION)]
    pub version: String,

    /// Request parameters as a JSON object
    #[arg(long, short, default_value = "{}")]
    pub body: String,
}

pub async fn run(args: CallArgs, client: &CvmClient) -> Result<()> {
    let params = parse_body(&args.body)?;

    let response = client
        .common()
        .send_raw(
            &RequestContext::default(),
            &args.service,
            &args.version,
            &args.action,
            &params,
        )
        .await?;

    json::print_json(&response)
}

fn parse_body(body: &str) -> Result<Value> {
    let params: Value = serde_json::from_str(body).context("--body is not valid JSON")?;
    if !params.is_object() {
        anyhow::bail!("--body must be a JSON object");
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body() {
        assert!(parse_body(r#"{"Limit": 1}"#).is_ok());
        assert!(parse_body("[1, 2]").is_err());
        assert!(parse_body("{").is_err());
    }
}
