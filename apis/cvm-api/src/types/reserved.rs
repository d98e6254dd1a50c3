// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Reserved instance types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Filter, null_as_default};

/// A purchased reservation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstances {
    pub reserved_instances_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
    /// Seconds, 31536000 (one year) or 94608000 (three years)
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_count: i64,
    /// e.g. "linux"
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_description: String,
    /// active, pending or retired
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency_code: String,
    /// All Upfront, Partial Upfront or No Upfront
    #[serde(default, deserialize_with = "null_as_default")]
    pub offering_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_family: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ReservedInstancesOffering {
    pub reserved_instances_offering_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fixed_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub offering_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_description: String,
    /// Hourly price
    #[serde(default, deserialize_with = "null_as_default")]
    pub usage_price: f64,
}

/// Filters: zone, duration, instance-type, offering-type,
/// reserved-instances-id, state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reserved_instances_set: Vec<ReservedInstances>,
    pub request_id: String,
}

/// Filters: zone, duration, instance-type, offering-type, product-description,
/// reserved-instances-offering-id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesOfferingsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_duration: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeReservedInstancesOfferingsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reserved_instances_offerings_set: Vec<ReservedInstancesOffering>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseReservedInstancesOfferingRequest {
    pub instance_count: i64,
    pub reserved_instances_offering_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_instance_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PurchaseReservedInstancesOfferingResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub reserved_instance_id: String,
    pub request_id: String,
}
