// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Regions, zones and instance type catalogues

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Filter, ItemPrice, null_as_default};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RegionInfo {
    /// e.g. "ap-guangzhou"
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region_name: String,
    /// AVAILABLE or UNAVAILABLE
    #[serde(default, deserialize_with = "null_as_default")]
    pub region_state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ZoneInfo {
    /// e.g. "ap-guangzhou-3"
    pub zone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zone_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zone_id: String,
    /// AVAILABLE or UNAVAILABLE
    #[serde(default, deserialize_with = "null_as_default")]
    pub zone_state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTypeConfig {
    pub zone: String,
    pub instance_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_family: String,
    #[serde(rename = "GPU", default, deserialize_with = "null_as_default")]
    pub gpu: i64,
    #[serde(rename = "CPU", default, deserialize_with = "null_as_default")]
    pub cpu: i64,
    /// GB
    #[serde(default, deserialize_with = "null_as_default")]
    pub memory: i64,
    #[serde(rename = "FPGA", default, deserialize_with = "null_as_default")]
    pub fpga: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceFamilyConfig {
    pub instance_family: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_family_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LocalDiskType {
    #[serde(rename = "Type")]
    pub disk_type: String,
    /// ROOT or DATA
    #[serde(default, deserialize_with = "null_as_default")]
    pub partition_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_size: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_size: i64,
    /// REQUIRED or OPTIONAL
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: String,
}

/// Sale status of one instance type in one zone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceTypeQuotaItem {
    pub zone: String,
    pub instance_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_charge_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub network_card: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cpu: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub memory: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_family: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub local_disk_type_list: Vec<LocalDiskType>,
    /// SELL or SOLD_OUT
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub price: Option<ItemPrice>,
    #[serde(default)]
    pub sold_out_reason: Option<String>,
    /// Gbps
    #[serde(default)]
    pub instance_bandwidth: Option<f64>,
    /// 10k PPS
    #[serde(default)]
    pub instance_pps: Option<i64>,
    #[serde(default)]
    pub storage_block_amount: Option<i64>,
    #[serde(default)]
    pub cpu_type: Option<String>,
    #[serde(default)]
    pub gpu: Option<i64>,
    #[serde(default)]
    pub fpga: Option<i64>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub gpu_count: Option<f64>,
    /// CPU clock, e.g. "2.5GHz/3.1GHz"
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub status_category: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRegionsRequest {}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeRegionsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region_set: Vec<RegionInfo>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZonesRequest {}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZonesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zone_set: Vec<ZoneInfo>,
    pub request_id: String,
}

/// Filters: zone, instance-family, instance-type, instance-charge-type,
/// sort-keys
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZoneInstanceConfigInfosRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeZoneInstanceConfigInfosResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_type_quota_set: Vec<InstanceTypeQuotaItem>,
    pub request_id: String,
}

/// Filters: zone, instance-family, instance-type
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceTypeConfigsRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceTypeConfigsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_type_config_set: Vec<InstanceTypeConfig>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceFamilyConfigsRequest {}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceFamilyConfigsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_family_config_set: Vec<InstanceFamilyConfig>,
    pub request_id: String,
}
