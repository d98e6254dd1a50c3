// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! High performance computing cluster types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Filter, TagSpecification, null_as_default};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct HpcClusterInfo {
    /// e.g. "hpc-l9anqcbn"
    pub hpc_cluster_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub cdc_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_num: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub create_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_ids: Vec<String>,
    /// CDC, CHC or STANDARD
    #[serde(default)]
    pub hpc_cluster_type: Option<String>,
    #[serde(default)]
    pub hpc_cluster_business_id: Option<String>,
    #[serde(default)]
    pub hpc_cluster_net_mode: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHpcClusterRequest {
    pub zone: String,
    /// At most 60 characters
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hpc_cluster_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hpc_cluster_business_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_specification: Vec<TagSpecification>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHpcClusterResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hpc_cluster_set: Vec<HpcClusterInfo>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHpcClustersRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hpc_cluster_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hpc_cluster_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hpc_cluster_business_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHpcClustersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hpc_cluster_set: Vec<HpcClusterInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyHpcClusterAttributeRequest {
    pub hpc_cluster_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

/// Clusters that still hold instances cannot be deleted
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteHpcClustersRequest {
    pub hpc_cluster_ids: Vec<String>,
}
