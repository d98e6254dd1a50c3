// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Spread placement group types
//!
//! Instances in a disaster recover group are spread over distinct hosts,
//! switches or racks, depending on the group type.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::common::null_as_default;

/// Granularity a group spreads its instances over
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum DisasterRecoverGroupType {
    #[default]
    Host,
    Sw,
    Rack,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DisasterRecoverGroup {
    /// e.g. "ps-1ke4ix6e"
    pub disaster_recover_group_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Type", default, deserialize_with = "null_as_default")]
    pub group_type: DisasterRecoverGroupType,
    /// Instances the group can hold
    #[serde(default, deserialize_with = "null_as_default")]
    pub cvm_quota_total: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_num: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub create_time: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDisasterRecoverGroupRequest {
    pub name: String,
    #[serde(rename = "Type")]
    pub group_type: DisasterRecoverGroupType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateDisasterRecoverGroupResponse {
    pub disaster_recover_group_id: String,
    #[serde(rename = "Type", default, deserialize_with = "null_as_default")]
    pub group_type: DisasterRecoverGroupType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cvm_quota_total: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_num: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub create_time: String,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDisasterRecoverGroupsRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disaster_recover_group_ids: Vec<String>,
    /// Fuzzy match on the group name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDisasterRecoverGroupsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub disaster_recover_group_set: Vec<DisasterRecoverGroup>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDisasterRecoverGroupQuotaRequest {}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeDisasterRecoverGroupQuotaResponse {
    /// Groups the account may create
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_quota: i64,
    /// Groups the account has created
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_num: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cvm_in_host_group_quota: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cvm_in_sw_group_quota: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cvm_in_rack_group_quota: i64,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyDisasterRecoverGroupAttributeRequest {
    pub disaster_recover_group_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Groups that still hold instances cannot be deleted
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteDisasterRecoverGroupsRequest {
    pub disaster_recover_group_ids: Vec<String>,
}

/// Move instances into a group, or out of any group when no id is given
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesDisasterRecoverGroupRequest {
    pub instance_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disaster_recover_group_id: Option<String>,
    /// Move even if it means migrating the instance to another host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn group_type_uses_wire_names() {
        assert_eq!(
            serde_json::to_value(DisasterRecoverGroupType::Sw).unwrap(),
            json!("SW")
        );
        assert_eq!(DisasterRecoverGroupType::Rack.to_string(), "RACK");
        assert_eq!(
            DisasterRecoverGroupType::from_str("host").unwrap(),
            DisasterRecoverGroupType::Host
        );
    }

    #[test]
    fn create_request_renames_type() {
        let req = CreateDisasterRecoverGroupRequest {
            name: "web".to_string(),
            group_type: DisasterRecoverGroupType::Rack,
            client_token: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"Name": "web", "Type": "RACK"})
        );
    }

    #[test]
    fn group_decodes_null_instance_ids() {
        let group: DisasterRecoverGroup = serde_json::from_value(json!({
            "DisasterRecoverGroupId": "ps-1ke4ix6e",
            "Name": "web",
            "Type": "HOST",
            "CvmQuotaTotal": 50,
            "CurrentNum": 0,
            "InstanceIds": null,
            "CreateTime": "2026-02-01 10:00:00"
        }))
        .unwrap();
        assert_eq!(group.group_type, DisasterRecoverGroupType::Host);
        assert!(group.instance_ids.is_empty());
        assert_eq!(group.cvm_quota_total, 50);
    }
}
