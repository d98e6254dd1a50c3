// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Launch template types
//!
//! A launch template stores a versioned set of RunInstances parameters. The
//! create calls take the same parameters, so [`LaunchTemplateVersionData`] is
//! flattened into their request bodies.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{
    ActionTimer, DataDisk, EnhancedService, Filter, InstanceChargePrepaid,
    InstanceMarketOptionsRequest, InternetAccessible, LoginSettings, Placement, SystemDisk, Tag,
    TagSpecification, VirtualPrivateCloud, null_as_default,
};

/// RunInstances parameters stored in one template version
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateVersionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_charge_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_disk: Option<SystemDisk>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub data_disks: Vec<DataDisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_accessible: Option<InternetAccessible>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub security_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_settings: Option<LoginSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_service: Option<EnhancedService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cam_role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hpc_cluster_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub disaster_recover_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_timer: Option<ActionTimer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tag_specification: Vec<TagSpecification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_api_termination: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateInfo {
    /// e.g. "lt-b20scl2a"
    pub launch_template_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub launch_template_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub latest_version_number: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_version_number: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub launch_template_version_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creation_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub launch_template_tag_set: Vec<Tag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateVersionInfo {
    pub launch_template_id: String,
    pub launch_template_version: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub launch_template_version_data: LaunchTemplateVersionData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub creation_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_default_version: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub launch_template_version_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_by: String,
}

/// Create a template; the request carries its first version
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLaunchTemplateRequest {
    /// At most 128 characters
    pub launch_template_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_template_version_description: Option<String>,
    #[serde(flatten)]
    pub data: LaunchTemplateVersionData,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub launch_template_tag_specification: Vec<TagSpecification>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLaunchTemplateResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub launch_template_id: String,
    pub request_id: String,
}

/// Add a version, optionally copying unset fields from `launch_template_version`
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLaunchTemplateVersionRequest {
    pub launch_template_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_template_version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_template_version_description: Option<String>,
    #[serde(flatten)]
    pub data: LaunchTemplateVersionData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLaunchTemplateVersionResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub launch_template_version_number: u64,
    pub request_id: String,
}

/// Filters: launch-template-name, tag-key, tag-value and `tag:<key>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLaunchTemplatesRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub launch_template_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLaunchTemplatesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub launch_template_set: Vec<LaunchTemplateInfo>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLaunchTemplateVersionsRequest {
    pub launch_template_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub launch_template_versions: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Only return the default version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_version: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLaunchTemplateVersionsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub launch_template_version_set: Vec<LaunchTemplateVersionInfo>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLaunchTemplateRequest {
    pub launch_template_id: String,
}

/// The default version cannot be deleted
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLaunchTemplateVersionsRequest {
    pub launch_template_id: String,
    pub launch_template_versions: Vec<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyLaunchTemplateDefaultVersionRequest {
    pub launch_template_id: String,
    pub default_version: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_flattens_version_data() {
        let req = CreateLaunchTemplateRequest {
            launch_template_name: "web".to_string(),
            data: LaunchTemplateVersionData {
                placement: Some(Placement::zone("ap-guangzhou-3")),
                image_id: Some("img-pmqg1cw7".to_string()),
                instance_type: Some("S5.MEDIUM2".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["LaunchTemplateName"], "web");
        assert_eq!(value["Placement"]["Zone"], "ap-guangzhou-3");
        assert_eq!(value["ImageId"], "img-pmqg1cw7");
        assert_eq!(value["InstanceType"], "S5.MEDIUM2");
        assert!(value.get("Data").is_none());
        assert!(value.get("DataDisks").is_none());
        assert!(value.get("LaunchTemplateVersionDescription").is_none());
    }

    #[test]
    fn version_info_decodes_nested_data() {
        let body = json!({
            "LaunchTemplateId": "lt-b20scl2a",
            "LaunchTemplateVersion": 3,
            "IsDefaultVersion": true,
            "CreationTime": "2026-01-12T08:00:00Z",
            "LaunchTemplateVersionData": {
                "InstanceType": "S5.MEDIUM2",
                "Placement": {"Zone": "ap-guangzhou-3", "ProjectId": 0},
                "DataDisks": null
            }
        });

        let info: LaunchTemplateVersionInfo = serde_json::from_value(body).unwrap();
        assert_eq!(info.launch_template_version, 3);
        assert!(info.is_default_version);
        let data = info.launch_template_version_data;
        assert_eq!(data.instance_type.as_deref(), Some("S5.MEDIUM2"));
        assert!(data.data_disks.is_empty());
        assert_eq!(data.placement.unwrap().zone, "ap-guangzhou-3");
    }
}
