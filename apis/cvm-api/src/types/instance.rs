// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Instance lifecycle types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::common::{
    ActionTimer, DataDisk, EnhancedService, Filter, InstanceChargePrepaid,
    InstanceMarketOptionsRequest, InternetAccessible, LaunchTemplate, LoginSettings, Placement,
    Price, SystemDisk, Tag, TagSpecification, VirtualPrivateCloud, null_as_default,
};

/// Instance state
///
/// States the API adds later decode to `Unknown` instead of failing the
/// whole response.
#[derive(
    Clone,
    Copy,
    Debug,
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum InstanceState {
    Pending,
    LaunchFailed,
    Running,
    Stopped,
    Starting,
    Stopping,
    Rebooting,
    Shutdown,
    Terminating,
    #[default]
    #[serde(other)]
    Unknown,
}

impl InstanceState {
    /// Whether the instance is still moving between states
    pub fn is_transitional(&self) -> bool {
        matches!(
            self,
            Self::Pending | Self::Starting | Self::Stopping | Self::Rebooting | Self::Terminating
        )
    }
}

/// Result of the most recent operation on an instance
pub mod operation_state {
    pub const SUCCESS: &str = "SUCCESS";
    pub const OPERATING: &str = "OPERATING";
    pub const FAILED: &str = "FAILED";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct GpuInfo {
    /// Fractional for vGPU instances
    #[serde(rename = "GPUCount", default)]
    pub gpu_count: Option<f64>,
    #[serde(rename = "GPUId", default, deserialize_with = "null_as_default")]
    pub gpu_id: Vec<String>,
    #[serde(rename = "GPUType", default)]
    pub gpu_type: Option<String>,
}

/// A CVM instance as returned by DescribeInstances
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    pub instance_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_state: InstanceState,
    #[serde(default)]
    pub placement: Option<Placement>,
    #[serde(rename = "CPU", default, deserialize_with = "null_as_default")]
    pub cpu: i64,
    /// GB
    #[serde(default, deserialize_with = "null_as_default")]
    pub memory: i64,
    /// NORMAL, EXPIRED or PROTECTIVELY_ISOLATED
    #[serde(default)]
    pub restrict_state: Option<String>,
    #[serde(default)]
    pub instance_charge_type: Option<String>,
    #[serde(default)]
    pub system_disk: Option<SystemDisk>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_disks: Vec<DataDisk>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub private_ip_addresses: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_ip_addresses: Vec<String>,
    #[serde(default)]
    pub internet_accessible: Option<InternetAccessible>,
    #[serde(default)]
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub renew_flag: Option<String>,
    /// ISO 8601, UTC
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub expired_time: Option<String>,
    #[serde(default)]
    pub os_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub security_group_ids: Vec<String>,
    #[serde(default)]
    pub login_settings: Option<LoginSettings>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    /// KEEP_CHARGING, STOP_CHARGING or NOT_APPLICABLE
    #[serde(default)]
    pub stop_charging_mode: Option<String>,
    #[serde(default)]
    pub uuid: Option<String>,
    /// Name of the last action run on the instance
    #[serde(default)]
    pub latest_operation: Option<String>,
    /// See [`operation_state`]
    #[serde(default)]
    pub latest_operation_state: Option<String>,
    #[serde(default)]
    pub latest_operation_request_id: Option<String>,
    #[serde(default)]
    pub latest_operation_error_msg: Option<String>,
    #[serde(default)]
    pub disaster_recover_group_id: Option<String>,
    #[serde(rename = "IPv6Addresses", default, deserialize_with = "null_as_default")]
    pub ipv6_addresses: Vec<String>,
    #[serde(default)]
    pub cam_role_name: Option<String>,
    #[serde(default)]
    pub hpc_cluster_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rdma_ip_addresses: Vec<String>,
    #[serde(default)]
    pub dedicated_cluster_id: Option<String>,
    /// NOTIFY_AND_AUTO_RENEW and friends, or ARREAR / POSTPAID for isolation
    #[serde(default)]
    pub isolated_source: Option<String>,
    #[serde(rename = "GPUInfo", default)]
    pub gpu_info: Option<GpuInfo>,
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub disable_api_termination: Option<bool>,
    #[serde(default)]
    pub default_login_user: Option<String>,
    #[serde(default)]
    pub default_login_port: Option<i64>,
}

impl Instance {
    /// First public IP, falling back to the first private one
    pub fn primary_ip(&self) -> Option<&str> {
        self.public_ip_addresses
            .first()
            .or_else(|| self.private_ip_addresses.first())
            .map(String::as_str)
    }

    pub fn zone(&self) -> Option<&str> {
        self.placement.as_ref().map(|p| p.zone.as_str())
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceStatus {
    pub instance_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_state: InstanceState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Attribute {
    /// Base64-encoded user data
    #[serde(default)]
    pub user_data: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceAttribute {
    pub instance_id: String,
    #[serde(default)]
    pub attributes: Option<Attribute>,
}

// ============================================================================
// Create
// ============================================================================

/// Create one or more instances
///
/// Either `image_id` and `placement` or a `launch_template` must be given.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesRequest {
    /// PREPAID, POSTPAID_BY_HOUR, CDHPAID or SPOTPAID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_charge_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_disk: Option<SystemDisk>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_disks: Vec<DataDisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_accessible: Option<InternetAccessible>,
    /// 1 to 100, defaults to 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i64>,
    /// With more than one instance, `{R:3}` style suffixes are expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_settings: Option<LoginSettings>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_service: Option<EnhancedService>,
    /// Idempotency token, at most 64 ASCII characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_timer: Option<ActionTimer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disaster_recover_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_specification: Vec<TagSpecification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,
    /// Base64-encoded, at most 16 KB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    /// Validate only; the call fails with DryRunOperation on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cam_role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hpc_cluster_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_template: Option<LaunchTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedicated_cluster_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chc_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_api_termination: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RunInstancesResponse {
    /// Ids of the created instances; creation continues asynchronously
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_id_set: Vec<String>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceRunInstancesRequest {
    pub placement: Placement,
    pub image_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_charge_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_disk: Option<SystemDisk>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_disks: Vec<DataDisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_private_cloud: Option<VirtualPrivateCloud>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_accessible: Option<InternetAccessible>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_settings: Option<LoginSettings>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_service: Option<EnhancedService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_specification: Vec<TagSpecification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_market_options: Option<InstanceMarketOptionsRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hpc_cluster_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InquiryPriceRunInstancesResponse {
    #[serde(default)]
    pub price: Option<Price>,
    pub request_id: String,
}

// ============================================================================
// Describe
// ============================================================================

/// List instances
///
/// `instance_ids` and `filters` cannot be combined. Filters include zone,
/// project-id, host-id, vpc-id, subnet-id, instance-id, instance-name,
/// instance-state, private-ip-address, public-ip-address, tag-key,
/// tag-value and `tag:<key>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instance_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    /// At most 100, defaults to 20
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_set: Vec<Instance>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesStatusRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instance_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesStatusResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_status_set: Vec<InstanceStatus>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesAttributesRequest {
    /// Only "UserData" is supported
    pub attributes: Vec<String>,
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstancesAttributesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_set: Vec<InstanceAttribute>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceVncUrlRequest {
    pub instance_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeInstanceVncUrlResponse {
    /// Valid for 15 seconds, single use
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_vnc_url: String,
    pub request_id: String,
}

// ============================================================================
// Power
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct StartInstancesRequest {
    pub instance_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct StopInstancesRequest {
    pub instance_ids: Vec<String>,
    /// SOFT, HARD or SOFT_FIRST
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_type: Option<String>,
    /// KEEP_CHARGING or STOP_CHARGING
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopped_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_stop: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RebootInstancesRequest {
    pub instance_ids: Vec<String>,
    /// SOFT, HARD or SOFT_FIRST
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_reboot: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TerminateInstancesRequest {
    pub instance_ids: Vec<String>,
    /// Also release the elastic IPs bound to the instances
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_address: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_prepaid_data_disk: Option<bool>,
}

// ============================================================================
// Reset and resize
// ============================================================================

/// Reinstall the operating system
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstanceRequest {
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_disk: Option<SystemDisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_settings: Option<LoginSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enhanced_service: Option<EnhancedService>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstancesTypeRequest {
    /// Exactly one id
    pub instance_ids: Vec<String>,
    pub instance_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_stop: Option<bool>,
}

#[derive(Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstancesPasswordRequest {
    pub instance_ids: Vec<String>,
    pub password: String,
    /// Defaults to root on Linux and Administrator on Windows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_stop: Option<bool>,
}

impl std::fmt::Debug for ResetInstancesPasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResetInstancesPasswordRequest")
            .field("instance_ids", &self.instance_ids)
            .field("password", &"<redacted>")
            .field("user_name", &self.user_name)
            .field("force_stop", &self.force_stop)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResetInstancesInternetMaxBandwidthRequest {
    pub instance_ids: Vec<String>,
    pub internet_accessible: InternetAccessible,
    /// YYYY-MM-DD, prepaid bandwidth only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ResizeInstanceDisksRequest {
    pub instance_id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_disks: Vec<DataDisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_stop: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_disk: Option<SystemDisk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_online: Option<bool>,
}

// ============================================================================
// Modify
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesAttributeRequest {
    pub instance_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    /// Replaces the full security group list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cam_role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_api_termination: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cam_role_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_reboot: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesProjectRequest {
    pub instance_ids: Vec<String>,
    pub project_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesVpcAttributeRequest {
    pub instance_ids: Vec<String>,
    pub virtual_private_cloud: VirtualPrivateCloud,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_stop: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserve_host_name: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesChargeTypeRequest {
    pub instance_ids: Vec<String>,
    pub instance_charge_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_charge_prepaid: Option<InstanceChargePrepaid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modify_port_charge_type: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyInstancesRenewFlagRequest {
    pub instance_ids: Vec<String>,
    pub renew_flag: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_instance_state_wire_names() {
        assert_eq!(
            serde_json::to_value(InstanceState::LaunchFailed).unwrap(),
            json!("LAUNCH_FAILED")
        );
        let state: InstanceState = serde_json::from_value(json!("RUNNING")).unwrap();
        assert_eq!(state, InstanceState::Running);
        assert_eq!(InstanceState::Stopped.to_string(), "STOPPED");
        assert_eq!("stopped".parse::<InstanceState>().unwrap(), InstanceState::Stopped);
    }

    #[test]
    fn test_unknown_state_decodes() {
        let state: InstanceState = serde_json::from_value(json!("HIBERNATING")).unwrap();
        assert_eq!(state, InstanceState::Unknown);
    }

    #[test]
    fn test_instance_from_api_json() {
        let instance: Instance = serde_json::from_value(json!({
            "InstanceId": "ins-r8hr2upy",
            "InstanceName": "web-1",
            "InstanceType": "S5.MEDIUM4",
            "InstanceState": "RUNNING",
            "CPU": 2,
            "Memory": 4,
            "Placement": {"Zone": "ap-guangzhou-3", "ProjectId": 0},
            "PrivateIpAddresses": ["172.16.0.3"],
            "PublicIpAddresses": null,
            "IPv6Addresses": ["240d::1"],
            "GPUInfo": {"GPUCount": null},
            "Tags": [{"Key": "env", "Value": "prod"}],
            "LatestOperationState": "SUCCESS",
            "SomeFieldAddedLater": true
        }))
        .unwrap();
        assert_eq!(instance.cpu, 2);
        assert_eq!(instance.instance_state, InstanceState::Running);
        assert_eq!(instance.zone(), Some("ap-guangzhou-3"));
        assert_eq!(instance.primary_ip(), Some("172.16.0.3"));
        assert_eq!(instance.ipv6_addresses, vec!["240d::1"]);
        assert_eq!(instance.tag("env"), Some("prod"));
        assert!(instance.public_ip_addresses.is_empty());
    }

    #[test]
    fn test_run_instances_request_omits_unset_fields() {
        let request = RunInstancesRequest {
            placement: Some(Placement::zone("ap-guangzhou-3")),
            image_id: Some("img-pmqg1cw7".to_string()),
            instance_type: Some("S5.MEDIUM4".to_string()),
            login_settings: Some(LoginSettings {
                key_ids: vec!["skey-abc".to_string()],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "Placement": {"Zone": "ap-guangzhou-3"},
                "InstanceType": "S5.MEDIUM4",
                "ImageId": "img-pmqg1cw7",
                "LoginSettings": {"KeyIds": ["skey-abc"]}
            })
        );
    }

    #[test]
    fn test_password_request_debug_is_redacted() {
        let request = ResetInstancesPasswordRequest {
            instance_ids: vec!["ins-1".to_string()],
            password: "S3cret!pass".to_string(),
            ..Default::default()
        };
        assert!(!format!("{request:?}").contains("S3cret"));
    }
}
