// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CHC (Cloud Hosting Cluster) physical server types
//!
//! A CHC host is a customer-owned server racked in a provider data center.
//! It is managed out of band through its BMC network and provisioned over a
//! separate deployment network.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Filter, Placement, VirtualPrivateCloud, null_as_default};

/// Boot settings used while provisioning a host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ChcDeployExtraConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mini_os_type: Option<String>,
    /// e.g. "legacy" or "uefi"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_server_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ChcHost {
    /// e.g. "chc-0a3wne0q"
    pub chc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub serial_number: String,
    /// INIT, READY, PREPARED, ASSISTING or DEPLOYING, among others
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub device_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub placement: Placement,
    #[serde(default)]
    pub bmc_virtual_private_cloud: Option<VirtualPrivateCloud>,
    #[serde(default)]
    pub bmc_ip: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bmc_security_group_ids: Vec<String>,
    #[serde(default)]
    pub deploy_virtual_private_cloud: Option<VirtualPrivateCloud>,
    #[serde(default)]
    pub deploy_ip: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deploy_security_group_ids: Vec<String>,
    /// The CVM instance provisioned onto this host, if any
    #[serde(default)]
    pub cvm_instance_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hardware_description: String,
    #[serde(rename = "CPU", default, deserialize_with = "null_as_default")]
    pub cpu: i64,
    /// GB
    #[serde(default, deserialize_with = "null_as_default")]
    pub memory: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub disk: String,
    #[serde(rename = "BmcMAC", default, deserialize_with = "null_as_default")]
    pub bmc_mac: String,
    #[serde(rename = "DeployMAC", default, deserialize_with = "null_as_default")]
    pub deploy_mac: String,
    /// HOSTING or TENANT
    #[serde(default, deserialize_with = "null_as_default")]
    pub tenant_type: String,
    #[serde(default)]
    pub deploy_extra_config: Option<ChcDeployExtraConfig>,
}

/// Actions a host currently refuses, given its state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ChcHostDeniedActions {
    pub chc_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub deny_actions: Vec<String>,
}

/// Filters: zone, instance-name, instance-state, device-type, vpc-id,
/// subnet-id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChcHostsRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chc_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChcHostsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chc_host_set: Vec<ChcHost>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChcDeniedActionsRequest {
    pub chc_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeChcDeniedActionsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub chc_host_denied_action_set: Vec<ChcHostDeniedActions>,
    pub request_id: String,
}

#[derive(Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyChcAttributeRequest {
    pub chc_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmc_user: Option<String>,
    /// BMC password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bmc_security_group_ids: Vec<String>,
}

impl std::fmt::Debug for ModifyChcAttributeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModifyChcAttributeRequest")
            .field("chc_ids", &self.chc_ids)
            .field("instance_name", &self.instance_name)
            .field("device_type", &self.device_type)
            .field("bmc_user", &self.bmc_user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("bmc_security_group_ids", &self.bmc_security_group_ids)
            .finish()
    }
}

/// Attach hosts to the BMC and deployment networks
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigureChcAssistVpcRequest {
    pub chc_ids: Vec<String>,
    pub bmc_virtual_private_cloud: VirtualPrivateCloud,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bmc_security_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_virtual_private_cloud: Option<VirtualPrivateCloud>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deploy_security_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chc_deploy_extra_config: Option<ChcDeployExtraConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ConfigureChcDeployVpcRequest {
    pub chc_ids: Vec<String>,
    pub deploy_virtual_private_cloud: VirtualPrivateCloud,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deploy_security_group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chc_deploy_extra_config: Option<ChcDeployExtraConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveChcAssistVpcRequest {
    pub chc_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveChcDeployVpcRequest {
    pub chc_ids: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn host_uses_acronym_field_names() {
        let host: ChcHost = serde_json::from_value(json!({
            "ChcId": "chc-0a3wne0q",
            "InstanceState": "READY",
            "Placement": {"Zone": "ap-guangzhou-6"},
            "CPU": 96,
            "Memory": 384,
            "BmcMAC": "aa:bb:cc:dd:ee:01",
            "DeployMAC": "aa:bb:cc:dd:ee:02",
            "BmcSecurityGroupIds": null
        }))
        .unwrap();

        assert_eq!(host.cpu, 96);
        assert_eq!(host.bmc_mac, "aa:bb:cc:dd:ee:01");
        assert_eq!(host.deploy_mac, "aa:bb:cc:dd:ee:02");
        assert_eq!(host.placement.zone, "ap-guangzhou-6");
        assert!(host.bmc_security_group_ids.is_empty());
    }

    #[test]
    fn modify_attribute_debug_hides_password() {
        let req = ModifyChcAttributeRequest {
            chc_ids: vec!["chc-0a3wne0q".to_string()],
            password: Some("hunter2-Secret".to_string()),
            ..Default::default()
        };
        let printed = format!("{req:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["Password"], "hunter2-Secret");
    }
}
