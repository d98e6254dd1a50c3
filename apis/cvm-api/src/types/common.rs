// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Building blocks shared by several actions

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name/values filter accepted by `Describe*` actions
///
/// Values within one filter are OR-ed; separate filters are AND-ed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Filter {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

impl Filter {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
}

/// Tags to attach to resources created by the call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TagSpecification {
    /// "instance", "host", "image" or "keypair"
    pub resource_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

/// Where an instance lives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Placement {
    /// Availability zone, e.g. "ap-guangzhou-6"
    #[serde(default, deserialize_with = "null_as_default")]
    pub zone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    /// CDH ids, for instances on dedicated hosts
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub host_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub host_ips: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedicated_cluster_id: Option<String>,
}

impl Placement {
    pub fn zone(zone: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SystemDisk {
    /// LOCAL_BASIC, LOCAL_SSD, CLOUD_BASIC, CLOUD_SSD, CLOUD_PREMIUM, CLOUD_BSSD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_id: Option<String>,
    /// Size in GB
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DataDisk {
    /// Size in GB
    pub disk_size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_with_instance: Option<bool>,
    /// Create the disk from this snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypt: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
    /// MB/s, for CLOUD_TSSD and CLOUD_HSSD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput_performance: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdc_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct VirtualPrivateCloud {
    pub vpc_id: String,
    pub subnet_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_vpc_gateway: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub private_ip_addresses: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_address_count: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InternetAccessible {
    /// BANDWIDTH_PREPAID, TRAFFIC_POSTPAID_BY_HOUR, BANDWIDTH_POSTPAID_BY_HOUR
    /// or BANDWIDTH_PACKAGE
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_charge_type: Option<String>,
    /// Mbps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_max_bandwidth_out: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip_assigned: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bandwidth_package_id: Option<String>,
    #[serde(
        rename = "IPv4AddressType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ipv4_address_type: Option<String>,
    #[serde(
        rename = "IPv6AddressType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ipv6_address_type: Option<String>,
    #[serde(
        rename = "AntiDDoSPackageId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub anti_ddos_package_id: Option<String>,
}

/// Login configuration for a new or reset instance
///
/// Set exactly one of a password, key ids, or `keep_image_login`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LoginSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub key_ids: Vec<String>,
    /// "true" keeps the login settings baked into a custom image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_image_login: Option<String>,
}

impl std::fmt::Debug for LoginSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginSettings")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("key_ids", &self.key_ids)
            .field("keep_image_login", &self.keep_image_login)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceEnabled {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Agents installed on first boot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct EnhancedService {
    /// Cloud Workload Protection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_service: Option<ServiceEnabled>,
    /// Cloud Monitor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_service: Option<ServiceEnabled>,
    /// TencentCloud Automation Tools
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automation_service: Option<ServiceEnabled>,
}

/// Subscription term for PREPAID instances
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceChargePrepaid {
    /// Months
    pub period: i64,
    /// NOTIFY_AND_AUTO_RENEW, NOTIFY_AND_MANUAL_RENEW or
    /// DISABLE_NOTIFY_AND_MANUAL_RENEW
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renew_flag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SpotMarketOptions {
    pub max_price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_instance_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceMarketOptionsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spot_options: Option<SpotMarketOptions>,
    /// Only "spot" is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Externals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_address: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub unsupport_networks: Vec<String>,
}

/// Scheduled action, e.g. terminate at a given time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ActionTimer {
    /// Only "TerminateInstances" is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_action: Option<String>,
    /// "YYYY-MM-DDThh:mm:ssZ"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub externals: Option<Externals>,
}

/// Launch template reference used by RunInstances
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplate {
    pub launch_template_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_template_version: Option<u64>,
}

/// One component of a price quote
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ItemPrice {
    /// Postpaid price before discount
    #[serde(default)]
    pub unit_price: Option<f64>,
    /// HOUR or GB
    #[serde(default)]
    pub charge_unit: Option<String>,
    /// Prepaid price before discount
    #[serde(default)]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub discount_price: Option<f64>,
    /// Percentage, e.g. 80 for 20% off
    #[serde(default)]
    pub discount: Option<f64>,
    #[serde(default)]
    pub unit_price_discount: Option<f64>,
    #[serde(default)]
    pub unit_price_second_step: Option<f64>,
    #[serde(default)]
    pub unit_price_third_step: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Price {
    #[serde(default)]
    pub instance_price: Option<ItemPrice>,
    #[serde(default)]
    pub bandwidth_price: Option<ItemPrice>,
}

/// Response of actions that return nothing but a request id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct EmptyResponse {
    pub request_id: String,
}

/// Decode an explicit `null` as the type's default.
///
/// The API returns `null` rather than omitting empty lists and strings,
/// which `#[serde(default)]` alone does not accept.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_serializes_pascal_case() {
        let filter = Filter::new("zone", ["ap-guangzhou-3", "ap-guangzhou-4"]);
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({"Name": "zone", "Values": ["ap-guangzhou-3", "ap-guangzhou-4"]})
        );
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        assert_eq!(
            serde_json::to_value(Placement::zone("ap-shanghai-2")).unwrap(),
            json!({"Zone": "ap-shanghai-2"})
        );
        assert_eq!(
            serde_json::to_value(DataDisk {
                disk_size: 50,
                ..Default::default()
            })
            .unwrap(),
            json!({"DiskSize": 50})
        );
    }

    #[test]
    fn test_internet_accessible_acronyms() {
        let value = serde_json::to_value(InternetAccessible {
            ipv4_address_type: Some("WanIP".to_string()),
            anti_ddos_package_id: Some("bgp-1".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            value,
            json!({"IPv4AddressType": "WanIP", "AntiDDoSPackageId": "bgp-1"})
        );
    }

    #[test]
    fn test_login_settings_debug_hides_password() {
        let login = LoginSettings {
            password: Some("Hunter2!pass".to_string()),
            ..Default::default()
        };
        let debug = format!("{login:?}");
        assert!(!debug.contains("Hunter2"));
        assert!(debug.contains("redacted"));
    }
}
