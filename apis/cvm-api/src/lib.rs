// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Tencent Cloud CVM action definitions
//!
//! This crate describes the CVM (Cloud Virtual Machine) API, version
//! 2017-03-12. Every action is a request struct bound to its response through
//! [`tencentcloud_common::Action`]; the actions are grouped as follows:
//! - Regions, zones and instance type catalogues
//! - Instances (lifecycle, power, reconfiguration, VNC)
//! - Images and image sharing
//! - SSH key pairs
//! - Launch templates and their versions
//! - Reserved instances
//! - Disaster recover (spread placement) groups
//! - HPC clusters
//! - CHC physical hosts
//!
//! Describe actions that page with `Offset`/`Limit` also implement the
//! [`tencentcloud_pagination`] traits.

pub mod error_codes;
pub mod types;
pub use types::*;

use tencentcloud_common::Action;
use tencentcloud_pagination::{OffsetPaged, PagedResponse};

/// Service name, also the endpoint prefix (`cvm.tencentcloudapi.com`)
pub const SERVICE: &str = "cvm";

/// API version every action in this crate belongs to
pub const VERSION: &str = "2017-03-12";

macro_rules! actions {
    ($($name:ident => $req:ty, $resp:ty;)*) => {
        $(
            impl Action for $req {
                const SERVICE: &'static str = SERVICE;
                const VERSION: &'static str = VERSION;
                const NAME: &'static str = stringify!($name);
                type Response = $resp;
            }
        )*

        /// Names of every action this crate defines
        pub const ACTIONS: &[&str] = &[$(stringify!($name)),*];
    };
}

actions! {
    // ========================================================================
    // Regions and zones
    // ========================================================================
    DescribeRegions => DescribeRegionsRequest, DescribeRegionsResponse;
    DescribeZones => DescribeZonesRequest, DescribeZonesResponse;
    DescribeZoneInstanceConfigInfos =>
        DescribeZoneInstanceConfigInfosRequest, DescribeZoneInstanceConfigInfosResponse;
    DescribeInstanceTypeConfigs =>
        DescribeInstanceTypeConfigsRequest, DescribeInstanceTypeConfigsResponse;
    DescribeInstanceFamilyConfigs =>
        DescribeInstanceFamilyConfigsRequest, DescribeInstanceFamilyConfigsResponse;

    // ========================================================================
    // Instances
    // ========================================================================
    RunInstances => RunInstancesRequest, RunInstancesResponse;
    InquiryPriceRunInstances => InquiryPriceRunInstancesRequest, InquiryPriceRunInstancesResponse;
    DescribeInstances => DescribeInstancesRequest, DescribeInstancesResponse;
    DescribeInstancesStatus => DescribeInstancesStatusRequest, DescribeInstancesStatusResponse;
    DescribeInstancesAttributes =>
        DescribeInstancesAttributesRequest, DescribeInstancesAttributesResponse;
    DescribeInstanceVncUrl => DescribeInstanceVncUrlRequest, DescribeInstanceVncUrlResponse;
    StartInstances => StartInstancesRequest, EmptyResponse;
    StopInstances => StopInstancesRequest, EmptyResponse;
    RebootInstances => RebootInstancesRequest, EmptyResponse;
    TerminateInstances => TerminateInstancesRequest, EmptyResponse;
    ResetInstance => ResetInstanceRequest, EmptyResponse;
    ResetInstancesType => ResetInstancesTypeRequest, EmptyResponse;
    ResetInstancesPassword => ResetInstancesPasswordRequest, EmptyResponse;
    ResetInstancesInternetMaxBandwidth => ResetInstancesInternetMaxBandwidthRequest, EmptyResponse;
    ResizeInstanceDisks => ResizeInstanceDisksRequest, EmptyResponse;
    ModifyInstancesAttribute => ModifyInstancesAttributeRequest, EmptyResponse;
    ModifyInstancesProject => ModifyInstancesProjectRequest, EmptyResponse;
    ModifyInstancesVpcAttribute => ModifyInstancesVpcAttributeRequest, EmptyResponse;
    ModifyInstancesChargeType => ModifyInstancesChargeTypeRequest, EmptyResponse;
    ModifyInstancesRenewFlag => ModifyInstancesRenewFlagRequest, EmptyResponse;

    // ========================================================================
    // Images
    // ========================================================================
    DescribeImages => DescribeImagesRequest, DescribeImagesResponse;
    CreateImage => CreateImageRequest, CreateImageResponse;
    DeleteImages => DeleteImagesRequest, EmptyResponse;
    ModifyImageAttribute => ModifyImageAttributeRequest, EmptyResponse;
    SyncImages => SyncImagesRequest, SyncImagesResponse;
    DescribeImageSharePermission =>
        DescribeImageSharePermissionRequest, DescribeImageSharePermissionResponse;
    ModifyImageSharePermission => ModifyImageSharePermissionRequest, EmptyResponse;

    // ========================================================================
    // Key pairs
    // ========================================================================
    DescribeKeyPairs => DescribeKeyPairsRequest, DescribeKeyPairsResponse;
    CreateKeyPair => CreateKeyPairRequest, CreateKeyPairResponse;
    ImportKeyPair => ImportKeyPairRequest, ImportKeyPairResponse;
    DeleteKeyPairs => DeleteKeyPairsRequest, EmptyResponse;
    ModifyKeyPairAttribute => ModifyKeyPairAttributeRequest, EmptyResponse;
    AssociateInstancesKeyPairs => AssociateInstancesKeyPairsRequest, EmptyResponse;
    DisassociateInstancesKeyPairs => DisassociateInstancesKeyPairsRequest, EmptyResponse;

    // ========================================================================
    // Launch templates
    // ========================================================================
    CreateLaunchTemplate => CreateLaunchTemplateRequest, CreateLaunchTemplateResponse;
    CreateLaunchTemplateVersion =>
        CreateLaunchTemplateVersionRequest, CreateLaunchTemplateVersionResponse;
    DescribeLaunchTemplates => DescribeLaunchTemplatesRequest, DescribeLaunchTemplatesResponse;
    DescribeLaunchTemplateVersions =>
        DescribeLaunchTemplateVersionsRequest, DescribeLaunchTemplateVersionsResponse;
    DeleteLaunchTemplate => DeleteLaunchTemplateRequest, EmptyResponse;
    DeleteLaunchTemplateVersions => DeleteLaunchTemplateVersionsRequest, EmptyResponse;
    ModifyLaunchTemplateDefaultVersion => ModifyLaunchTemplateDefaultVersionRequest, EmptyResponse;

    // ========================================================================
    // Reserved instances
    // ========================================================================
    DescribeReservedInstances =>
        DescribeReservedInstancesRequest, DescribeReservedInstancesResponse;
    DescribeReservedInstancesOfferings =>
        DescribeReservedInstancesOfferingsRequest, DescribeReservedInstancesOfferingsResponse;
    PurchaseReservedInstancesOffering =>
        PurchaseReservedInstancesOfferingRequest, PurchaseReservedInstancesOfferingResponse;

    // ========================================================================
    // Disaster recover groups
    // ========================================================================
    CreateDisasterRecoverGroup =>
        CreateDisasterRecoverGroupRequest, CreateDisasterRecoverGroupResponse;
    DescribeDisasterRecoverGroups =>
        DescribeDisasterRecoverGroupsRequest, DescribeDisasterRecoverGroupsResponse;
    DescribeDisasterRecoverGroupQuota =>
        DescribeDisasterRecoverGroupQuotaRequest, DescribeDisasterRecoverGroupQuotaResponse;
    ModifyDisasterRecoverGroupAttribute => ModifyDisasterRecoverGroupAttributeRequest, EmptyResponse;
    DeleteDisasterRecoverGroups => DeleteDisasterRecoverGroupsRequest, EmptyResponse;
    ModifyInstancesDisasterRecoverGroup => ModifyInstancesDisasterRecoverGroupRequest, EmptyResponse;

    // ========================================================================
    // HPC clusters
    // ========================================================================
    CreateHpcCluster => CreateHpcClusterRequest, CreateHpcClusterResponse;
    DescribeHpcClusters => DescribeHpcClustersRequest, DescribeHpcClustersResponse;
    ModifyHpcClusterAttribute => ModifyHpcClusterAttributeRequest, EmptyResponse;
    DeleteHpcClusters => DeleteHpcClustersRequest, EmptyResponse;

    // ========================================================================
    // CHC hosts
    // ========================================================================
    DescribeChcHosts => DescribeChcHostsRequest, DescribeChcHostsResponse;
    DescribeChcDeniedActions => DescribeChcDeniedActionsRequest, DescribeChcDeniedActionsResponse;
    ModifyChcAttribute => ModifyChcAttributeRequest, EmptyResponse;
    ConfigureChcAssistVpc => ConfigureChcAssistVpcRequest, EmptyResponse;
    ConfigureChcDeployVpc => ConfigureChcDeployVpcRequest, EmptyResponse;
    RemoveChcAssistVpc => RemoveChcAssistVpcRequest, EmptyResponse;
    RemoveChcDeployVpc => RemoveChcDeployVpcRequest, EmptyResponse;
}

macro_rules! offset_paged {
    ($($req:ty => $resp:ty, $set:ident: $item:ty;)*) => {
        $(
            impl OffsetPaged for $req {
                fn set_page(&mut self, offset: i64, limit: i64) {
                    self.offset = Some(offset);
                    self.limit = Some(limit);
                }
            }

            impl PagedResponse for $resp {
                type Item = $item;

                fn total_count(&self) -> Option<i64> {
                    Some(self.total_count)
                }

                fn into_items(self) -> Vec<$item> {
                    self.$set
                }
            }
        )*
    };
}

offset_paged! {
    DescribeInstancesRequest => DescribeInstancesResponse, instance_set: Instance;
    DescribeInstancesStatusRequest =>
        DescribeInstancesStatusResponse, instance_status_set: InstanceStatus;
    DescribeImagesRequest => DescribeImagesResponse, image_set: Image;
    DescribeKeyPairsRequest => DescribeKeyPairsResponse, key_pair_set: KeyPair;
    DescribeLaunchTemplatesRequest =>
        DescribeLaunchTemplatesResponse, launch_template_set: LaunchTemplateInfo;
    DescribeLaunchTemplateVersionsRequest =>
        DescribeLaunchTemplateVersionsResponse,
        launch_template_version_set: LaunchTemplateVersionInfo;
    DescribeReservedInstancesRequest =>
        DescribeReservedInstancesResponse, reserved_instances_set: ReservedInstances;
    DescribeReservedInstancesOfferingsRequest =>
        DescribeReservedInstancesOfferingsResponse,
        reserved_instances_offerings_set: ReservedInstancesOffering;
    DescribeDisasterRecoverGroupsRequest =>
        DescribeDisasterRecoverGroupsResponse, disaster_recover_group_set: DisasterRecoverGroup;
    DescribeHpcClustersRequest => DescribeHpcClustersResponse, hpc_cluster_set: HpcClusterInfo;
    DescribeChcHostsRequest => DescribeChcHostsResponse, chc_host_set: ChcHost;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn action_names_are_unique() {
        let unique: HashSet<_> = ACTIONS.iter().collect();
        assert_eq!(unique.len(), ACTIONS.len());
        assert_eq!(ACTIONS.len(), 66);
    }

    #[test]
    fn actions_carry_service_and_version() {
        assert_eq!(<DescribeInstancesRequest as Action>::SERVICE, "cvm");
        assert_eq!(<DescribeInstancesRequest as Action>::VERSION, "2017-03-12");
        assert_eq!(<DescribeInstancesRequest as Action>::NAME, "DescribeInstances");
        assert_eq!(
            <ResetInstancesInternetMaxBandwidthRequest as Action>::NAME,
            "ResetInstancesInternetMaxBandwidth"
        );
    }

    #[test]
    fn set_page_fills_offset_and_limit() {
        let mut req = DescribeImagesRequest::default();
        req.set_page(200, 100);
        assert_eq!(req.offset, Some(200));
        assert_eq!(req.limit, Some(100));
    }

    #[test]
    fn paged_response_yields_its_item_set() {
        let resp = DescribeKeyPairsResponse {
            total_count: 7,
            key_pair_set: vec![KeyPair {
                key_id: "skey-mv9q2ig5".to_string(),
                ..Default::default()
            }],
            request_id: "req".to_string(),
        };
        assert_eq!(resp.total_count(), Some(7));
        let items = resp.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].key_id, "skey-mv9q2ig5");
    }
}
