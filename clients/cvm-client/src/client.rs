// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Typed CVM client

use cvm_api::*;
use tencentcloud_auth::ProvideCredential;
use tencentcloud_common::{Action, Client, ClientProfile, Error, RequestContext};
use tencentcloud_pagination::{OffsetPaged, PagedResponse, collect_all, collect_all_concurrent};

/// Page size used by the `describe_all_*` helpers
pub const PAGE_SIZE: i64 = 100;

/// Typed wrapper over [`tencentcloud_common::Client`] for the CVM service
///
/// Every action has a plain method using a default [`RequestContext`] and a
/// `_with_context` twin that takes one, for per-call timeouts or headers.
#[derive(Debug, Clone)]
pub struct CvmClient {
    inner: Client,
}

impl CvmClient {
    /// Create a client for `region` with the default profile and no credential
    pub fn new(region: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            inner: Client::new(region)?,
        })
    }

    pub fn with_credential(self, credential: impl ProvideCredential + 'static) -> Self {
        Self {
            inner: self.inner.with_credential(credential),
        }
    }

    pub fn with_profile(self, profile: ClientProfile) -> Result<Self, Error> {
        Ok(Self {
            inner: self.inner.with_profile(profile)?,
        })
    }

    /// Wrap an already configured transport client
    pub fn from_common(client: Client) -> Self {
        Self { inner: client }
    }

    /// Access the underlying transport client, e.g. for `send_raw`
    pub fn common(&self) -> &Client {
        &self.inner
    }

    pub fn region(&self) -> &str {
        self.inner.region()
    }

    async fn collect<Req>(
        &self,
        request: Req,
    ) -> Result<Vec<<Req::Response as PagedResponse>::Item>, Error>
    where
        Req: Action + OffsetPaged,
        Req::Response: PagedResponse,
    {
        let ctx = RequestContext::default();
        let ctx = &ctx;
        collect_all(&request, PAGE_SIZE, |page| async move {
            self.inner.send(ctx, &page).await
        })
        .await
    }

    // ========================================================================
    // Paginated helpers
    // ========================================================================

    /// Every instance matching `filters`, fetched page by page
    pub async fn describe_all_instances(
        &self,
        filters: Vec<Filter>,
    ) -> Result<Vec<Instance>, Error> {
        self.collect(DescribeInstancesRequest {
            filters,
            ..Default::default()
        })
        .await
    }

    /// Every instance matching `filters`, fetching pages after the first
    /// with up to `max_concurrency` calls in flight
    ///
    /// # Arguments
    /// * `filters` - DescribeInstances filters
    /// * `max_concurrency` - Upper bound on simultaneous requests (at least 1)
    pub async fn describe_all_instances_concurrent(
        &self,
        filters: Vec<Filter>,
        max_concurrency: usize,
    ) -> Result<Vec<Instance>, Error> {
        let request = DescribeInstancesRequest {
            filters,
            ..Default::default()
        };
        let ctx = RequestContext::default();
        let ctx = &ctx;
        collect_all_concurrent(&request, PAGE_SIZE, max_concurrency.max(1), |page| async move {
            self.inner.send(ctx, &page).await
        })
        .await
    }

    pub async fn describe_all_images(&self, filters: Vec<Filter>) -> Result<Vec<Image>, Error> {
        self.collect(DescribeImagesRequest {
            filters,
            ..Default::default()
        })
        .await
    }

    pub async fn describe_all_key_pairs(
        &self,
        filters: Vec<Filter>,
    ) -> Result<Vec<KeyPair>, Error> {
        self.collect(DescribeKeyPairsRequest {
            filters,
            ..Default::default()
        })
        .await
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Look up one instance; `None` when no such instance exists
    pub async fn describe_instance_by_id(
        &self,
        instance_id: &str,
    ) -> Result<Option<Instance>, Error> {
        let request = DescribeInstancesRequest {
            instance_ids: vec![instance_id.to_string()],
            ..Default::default()
        };
        let response = not_found_as_none(self.describe_instances(&request).await)?;
        Ok(response.and_then(|r| {
            r.instance_set
                .into_iter()
                .find(|i| i.instance_id == instance_id)
        }))
    }

    /// Look up one key pair; `None` when no such key pair exists
    pub async fn describe_key_pair_by_id(&self, key_id: &str) -> Result<Option<KeyPair>, Error> {
        let request = DescribeKeyPairsRequest {
            key_ids: vec![key_id.to_string()],
            ..Default::default()
        };
        let response = not_found_as_none(self.describe_key_pairs(&request).await)?;
        Ok(response.and_then(|r| r.key_pair_set.into_iter().find(|k| k.key_id == key_id)))
    }

    /// Look up one image; `None` when no such image exists
    pub async fn describe_image_by_id(&self, image_id: &str) -> Result<Option<Image>, Error> {
        let request = DescribeImagesRequest {
            image_ids: vec![image_id.to_string()],
            ..Default::default()
        };
        let response = not_found_as_none(self.describe_images(&request).await)?;
        Ok(response.and_then(|r| r.image_set.into_iter().find(|i| i.image_id == image_id)))
    }
}

/// Map any `*.NotFound` API error to `None`
fn not_found_as_none<T>(result: Result<T, Error>) -> Result<Option<T>, Error> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::Api(e)) if e.code.ends_with(".NotFound") => Ok(None),
        Err(e) => Err(e),
    }
}

macro_rules! cvm_actions {
    ($($(#[$meta:meta])* $method:ident, $with_context:ident => $req:ty;)*) => {
        impl CvmClient {
            $(
                $(#[$meta])*
                pub async fn $method(
                    &self,
                    request: &$req,
                ) -> Result<<$req as Action>::Response, Error> {
                    self.inner.send(&RequestContext::default(), request).await
                }

                #[doc = concat!("`", stringify!($method), "` with a [`RequestContext`]")]
                pub async fn $with_context(
                    &self,
                    ctx: &RequestContext,
                    request: &$req,
                ) -> Result<<$req as Action>::Response, Error> {
                    self.inner.send(ctx, request).await
                }
            )*
        }
    };
}

cvm_actions! {
    // Regions and zones
    /// Regions the account can use
    describe_regions, describe_regions_with_context => DescribeRegionsRequest;
    /// Availability zones of the client's region
    describe_zones, describe_zones_with_context => DescribeZonesRequest;
    /// Instance types on sale per zone, with prices
    describe_zone_instance_config_infos, describe_zone_instance_config_infos_with_context =>
        DescribeZoneInstanceConfigInfosRequest;
    describe_instance_type_configs, describe_instance_type_configs_with_context =>
        DescribeInstanceTypeConfigsRequest;
    describe_instance_family_configs, describe_instance_family_configs_with_context =>
        DescribeInstanceFamilyConfigsRequest;

    // Instances
    /// Create instances; creation continues after the call returns
    run_instances, run_instances_with_context => RunInstancesRequest;
    inquiry_price_run_instances, inquiry_price_run_instances_with_context =>
        InquiryPriceRunInstancesRequest;
    /// One page of instances
    describe_instances, describe_instances_with_context => DescribeInstancesRequest;
    describe_instances_status, describe_instances_status_with_context =>
        DescribeInstancesStatusRequest;
    describe_instances_attributes, describe_instances_attributes_with_context =>
        DescribeInstancesAttributesRequest;
    /// A single-use VNC URL, valid for 15 seconds
    describe_instance_vnc_url, describe_instance_vnc_url_with_context =>
        DescribeInstanceVncUrlRequest;
    start_instances, start_instances_with_context => StartInstancesRequest;
    stop_instances, stop_instances_with_context => StopInstancesRequest;
    reboot_instances, reboot_instances_with_context => RebootInstancesRequest;
    /// Return instances; prepaid instances go to the recycle bin first
    terminate_instances, terminate_instances_with_context => TerminateInstancesRequest;
    /// Reinstall the operating system
    reset_instance, reset_instance_with_context => ResetInstanceRequest;
    reset_instances_type, reset_instances_type_with_context => ResetInstancesTypeRequest;
    reset_instances_password, reset_instances_password_with_context =>
        ResetInstancesPasswordRequest;
    reset_instances_internet_max_bandwidth, reset_instances_internet_max_bandwidth_with_context =>
        ResetInstancesInternetMaxBandwidthRequest;
    resize_instance_disks, resize_instance_disks_with_context => ResizeInstanceDisksRequest;
    modify_instances_attribute, modify_instances_attribute_with_context =>
        ModifyInstancesAttributeRequest;
    modify_instances_project, modify_instances_project_with_context =>
        ModifyInstancesProjectRequest;
    modify_instances_vpc_attribute, modify_instances_vpc_attribute_with_context =>
        ModifyInstancesVpcAttributeRequest;
    modify_instances_charge_type, modify_instances_charge_type_with_context =>
        ModifyInstancesChargeTypeRequest;
    modify_instances_renew_flag, modify_instances_renew_flag_with_context =>
        ModifyInstancesRenewFlagRequest;

    // Images
    describe_images, describe_images_with_context => DescribeImagesRequest;
    create_image, create_image_with_context => CreateImageRequest;
    delete_images, delete_images_with_context => DeleteImagesRequest;
    modify_image_attribute, modify_image_attribute_with_context => ModifyImageAttributeRequest;
    /// Copy images to other regions
    sync_images, sync_images_with_context => SyncImagesRequest;
    describe_image_share_permission, describe_image_share_permission_with_context =>
        DescribeImageSharePermissionRequest;
    modify_image_share_permission, modify_image_share_permission_with_context =>
        ModifyImageSharePermissionRequest;

    // Key pairs
    describe_key_pairs, describe_key_pairs_with_context => DescribeKeyPairsRequest;
    /// Generate a key pair; the private key is only returned here
    create_key_pair, create_key_pair_with_context => CreateKeyPairRequest;
    import_key_pair, import_key_pair_with_context => ImportKeyPairRequest;
    delete_key_pairs, delete_key_pairs_with_context => DeleteKeyPairsRequest;
    modify_key_pair_attribute, modify_key_pair_attribute_with_context =>
        ModifyKeyPairAttributeRequest;
    associate_instances_key_pairs, associate_instances_key_pairs_with_context =>
        AssociateInstancesKeyPairsRequest;
    disassociate_instances_key_pairs, disassociate_instances_key_pairs_with_context =>
        DisassociateInstancesKeyPairsRequest;

    // Launch templates
    create_launch_template, create_launch_template_with_context => CreateLaunchTemplateRequest;
    create_launch_template_version, create_launch_template_version_with_context =>
        CreateLaunchTemplateVersionRequest;
    describe_launch_templates, describe_launch_templates_with_context =>
        DescribeLaunchTemplatesRequest;
    describe_launch_template_versions, describe_launch_template_versions_with_context =>
        DescribeLaunchTemplateVersionsRequest;
    delete_launch_template, delete_launch_template_with_context => DeleteLaunchTemplateRequest;
    delete_launch_template_versions, delete_launch_template_versions_with_context =>
        DeleteLaunchTemplateVersionsRequest;
    modify_launch_template_default_version, modify_launch_template_default_version_with_context =>
        ModifyLaunchTemplateDefaultVersionRequest;

    // Reserved instances
    describe_reserved_instances, describe_reserved_instances_with_context =>
        DescribeReservedInstancesRequest;
    describe_reserved_instances_offerings, describe_reserved_instances_offerings_with_context =>
        DescribeReservedInstancesOfferingsRequest;
    purchase_reserved_instances_offering, purchase_reserved_instances_offering_with_context =>
        PurchaseReservedInstancesOfferingRequest;

    // Disaster recover groups
    create_disaster_recover_group, create_disaster_recover_group_with_context =>
        CreateDisasterRecoverGroupRequest;
    describe_disaster_recover_groups, describe_disaster_recover_groups_with_context =>
        DescribeDisasterRecoverGroupsRequest;
    describe_disaster_recover_group_quota, describe_disaster_recover_group_quota_with_context =>
        DescribeDisasterRecoverGroupQuotaRequest;
    modify_disaster_recover_group_attribute, modify_disaster_recover_group_attribute_with_context =>
        ModifyDisasterRecoverGroupAttributeRequest;
    delete_disaster_recover_groups, delete_disaster_recover_groups_with_context =>
        DeleteDisasterRecoverGroupsRequest;
    modify_instances_disaster_recover_group, modify_instances_disaster_recover_group_with_context =>
        ModifyInstancesDisasterRecoverGroupRequest;

    // HPC clusters
    create_hpc_cluster, create_hpc_cluster_with_context => CreateHpcClusterRequest;
    describe_hpc_clusters, describe_hpc_clusters_with_context => DescribeHpcClustersRequest;
    modify_hpc_cluster_attribute, modify_hpc_cluster_attribute_with_context =>
        ModifyHpcClusterAttributeRequest;
    delete_hpc_clusters, delete_hpc_clusters_with_context => DeleteHpcClustersRequest;

    // CHC hosts
    describe_chc_hosts, describe_chc_hosts_with_context => DescribeChcHostsRequest;
    describe_chc_denied_actions, describe_chc_denied_actions_with_context =>
        DescribeChcDeniedActionsRequest;
    modify_chc_attribute, modify_chc_attribute_with_context => ModifyChcAttributeRequest;
    configure_chc_assist_vpc, configure_chc_assist_vpc_with_context =>
        ConfigureChcAssistVpcRequest;
    configure_chc_deploy_vpc, configure_chc_deploy_vpc_with_context =>
        ConfigureChcDeployVpcRequest;
    remove_chc_assist_vpc, remove_chc_assist_vpc_with_context => RemoveChcAssistVpcRequest;
    remove_chc_deploy_vpc, remove_chc_deploy_vpc_with_context => RemoveChcDeployVpcRequest;
}
