// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Image types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Filter, Tag, TagSpecification, null_as_default};

/// Snapshot backing a custom image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Snapshot {
    pub snapshot_id: String,
    /// SYSTEM_DISK or DATA_DISK
    #[serde(default, deserialize_with = "null_as_default")]
    pub disk_usage: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub disk_size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    pub image_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub os_name: String,
    /// PRIVATE_IMAGE, PUBLIC_IMAGE, SHARED_IMAGE or MARKET_IMAGE
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_type: String,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_description: String,
    /// GB
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_size: i64,
    /// x86_64 or arm
    #[serde(default, deserialize_with = "null_as_default")]
    pub architecture: String,
    /// CREATING, NORMAL, CREATEFAILED, USING, SYNCING, IMPORTING,
    /// IMPORTFAILED
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_state: String,
    /// e.g. "TencentOS", "Ubuntu", "Windows"
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(default)]
    pub image_creator: Option<String>,
    /// OFFICIAL, CREATE_IMAGE or EXTERNAL_IMPORT
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_source: String,
    #[serde(default)]
    pub sync_percent: Option<i64>,
    #[serde(default)]
    pub is_support_cloudinit: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub snapshot_set: Vec<Snapshot>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
    /// TencentCloud or BYOL
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub image_family: Option<String>,
    #[serde(default)]
    pub image_deprecated: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SharePermission {
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_time: String,
    pub account_id: String,
}

/// Copy of an image in another region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SyncImage {
    pub image_id: String,
    pub region: String,
}

/// List images
///
/// Filters: image-id, image-type, image-name, platform, image-state, tag-key,
/// tag-value and `tag:<key>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImagesRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    /// Only return images usable with this instance type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImagesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_set: Vec<Image>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    pub request_id: String,
}

/// Capture an image from an instance
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateImageRequest {
    pub image_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_description: Option<String>,
    /// "TRUE" shuts the instance down first if it is running
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_poweroff: Option<String>,
    /// "TRUE" runs Sysprep, Windows only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sysprep: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_disk_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub snapshot_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_specification: Vec<TagSpecification>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateImageResponse {
    #[serde(default)]
    pub image_id: Option<String>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteImagesRequest {
    pub image_ids: Vec<String>,
    /// Also delete the snapshots the images were built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_binded_snap: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyImageAttributeRequest {
    pub image_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_description: Option<String>,
}

/// Copy images to other regions
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SyncImagesRequest {
    pub image_ids: Vec<String>,
    pub destination_regions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    /// Return the ids of the destination images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_set_required: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct SyncImagesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_set: Vec<SyncImage>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImageSharePermissionRequest {
    pub image_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeImageSharePermissionResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub share_permission_set: Vec<SharePermission>,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyImageSharePermissionRequest {
    pub image_id: String,
    /// Root account ids to share with or stop sharing with
    pub account_ids: Vec<String>,
    /// SHARE or CANCEL
    pub permission: String,
}
