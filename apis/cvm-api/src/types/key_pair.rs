// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! SSH key pair types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Filter, Tag, TagSpecification, null_as_default};

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct KeyPair {
    /// e.g. "skey-mv9q2ig5"
    pub key_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_id: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_key: String,
    /// Only returned once, by CreateKeyPair
    #[serde(default)]
    pub private_key: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub associated_instance_ids: Vec<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("key_id", &self.key_id)
            .field("key_name", &self.key_name)
            .field("project_id", &self.project_id)
            .field("description", &self.description)
            .field("public_key", &self.public_key)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("associated_instance_ids", &self.associated_instance_ids)
            .field("created_time", &self.created_time)
            .field("tags", &self.tags)
            .finish()
    }
}

/// List key pairs
///
/// Filters: project-id, key-name, tag-key, tag-value and `tag:<key>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeKeyPairsRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeKeyPairsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_pair_set: Vec<KeyPair>,
    pub request_id: String,
}

/// Generate a new key pair; the private key is returned only once
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateKeyPairRequest {
    /// Letters, digits and underscores, at most 25 characters
    pub key_name: String,
    pub project_id: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_specification: Vec<TagSpecification>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateKeyPairResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_pair: KeyPair,
    pub request_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ImportKeyPairRequest {
    pub key_name: String,
    pub project_id: i64,
    /// OpenSSH public key, e.g. "ssh-rsa AAAA..."
    pub public_key: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_specification: Vec<TagSpecification>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ImportKeyPairResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_id: String,
    pub request_id: String,
}

/// Key pairs still bound to instances cannot be deleted
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteKeyPairsRequest {
    pub key_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ModifyKeyPairAttributeRequest {
    pub key_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Bind key pairs to Linux instances; running instances need `force_stop`
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct AssociateInstancesKeyPairsRequest {
    pub instance_ids: Vec<String>,
    pub key_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_stop: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DisassociateInstancesKeyPairsRequest {
    pub instance_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_stop: Option<bool>,
}
