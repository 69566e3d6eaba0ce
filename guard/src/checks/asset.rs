// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checks::errors::Error;
use crate::checks::Result;

/// One asset-inventory change notification reduced to the fields the label
/// checks consume. Built once per inbound payload and never mutated after.
///
/// `labels` is `None` when the resource carried no labels object at all,
/// which evaluation treats the same as an empty map. The distinction is kept
/// so callers can tell "created without labels" apart from "empty labels".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResourceChangeEvent {
    #[serde(rename = "assetType")]
    pub asset_type: String,
    pub name: String,
    pub parent: String,
    pub labels: Option<IndexMap<String, String>>,
}

impl ResourceChangeEvent {
    pub fn label_count(&self) -> usize {
        self.labels.as_ref().map_or(0, IndexMap::len)
    }

    pub fn has_label(&self, key: &str) -> bool {
        self.labels
            .as_ref()
            .map_or(false, |labels| labels.contains_key(key))
    }
}

//
// Wire shapes. Only `asset.assetType` and `asset.name` are required for a
// usable verdict, everything else degrades to empty defaults.
//
#[derive(Deserialize, Debug)]
struct FeedNotification {
    asset: Option<AssetRecord>,
}

#[derive(Deserialize, Debug)]
struct AssetRecord {
    #[serde(rename = "assetType", default)]
    asset_type: String,
    #[serde(default)]
    name: String,
    resource: Option<ResourceBody>,
}

#[derive(Deserialize, Debug)]
struct ResourceBody {
    #[serde(default)]
    parent: String,
    data: Option<ResourceData>,
}

#[derive(Deserialize, Debug)]
struct ResourceData {
    labels: Option<IndexMap<String, String>>,
}

/// Decodes a raw notification body into a [`ResourceChangeEvent`].
///
/// Two payload shapes are accepted: the direct asset-change document, and a
/// pub/sub push envelope whose `message.data` field carries the same document
/// base64-encoded. A top-level `message` member selects the envelope path.
pub fn decode_event(payload: &str) -> Result<ResourceChangeEvent> {
    let document = serde_json::from_str::<serde_json::Value>(payload)?;
    let notification = match document.get("message") {
        Some(message) => {
            let data = message
                .get("data")
                .and_then(serde_json::Value::as_str)
                .ok_or_else(|| {
                    Error::MalformedEnvelope(String::from(
                        "message.data is missing or is not a string",
                    ))
                })?;
            let decoded = BASE64.decode(data)?;
            serde_json::from_slice::<FeedNotification>(&decoded)?
        }
        None => serde_json::from_value::<FeedNotification>(document)?,
    };
    notification_to_event(notification)
}

fn notification_to_event(notification: FeedNotification) -> Result<ResourceChangeEvent> {
    let asset = notification
        .asset
        .ok_or_else(|| Error::MissingRequiredField(String::from("asset")))?;
    if asset.asset_type.is_empty() {
        return Err(Error::MissingRequiredField(String::from("asset.assetType")));
    }
    if asset.name.is_empty() {
        return Err(Error::MissingRequiredField(String::from("asset.name")));
    }

    let (parent, labels) = match asset.resource {
        Some(resource) => (resource.parent, resource.data.and_then(|data| data.labels)),
        None => (String::new(), None),
    };

    Ok(ResourceChangeEvent {
        asset_type: asset.asset_type,
        name: asset.name,
        parent,
        labels,
    })
}

#[cfg(test)]
#[path = "asset_tests.rs"]
mod asset_tests;
