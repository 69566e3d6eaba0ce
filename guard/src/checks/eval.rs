// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use serde::Serialize;

use crate::checks::asset::ResourceChangeEvent;
use crate::checks::policy::LabelPolicy;
use crate::checks::Status;

/// Outcome of checking one resource change against the mandatory label set.
///
/// `missing_keys` preserves the policy's declared key order, so identical
/// inputs always produce an identical verdict.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComplianceVerdict {
    #[serde(rename = "resourceName")]
    pub resource_name: String,
    #[serde(rename = "assetType")]
    pub asset_type: String,
    pub parent: String,
    #[serde(rename = "labelCount")]
    pub label_count: usize,
    pub compliant: bool,
    #[serde(rename = "missingKeys")]
    pub missing_keys: Vec<String>,
}

impl ComplianceVerdict {
    pub fn status(&self) -> Status {
        if self.compliant {
            Status::PASS
        } else {
            Status::FAIL
        }
    }
}

/// Evaluates one decoded change event against the label policy.
///
/// Total over its inputs: an absent labels map counts the same as an empty
/// one, label values are never inspected, and an empty policy always yields
/// a compliant verdict.
pub fn evaluate(event: &ResourceChangeEvent, policy: &LabelPolicy) -> ComplianceVerdict {
    let missing_keys = policy
        .mandatory_keys()
        .filter(|key| !event.has_label(key))
        .map(String::from)
        .collect::<Vec<String>>();

    ComplianceVerdict {
        resource_name: event.name.clone(),
        asset_type: event.asset_type.clone(),
        parent: event.parent.clone(),
        label_count: event.label_count(),
        compliant: missing_keys.is_empty(),
        missing_keys,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
