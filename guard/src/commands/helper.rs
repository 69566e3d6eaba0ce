// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use crate::checks::asset::decode_event;
use crate::checks::eval::evaluate;
use crate::checks::policy::LabelPolicy;
use crate::checks::Result;

/// Single-shot pipeline entry used by the lambda front-end and library
/// consumers: decode, evaluate, serialize the verdict.
pub fn check_and_return_json(payload: &str, policy: &str) -> Result<String> {
    let policy = LabelPolicy::from_yaml_str(policy)?;
    let event = decode_event(payload)?;
    let verdict = evaluate(&event, &policy);
    Ok(serde_json::to_string_pretty(&verdict)?)
}
