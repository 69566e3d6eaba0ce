// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

mod checks;
pub mod command;
pub mod commands;
pub mod utils;

pub use crate::checks::asset::{decode_event, ResourceChangeEvent};
pub use crate::checks::errors::Error;
pub use crate::checks::eval::{evaluate, ComplianceVerdict};
pub use crate::checks::policy::LabelPolicy;
pub use crate::checks::report::{
    OutputFormatType, Reporter, StructuredReporter, SummaryReporter,
};
pub use crate::checks::Status;

/// Runs the whole pipeline once: decodes the payload, evaluates it against
/// the policy YAML and returns the verdict as a JSON string.
pub fn run_checks(payload: &str, policy: &str) -> crate::checks::Result<String> {
    crate::commands::helper::check_and_return_json(payload, policy)
}
