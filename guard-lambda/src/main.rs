// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;
use std::sync::Arc;

use lambda_runtime::{handler_fn, Context, Error};
use log::{error, info, warn, LevelFilter};
use serde_derive::{Deserialize, Serialize};
use simple_logger::SimpleLogger;

use label_guard::{decode_event, evaluate, LabelPolicy};

fn default_as_empty() -> String {
    "".to_string()
}

#[derive(Deserialize, Debug)]
struct CustomEvent {
    // raw notification body: direct asset-change JSON or a pub/sub push
    // envelope with base64 message data
    #[serde(rename = "payload")]
    payload: String,
    // optional inline policy YAML overriding the one loaded at startup
    #[serde(rename = "policy", default = "default_as_empty")]
    policy: String,
}

#[derive(Serialize)]
struct CustomOutput {
    verdict: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct FailureResponse {
    pub body: String,
}

// Implement Display for the Failure response so that we can then implement Error.
impl std::fmt::Display for FailureResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.body)
    }
}

// Implement Error for the FailureResponse so that we can `?` (try) the Response
// returned by `lambda_runtime::run(func).await` in `fn main`.
impl std::error::Error for FailureResponse {}

#[tokio::main]
async fn main() -> Result<(), Error> {
    SimpleLogger::new().with_level(LevelFilter::Info).init().unwrap();

    // The label policy is loaded exactly once per process; every invocation
    // shares the same immutable set of mandatory keys.
    let policy_file = std::env::var("POLICY_FILE").unwrap_or_default();
    let policy = if policy_file.is_empty() {
        LabelPolicy::default()
    } else {
        LabelPolicy::from_file(Path::new(&policy_file))?
    };
    info!("Loaded label policy with {} mandatory key(s)", policy.len());
    let policy = Arc::new(policy);

    let func = handler_fn(move |event: CustomEvent, context: Context| {
        let policy = Arc::clone(&policy);
        async move { check_labels(event, context, policy).await }
    });
    lambda_runtime::run(func).await?;
    Ok(())
}

pub(crate) async fn check_labels(
    e: CustomEvent,
    _c: Context,
    policy: Arc<LabelPolicy>,
) -> Result<CustomOutput, Error> {
    let policy = if e.policy.is_empty() {
        policy
    } else {
        let inline = LabelPolicy::from_yaml_str(&e.policy).map_err(|err| FailureResponse {
            body: format!("Invalid inline policy: {}", err),
        })?;
        Arc::new(inline)
    };

    let event = match decode_event(&e.payload) {
        Ok(event) => event,
        Err(err) => {
            error!("Rejected notification: {}", err);
            return Err(Box::new(FailureResponse {
                body: format!("Rejected notification: {}", err),
            }));
        }
    };

    let verdict = evaluate(&event, &policy);
    info!("Asset Type: {}", verdict.asset_type);
    info!("Name: {}", verdict.resource_name);
    info!("Parent: {}", verdict.parent);
    info!("Labels count: {}", verdict.label_count);
    if !verdict.compliant {
        warn!(
            "Resource with missing Label - Name: {} | Asset Type: {} | Parent: {} | Missing keys: [{}]",
            verdict.resource_name,
            verdict.asset_type,
            verdict.parent,
            verdict.missing_keys.join(", ")
        );
    }

    Ok(CustomOutput {
        verdict: serde_json::to_value(&verdict)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NON_COMPLIANT_PAYLOAD: &str = r#"{"asset":{"assetType":"cloudresourcemanager.googleapis.com/Project","name":"//cloudresourcemanager.googleapis.com/projects/my-project","resource":{"parent":"//cloudresourcemanager.googleapis.com/organizations/42","data":{}}}}"#;
    const POLICY: &str = "mandatory:\n  - owner\n";
    const FAILURE_MESSAGE: &str = "Failed to handle event";

    #[tokio::test]
    async fn test_handler_flags_missing_labels() {
        let context = Context::default();

        let request = CustomEvent {
            payload: NON_COMPLIANT_PAYLOAD.to_string(),
            policy: POLICY.to_string(),
        };

        let response = check_labels(request, context, Arc::new(LabelPolicy::default()))
            .await
            .expect(FAILURE_MESSAGE);
        assert_eq!(response.verdict["compliant"], false);
        assert_eq!(response.verdict["missingKeys"], serde_json::json!(["owner"]));
    }

    #[tokio::test]
    async fn test_handler_uses_startup_policy_when_no_override() {
        let context = Context::default();
        let policy = Arc::new(LabelPolicy::new(vec!["env"]).expect("valid policy"));

        let request = CustomEvent {
            payload: NON_COMPLIANT_PAYLOAD.to_string(),
            policy: String::new(),
        };

        let response = check_labels(request, context, policy)
            .await
            .expect(FAILURE_MESSAGE);
        assert_eq!(response.verdict["missingKeys"], serde_json::json!(["env"]));
    }

    #[tokio::test]
    async fn test_handler_rejects_undecodable_payload() {
        let context = Context::default();

        let request = CustomEvent {
            payload: "{}".to_string(),
            policy: POLICY.to_string(),
        };

        let result = check_labels(request, context, Arc::new(LabelPolicy::default())).await;
        assert!(result.is_err());
    }
}
