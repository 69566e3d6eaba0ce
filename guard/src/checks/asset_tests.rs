// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use indoc::indoc;
use pretty_assertions::assert_eq;

use super::*;

const DIRECT_WITH_LABELS: &str = indoc! {r#"
    {
        "asset": {
            "assetType": "storage.googleapis.com/Bucket",
            "name": "//storage.googleapis.com/projects/_/buckets/team-a-data",
            "resource": {
                "parent": "//cloudresourcemanager.googleapis.com/projects/1234",
                "data": {
                    "labels": {
                        "owner": "team-a",
                        "env": ""
                    }
                }
            }
        }
    }
"#};

#[test]
fn direct_shape_extracts_declared_fields() -> Result<()> {
    let event = decode_event(DIRECT_WITH_LABELS)?;
    assert_eq!(event.asset_type, "storage.googleapis.com/Bucket");
    assert_eq!(
        event.name,
        "//storage.googleapis.com/projects/_/buckets/team-a-data"
    );
    assert_eq!(
        event.parent,
        "//cloudresourcemanager.googleapis.com/projects/1234"
    );

    let labels = event.labels.as_ref().unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels.get("owner").map(String::as_str), Some("team-a"));
    // empty-string values survive untouched
    assert_eq!(labels.get("env").map(String::as_str), Some(""));
    Ok(())
}

#[test]
fn absent_labels_decode_as_none() -> Result<()> {
    let payload = r#"{
        "asset": {
            "assetType": "cloudresourcemanager.googleapis.com/Project",
            "name": "//cloudresourcemanager.googleapis.com/projects/my-project",
            "resource": {
                "parent": "//cloudresourcemanager.googleapis.com/folders/99",
                "data": {}
            }
        }
    }"#;

    let event = decode_event(payload)?;
    assert_eq!(event.labels, None);
    assert_eq!(event.label_count(), 0);
    assert!(!event.has_label("owner"));
    Ok(())
}

#[test]
fn empty_labels_map_is_distinct_from_absent() -> Result<()> {
    let payload = r#"{
        "asset": {
            "assetType": "cloudresourcemanager.googleapis.com/Project",
            "name": "//cloudresourcemanager.googleapis.com/projects/my-project",
            "resource": {
                "data": { "labels": {} }
            }
        }
    }"#;

    let event = decode_event(payload)?;
    assert!(event.labels.is_some());
    assert_eq!(event.label_count(), 0);
    Ok(())
}

#[test]
fn absent_resource_degrades_to_empty_defaults() -> Result<()> {
    let payload = r#"{
        "asset": {
            "assetType": "compute.googleapis.com/Instance",
            "name": "//compute.googleapis.com/projects/p/zones/z/instances/vm-1"
        }
    }"#;

    let event = decode_event(payload)?;
    assert_eq!(event.parent, "");
    assert_eq!(event.labels, None);
    Ok(())
}

#[test]
fn envelope_decodes_identically_to_direct_shape() -> Result<()> {
    let envelope = format!(
        r#"{{
            "message": {{
                "data": "{}",
                "messageId": "1172902505700208"
            }},
            "subscription": "projects/my-project/subscriptions/asset-feed"
        }}"#,
        BASE64.encode(DIRECT_WITH_LABELS)
    );

    let from_envelope = decode_event(&envelope)?;
    let from_direct = decode_event(DIRECT_WITH_LABELS)?;
    assert_eq!(from_envelope, from_direct);
    Ok(())
}

#[test]
fn missing_name_is_rejected() {
    let payload = r#"{
        "asset": {
            "assetType": "storage.googleapis.com/Bucket",
            "resource": { "data": { "labels": { "owner": "team-a" } } }
        }
    }"#;

    let err = decode_event(payload).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField(field) if field == "asset.name"));
}

#[test]
fn missing_asset_type_is_rejected() {
    let payload = r#"{
        "asset": {
            "name": "//storage.googleapis.com/projects/_/buckets/team-a-data"
        }
    }"#;

    let err = decode_event(payload).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField(field) if field == "asset.assetType"));
}

#[test]
fn missing_asset_object_is_rejected() {
    let err = decode_event(r#"{"priorAssetState": "DOES_NOT_EXIST"}"#).unwrap_err();
    assert!(matches!(err, Error::MissingRequiredField(field) if field == "asset"));
}

#[test]
fn envelope_without_string_data_is_rejected() {
    let err = decode_event(r#"{"message": {"data": 42}}"#).unwrap_err();
    assert!(matches!(err, Error::MalformedEnvelope(_)));

    let err = decode_event(r#"{"message": "not an object"}"#).unwrap_err();
    assert!(matches!(err, Error::MalformedEnvelope(_)));
}

#[test]
fn envelope_with_invalid_base64_is_rejected() {
    let err = decode_event(r#"{"message": {"data": "%%not-base64%%"}}"#).unwrap_err();
    assert!(matches!(err, Error::Base64Error(_)));
}

#[test]
fn invalid_json_is_rejected() {
    let err = decode_event("not json at all").unwrap_err();
    assert!(matches!(err, Error::JsonError(_)));
}

#[test]
fn non_string_label_value_is_rejected() {
    let payload = r#"{
        "asset": {
            "assetType": "storage.googleapis.com/Bucket",
            "name": "//storage.googleapis.com/projects/_/buckets/b",
            "resource": { "data": { "labels": { "owner": 7 } } }
        }
    }"#;

    let err = decode_event(payload).unwrap_err();
    assert!(matches!(err, Error::JsonError(_)));
}
