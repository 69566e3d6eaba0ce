// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error parsing incoming JSON payload {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Error parsing policy YAML {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("I/O error when reading {0}")]
    IoError(#[from] std::io::Error),
    #[error("Formatting error when writing {0}")]
    FormatError(#[from] std::fmt::Error),
    #[error("Malformed notification envelope `{0}`")]
    MalformedEnvelope(String),
    #[error("Invalid base64 content inside envelope data {0}")]
    Base64Error(#[from] base64::DecodeError),
    #[error("Required field `{0}` missing from asset change payload")]
    MissingRequiredField(String),
    #[error("Invalid label policy `{0}`")]
    InvalidPolicy(String),
    #[error("The path `{0}` does not exist")]
    FileNotFoundError(String),
    #[error("{0}")]
    IllegalArguments(String),
}
