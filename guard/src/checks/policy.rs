// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use indexmap::IndexSet;
use serde::Deserialize;

use crate::checks::errors::Error;
use crate::checks::Result;

/// Ordered set of label keys that every in-scope resource must carry.
///
/// Loaded once at process start and immutable afterwards. Keys are compared
/// exactly, case-sensitive, no trimming. An empty policy is legal and means
/// no enforcement: every resource evaluates as compliant against it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelPolicy {
    mandatory: IndexSet<String>,
}

//
// Accepted policy file layouts:
//
//   mandatory:
//     - owner
//     - env
//
// or a bare sequence of keys. JSON works as well since YAML is a superset.
//
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum PolicyDocument {
    Keyed { mandatory: Vec<String> },
    Bare(Vec<String>),
}

impl LabelPolicy {
    /// Builds a policy from the given keys, keeping declared order. Duplicate
    /// keys collapse onto their first occurrence; empty keys are rejected.
    pub fn new<K, I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut mandatory = IndexSet::new();
        for key in keys {
            let key = key.into();
            if key.is_empty() {
                return Err(Error::InvalidPolicy(String::from(
                    "mandatory label keys must be non-empty strings",
                )));
            }
            mandatory.insert(key);
        }
        Ok(LabelPolicy { mandatory })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let document = serde_yaml::from_str::<PolicyDocument>(content)?;
        let keys = match document {
            PolicyDocument::Keyed { mandatory } => mandatory,
            PolicyDocument::Bare(keys) => keys,
        };
        LabelPolicy::new(keys)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFoundError(path.display().to_string()));
        }
        let mut content = String::new();
        let mut reader = BufReader::new(File::open(path)?);
        reader.read_to_string(&mut content)?;
        LabelPolicy::from_yaml_str(&content)
    }

    /// Mandatory keys in declared order.
    pub fn mandatory_keys(&self) -> impl Iterator<Item = &str> {
        self.mandatory.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.mandatory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mandatory.is_empty()
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod policy_tests;
