// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod asset;
pub(crate) mod errors;
pub(crate) mod eval;
pub(crate) mod policy;
pub(crate) mod report;

use std::fmt::Formatter;

use colored::*;

use errors::Error;

pub type Result<R> = std::result::Result<R, Error>;

/// Rendered outcome of a single compliance check.
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub enum Status {
    PASS,
    FAIL,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::PASS => write!(f, "{}", "PASS".green())?,
            Status::FAIL => write!(f, "{}", "FAIL".red())?,
        }
        Ok(())
    }
}
