// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

pub mod check;
pub(crate) mod files;
pub mod helper;
pub mod parse;

//
// Constants
//
// Application metadata
pub const APP_NAME: &str = "label-guard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
// Commands
pub const CHECK: &str = "check";
pub const PARSE: &str = "parse";
// Arguments for check
pub const ALPHABETICAL: (&str, char) = ("alphabetical", 'a');
pub const DATA: (&str, char) = ("data", 'd');
pub const LAST_MODIFIED: (&str, char) = ("last-modified", 'm');
pub const OUTPUT_FORMAT: (&str, char) = ("output-format", 'o');
pub const POLICY: (&str, char) = ("policy", 'p');
// Arguments for parse
pub const OUTPUT: (&str, char) = ("output", 'o');
pub const PRINT_JSON: (&str, char) = ("print-json", 'j');

pub(crate) const DATA_FILE_SUPPORTED_EXTENSIONS: [&str; 2] = [".json", ".jsn"];

pub const FAILURE_STATUS_CODE: i32 = 19;
pub const SUCCESS_STATUS_CODE: i32 = 0;
pub const ERROR_STATUS_CODE: i32 = 5;
