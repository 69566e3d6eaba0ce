// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::io::Cursor;
use std::path::PathBuf;

use label_guard::utils::reader::{ReadBuffer, Reader};
use label_guard::utils::writer::{WriteBuffer, Writer};

#[non_exhaustive]
pub struct StatusCode;

#[allow(dead_code)]
impl StatusCode {
    pub const SUCCESS: i32 = 0;
    pub const PARSING_ERROR: i32 = 5;
    pub const NON_COMPLIANT: i32 = 19;
}

#[allow(dead_code)]
pub fn get_full_path_for_resource_file(path: &str) -> String {
    let mut resource = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    resource.push(path);
    resource.display().to_string()
}

#[allow(dead_code)]
pub fn read_from_resource_file(path: &str) -> String {
    std::fs::read_to_string(get_full_path_for_resource_file(path))
        .expect("unable to read resource file")
}

#[allow(dead_code)]
pub fn vec_writer() -> Writer {
    Writer::new(WriteBuffer::Vec(vec![]), WriteBuffer::Vec(vec![]))
}

#[allow(dead_code)]
pub fn empty_reader() -> Reader {
    Reader::new(ReadBuffer::Cursor(Cursor::new(vec![])))
}

#[allow(dead_code)]
pub fn cursor_reader(content: &str) -> Reader {
    Reader::new(ReadBuffer::Cursor(Cursor::new(content.as_bytes().to_vec())))
}
