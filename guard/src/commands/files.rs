// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;

use walkdir::{DirEntry, WalkDir};

use crate::checks::errors::Error;

pub(crate) fn read_file_content(file: File) -> Result<String, std::io::Error> {
    let mut file_content = String::new();
    let mut buf_reader = BufReader::new(file);
    buf_reader.read_to_string(&mut file_content)?;
    Ok(file_content)
}

pub(crate) fn alphabetical(first: &DirEntry, second: &DirEntry) -> Ordering {
    first.file_name().cmp(&second.file_name())
}

pub(crate) fn last_modified(first: &DirEntry, second: &DirEntry) -> Ordering {
    match (first.metadata(), second.metadata()) {
        (Ok(first_meta), Ok(second_meta)) => {
            match (first_meta.modified(), second_meta.modified()) {
                (Ok(first_time), Ok(second_time)) => first_time.cmp(&second_time),
                (_, _) => Ordering::Equal,
            }
        }
        (_, _) => Ordering::Equal,
    }
}

pub(crate) fn get_files_with_filter<S, F>(
    file: &str,
    sort: S,
    filter: F,
) -> Result<Vec<PathBuf>, Error>
where
    S: FnMut(&DirEntry, &DirEntry) -> Ordering + Send + Sync + 'static,
    F: Fn(&DirEntry) -> bool,
{
    let mut selected = Vec::with_capacity(10);
    let walker = WalkDir::new(file).sort_by(sort).into_iter();
    let dir_check = |entry: &DirEntry| {
        // select directories to traverse
        if entry.path().is_dir() {
            return true;
        }
        filter(entry)
    };
    for entry in walker.filter_entry(dir_check).flatten() {
        if entry.path().is_file() {
            selected.push(entry.into_path());
        }
    }

    Ok(selected)
}
