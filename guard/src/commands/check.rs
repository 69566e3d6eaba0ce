// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches};
use walkdir::DirEntry;

use crate::checks::asset::decode_event;
use crate::checks::errors::Error;
use crate::checks::eval::evaluate;
use crate::checks::policy::LabelPolicy;
use crate::checks::report::{OutputFormatType, Reporter, StructuredReporter, SummaryReporter};
use crate::command::Command;
use crate::commands::files::{
    alphabetical, get_files_with_filter, last_modified, read_file_content,
};
use crate::commands::{
    ALPHABETICAL, CHECK, DATA, DATA_FILE_SUPPORTED_EXTENSIONS, ERROR_STATUS_CODE,
    FAILURE_STATUS_CODE, LAST_MODIFIED, OUTPUT_FORMAT, POLICY, SUCCESS_STATUS_CODE,
};
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Check {}

impl Check {
    pub fn new() -> Self {
        Check {}
    }
}

impl Default for Check {
    fn default() -> Self {
        Check::new()
    }
}

impl Command for Check {
    fn name(&self) -> &'static str {
        CHECK
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(CHECK)
            .about(
                r#"Evaluates captured asset change notifications against a mandatory-label
policy to determine compliance. The data flag can point to a single payload
file or to a directory of payload files; when it is omitted a single payload
is read from stdin. Every resource produces a verdict record; non-compliant
resources additionally produce a violation line naming the missing keys.
"#,
            )
            .arg(
                Arg::new(DATA.0)
                    .long(DATA.0)
                    .short(DATA.1)
                    .help("Payload file or directory of payload files. Reads from stdin when omitted")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new(POLICY.0)
                    .long(POLICY.0)
                    .short(POLICY.1)
                    .help("Label policy file listing the mandatory label keys")
                    .required(true)
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new(OUTPUT_FORMAT.0)
                    .long(OUTPUT_FORMAT.0)
                    .short(OUTPUT_FORMAT.1)
                    .value_parser(["single-line-summary", "json", "yaml"])
                    .default_value("single-line-summary")
                    .help("Output format for verdicts")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new(ALPHABETICAL.0)
                    .long(ALPHABETICAL.0)
                    .short(ALPHABETICAL.1)
                    .help("Sort payload files alphabetically inside a directory")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new(LAST_MODIFIED.0)
                    .long(LAST_MODIFIED.0)
                    .short(LAST_MODIFIED.1)
                    .conflicts_with(ALPHABETICAL.0)
                    .help("Sort payload files by last-modified time inside a directory")
                    .action(ArgAction::SetTrue),
            )
    }

    fn execute(
        &self,
        args: &ArgMatches,
        writer: &mut Writer,
        reader: &mut Reader,
    ) -> Result<i32, Error> {
        let policy_file = args.get_one::<String>(POLICY.0).ok_or_else(|| {
            Error::IllegalArguments(String::from("policy file argument is required"))
        })?;
        let policy = LabelPolicy::from_file(&PathBuf::from(policy_file))?;

        let reporter: Box<dyn Reporter> = match args
            .get_one::<String>(OUTPUT_FORMAT.0)
            .map(String::as_str)
        {
            Some("json") => Box::new(StructuredReporter::new(OutputFormatType::JSON)),
            Some("yaml") => Box::new(StructuredReporter::new(OutputFormatType::YAML)),
            _ => Box::new(SummaryReporter::new()),
        };

        let mut payloads: Vec<(String, String)> = Vec::new();
        match args.get_one::<String>(DATA.0) {
            Some(data) => {
                let base = PathBuf::from(data);
                if !base.exists() {
                    return Err(Error::FileNotFoundError(data.clone()));
                }
                let sort: fn(&DirEntry, &DirEntry) -> Ordering =
                    if args.get_flag(LAST_MODIFIED.0) {
                        last_modified
                    } else {
                        alphabetical
                    };
                let files = get_files_with_filter(data, sort, |entry| {
                    entry.file_name().to_str().map_or(false, |name| {
                        DATA_FILE_SUPPORTED_EXTENSIONS
                            .iter()
                            .any(|extension| name.ends_with(extension))
                    })
                })?;
                for file in files {
                    let content = read_file_content(File::open(&file)?)?;
                    payloads.push((file.display().to_string(), content));
                }
            }
            None => {
                let mut content = String::new();
                reader.read_to_string(&mut content)?;
                payloads.push((String::from("stdin"), content));
            }
        }

        let mut exit_code = SUCCESS_STATUS_CODE;
        for (source, content) in &payloads {
            match decode_event(content) {
                Ok(event) => {
                    let verdict = evaluate(&event, &policy);
                    if !verdict.compliant && exit_code == SUCCESS_STATUS_CODE {
                        exit_code = FAILURE_STATUS_CODE;
                    }
                    reporter.report(writer, &verdict)?;
                }
                Err(e) => {
                    // rejected events are reported, not fatal to the run
                    writer.write_err(format!("Rejected payload {}: {}", source, e))?;
                    exit_code = ERROR_STATUS_CODE;
                }
            }
        }

        Ok(exit_code)
    }
}
