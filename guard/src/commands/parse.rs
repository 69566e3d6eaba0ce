// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches};

use crate::checks::asset::decode_event;
use crate::checks::errors::Error;
use crate::command::Command;
use crate::commands::files::read_file_content;
use crate::commands::{DATA, OUTPUT, PARSE, PRINT_JSON, SUCCESS_STATUS_CODE};
use crate::utils::reader::Reader;
use crate::utils::writer::Writer;

/// Debugging aid: decodes a payload and prints the typed resource-change
/// record without evaluating any policy.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Parse {}

impl Parse {
    pub fn new() -> Self {
        Parse {}
    }
}

impl Default for Parse {
    fn default() -> Self {
        Parse::new()
    }
}

impl Command for Parse {
    fn name(&self) -> &'static str {
        PARSE
    }

    fn command(&self) -> clap::Command {
        clap::Command::new(PARSE)
            .about(
                r#"Decodes a notification payload (direct shape or pub/sub envelope) and
prints the resource-change record that the check command would evaluate.
Reads the payload from stdin when the data flag is omitted.
"#,
            )
            .arg(
                Arg::new(DATA.0)
                    .long(DATA.0)
                    .short(DATA.1)
                    .help("Payload file to decode. Reads from stdin when omitted")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new(OUTPUT.0)
                    .long(OUTPUT.0)
                    .short(OUTPUT.1)
                    .help("Write the decoded record to a file instead of stdout")
                    .action(ArgAction::Set),
            )
            .arg(
                Arg::new(PRINT_JSON.0)
                    .long(PRINT_JSON.0)
                    .short(PRINT_JSON.1)
                    .help("Print the decoded record as JSON instead of YAML")
                    .action(ArgAction::SetTrue),
            )
    }

    fn execute(
        &self,
        args: &ArgMatches,
        writer: &mut Writer,
        reader: &mut Reader,
    ) -> Result<i32, Error> {
        let content = match args.get_one::<String>(DATA.0) {
            Some(data) => {
                let path = PathBuf::from(data);
                if !path.exists() {
                    return Err(Error::FileNotFoundError(data.clone()));
                }
                read_file_content(File::open(&path)?)?
            }
            None => {
                let mut content = String::new();
                reader.read_to_string(&mut content)?;
                content
            }
        };

        let event = decode_event(&content)?;
        if args.get_flag(PRINT_JSON.0) {
            writeln!(writer, "{}", serde_json::to_string_pretty(&event)?)?;
        } else {
            write!(writer, "{}", serde_yaml::to_string(&event)?)?;
        }

        Ok(SUCCESS_STATUS_CODE)
    }
}
