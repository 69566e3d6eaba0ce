// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fs::File;
use std::process::exit;

mod checks;
mod command;
mod commands;
mod utils;

use checks::errors::Error;
use command::Command;
use commands::{APP_NAME, APP_VERSION, OUTPUT, PARSE};
use utils::reader::{ReadBuffer, Reader};
use utils::writer::WriteBuffer::File as WBFile;
use utils::writer::WriteBuffer::{Stderr, Stdout};
use utils::writer::Writer;

fn main() -> Result<(), Error> {
    let mut app = clap::Command::new(APP_NAME)
        .version(APP_VERSION)
        .about(
            r#"
  Label Guard checks cloud resources for mandatory-label compliance. It decodes
  asset-inventory change notifications (direct JSON documents or pub/sub push
  envelopes carrying base64 payloads), evaluates the resource labels against a
  declarative label policy and emits one verdict per resource."#,
        )
        .arg_required_else_help(true);

    let mut commands: Vec<Box<dyn Command>> = Vec::with_capacity(2);
    commands.push(Box::new(commands::check::Check::new()));
    commands.push(Box::new(commands::parse::Parse::new()));

    let mappings = commands.iter().map(|s| (s.name(), s)).fold(
        HashMap::with_capacity(commands.len()),
        |mut map, entry| {
            map.insert(entry.0, entry.1.as_ref());
            map
        },
    );

    for each in &commands {
        app = app.subcommand(each.command());
    }

    let help = app.render_usage();
    let app = app.get_matches();

    match app.subcommand() {
        Some((name, value)) => {
            if let Some(command) = mappings.get(name) {
                let mut output_writer: Writer = if PARSE == command.name() {
                    match value.get_one::<String>(OUTPUT.0) {
                        Some(file) => {
                            Writer::new(WBFile(File::create(file)?), Stderr(std::io::stderr()))
                        }
                        None => Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr())),
                    }
                } else {
                    Writer::new(Stdout(std::io::stdout()), Stderr(std::io::stderr()))
                };

                match (*command).execute(
                    value,
                    &mut output_writer,
                    &mut Reader::new(ReadBuffer::Stdin(std::io::stdin())),
                ) {
                    Err(e) => {
                        output_writer
                            .write_err(format!("Error occurred {}", e))
                            .expect("failed to write to stderr");

                        exit(-1);
                    }
                    Ok(code) => exit(code),
                }
            } else {
                println!("{}", help);
            }
        }
        None => {
            println!("{}", help);
        }
    }

    Ok(())
}
