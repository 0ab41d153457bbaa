// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use yabrace::Converter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("yabrace")
        .about("Converts YAML documents into a braced, comment-preserving notation")
        .arg(
            Arg::new("input")
                .help("Input YAML file")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (defaults to stdout)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent")
                .short('i')
                .long("indent")
                .help("Indent width in spaces")
                .default_value("2")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("tab")
                .long("tab")
                .help("Indent with tabs instead of spaces")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("collapse-nested-literals")
                .long("collapse-nested-literals")
                .help("Re-quote literal blocks nested below the document root")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input_path = matches.get_one::<PathBuf>("input").unwrap();
    let input = fs::read_to_string(input_path)
        .with_context(|| format!("failed to read {}", input_path.display()))?;

    let mut converter = Converter::new().indent(*matches.get_one::<usize>("indent").unwrap());
    if matches.get_flag("tab") {
        converter = converter.tab();
    }
    if matches.get_flag("collapse-nested-literals") {
        converter = converter.collapse_nested_literals();
    }

    let rendered = converter
        .convert(&input)
        .with_context(|| format!("failed to convert {}", input_path.display()))?;

    match matches.get_one::<PathBuf>("output") {
        Some(output_path) => fs::write(output_path, &rendered)
            .with_context(|| format!("failed to write {}", output_path.display()))?,
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}
