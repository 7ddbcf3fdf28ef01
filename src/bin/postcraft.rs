//! Command-line interface for postcraft
//! Segments analysis text into titled sections and renders them.
//!
//! Usage:
//!   postcraft `<path>` [--input `<kind>`] [--format `<format>`] [--config `<file>`]
//!   postcraft --list-formats
//!
//! `<path>` may be `-` to read from stdin. Input kinds:
//!   text      - the file is one block of text, rendered as one document (default)
//!   response  - the file is an analysis response body with analysis/recommendations/rewrite
//!   model     - the file is raw generator output (possibly fenced JSON)

use clap::{Arg, ArgAction, Command};
use postcraft::sections::config::{Loader, PostcraftConfig};
use postcraft::sections::error::ProcessingError;
use postcraft::sections::formats::FormatRegistry;
use postcraft::sections::parsing::SectionParser;
use postcraft::sections::response::AnalysisResponse;
use std::io::Read;

fn main() {
    let matches = Command::new("postcraft")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Split generated post analysis text into titled sections")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the input file ('-' for stdin)")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Input kind")
                .value_parser(["text", "response", "model"])
                .default_value("text"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default from configuration: markdown)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log parsing decisions to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing formats");
    let input = matches
        .get_one::<String>("input")
        .expect("input has a default value");
    let format = matches.get_one::<String>("format").map(String::as_str);
    let config = matches.get_one::<String>("config").map(String::as_str);

    match handle_parse_command(path, input, format, config) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr; RUST_LOG wins over --verbose.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(path: Option<&str>) -> Result<PostcraftConfig, ProcessingError> {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    Ok(loader.build()?)
}

fn read_source(path: &str) -> Result<String, ProcessingError> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Handle the default parse command
fn handle_parse_command(
    path: &str,
    input: &str,
    format: Option<&str>,
    config_path: Option<&str>,
) -> Result<String, ProcessingError> {
    let config = load_config(config_path)?;
    let format = format.unwrap_or(config.output.format.as_str());
    let registry = FormatRegistry::with_heading_level(config.output.heading_level);
    let parser = SectionParser::with_options(config.parsing.to_options());
    let source = read_source(path)?;
    log::debug!("read {} bytes from {}", source.len(), path);

    let output = match input {
        "text" => registry.serialize(&parser.parse(&source), format)?,
        "response" => {
            let report = AnalysisResponse::from_json(&source)?.parse(&parser);
            registry.serialize_report(&report, format)?
        }
        "model" => {
            let report = AnalysisResponse::from_model_output(&source)?.parse(&parser);
            registry.serialize_report(&report, format)?
        }
        other => return Err(ProcessingError::InvalidInputKind(other.to_string())),
    };

    Ok(output)
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        let description = registry
            .get(&name)
            .map(|formatter| formatter.description())
            .unwrap_or_default();
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}
