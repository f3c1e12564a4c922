//! `richtext-lint` CLI: check that `richtext` keys hold stringified JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Lint a document from stdin
//! echo '{"richtext": "not json"}' | richtext-lint
//!
//! # Lint files and every .json file in a directory, as a table
//! richtext-lint page.json content/ --format table
//!
//! # Machine-readable output with the documents echoed back
//! richtext-lint page.json --format json --show-document
//! ```
//!
//! Exit status is 0 when every document is valid, 1 when any document has
//! findings, and 2 when any input could not be read or decoded.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use richtext_lint::{
    load_inputs, parse_slice, render, DecodeError, Format, KeyMatcher, Outcome, Report,
    RichtextValidator, StdFileSystem, Status,
};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "richtext-lint",
    version,
    about = "Check that every 'richtext' key in a JSON document holds stringified JSON"
)]
struct Cli {
    /// JSON files or directories to lint (reads stdin if omitted)
    inputs: Vec<PathBuf>,

    /// Output layout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Do not descend into containers nested deeper than this
    #[arg(long, value_name = "DEPTH")]
    max_depth: Option<usize>,

    /// Check keys matching this regex instead of keys containing "richtext"
    #[arg(long, value_name = "REGEX")]
    key_pattern: Option<String>,

    /// Echo each decoded document (stdin, files, and files found in directories)
    #[arg(long)]
    show_document: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Table,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Format::Text,
            OutputFormat::Table => Format::Table,
            OutputFormat::Json => Format::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "richtext_lint=debug",
        _ => "richtext_lint=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let validator = build_validator(cli)?;
    let fs = StdFileSystem;
    let mut reports = Vec::new();

    if cli.inputs.is_empty() {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read from stdin")?;
        reports.push(lint_loaded("<stdin>", parse_slice(&buf), &validator, cli.show_document));
    }

    for (path, loaded) in load_inputs(&cli.inputs, &fs) {
        let source = path.display().to_string();
        reports.push(lint_loaded(&source, loaded, &validator, cli.show_document));
    }

    let rendered = render(&reports, cli.format.into()).context("Failed to render report")?;
    io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("Failed to write to stdout")?;

    Ok(exit_code(&reports))
}

fn build_validator(cli: &Cli) -> Result<RichtextValidator> {
    let mut validator = RichtextValidator::new();
    if let Some(pattern) = &cli.key_pattern {
        let matcher = KeyMatcher::pattern(pattern)
            .with_context(|| format!("Invalid --key-pattern: '{}'", pattern))?;
        validator = validator.with_matcher(matcher);
    }
    if let Some(depth) = cli.max_depth {
        validator = validator.with_max_depth(depth);
    }
    debug!(matcher = %validator.matcher().describe(), max_depth = ?validator.max_depth(), "configured");
    Ok(validator)
}

fn lint_loaded(
    source: &str,
    loaded: Result<Value, DecodeError>,
    validator: &RichtextValidator,
    show_document: bool,
) -> Report {
    match loaded {
        Ok(document) => {
            let outcome = Outcome::from(validator.check(&document));
            let report = Report::new(source, &outcome);
            if show_document {
                report.with_document(document)
            } else {
                report
            }
        }
        Err(err) => Report::new(source, &Outcome::DecodeFailed(err)),
    }
}

fn exit_code(reports: &[Report]) -> ExitCode {
    if reports.iter().any(|r| r.status == Status::DecodeFailed) {
        ExitCode::from(2)
    } else if reports.iter().any(|r| r.status == Status::Invalid) {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
