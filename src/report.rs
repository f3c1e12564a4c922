//! Rendering lint outcomes for people and machines.

use std::fmt::Write as _;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::Finding;
use crate::loading::Outcome;

pub const SUCCESS_LINE: &str = "All 'richtext' keys have valid JSON stringified values!";
pub const FAILURE_HEADER: &str = "Validation Errors Found:";
pub const DECODE_FAILURE_LINE: &str = "Invalid JSON file. Please upload a valid JSON file.";

/// Output layouts supported by [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One message per finding.
    #[default]
    Text,
    /// Key, value and error columns.
    Table,
    /// Pretty-printed JSON array of reports.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Valid,
    Invalid,
    DecodeFailed,
}

/// The outcome for one source document, in a serializable shape.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    pub status: Status,
    pub findings: Vec<Finding>,
    /// Number of findings per code, in order of first occurrence.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub counts: IndexMap<String, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Value>,
}

impl Report {
    pub fn new(source: impl Into<String>, outcome: &Outcome) -> Self {
        let source = source.into();
        match outcome {
            Outcome::Valid => Self {
                source,
                status: Status::Valid,
                findings: Vec::new(),
                counts: IndexMap::new(),
                error: None,
                document: None,
            },
            Outcome::Invalid(findings) => Self {
                source,
                status: Status::Invalid,
                findings: findings.iter().cloned().collect(),
                counts: findings
                    .count_by_code()
                    .into_iter()
                    .map(|(code, n)| (code.to_owned(), n))
                    .collect(),
                error: None,
                document: None,
            },
            Outcome::DecodeFailed(err) => Self {
                source,
                status: Status::DecodeFailed,
                findings: Vec::new(),
                counts: IndexMap::new(),
                error: Some(err.to_string()),
                document: None,
            },
        }
    }

    /// Attaches the decoded document so it is echoed alongside the result.
    pub fn with_document(mut self, document: Value) -> Self {
        self.document = Some(document);
        self
    }
}

/// Renders `reports` in the requested layout.
///
/// Text and table output prefix each report with its source when there is
/// more than one report.
pub fn render(reports: &[Report], format: Format) -> Result<String, serde_json::Error> {
    if format == Format::Json {
        return serde_json::to_string_pretty(reports).map(|mut s| {
            s.push('\n');
            s
        });
    }

    let mut out = String::new();
    let labelled = reports.len() > 1;
    for report in reports {
        if labelled {
            let _ = writeln!(out, "== {} ==", report.source);
        }
        if let Some(document) = &report.document {
            let pretty = serde_json::to_string_pretty(document)?;
            let _ = writeln!(out, "Uploaded JSON:\n{}", pretty);
        }
        match report.status {
            Status::Valid => {
                let _ = writeln!(out, "{}", SUCCESS_LINE);
            }
            Status::DecodeFailed => {
                let _ = writeln!(out, "{}", DECODE_FAILURE_LINE);
                if let Some(error) = &report.error {
                    let _ = writeln!(out, "  {}", error);
                }
            }
            Status::Invalid => {
                let _ = writeln!(out, "{}", FAILURE_HEADER);
                match format {
                    Format::Table => render_table(&mut out, &report.findings),
                    _ => {
                        for finding in &report.findings {
                            let _ = writeln!(out, "- {}", finding.message);
                        }
                    }
                }
            }
        }
    }
    Ok(out)
}

fn render_table(out: &mut String, findings: &[Finding]) {
    let rows: Vec<[String; 3]> = findings
        .iter()
        .map(|f| [f.path.to_string(), f.value.to_string(), f.message.clone()])
        .collect();

    let header = ["Key", "Value", "Error"];
    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &widths, header);
    let _ = writeln!(
        out,
        "|{}|{}|{}|",
        "-".repeat(widths[0] + 2),
        "-".repeat(widths[1] + 2),
        "-".repeat(widths[2] + 2),
    );
    for [key, value, error] in &rows {
        write_row(out, &widths, [key.as_str(), value.as_str(), error.as_str()]);
    }
}

fn write_row(out: &mut String, widths: &[usize; 3], cells: [&str; 3]) {
    let _ = writeln!(
        out,
        "| {:<w0$} | {:<w1$} | {:<w2$} |",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    );
}
