//! CSV and JSON snapshots of an evaluation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use crate::evaluate::Evaluation;

const CSV_HEADER: [&str; 6] = [
    "Submission Link",
    "Assignment Type",
    "Accessibility",
    "Required Files",
    "Structure",
    "Score",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File name used when no output path is given.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => "result.csv",
            ExportFormat::Json => "result.json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format '{other}' (expected csv or json)")),
        }
    }
}

fn pass_fail(passed: bool) -> &'static str {
    if passed {
        "Pass"
    } else {
        "Fail"
    }
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Two-row CSV: header and one summary row, every field quoted.
pub fn to_csv(eval: &Evaluation) -> String {
    let r = &eval.results;
    let score = eval.score.to_string();
    let row = [
        eval.link.as_str(),
        eval.assignment_type.name(),
        pass_fail(r.accessibility.passed),
        pass_fail(r.required_files.passed),
        pass_fail(r.structure.passed),
        score.as_str(),
    ];
    [CSV_HEADER, row]
        .iter()
        .map(|fields| fields.iter().map(|f| quote(f)).collect::<Vec<_>>().join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full record as pretty JSON.
pub fn to_json(eval: &Evaluation) -> Result<String> {
    serde_json::to_string_pretty(eval).context("serialize evaluation")
}

pub fn render(eval: &Evaluation, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(to_csv(eval)),
        ExportFormat::Json => to_json(eval),
    }
}

/// Write the export to `path`, or to `out` when the path is `-`.
pub fn write_export(
    eval: &Evaluation,
    format: ExportFormat,
    path: &Path,
    out: &mut dyn Write,
) -> Result<()> {
    let content = render(eval, format)?;
    if path == Path::new("-") {
        writeln!(out, "{content}").context("write export to stdout")?;
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("write export: {}", path.display()))?;
    tracing::info!(path = %path.display(), %format, "exported result");
    Ok(())
}
