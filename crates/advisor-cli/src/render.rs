//! Advisory rendering: styled text for terminals, JSON for tooling.
use crate::app::TargetAnalysis;
use crate::command::{
    power_message, remove_message, Advisory, STILL_PROCEEDS_NOTE, UNRECOGNIZED_MESSAGE,
};
use crate::theme;
use advisor_core::{format_count, DeletionReport};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

/// Write the human-readable advisory.
pub fn write_text(
    out: &mut impl Write,
    advisory: &Advisory,
    targets: &[TargetAnalysis],
) -> Result<()> {
    match advisory {
        Advisory::Power { action } => {
            writeln!(out, "{}", theme::heading(&power_message(*action)))?;
        }
        Advisory::RecursiveRemove { .. } => {
            for target in targets {
                writeln!(out, "{}", theme::heading(&remove_message(&target.path)))?;
                write_target_box(out, target)?;
            }
        }
        Advisory::Unrecognized { .. } => {
            writeln!(out, "{}", theme::muted(UNRECOGNIZED_MESSAGE))?;
        }
    }

    if let Some(warning) = advisory.warning() {
        writeln!(
            out,
            "{} {}",
            theme::warning_label("Warning:"),
            theme::danger(warning)
        )?;
    }
    out.flush().context("failed to flush advisory output")
}

fn write_target_box(out: &mut impl Write, target: &TargetAnalysis) -> Result<()> {
    let bar = theme::border("│");
    writeln!(out, "{}", theme::border(&theme::box_top("Deletion summary")))?;

    match &target.outcome {
        Ok(report) => write_report_rows(out, report)?,
        Err(message) => {
            writeln!(
                out,
                "{bar} {} {}",
                theme::danger("Unable to analyze:"),
                message
            )?;
            writeln!(out, "{bar} {}{}", theme::label("Files:"), theme::value("0"))?;
            writeln!(out, "{bar} {}", theme::muted(STILL_PROCEEDS_NOTE))?;
        }
    }

    writeln!(out, "{}", theme::border(&theme::box_bottom()))?;
    Ok(())
}

fn write_report_rows(out: &mut impl Write, report: &DeletionReport) -> Result<()> {
    let bar = theme::border("│");
    let rows = [
        ("Files:", format_count(report.total_files)),
        ("Directories:", format_count(report.total_directories)),
        ("Total size:", report.total_size_display.clone()),
    ];
    for (label, value) in &rows {
        writeln!(out, "{bar} {}{}", theme::label(label), theme::value(value))?;
    }

    if let Some(largest) = &report.largest_file {
        writeln!(
            out,
            "{bar} {}{}  {}",
            theme::label("Largest file:"),
            theme::value(&largest.size_display),
            largest.path
        )?;
    }

    if !report.top_extensions.is_empty() {
        writeln!(out, "{bar}")?;
        writeln!(out, "{bar} {}", theme::heading("File types:"))?;
        for row in &report.top_extensions {
            writeln!(
                out,
                "{bar}   {}{}",
                theme::label(&row.extension),
                theme::value(&format_count(row.count))
            )?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonAdvisory<'a> {
    command: &'a str,
    kind: &'static str,
    messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    targets: Vec<JsonTarget<'a>>,
}

#[derive(Serialize)]
struct JsonTarget<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<&'a DeletionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

/// Write the advisory as one pretty-printed JSON document.
pub fn write_json(
    out: &mut impl Write,
    command: &str,
    advisory: &Advisory,
    targets: &[TargetAnalysis],
) -> Result<()> {
    let messages = match advisory {
        Advisory::Power { action } => vec![power_message(*action)],
        Advisory::RecursiveRemove { targets } => {
            targets.iter().map(|t| remove_message(t)).collect()
        }
        Advisory::Unrecognized { .. } => vec![UNRECOGNIZED_MESSAGE.to_string()],
    };

    let doc = JsonAdvisory {
        command,
        kind: advisory.kind(),
        messages,
        warning: advisory.warning(),
        targets: targets
            .iter()
            .map(|t| JsonTarget {
                path: t.path.to_string_lossy().into_owned(),
                analysis: t.outcome.as_ref().ok(),
                error: t.outcome.as_ref().err().map(String::as_str),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&doc).context("failed to serialise advisory")?;
    writeln!(out, "{json}")?;
    out.flush().context("failed to flush advisory output")
}
