//! Output formats for completion tables.

use clap::ValueEnum;
use navi_graduation::graduation::{GraduationReport, ValidationReport};
use serde::Serialize;
use std::io::{self, Write};

pub(crate) const EMPTY_RESULT_MESSAGE: &str = "저장된 졸업사정조회 결과가 없습니다.";

const HEADERS: [&str; 4] = ["이수명", "배당", "취득(잔여)", "이수"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

#[derive(Serialize)]
struct CsvRow<'a> {
    section: &'a str,
    key: &'a str,
    label: &'a str,
    allocation: &'a str,
    acquired: &'a str,
    completion: &'a str,
}

pub(crate) fn render_report<W: Write>(
    out: &mut W,
    report: &GraduationReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => render_table(out, report),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)
        }
        OutputFormat::Csv => render_csv(out, report),
    }
}

fn render_table<W: Write>(out: &mut W, report: &GraduationReport) -> io::Result<()> {
    writeln!(out, "졸업사정조회 결과 ({})", report.major.label())?;

    for section in &report.sections {
        let label_width = section
            .rows
            .iter()
            .map(|row| display_width(row.label))
            .chain([display_width(HEADERS[0])])
            .max()
            .unwrap_or(0);

        writeln!(out)?;
        writeln!(out, "{}", section.title)?;
        writeln!(
            out,
            "  {} | {:>6} | {:>10} | {}",
            pad(HEADERS[0], label_width),
            HEADERS[1],
            HEADERS[2],
            HEADERS[3]
        )?;
        for row in &section.rows {
            writeln!(
                out,
                "  {} | {:>6} | {:>10} | {}",
                pad(row.label, label_width),
                row.allocation,
                row.acquired,
                row.completion
            )?;
        }
    }

    let missing = report.incomplete_keys();
    writeln!(out)?;
    if missing.is_empty() {
        writeln!(out, "모든 요건을 충족했습니다.")
    } else {
        let labels: Vec<&str> = missing.iter().map(|key| key.label()).collect();
        writeln!(out, "미충족 요건: {}", labels.join(", "))
    }
}

fn render_csv<W: Write>(out: &mut W, report: &GraduationReport) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for section in &report.sections {
        for row in &section.rows {
            writer
                .serialize(CsvRow {
                    section: section.title,
                    key: row.key.as_str(),
                    label: row.label,
                    allocation: &row.allocation,
                    acquired: &row.acquired,
                    completion: row.completion.as_str(),
                })
                .map_err(io::Error::from)?;
        }
    }
    writer.flush()
}

/// One line per missing field plus the combined prompt.
pub(crate) fn render_validation<W: Write>(
    out: &mut W,
    validation: &ValidationReport,
) -> io::Result<()> {
    match validation.message() {
        Some(message) => writeln!(out, "{message}"),
        None => writeln!(out, "모든 항목이 입력되었습니다."),
    }
}

/// Hangul and other wide glyphs take two terminal columns.
fn display_width(text: &str) -> usize {
    text.chars().map(|ch| if ch.is_ascii() { 1 } else { 2 }).sum()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{text}{}", " ".repeat(fill))
}
