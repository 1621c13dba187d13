//! Report rendering: the Aspell-style summary table and a JSON variant.

use crate::error::Result;
use crate::eval::{AggregateStats, Evaluation, MissingCorrection};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Tab stop width used to size the separator line.
pub const TAB_WIDTH: usize = 8;

/// Output format for the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

/// Expand tabs to spaces against fixed tab stops, resetting the column at line breaks.
pub fn expand_tabs(text: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;

    for ch in text.chars() {
        match ch {
            '\t' => {
                if tab_width > 0 {
                    let pad = tab_width - column % tab_width;
                    out.extend(std::iter::repeat(' ').take(pad));
                    column += pad;
                }
            }
            '\n' | '\r' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }

    out
}

/// `NotFnd\tFound\t<buckets>\tAny (Max: n)`
pub fn header_line(stats: &AggregateStats) -> String {
    let mut columns = vec!["NotFnd".to_string(), "Found".to_string()];
    columns.extend(stats.buckets.iter().map(|b| b.label.clone()));
    columns.push(format!("{} (Max: {})", stats.any.label, stats.max_suggestions_display()));
    columns.join("\t")
}

/// Dashes as wide as the header once tabs are expanded.
pub fn separator_line(header: &str) -> String {
    "-".repeat(expand_tabs(header, TAB_WIDTH).chars().count())
}

pub fn data_line(stats: &AggregateStats) -> String {
    let mut columns = vec![stats.not_found.to_string(), stats.found.to_string()];
    columns.extend(
        stats
            .buckets
            .iter()
            .chain(std::iter::once(&stats.any))
            .map(|b| format!("{:.1}", b.percent)),
    );
    columns.join("\t")
}

/// Header, separator and data row, newline terminated.
pub fn render_table(stats: &AggregateStats) -> String {
    let header = header_line(stats);
    let separator = separator_line(&header);
    format!("{}\n{}\n{}\n", header, separator, data_line(stats))
}

/// Statistics plus the unmatched records, as one JSON document.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    stats: &'a AggregateStats,
    missing: &'a [MissingCorrection],
}

/// Pretty-printed JSON of the statistics and, unless `quiet_missing`, the
/// records whose correction was not suggested.
pub fn render_json(evaluation: &Evaluation, quiet_missing: bool) -> Result<String> {
    let missing: &[MissingCorrection] = if quiet_missing {
        &[]
    } else {
        &evaluation.missing
    };
    let report = JsonReport {
        stats: &evaluation.stats,
        missing,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Write the summary. For the table, the not-found lines (unless
/// `quiet_missing`) come first; JSON carries them in its `missing` array.
pub fn write_report<W: Write>(
    out: &mut W,
    evaluation: &Evaluation,
    format: ReportFormat,
    quiet_missing: bool,
) -> Result<()> {
    match format {
        ReportFormat::Table => {
            if !quiet_missing {
                for missing in &evaluation.missing {
                    writeln!(out, "{}", missing)?;
                }
            }
            out.write_all(render_table(&evaluation.stats).as_bytes())?;
        }
        ReportFormat::Json => writeln!(out, "{}", render_json(evaluation, quiet_missing)?)?,
    }

    out.flush()?;
    Ok(())
}
