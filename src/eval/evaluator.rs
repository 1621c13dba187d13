//! Single-pass fold from input lines to an [`Evaluation`].

use crate::config::EvalConfig;
use crate::error::{Result, SpellscoreError};
use crate::eval::{parse_record, resolve_rank, AggregateStats, FieldLayout, RankOutcome, TestRecord};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A record whose correction was absent from its suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCorrection {
    pub line: usize,
    pub misspelling: String,
    pub correction: String,
}

impl fmt::Display for MissingCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.misspelling, self.correction)
    }
}

/// Accumulator threaded through the input.
#[derive(Debug)]
pub struct Evaluator {
    layout: FieldLayout,
    outcomes: Vec<RankOutcome>,
    missing: Vec<MissingCorrection>,
    max_suggestions: f64,
    records: usize,
}

impl Evaluator {
    pub fn new(layout: FieldLayout) -> Self {
        Self {
            layout,
            outcomes: Vec::new(),
            missing: Vec::new(),
            max_suggestions: 0.0,
            records: 0,
        }
    }

    /// Parse and score one line. A blank line is a malformed record.
    pub fn push_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        let record = parse_record(line, line_no, self.layout)?;
        self.push_record(&record, line_no);
        Ok(())
    }

    /// Score an already parsed record.
    ///
    /// Every record counts toward `max_suggestions` and is checked for the
    /// correction, even with an expected count of zero.
    pub fn push_record(&mut self, record: &TestRecord, line_no: usize) {
        self.records += 1;
        self.max_suggestions = self.max_suggestions.max(record.suggestion_slots);

        let outcome = resolve_rank(record);
        if !outcome.is_found() {
            self.missing.push(MissingCorrection {
                line: line_no,
                misspelling: record.misspelling.clone(),
                correction: record.correction.clone(),
            });
        }

        let copies = record.expected_count as usize;
        self.outcomes.extend(std::iter::repeat(outcome).take(copies));
    }

    pub fn finish(self, thresholds: &[u32]) -> Evaluation {
        let stats = AggregateStats::compute(
            &self.outcomes,
            self.records,
            self.max_suggestions,
            thresholds,
        );
        log::info!(
            "Scored {} records ({} outcomes, {} without the correction)",
            self.records,
            stats.total,
            self.missing.len()
        );
        Evaluation {
            stats,
            missing: self.missing,
            outcomes: self.outcomes,
        }
    }
}

/// Result of scoring one input.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub stats: AggregateStats,
    /// In input order.
    pub missing: Vec<MissingCorrection>,
    pub outcomes: Vec<RankOutcome>,
}

/// Decode one raw line, naming it when it is not UTF-8.
fn decode_line(bytes: Vec<u8>, line_no: usize) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| SpellscoreError::MalformedRecord {
        line: line_no,
        reason: format!("not valid UTF-8 (invalid byte at offset {})", e.utf8_error().valid_up_to()),
    })
}

/// Score every line from `reader`. Stops at the first malformed record.
pub fn evaluate_reader<R: BufRead>(reader: R, config: &EvalConfig) -> Result<Evaluation> {
    let evaluator = reader.split(b'\n').enumerate().try_fold(
        Evaluator::new(config.layout),
        |mut evaluator, (idx, bytes)| -> Result<Evaluator> {
            let line = decode_line(bytes?, idx + 1)?;
            evaluator.push_line(&line, idx + 1)?;
            Ok(evaluator)
        },
    )?;
    Ok(evaluator.finish(&config.thresholds))
}

/// Score a suggestions file on disk.
pub fn evaluate_file(path: &Path, config: &EvalConfig) -> Result<Evaluation> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SpellscoreError::FileNotFound(path.to_path_buf()),
        _ => SpellscoreError::Io(e),
    })?;
    log::debug!("Reading suggestions from {}", path.display());
    evaluate_reader(BufReader::new(file), config)
}
