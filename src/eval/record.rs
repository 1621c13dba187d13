//! Test record type and the tab-separated line parser.

use crate::error::{Result, SpellscoreError};
use serde::{Deserialize, Serialize};

/// Fields before the first (score, suggestion) pair: misspelling, correction, count.
pub const FIXED_FIELDS: usize = 3;

/// Order of each (score, suggestion) pair after the count field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FieldLayout {
    /// `score<TAB>suggestion` pairs.
    #[default]
    ScoreFirst,
    /// `suggestion<TAB>score` pairs, word before its probability.
    SuggestionFirst,
}

impl FieldLayout {
    /// 0-based index of the first suggestion field on a line.
    pub fn first_suggestion_index(self) -> usize {
        match self {
            FieldLayout::ScoreFirst => FIXED_FIELDS + 1,
            FieldLayout::SuggestionFirst => FIXED_FIELDS,
        }
    }
}

/// One scored misspelling with the ranked suggestions offered for it.
#[derive(Debug, Clone, PartialEq)]
pub struct TestRecord {
    pub misspelling: String,
    pub correction: String,
    /// How many real-world occurrences this line stands for.
    pub expected_count: u32,
    /// Rank 1 first.
    pub suggestions: Vec<String>,
    /// `(fields - 3) / 2`, unrounded. Only integral when every pair is complete.
    pub suggestion_slots: f64,
}

/// Parse one input line into a [`TestRecord`].
///
/// The line is trimmed, then split on tabs. Score fields are skipped but still
/// decide where each suggestion sits. `line_no` is 1-based and only used for
/// error reporting.
pub fn parse_record(line: &str, line_no: usize, layout: FieldLayout) -> Result<TestRecord> {
    let fields: Vec<&str> = line.trim().split('\t').collect();

    if fields.len() < FIXED_FIELDS {
        return Err(SpellscoreError::MalformedRecord {
            line: line_no,
            reason: format!(
                "expected at least {} tab-separated fields, found {}",
                FIXED_FIELDS,
                fields.len()
            ),
        });
    }

    let count_field = fields[2].trim();
    let expected_count = count_field
        .parse::<u32>()
        .map_err(|_| SpellscoreError::MalformedRecord {
            line: line_no,
            reason: format!("count field {:?} is not a non-negative integer", count_field),
        })?;

    let pair_fields = fields.len() - FIXED_FIELDS;
    if pair_fields % 2 != 0 {
        log::warn!(
            "Line {}: {} fields after the count do not form complete pairs",
            line_no,
            pair_fields
        );
    }

    let suggestions = fields
        .iter()
        .skip(layout.first_suggestion_index())
        .step_by(2)
        .map(|s| s.to_string())
        .collect();

    Ok(TestRecord {
        misspelling: fields[0].to_string(),
        correction: fields[1].to_string(),
        expected_count,
        suggestions,
        suggestion_slots: pair_fields as f64 / 2.0,
    })
}
