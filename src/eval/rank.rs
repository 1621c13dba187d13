//! Where the correction landed in a suggestion list.

use crate::eval::TestRecord;

/// Rank of the correction for one counted occurrence of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankOutcome {
    /// 1-based position of the first exact match.
    Found(usize),
    NotFound,
}

impl RankOutcome {
    pub fn rank(self) -> Option<usize> {
        match self {
            RankOutcome::Found(rank) => Some(rank),
            RankOutcome::NotFound => None,
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, RankOutcome::Found(_))
    }

    /// True when the correction was found at a rank no worse than `threshold`.
    pub fn within(self, threshold: f64) -> bool {
        match self {
            RankOutcome::Found(rank) => rank as f64 <= threshold,
            RankOutcome::NotFound => false,
        }
    }
}

/// Find the correction in the record's suggestions.
///
/// Comparison is exact and case-sensitive; the earliest match wins when a
/// suggestion list repeats the correction.
pub fn resolve_rank(record: &TestRecord) -> RankOutcome {
    record
        .suggestions
        .iter()
        .position(|s| *s == record.correction)
        .map(|idx| RankOutcome::Found(idx + 1))
        .unwrap_or(RankOutcome::NotFound)
}
