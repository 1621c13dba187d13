//! Evaluation metrics: not-found counts, rank-threshold accuracy, and Mean Reciprocal Rank (MRR).

use crate::eval::RankOutcome;
use serde::Serialize;

/// Number of outcomes where the correction never appeared.
pub fn not_found(outcomes: &[RankOutcome]) -> usize {
    outcomes.iter().filter(|o| !o.is_found()).count()
}

/// Percentage of outcomes whose rank is between 1 and `threshold` inclusive.
/// Returns (within / total) * 100. If there are no outcomes, returns 0.0.
pub fn percent_within(outcomes: &[RankOutcome], threshold: f64) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    let within = outcomes.iter().filter(|o| o.within(threshold)).count();
    within as f64 / outcomes.len() as f64 * 100.0
}

/// Mean Reciprocal Rank: average of 1/rank over all outcomes, with not-found
/// outcomes adding 0. If there are no outcomes, returns 0.0.
pub fn mean_reciprocal_rank(outcomes: &[RankOutcome]) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    let sum: f64 = outcomes
        .iter()
        .filter_map(|o| o.rank())
        .map(|rank| 1.0 / rank as f64)
        .sum();
    sum / outcomes.len() as f64
}

/// Column label for a rank cut-off: `First` for 1, `1-<t>` otherwise.
pub fn threshold_label(threshold: u32) -> String {
    if threshold == 1 {
        "First".to_string()
    } else {
        format!("1-{}", threshold)
    }
}

/// One accuracy column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdScore {
    pub label: String,
    pub threshold: f64,
    pub percent: f64,
}

/// Summary statistics over every counted outcome of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    /// Input lines parsed, including those with a zero count.
    pub records: usize,
    pub total: usize,
    pub not_found: usize,
    pub found: usize,
    /// Largest `(fields - 3) / 2` seen; compared against unrounded.
    pub max_suggestions: f64,
    pub buckets: Vec<ThresholdScore>,
    /// Accuracy at `max_suggestions`.
    pub any: ThresholdScore,
    pub mean_reciprocal_rank: f64,
}

impl AggregateStats {
    pub fn compute(
        outcomes: &[RankOutcome],
        records: usize,
        max_suggestions: f64,
        thresholds: &[u32],
    ) -> Self {
        let not_found = not_found(outcomes);
        let buckets = thresholds
            .iter()
            .map(|&t| ThresholdScore {
                label: threshold_label(t),
                threshold: f64::from(t),
                percent: percent_within(outcomes, f64::from(t)),
            })
            .collect();

        Self {
            records,
            total: outcomes.len(),
            not_found,
            found: outcomes.len() - not_found,
            max_suggestions,
            buckets,
            any: ThresholdScore {
                label: "Any".to_string(),
                threshold: max_suggestions,
                percent: percent_within(outcomes, max_suggestions),
            },
            mean_reciprocal_rank: mean_reciprocal_rank(outcomes),
        }
    }

    /// `max_suggestions` as shown in the table header, truncated toward zero.
    /// Deliberately truncates rather than rounds, matching the published Aspell-style tables.
    pub fn max_suggestions_display(&self) -> u64 {
        self.max_suggestions.trunc() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::RankOutcome::{Found, NotFound};

    const DEFAULT_THRESHOLDS: [u32; 5] = [1, 5, 10, 25, 50];

    #[test]
    fn not_found_counts_misses() {
        let outcomes = vec![Found(1), NotFound, Found(3), NotFound];
        assert_eq!(not_found(&outcomes), 2);
    }

    #[test]
    fn percent_within_partial() {
        let outcomes = vec![Found(1), Found(2), Found(6), NotFound];
        assert!((percent_within(&outcomes, 1.0) - 25.0).abs() < 1e-6);
        assert!((percent_within(&outcomes, 5.0) - 50.0).abs() < 1e-6);
        assert!((percent_within(&outcomes, 10.0) - 75.0).abs() < 1e-6);
    }

    #[test]
    fn percent_within_empty() {
        assert_eq!(percent_within(&[], 10.0), 0.0);
    }

    #[test]
    fn mrr_mixed() {
        let outcomes = vec![Found(1), Found(2), NotFound, Found(4)];
        let expected = (1.0 + 0.5 + 0.0 + 0.25) / 4.0;
        assert!((mean_reciprocal_rank(&outcomes) - expected).abs() < 1e-9);
    }

    #[test]
    fn mrr_empty() {
        assert_eq!(mean_reciprocal_rank(&[]), 0.0);
    }

    #[test]
    fn labels() {
        let labels: Vec<String> = DEFAULT_THRESHOLDS.iter().map(|&t| threshold_label(t)).collect();
        assert_eq!(labels, vec!["First", "1-5", "1-10", "1-25", "1-50"]);
    }

    #[test]
    fn compute_counts_and_buckets() {
        let outcomes = vec![Found(1), Found(1), Found(7), Found(30), NotFound];
        let stats = AggregateStats::compute(&outcomes, 4, 40.0, &DEFAULT_THRESHOLDS);

        assert_eq!(stats.records, 4);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.not_found, 1);
        assert_eq!(stats.found, 4);

        let percents: Vec<f64> = stats.buckets.iter().map(|b| b.percent).collect();
        let expected = [40.0, 40.0, 60.0, 60.0, 80.0];
        for (got, want) in percents.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-6, "got {got}, want {want}");
        }
        assert!((stats.any.percent - 80.0).abs() < 1e-6);
    }

    #[test]
    fn buckets_are_monotone() {
        let outcomes: Vec<RankOutcome> = (1..=60)
            .map(|r| if r % 7 == 0 { NotFound } else { Found(r) })
            .collect();
        let stats = AggregateStats::compute(&outcomes, 60, 60.0, &DEFAULT_THRESHOLDS);

        let mut previous = 0.0;
        for bucket in stats.buckets.iter().chain(std::iter::once(&stats.any)) {
            assert!(bucket.percent >= previous, "{} dropped below {}", bucket.label, previous);
            previous = bucket.percent;
        }
    }

    #[test]
    fn any_equals_found_share() {
        let outcomes = vec![Found(2), Found(9), NotFound, Found(1)];
        let stats = AggregateStats::compute(&outcomes, 4, 10.0, &DEFAULT_THRESHOLDS);
        let share = 100.0 * stats.found as f64 / stats.total as f64;
        assert!((stats.any.percent - share).abs() < 1e-9);
    }

    #[test]
    fn empty_outcomes_are_all_zero() {
        let stats = AggregateStats::compute(&[], 0, 0.0, &DEFAULT_THRESHOLDS);
        assert_eq!(stats.not_found, 0);
        assert_eq!(stats.found, 0);
        assert!(stats.buckets.iter().all(|b| b.percent == 0.0));
        assert_eq!(stats.any.percent, 0.0);
        assert_eq!(stats.max_suggestions_display(), 0);
    }

    #[test]
    fn max_display_truncates() {
        let stats = AggregateStats::compute(&[], 0, 4.5, &DEFAULT_THRESHOLDS);
        assert_eq!(stats.max_suggestions_display(), 4);
    }
}
