//! Scoring framework: record parsing, rank resolution, metrics (Any@K, MRR), and the evaluator fold.

pub mod evaluator;
pub mod metrics;
pub mod rank;
pub mod record;

pub use evaluator::{evaluate_file, evaluate_reader, Evaluation, Evaluator, MissingCorrection};
pub use metrics::{mean_reciprocal_rank, not_found, percent_within, AggregateStats, ThresholdScore};
pub use rank::{resolve_rank, RankOutcome};
pub use record::{parse_record, FieldLayout, TestRecord};
