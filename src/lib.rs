pub mod config;
pub mod error;
pub mod eval;
pub mod report;

pub use config::Config;
pub use error::{Result, SpellscoreError};
pub use eval::{evaluate_file, evaluate_reader, Evaluation};
pub use report::{write_report, ReportFormat};
