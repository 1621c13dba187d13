use crate::error::SpellscoreError;
use crate::eval::FieldLayout;
use crate::report::ReportFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SPELLSCORE_CONFIG";

/// Config file picked up from the working directory when nothing else is named
pub const DEFAULT_CONFIG_FILE: &str = "spellscore.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub eval: EvalConfig,
    #[serde(default)]
    pub report: ReportConfig,
    /// File the values came from; `None` for built-in defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Scoring configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EvalConfig {
    /// Order of the (score, suggestion) pairs after the count field.
    #[serde(default)]
    pub layout: FieldLayout,
    /// Rank cut-offs reported before the final `Any` column.
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<u32>,
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    /// Suppress the "<misspelling> <correction>" lines for unmatched records.
    #[serde(default)]
    pub quiet_missing: bool,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_thresholds() -> Vec<u32> {
    vec![1, 5, 10, 25, 50]
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            layout: FieldLayout::default(),
            thresholds: default_thresholds(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            eval: EvalConfig::default(),
            report: ReportConfig::default(),
            source: None,
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) before resolving
    /// the config path. Looks for a config file in this order:
    /// 1. `explicit` (the `--config` flag)
    /// 2. Path in the SPELLSCORE_CONFIG environment variable
    /// 3. ./spellscore.toml in current directory
    ///
    /// A file named by 1 or 2 must exist. With none of the three, built-in
    /// defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let _ = dotenv::dotenv();

        let named = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let config_path = match named {
            Some(path) => path,
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.is_file() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        Self::from_file(&config_path)
    }

    /// Read and validate a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config.validate()?;
        config.source = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> crate::error::Result<()> {
        let thresholds = &self.eval.thresholds;

        if thresholds.is_empty() {
            return Err(SpellscoreError::Config(
                "eval.thresholds must list at least one rank".to_string(),
            ));
        }

        if thresholds.contains(&0) {
            return Err(SpellscoreError::Config(
                "eval.thresholds must be greater than 0".to_string(),
            ));
        }

        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SpellscoreError::Config(format!(
                "eval.thresholds must be strictly increasing, got {:?}",
                thresholds
            )));
        }

        Ok(())
    }
}
