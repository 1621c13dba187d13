//! Score ranked spelling suggestions against known corrections and print an Aspell-style table.

use anyhow::{Context, Result};
use clap::Parser;
use spellscore::{eval::FieldLayout, evaluate_file, write_report, Config, ReportFormat};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellscore", version)]
#[command(about = "Score spelling suggestions against known corrections")]
struct Args {
    /// Tab-separated file: misspelling, correction, count, then score/suggestion pairs.
    input: PathBuf,

    /// Config file (default: $SPELLSCORE_CONFIG, then ./spellscore.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Order of the fields in each pair after the count.
    #[arg(long, value_enum)]
    layout: Option<FieldLayout>,

    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Do not print "<misspelling> <correction>" for records without the correction.
    #[arg(long)]
    quiet_missing: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;

    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", config.log_level.as_str()),
    )
    .init();

    match &config.source {
        Some(path) => log::debug!("Configuration loaded from {}", path.display()),
        None => log::debug!("No config file found, using default configuration"),
    }

    if let Some(layout) = args.layout {
        config.eval.layout = layout;
    }
    if let Some(format) = args.format {
        config.report.format = format;
    }
    let quiet_missing = args.quiet_missing || config.report.quiet_missing;

    log::debug!(
        "Scoring {} ({:?} layout, thresholds {:?})",
        args.input.display(),
        config.eval.layout,
        config.eval.thresholds
    );

    let evaluation = evaluate_file(&args.input, &config.eval)
        .with_context(|| format!("Failed to score {}", args.input.display()))?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &evaluation, config.report.format, quiet_missing)?;
    out.flush()?;

    Ok(())
}
