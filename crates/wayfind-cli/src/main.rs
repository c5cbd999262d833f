//! `wayfind` — evaluate the destination estimator over CSV trip logs.
//!
//! ```bash
//! # Accuracy curve as CSV on stdout
//! wayfind evaluate --train TrainData.csv --test TestData.csv
//!
//! # Tuned run, JSON report to a file
//! wayfind evaluate --train TrainData.csv --test TestData.csv \
//!     --rho 0.005 --bucket-width 120 --format json --output curve.json
//!
//! # Destination per test row with the whole training log visible
//! wayfind predict --train TrainData.csv --test TestData.csv
//! ```

mod io;
mod logging;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use wayfind_core::config::{CandidateSource, ScorerKind, WayfindConfig};
use wayfind_evaluation::{Evaluator, TimeBucketer};

use crate::io::OutputFormat;

#[derive(Parser)]
#[command(name = "wayfind", version, about = "Most-probable-destination estimation from trip history")]
struct Cli {
    /// TOML config file; command-line flags override its values
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Accuracy for every training-window size
    Evaluate(EvaluateArgs),
    /// Predicted destination for every test row
    Predict(PredictArgs),
}

#[derive(Args)]
struct DataArgs {
    /// Training trip log, oldest first
    #[arg(long)]
    train: PathBuf,

    /// Test trip log; its EndLoc column is the ground truth
    #[arg(long)]
    test: PathBuf,

    /// Evaporation coefficient
    #[arg(long)]
    rho: Option<f64>,

    /// Time bucket width in minutes
    #[arg(long)]
    bucket_width: Option<u32>,

    /// Keep evaporated records instead of dropping them
    #[arg(long)]
    keep_evaporated: bool,

    #[arg(long, value_enum)]
    scorer: Option<ScorerArg>,

    /// Where candidate destinations come from
    #[arg(long, value_enum)]
    candidates: Option<CandidatesArg>,

    /// Score test rows in parallel
    #[arg(long)]
    parallel: bool,
}

#[derive(Args)]
struct EvaluateArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
}

#[derive(Args)]
struct PredictArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScorerArg {
    Scan,
    Incremental,
}

#[derive(Clone, Copy, ValueEnum)]
enum CandidatesArg {
    Test,
    Training,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    match cli.command {
        Commands::Evaluate(args) => {
            apply_overrides(&mut config, &args.data);
            logging::init_tracing(&config.observability);
            evaluate(&config, &args)
        }
        Commands::Predict(args) => {
            apply_overrides(&mut config, &args.data);
            logging::init_tracing(&config.observability);
            predict(&config, &args)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<WayfindConfig> {
    let Some(path) = path else {
        return Ok(WayfindConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    WayfindConfig::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn apply_overrides(config: &mut WayfindConfig, data: &DataArgs) {
    if let Some(rho) = data.rho {
        config.evaporation.rho = rho;
    }
    if data.keep_evaporated {
        config.evaporation.apply_retention_cutoff = false;
    }
    if let Some(width) = data.bucket_width {
        config.bucketing.bucket_width_minutes = width;
    }
    if let Some(scorer) = data.scorer {
        config.evaluation.scorer = match scorer {
            ScorerArg::Scan => ScorerKind::Scan,
            ScorerArg::Incremental => ScorerKind::Incremental,
        };
    }
    if let Some(candidates) = data.candidates {
        config.evaluation.candidates = match candidates {
            CandidatesArg::Test => CandidateSource::Test,
            CandidatesArg::Training => CandidateSource::Training,
        };
    }
    if data.parallel {
        config.evaluation.parallel = true;
    }
}

fn output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    })
}

fn evaluate(config: &WayfindConfig, args: &EvaluateArgs) -> Result<()> {
    let evaluator = Evaluator::new(config)?;
    let bucketer = TimeBucketer::new(&config.bucketing)?;
    let training = io::read_trips(&args.data.train, &bucketer)?;
    let test = io::read_trips(&args.data.test, &bucketer)?;

    let report = evaluator.run(training, &test)?;
    if let Some(best) = report.best() {
        info!(
            cutoff_index = report.cutoff_index,
            retained = report.retained_len,
            best_iteration = best.iteration,
            best_accuracy = best.accuracy,
            final_accuracy = report.final_accuracy().unwrap_or(0.0),
            "evaluation complete"
        );
    }
    io::write_report(&report, args.format, output(args.output.as_deref())?)
}

fn predict(config: &WayfindConfig, args: &PredictArgs) -> Result<()> {
    let evaluator = Evaluator::new(config)?;
    let bucketer = TimeBucketer::new(&config.bucketing)?;
    let training = io::read_trips(&args.data.train, &bucketer)?;
    let queries = io::read_trips(&args.data.test, &bucketer)?;

    let predictions = evaluator.predict(training, &queries)?;
    io::write_predictions(&queries, &predictions, output(args.output.as_deref())?)
}
