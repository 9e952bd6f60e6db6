//! # rank-forecast
//!
//! Command-line interface for ranking history forecasts.

mod input;
mod report;

use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use ranking_facade::{
    load_config, ForecastConfig, ForecastEngine, ForecastReport, Observation, TimeAxis,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use input::{load_records, RankingQuery};
use report::{summary_lines, ForecastResponse};

type CliResult<T> = std::result::Result<T, String>;

/// Ranking Store query window when none is given
const DEFAULT_LOOKBACK_DAYS: u32 = 30;

#[derive(Parser)]
#[command(name = "rank-forecast")]
#[command(about = "Search ranking trend and position forecasts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum AxisArg {
    /// Observation order, samples treated as equally spaced
    Index,
    /// Days elapsed since each URL's first observation
    Elapsed,
}

impl From<AxisArg> for TimeAxis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Index => TimeAxis::ObservationIndex,
            AxisArg::Elapsed => TimeAxis::ElapsedDays,
        }
    }
}

/// Options shared by every command that runs the engine
#[derive(clap::Args)]
struct EngineArgs {
    /// Input file with ranking rows (CSV or JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Number of days to forecast (defaults to the configured horizon)
    #[arg(short, long)]
    days: Option<u32>,

    /// Only use rows for this keyword
    #[arg(short, long)]
    keyword: Option<String>,

    /// Only use rows from the last N days (0 keeps all history)
    #[arg(long, default_value_t = DEFAULT_LOOKBACK_DAYS)]
    lookback_days: u32,

    /// Forecast origin as RFC 3339 (defaults to now)
    #[arg(long)]
    now: Option<DateTime<Utc>>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the volatility threshold
    #[arg(long)]
    volatility_threshold: Option<f64>,

    /// Override the regression axis
    #[arg(long, value_enum)]
    axis: Option<AxisArg>,
}

impl EngineArgs {
    fn lookback_window(&self) -> Option<u32> {
        (self.lookback_days > 0).then_some(self.lookback_days)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast positions and print the JSON report
    Forecast {
        #[command(flatten)]
        engine: EngineArgs,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Print a one-line trend summary per URL
    Summary {
        #[command(flatten)]
        engine: EngineArgs,
    },
}

/// Build the engine config: file first, then flag overrides
fn resolve_config(args: &EngineArgs) -> CliResult<ForecastConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path).map_err(|e| e.to_string())?,
        None => ForecastConfig::default(),
    };
    if let Some(threshold) = args.volatility_threshold {
        config.volatility_threshold = threshold;
    }
    if let Some(axis) = args.axis {
        config.time_axis = axis.into();
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Load, filter and forecast
fn run_engine(args: &EngineArgs) -> CliResult<ForecastReport> {
    let config = resolve_config(args)?;
    let days = args.days.unwrap_or(config.default_horizon);
    let now = args.now.unwrap_or_else(Utc::now);

    let records = load_records(&args.input)?;
    let total = records.len();
    let query = RankingQuery {
        keyword: args.keyword.clone(),
        lookback_days: args.lookback_window(),
    };
    let observations: Vec<Observation> = query.apply(records, now);
    tracing::info!(
        loaded = total,
        kept = observations.len(),
        input = %args.input.display(),
        "loaded ranking history"
    );

    let engine = ForecastEngine::new(config).map_err(|e| e.to_string())?;
    let report = engine
        .predict(&observations, days, now)
        .map_err(|e| format!("Failed to generate predictions: {}", e))?;
    tracing::info!(urls = report.len(), days, "forecast ready");

    Ok(report)
}

/// Write response to file or stdout
fn write_response(response: &ForecastResponse, output: Option<&Path>, pretty: bool) -> CliResult<()> {
    if let Some(path) = output {
        let file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        let written = if pretty {
            serde_json::to_writer_pretty(file, response)
        } else {
            serde_json::to_writer(file, response)
        };
        written.map_err(|e| format!("Failed to write JSON: {}", e))?;
        tracing::info!(path = %path.display(), "report written");
    } else {
        let encoded = if pretty {
            serde_json::to_string_pretty(response)
        } else {
            serde_json::to_string(response)
        };
        println!("{}", encoded.map_err(|e| format!("Failed to encode JSON: {}", e))?);
    }
    Ok(())
}

fn run(cli: Cli) -> CliResult<()> {
    match cli.command {
        Commands::Forecast {
            engine,
            output,
            pretty,
        } => {
            let report = run_engine(&engine)?;
            let response =
                ForecastResponse::new(&report, engine.keyword.clone(), engine.lookback_window())?;
            write_response(&response, output.as_deref(), pretty)
        }
        Commands::Summary { engine } => {
            let report = run_engine(&engine)?;
            for line in summary_lines(&report) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rank_forecast=info,ranking_core=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
