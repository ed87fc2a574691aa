use std::error::Error;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use tableau::harness::{ensure_agreement, time_selector};
use tableau::{
    cross_check_range, median_with_config, parse_rank_range, EngineConfig, Grid, MatrixElement,
    OrderStatistic, SelectorChoice, SortedMatrix, TableauError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(
    about = "Tableau CLI - Order statistics, rank counts and medians over row/column sorted matrices"
)]
struct Cli {
    #[command(flatten)]
    source: MatrixSource,

    /// JSON engine configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); also raises the engine debug level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct MatrixSource {
    /// Inline matrix, rows separated by ';' (e.g. "1,2,3; 4,5,6"); takes precedence over --file
    #[arg(long, global = true)]
    matrix: Option<String>,

    /// JSON file holding {"rows": [[...], ...]} or a bare array of rows
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Read entries as 64-bit integers (medians truncate) instead of floats
    #[arg(long, global = true)]
    integer: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the k-th smallest (or largest) entry
    Kth {
        /// 1-based rank
        k: usize,

        /// Count from the largest entry instead
        #[arg(long)]
        largest: bool,

        /// Selection strategy (binary-search, frontier, extraction, brute-force)
        #[arg(long)]
        selector: Option<SelectorChoice>,
    },
    /// Median of all entries
    Median {
        /// Selection strategy
        #[arg(long)]
        selector: Option<SelectorChoice>,
    },
    /// Count entries below, equal to and above a value
    Count {
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// Least entry greater than or equal to a value
    Bound {
        #[arg(allow_negative_numbers = true)]
        value: String,
    },
    /// Cross-check every strategy against a full sort
    Check {
        /// Inclusive rank range (start:end); defaults to every rank
        #[arg(long)]
        range: Option<String>,
    },
    /// Compare strategy timings
    Bench {
        /// Number of passes over the sampled ranks
        #[arg(long, default_value_t = 10)]
        iterations: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };
    config.debug_level = config.debug_level.max(cli.verbose);

    let start_time = std::time::Instant::now();

    if cli.source.integer {
        run(&cli.command, &config, load_grid::<i64>(&cli.source)?)?;
    } else {
        run(&cli.command, &config, load_grid::<f64>(&cli.source)?)?;
    }

    let elapsed = start_time.elapsed();
    println!("Completed in {elapsed:.2?}");

    Ok(())
}

fn run<T>(command: &Commands, config: &EngineConfig, grid: Grid<T>) -> Result<(), Box<dyn Error>>
where
    T: MatrixElement + Display + FromStr + Send + Sync,
{
    let (rows, cols) = grid.dimensions();
    info!(rows, cols, "loaded matrix");

    match command {
        Commands::Kth {
            k,
            largest,
            selector,
        } => {
            let choice = selector.unwrap_or(config.selector);
            let selector = tableau::AnySelector::new(&grid, choice, config);
            let value = if *largest {
                selector.kth_largest(*k)?
            } else {
                selector.kth_smallest(*k)?
            };
            let order = if *largest { "largest" } else { "smallest" };
            println!("{k}-th {order} ({choice}): {value}");
        }
        Commands::Median { selector } => {
            let config = config.with_selector(selector.unwrap_or(config.selector));
            let median = median_with_config(&grid, &config)?;
            println!("Median ({}): {median}", config.selector);
        }
        Commands::Count { value } => {
            let value: T = parse_value(value)?;
            let summary = grid.rank_counter().summary(&value);
            println!("Entries < {value}: {}", summary.less);
            println!("Entries = {value}: {}", summary.equal);
            println!("Entries > {value}: {}", summary.greater);
        }
        Commands::Bound { value } => {
            let value: T = parse_value(value)?;
            match grid.least_upper_bound(value) {
                Some(bound) => println!("Least upper bound of {value}: {bound}"),
                None => println!("No entry >= {value}"),
            }
        }
        Commands::Check { range } => {
            let ranks = match range {
                Some(range) => parse_rank_range(range)?,
                None => 1..=grid.len(),
            };
            let reports = cross_check_range(&grid, ranks, config)?;
            for report in &reports {
                for run in report.disagreements() {
                    println!(
                        "Wrong result for k={}: {} returned {:?}, expected {}",
                        report.k, run.selector, run.outcome, report.expected
                    );
                }
            }
            ensure_agreement(&reports)?;
            println!("All strategies agree on {} ranks", reports.len());
        }
        Commands::Bench { iterations } => {
            let ranks = sample_ranks(grid.len());
            let ranks: Vec<usize> = std::iter::repeat(ranks)
                .take(*iterations)
                .flatten()
                .collect();
            for choice in SelectorChoice::ALL {
                let (_, summary) = time_selector(&grid, choice, &ranks)?;
                println!("{summary}");
            }
        }
    }

    Ok(())
}

fn parse_value<T: FromStr>(text: &str) -> tableau::Result<T> {
    text.trim().parse().map_err(|_| TableauError::InvalidValue)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_grid<T>(source: &MatrixSource) -> Result<Grid<T>, Box<dyn Error>>
where
    T: MatrixElement + FromStr + DeserializeOwned,
{
    match (&source.matrix, &source.file) {
        (Some(text), _) => Ok(Grid::parse(text)?),
        (None, Some(path)) => {
            let json = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&json)?)
        }
        (None, None) => Err("Provide a matrix with --matrix or --file".into()),
    }
}

/// Smallest, largest, median and quartile ranks
fn sample_ranks(len: usize) -> Vec<usize> {
    let mut ranks = vec![1, len.div_ceil(4), len.div_ceil(2), (3 * len).div_ceil(4), len];
    ranks.dedup();
    ranks
}
