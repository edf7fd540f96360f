//! u-activity-select - console benchmark for activity selection
//!
//! Usage:
//!   u-activity-select [--scenario <name> | --all] [--size N] [--seed S]
//!   u-activity-select --intervals 1:3,2:5,4:6 [--allow-degenerate]
//!
//! Generates an interval set (or takes one from the command line), runs the
//! greedy and exhaustive selectors on it, and prints both selections with
//! their elapsed time.

use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use u_activity_select::compare::{CompareConfig, ComparisonRunner};
use u_activity_select::synthetic::{Scenario, ScenarioConfig};
use u_activity_select::Interval;

#[derive(Parser)]
#[command(name = "u-activity-select")]
#[command(about = "Compare exhaustive and greedy activity selection", long_about = None)]
struct Cli {
    /// Scenario to generate (random, sample, all-overlapping, all-disjoint,
    /// shared-start, shared-end)
    #[arg(short = 'c', long, default_value = "random", conflicts_with = "all")]
    scenario: Scenario,

    /// Run every scenario
    #[arg(short, long)]
    all: bool,

    /// Explicit input as start:end pairs, comma separated (e.g. 1:3,2:5)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with_all = ["all", "scenario"]
    )]
    intervals: Vec<Interval<i64>>,

    /// Number of intervals to generate
    #[arg(short = 'n', long, default_value = "20")]
    size: usize,

    /// Random seed (drawn at random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Largest input the exhaustive selector is run on
    #[arg(long, default_value = "25")]
    exhaustive_limit: usize,

    /// Accept zero-length intervals (end == start); inverted ones are
    /// always refused
    #[arg(long)]
    allow_degenerate: bool,

    /// Run scenarios in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Enable verbose debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let compare = CompareConfig::default()
        .with_exhaustive_limit(cli.exhaustive_limit)
        .with_reject_degenerate(!cli.allow_degenerate)
        .with_parallel(cli.parallel);

    if !cli.intervals.is_empty() {
        return match ComparisonRunner::run(&cli.intervals, &compare) {
            Ok(comparison) => {
                println!("{comparison}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    let scenarios: Vec<Scenario> = if cli.all {
        Scenario::ALL.to_vec()
    } else {
        vec![cli.scenario]
    };

    let configs: Vec<ScenarioConfig> = scenarios
        .into_iter()
        .map(|sc| {
            let config = ScenarioConfig::new(sc).with_size(cli.size);
            match cli.seed {
                Some(seed) => config.with_seed(seed),
                None => config,
            }
        })
        .collect();

    let mut failed = false;
    for (config, result) in configs
        .iter()
        .zip(ComparisonRunner::run_batch(&configs, &compare))
    {
        match result {
            Ok(report) => println!("{report}\n"),
            Err(e) => {
                log::error!("scenario {}: {e}", config.scenario);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
