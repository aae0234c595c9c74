//! CLI for verifying and benchmarking the dot product variants.
//!
//! Usage:
//!   dot-bench                     # Run all algorithms
//!   dot-bench --list              # List available algorithms
//!   dot-bench dot_product         # Run a specific algorithm
//!   dot-bench --verify            # Check every variant against the reference

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dot_reducer::math::dot_product::C_IMPL_AVAILABLE;
use dot_reducer::registry::{build_registry, AlgorithmRunner};
use dot_reducer::utils::{export_csv, run_benchmarks, time_seed, PinStrategy, TimingConfig};
use dot_reducer::tui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dot-bench")]
#[command(about = "Verify and benchmark dot product implementations", long_about = None)]
struct Cli {
    /// Algorithm to run (omit for all)
    algorithm: Option<String>,

    /// List all available algorithms
    #[arg(long, short)]
    list: bool,

    /// Only verify variants against the reference, without timing
    #[arg(long)]
    verify: bool,

    /// Comma-separated vector sizes
    #[arg(long, value_delimiter = ',', default_values_t = [64, 256, 1024, 4096, 16384])]
    sizes: Vec<usize>,

    /// Measurement runs per variant
    #[arg(long, short, default_value_t = 30, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    runs: usize,

    /// Warmup executions per variant
    #[arg(long, default_value_t = 10)]
    warmup: usize,

    /// Random seed for reproducible inputs and ordering (default: time-based)
    #[arg(long)]
    seed: Option<u64>,

    /// CPU pinning strategy
    #[arg(long, value_enum, default_value_t = PinStrategy::PerExecution)]
    pin: PinStrategy,

    /// Filter outliers (trim 1% extremes from measurements)
    #[arg(long, short)]
    filter: bool,

    /// Export raw timings to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "dot_reducer=info,dot_bench=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let registry = build_registry();

    if !C_IMPL_AVAILABLE {
        tracing::info!("C variants not compiled into this build");
    }

    if cli.list {
        tui::print_available_algorithms(&registry);
        return Ok(());
    }

    let selected: Vec<&dyn AlgorithmRunner> = match &cli.algorithm {
        Some(name) => vec![registry
            .find(name)
            .with_context(|| format!("available: {}", registry.list_names().join(", ")))?],
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    for algo in &selected {
        algo.verify()
            .with_context(|| format!("verification of '{}' failed", algo.name()))?;
        tracing::info!(algorithm = algo.name(), "all variants match the reference");
    }
    if cli.verify {
        return Ok(());
    }

    let seed = cli.seed.unwrap_or_else(time_seed);
    let config = TimingConfig {
        runs_per_variant: cli.runs,
        warmup_iterations: cli.warmup,
        pin_strategy: cli.pin,
        filter_outliers: cli.filter,
    };
    tracing::info!(seed, ?config, "starting benchmarks");

    tui::print_header();

    let mut all_reports = Vec::new();
    for algo in selected {
        tui::print_algo_info_box(algo);
        let mut reports = run_benchmarks(algo, &cli.sizes, &config, seed);
        for report in &mut reports {
            tui::sort_variants(&mut report.results);
            tui::print_results_table(report, cli.filter);
        }
        all_reports.extend(reports);
    }

    if let Some(path) = &cli.csv {
        export_csv(path, &all_reports)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "timings exported");
    }

    println!("Note: Speedup and Rel. Error are relative to 'original'.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_must_be_positive() {
        assert!(Cli::try_parse_from(["dot-bench", "--runs", "0"]).is_err());

        let cli = Cli::try_parse_from(["dot-bench", "--runs", "1"]).unwrap();
        assert_eq!(cli.runs, 1);

        let cli = Cli::try_parse_from(["dot-bench"]).unwrap();
        assert_eq!(cli.runs, 30);
    }
}
