//! Benchmark orchestration and CSV export.

use std::io::Write;
use std::path::Path;

use crate::registry::AlgorithmRunner;
use crate::utils::bench::unit_name;
use crate::utils::timer::{measure_variants, TimingConfig, VariantResult};

/// Results of one algorithm at one input size
pub struct SizeReport {
    pub algo_name: &'static str,
    pub input_size: usize,
    pub results: Vec<VariantResult>,
}

/// Measure every variant of `algo` at each size.
///
/// Input data for a size is derived from `seed`, so two runs with the same
/// seed benchmark identical vectors.
pub fn run_benchmarks(
    algo: &dyn AlgorithmRunner,
    sizes: &[usize],
    config: &TimingConfig,
    seed: u64,
) -> Vec<SizeReport> {
    sizes
        .iter()
        .map(|&size| {
            tracing::info!(algorithm = algo.name(), size, runs = config.runs_per_variant, "measuring");
            let data_seed = seed.wrapping_add(size as u64);
            let closures = algo.get_variant_closures(size, data_seed);
            SizeReport {
                algo_name: algo.name(),
                input_size: size,
                results: measure_variants(closures, config, seed),
            }
        })
        .collect()
}

/// Write one CSV row per variant and size.
pub fn export_csv(path: &Path, reports: &[SizeReport]) -> std::io::Result<()> {
    let mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_csv(&mut file, reports)?;
    file.flush()
}

fn write_csv<W: Write>(out: &mut W, reports: &[SizeReport]) -> std::io::Result<()> {
    writeln!(
        out,
        "algorithm,variant,compiler,input_size,avg_{},result",
        unit_name()
    )?;

    for report in reports {
        for result in &report.results {
            let compiler = if result.name.starts_with("c-") {
                crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
            } else {
                ""
            };

            writeln!(
                out,
                "{},{},{},{},{:.2},{}",
                report.algo_name,
                result.name,
                compiler,
                report.input_size,
                result.avg_nanos_f64,
                result.result_sample.map(|v| v.to_string()).unwrap_or_default()
            )?;
        }
    }

    Ok(())
}
