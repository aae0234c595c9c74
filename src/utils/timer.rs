//! Timing system for the variant micro-benchmarks.
//!
//! - Cycles or wall-clock time, selected by cargo feature
//! - Core pinning while measuring
//! - Variant executions interleaved in a shuffled order to avoid ordering bias

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::hint::black_box;
use std::time::Duration;

use super::bench::{to_nanos, trim_outliers, Measurement};
pub use super::cpu_affinity::CpuPinGuard;

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PinStrategy {
    /// Pin once before all measurements
    Global,
    /// Pin and unpin around each execution
    #[default]
    PerExecution,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Warmup executions per variant before measurement (default: 10)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
    /// Drop the 1% extremes before computing statistics (default: false)
    pub filter_outliers: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            filter_outliers: false,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs once and returns (measurement, optional result value).
    /// Timing happens inside the closure to keep dispatch out of the measurement.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Result from measuring a single variant.
///
/// In cycle mode the `Duration` fields carry cycle counts as nanoseconds.
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    /// Precise average as f64
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of samples the statistics were computed from
    pub samples: usize,
    /// Last result value, compared against the reference in reports
    pub result_sample: Option<f64>,
}

/// Measure `variants` with a shuffled execution order seeded by `seed`.
pub fn measure_variants(
    mut variants: Vec<Variant>,
    config: &TimingConfig,
    seed: u64,
) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }
    tracing::debug!(
        variants = variants.len(),
        warmup = config.warmup_iterations,
        "warmup done"
    );

    // (variant_idx, sample_idx)
    let mut tasks: Vec<(usize, usize)> = (0..variants.len())
        .flat_map(|v| (0..samples).map(move |s| (v, s)))
        .collect();
    tasks.shuffle(&mut StdRng::seed_from_u64(seed));

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for (variant_idx, _) in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed_time, result) = (variant.run)();

        measurements[variant_idx].push(elapsed_time);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, times), result_sample)| {
            compute_variant_result(variant.name, variant.description, &times, config, result_sample)
        })
        .collect()
}

fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    measurements: &[Measurement],
    config: &TimingConfig,
    result_sample: Option<f64>,
) -> VariantResult {
    let mut sorted: Vec<u64> = measurements.iter().map(|m| to_nanos(*m)).collect();
    sorted.sort_unstable();
    let nanos = if config.filter_outliers {
        trim_outliers(&sorted)
    } else {
        &sorted[..]
    };

    if nanos.is_empty() {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            samples: 0,
            result_sample,
        };
    }

    let avg_nanos_f64 = nanos.iter().sum::<u64>() as f64 / nanos.len() as f64;
    let variance = nanos
        .iter()
        .map(|&n| {
            let diff = n as f64 - avg_nanos_f64;
            diff * diff
        })
        .sum::<f64>()
        / (nanos.len() - 1).max(1) as f64;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(avg_nanos_f64 as u64),
        avg_nanos_f64,
        median_time: Duration::from_nanos(nanos[nanos.len() / 2]),
        min_time: Duration::from_nanos(nanos[0]),
        max_time: Duration::from_nanos(nanos[nanos.len() - 1]),
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        samples: nanos.len(),
        result_sample,
    }
}
