//! Shared benchmark utilities.
//!
//! By default (`cpu_cycles` feature), measurements use CPU cycle counters
//! for precise micro-benchmarking. Use `--features use_time` or
//! `--no-default-features` to use wall-clock time instead.

use rand::Rng;
use std::time::Duration;

// ============================================================================
// Measurement abstraction: cycles or time depending on feature flags
// ============================================================================
//
// Use CPU cycles if: cpu_cycles is enabled AND use_time is NOT enabled
// Use wall-clock time if: use_time is enabled OR cpu_cycles is disabled

/// Measurement value type - cycles (u64) or Duration depending on feature
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

/// Read current measurement (cycles or time)
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Measurement {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> std::time::Instant {
    std::time::Instant::now()
}

/// Calculate elapsed measurement
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Measurement) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: std::time::Instant) -> Measurement {
    start.elapsed()
}

/// Convert measurement to an integer count (cycles, or nanoseconds)
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_nanos(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Get the measurement unit name
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        "cycles"
    }
    #[cfg(not(any(target_arch = "aarch64", target_arch = "x86_64", target_arch = "x86")))]
    {
        "units"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Time one expression, returning `(measurement, value)`.
///
/// The value goes through `black_box` so the work cannot be elided.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let value = ::std::hint::black_box($e);
        let elapsed = $crate::utils::bench::elapsed(start);
        (elapsed, value)
    }};
}

/// Format a stored measurement for display.
///
/// Results keep cycle counts in a `Duration` as raw nanoseconds, so the unit
/// decides how to print them.
pub fn format_measurement(d: Duration) -> String {
    let n = d.as_nanos();
    if unit_name() != "ns" {
        return format!("{} {}", n, unit_name());
    }
    if n < 1_000 {
        format!("{} ns", n)
    } else if n < 1_000_000 {
        format!("{:.2} µs", n as f64 / 1e3)
    } else {
        format!("{:.2} ms", n as f64 / 1e6)
    }
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Generate `len` values uniformly distributed in `[-1.0, 1.0)`
pub fn random_vector<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// Drop the lowest and highest 1% of samples (at least one each side once
/// there are enough samples to spare).
pub fn trim_outliers(sorted: &[u64]) -> &[u64] {
    let cut = sorted.len() / 100;
    let cut = if cut == 0 && sorted.len() >= 10 { 1 } else { cut };
    &sorted[cut..sorted.len() - cut]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_random_vector_range_and_seed() {
        let a = random_vector(&mut StdRng::seed_from_u64(3), 500);
        let b = random_vector(&mut StdRng::seed_from_u64(3), 500);
        assert_eq!(a, b);
        assert!(a.iter().all(|x| (-1.0..1.0).contains(x)));
    }

    #[test]
    fn test_trim_outliers() {
        let small = [1, 2, 3];
        assert_eq!(trim_outliers(&small), &small);

        let ten: Vec<u64> = (0..10).collect();
        assert_eq!(trim_outliers(&ten), &ten[1..9]);

        let many: Vec<u64> = (0..300).collect();
        assert_eq!(trim_outliers(&many), &many[3..297]);
    }

    #[test]
    fn test_measure_macro_returns_value() {
        let (_, value) = crate::measure!(6 * 7);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_format_measurement_unit() {
        let s = format_measurement(Duration::from_nanos(500));
        assert!(s.starts_with("500 "), "{}", s);
        assert!(s.ends_with(unit_name()) || s.ends_with("ns"), "{}", s);
    }
}
