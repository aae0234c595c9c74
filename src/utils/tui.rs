//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner};
use crate::utils::bench::format_measurement;
use crate::utils::runner::SizeReport;
use crate::utils::timer::VariantResult;
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Lower sorts first: original (0), Rust (1), C (2), SIMD (3)
fn variant_sort_key(result: &VariantResult) -> (u8, String) {
    let name = result.name.to_lowercase();

    if name == crate::math::dot_product::REFERENCE_VARIANT {
        (0, String::new())
    } else if name.contains("sse") || name.contains("avx") || name.contains("neon") {
        (3, name)
    } else if name.starts_with("c-") {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: original first, then Rust, C and SIMD groups
pub fn sort_variants(results: &mut [VariantResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants: {}", algo.available_variants().join(", ")),
    ];

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);
    let border = "─".repeat(content_width + 2);

    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!("│ {:<width$} │", truncate(line, content_width), width = content_width);
    }
    println!("└{}┘", border);
    println!();
}

/// Relative error of `value` against `reference`, absolute near zero
fn relative_error(value: Option<f64>, reference: Option<f64>) -> f64 {
    match (value, reference) {
        (Some(v), Some(r)) => {
            let diff = (v - r).abs();
            if r.abs() > 1e-9 {
                diff / r.abs()
            } else {
                diff
            }
        }
        _ => 0.0,
    }
}

/// Variant label shown in the table; C variants carry the compiler name.
fn display_name(name: &str, compiler: Option<&str>) -> String {
    match (name.starts_with("c-"), compiler) {
        (true, Some(c)) => format!("{} ({})", name, c),
        _ => name.to_string(),
    }
}

/// Width of the variant column: wide enough for every label, and widened
/// further on terminals with room to spare.
fn variant_column_width(names: &[String], term_width: usize) -> usize {
    let longest = names
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or(0)
        .max("Variant".len());
    term_width.saturating_sub(72).max(15).max(longest)
}

/// Print the results table for one size. The first row is the baseline for
/// speedup and relative error.
pub fn print_results_table(report: &SizeReport, filtered: bool) {
    let results = &report.results;
    let Some(baseline) = results.first() else {
        return;
    };

    let names: Vec<String> = results
        .iter()
        .map(|r| display_name(&r.name, crate::utils::C_COMPILER_NAME))
        .collect();
    let variant_col_width = variant_column_width(&names, get_term_width());
    let table_width = variant_col_width + 70;
    let baseline_time = baseline.avg_nanos_f64.max(f64::MIN_POSITIVE);
    let filter_note = if filtered { ", filtered" } else { "" };

    println!(
        "  Size: {} ({} samples{})",
        report.input_size, baseline.samples, filter_note
    );
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for (result, name) in results.iter().zip(&names) {
        let speedup = if result.avg_nanos_f64 > 0.0 {
            baseline_time / result.avg_nanos_f64
        } else {
            0.0
        };
        let cv = if result.avg_nanos_f64 > 0.0 {
            result.std_dev.as_nanos() as f64 / result.avg_nanos_f64
        } else {
            0.0
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            name,
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error(result.result_sample, baseline.result_sample),
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Dot Product Reducer Benchmarks ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
        println!("  {:<20} variants: {}", "", algo.available_variants().join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(name: &str) -> VariantResult {
        VariantResult {
            name: name.to_string(),
            description: String::new(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            samples: 0,
            result_sample: None,
        }
    }

    #[test]
    fn test_sort_variants() {
        let mut results = vec![
            result("x86_64-avx2"),
            result("c-original"),
            result("parallel"),
            result("scalar_opt"),
            result("original"),
            result("x86_64-sse2"),
        ];
        sort_variants(&mut results);
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "original",
                "parallel",
                "scalar_opt",
                "c-original",
                "x86_64-avx2",
                "x86_64-sse2"
            ]
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long variant name", 10), "a long ...");
    }

    #[test]
    fn test_variant_column_fits_compiler_suffix() {
        let names = vec![
            display_name("original", Some("GCC")),
            display_name("c-original", Some("GCC")),
            display_name("c-scalar_opt", Some("Clang")),
        ];
        assert_eq!(names[0], "original");
        assert_eq!(names[1], "c-original (GCC)");
        assert_eq!(names[2], "c-scalar_opt (Clang)");

        for term_width in [0, 40, 80] {
            let width = variant_column_width(&names, term_width);
            assert!(names.iter().all(|n| n.chars().count() <= width));
        }
        assert_eq!(variant_column_width(&names, 80), 20);
        assert_eq!(variant_column_width(&names, 120), 48);
        assert_eq!(variant_column_width(&[], 80), 15);
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(Some(2.0), Some(2.0)), 0.0);
        assert_eq!(relative_error(Some(3.0), Some(2.0)), 0.5);
        assert_eq!(relative_error(Some(1e-3), Some(0.0)), 1e-3);
        assert_eq!(relative_error(None, Some(1.0)), 0.0);
    }
}
