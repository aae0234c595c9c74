use super::code::*;
use super::{dot, dot_product, DotProductRunner};
use crate::error::DotError;
use crate::registry::AlgorithmRunner;
use crate::utils::bench::random_vector;
use approx::assert_relative_eq;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;

#[test]
fn test_dot_product_basic() {
    let a = [1.0, 2.0, 3.0];
    let b = [4.0, 5.0, 6.0];
    // 1*4 + 2*5 + 3*6 = 32
    assert_eq!(dot_product(&a, &b, 3), Ok(32.0));
}

#[test]
fn test_dot_product_zero_vector() {
    assert_eq!(dot_product(&[0.0, 0.0], &[1.0, 1.0], 2), Ok(0.0));
}

#[test]
fn test_dot_product_cancelling_terms() {
    assert_eq!(dot_product(&[-1.0, 1.0], &[1.0, 1.0], 2), Ok(0.0));
}

#[test]
fn test_dot_product_zero_count_is_positive_zero() {
    let a = [-3.0, 7.5];
    let b = [2.0, -1.0];
    let result = dot_product(&a, &b, 0).unwrap();
    assert_eq!(result.to_bits(), 0.0f64.to_bits());

    let empty: [f64; 0] = [];
    let result = dot_product_original(&empty, &empty);
    assert_eq!(result.to_bits(), 0.0f64.to_bits());
}

#[test]
fn test_dot_product_prefix_only() {
    let a = [1.0, 2.0, 100.0];
    let b = [3.0, 4.0, 100.0];
    assert_eq!(dot_product(&a, &b, 2), Ok(11.0));
}

#[test]
fn test_dot_product_count_out_of_bounds() {
    let a = [1.0, 2.0, 3.0];
    let b = [1.0, 2.0];
    assert_eq!(
        dot_product(&a, &b, 3),
        Err(DotError::CountOutOfBounds {
            n: 3,
            len_a: 3,
            len_b: 2
        })
    );
    // Shorter slice bounds the count, not the longer one
    assert_eq!(dot_product(&a, &b, 2), Ok(5.0));
}

#[test]
fn test_dot_length_mismatch() {
    assert_eq!(
        dot(&[1.0], &[1.0, 2.0]),
        Err(DotError::LengthMismatch { len_a: 1, len_b: 2 })
    );
    assert_eq!(dot(&[2.0, 3.0], &[4.0, 5.0]), Ok(23.0));
}

#[test]
fn test_sequential_accumulation_order() {
    // Left to right: (1e16 + 1) rounds back to 1e16, then cancels to 0.
    // Any reordering that adds 1 last would yield 1.0.
    let a = [1e16, 1.0, -1e16];
    let b = [1.0, 1.0, 1.0];
    assert_eq!(dot_product(&a, &b, 3), Ok(0.0));

    let a = [1e16, -1e16, 1.0];
    assert_eq!(dot_product(&a, &b, 3), Ok(1.0));
}

#[test]
fn test_commutative_bitwise() {
    let mut rng = StdRng::seed_from_u64(42);
    let a = random_vector(&mut rng, 257);
    let b = random_vector(&mut rng, 257);

    let ab = dot_product(&a, &b, a.len()).unwrap();
    let ba = dot_product(&b, &a, a.len()).unwrap();
    assert_eq!(ab.to_bits(), ba.to_bits());
}

#[test]
fn test_repeated_calls_identical() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = random_vector(&mut rng, 1000);
    let b = random_vector(&mut rng, 1000);

    let first = dot_product(&a, &b, 1000).unwrap();
    let second = dot_product(&a, &b, 1000).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_matches_explicit_loop() {
    let mut rng = StdRng::seed_from_u64(99);
    let a = random_vector(&mut rng, 513);
    let b = random_vector(&mut rng, 513);

    let mut expected = 0.0f64;
    for i in 0..a.len() {
        expected += a[i] * b[i];
    }
    assert_eq!(dot_product_original(&a, &b).to_bits(), expected.to_bits());
}

#[test]
#[should_panic(expected = "Vectors must have the same length")]
fn test_original_rejects_unequal_slices() {
    dot_product_original(&[1.0, 2.0], &[1.0]);
}

#[test]
fn test_reference_variant_first() {
    let variants = available_variants();
    assert_eq!(variants[0].name, REFERENCE_VARIANT);
    assert!(variants.iter().any(|v| v.name == "scalar_opt"));
    assert!(variants.iter().any(|v| v.name == "parallel"));
}

#[test]
fn test_all_variants_close_to_original() {
    let mut rng = StdRng::seed_from_u64(0xD07);
    for size in [1, 2, 5, 8, 33, 4096] {
        let a = random_vector(&mut rng, size);
        let b = random_vector(&mut rng, size);
        let expected = dot_product_original(&a, &b);

        for variant in available_variants() {
            let got = (variant.function)(&a, &b);
            assert_relative_eq!(got, expected, epsilon = 1e-12, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_all_variants_exact_on_small_integers() {
    let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let b = [7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
    for variant in available_variants() {
        assert_eq!((variant.function)(&a, &b), 84.0, "variant {}", variant.name);
    }
}

#[cfg(c_implementation_active)]
#[test]
fn test_c_original_bit_exact() {
    let mut rng = StdRng::seed_from_u64(1234);
    let a = random_vector(&mut rng, 1023);
    let b = random_vector(&mut rng, 1023);
    assert_eq!(
        dot_product_c_original(&a, &b).to_bits(),
        dot_product_original(&a, &b).to_bits()
    );
}

#[test]
fn test_runner_verify() {
    assert_eq!(DotProductRunner.verify(), Ok(()));
}

#[test]
fn test_runner_closures_report_reference_result() {
    let runner = DotProductRunner;
    let mut closures = runner.get_variant_closures(64, 11);
    assert_eq!(closures.len(), runner.available_variants().len());

    let mut rng = StdRng::seed_from_u64(11);
    let a = random_vector(&mut rng, 64);
    let b = random_vector(&mut rng, 64);
    let expected = dot_product_original(&a, &b);

    let (_, result) = (closures[0].run)();
    assert_eq!(result, Some(expected));
}

#[test]
fn test_parallel_partial_last_chunk() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for size in [
        PARALLEL_CHUNK - 1,
        PARALLEL_CHUNK + 1,
        3 * PARALLEL_CHUNK + 17,
    ] {
        let a = random_vector(&mut rng, size);
        let b = random_vector(&mut rng, size);
        let expected = dot_product_original(&a, &b);
        let magnitude: f64 = a.iter().zip(&b).map(|(x, y)| (x * y).abs()).sum();
        let tol = 2.0 * size as f64 * f64::EPSILON * magnitude;

        let got = dot_product_parallel(&a, &b);
        assert!(
            (got - expected).abs() <= tol,
            "size {}: expected {}, got {}",
            size,
            expected,
            got
        );
    }
}

#[test]
fn test_parallel_counts_every_element() {
    // Integer-valued terms sum exactly in any order, so a dropped or
    // duplicated chunk shows up as a wrong total.
    let size = 2 * PARALLEL_CHUNK + 3;
    let a = vec![1.0; size];
    let b: Vec<f64> = (0..size).map(|i| (i % 7) as f64).collect();
    let expected: f64 = b.iter().sum();
    assert_eq!(dot_product_parallel(&a, &b), expected);
    assert_eq!(dot_product_parallel(&[], &[]).to_bits(), 0.0f64.to_bits());
}

#[test]
fn test_dot_product_concurrent_callers_agree() {
    let mut rng = StdRng::seed_from_u64(2024);
    let a = Arc::new(random_vector(&mut rng, 10_000));
    let b = Arc::new(random_vector(&mut rng, 10_000));
    let expected = dot_product(&a, &b, a.len()).unwrap();

    let results: Vec<f64> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let a = Arc::clone(&a);
                let b = Arc::clone(&b);
                s.spawn(move || {
                    let mut last = 0.0;
                    for _ in 0..(10 + worker) {
                        last = dot_product(&a, &b, a.len()).unwrap();
                    }
                    last
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.len(), 8);
    for result in results {
        assert_eq!(result.to_bits(), expected.to_bits());
    }
}
