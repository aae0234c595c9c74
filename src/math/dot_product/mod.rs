//! # Dot Product Reducer
//!
//! The dot product (inner product) of two vectors:
//!
//! `dot(a, b, n) = Σ a[i] * b[i]` for `i` in `0..n`
//!
//! The reducer accumulates strictly left to right from `+0.0`, so results are
//! bit-for-bit reproducible for a given input. The safe API validates the count
//! against both slices instead of trusting the caller; see [`crate::ffi`] for
//! the permissive C entry point.
//!
//! ## Comparison variants
//!
//! - **Loop unrolling**: independent accumulators to shorten the dependency chain
//! - **SIMD**: SSE2 and AVX2 (with FMA when available) lanes of f64
//! - **Threads**: chunked rayon reduction, one sequential chunk per task
//! - **C**: the reference loop and the unrolled loop compiled by the system C compiler

pub mod code;
#[cfg(test)]
mod test;

pub use code::*;

use crate::error::DotError;
use crate::registry::AlgorithmRunner;
use crate::utils::bench::random_vector;
use crate::utils::timer::Variant;
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;

/// Compute the dot product of the first `n` elements of `a` and `b`.
///
/// # Errors
/// Returns [`DotError::CountOutOfBounds`] when `n` exceeds the length of
/// either slice.
///
/// # Example
/// ```
/// use dot_reducer::dot_product;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert_eq!(dot_product(&a, &b, 3).unwrap(), 32.0);
/// assert_eq!(dot_product(&a, &b, 0).unwrap(), 0.0);
/// assert!(dot_product(&a, &b, 4).is_err());
/// ```
pub fn dot_product(a: &[f64], b: &[f64], n: usize) -> Result<f64, DotError> {
    if n > a.len() || n > b.len() {
        return Err(DotError::CountOutOfBounds {
            n,
            len_a: a.len(),
            len_b: b.len(),
        });
    }

    Ok(dot_product_original(&a[..n], &b[..n]))
}

/// Compute the dot product of two slices of equal length.
///
/// # Errors
/// Returns [`DotError::LengthMismatch`] when the lengths differ.
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64, DotError> {
    if a.len() != b.len() {
        return Err(DotError::LengthMismatch {
            len_a: a.len(),
            len_b: b.len(),
        });
    }

    Ok(dot_product_original(a, b))
}

/// Sizes checked by [`DotProductRunner::verify`]; odd sizes exercise the
/// remainder loops of the unrolled and SIMD variants, and the last size
/// leaves a partial chunk for the parallel variant.
const VERIFY_SIZES: [usize; 8] = [0, 1, 3, 4, 7, 64, 1023, 2 * PARALLEL_CHUNK + 5];

const VERIFY_SEED: u64 = 0x5EED_D07;

/// Forward error bound of naive summation, doubled.
fn tolerance(a: &[f64], b: &[f64]) -> f64 {
    let magnitude: f64 = a.iter().zip(b).map(|(x, y)| (x * y).abs()).sum();
    2.0 * a.len() as f64 * f64::EPSILON * magnitude
}

/// Runner for the dot product reducer
pub struct DotProductRunner;

impl AlgorithmRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    fn description(&self) -> &'static str {
        "Sum of pairwise products of two f64 vectors"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let a: Arc<Vec<f64>> = Arc::new(random_vector(&mut rng, size));
        let b: Arc<Vec<f64>> = Arc::new(random_vector(&mut rng, size));

        code::available_variants()
            .into_iter()
            .map(|v| {
                let a = Arc::clone(&a);
                let b = Arc::clone(&b);
                let func = v.function;

                Variant {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) = crate::measure!(func(
                            std::hint::black_box(a.as_slice()),
                            std::hint::black_box(b.as_slice())
                        ));
                        (elapsed, Some(result))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), DotError> {
        let variants = code::available_variants();
        let reference = variants
            .iter()
            .find(|v| v.name == REFERENCE_VARIANT)
            .ok_or(DotError::MissingReference(REFERENCE_VARIANT))?;

        let mut rng = StdRng::seed_from_u64(VERIFY_SEED);

        for size in VERIFY_SIZES {
            let a = random_vector(&mut rng, size);
            let b = random_vector(&mut rng, size);
            let expected = (reference.function)(&a, &b);
            let tol = tolerance(&a, &b);

            for variant in variants.iter().filter(|v| v.name != REFERENCE_VARIANT) {
                let got = (variant.function)(&a, &b);
                if (got - expected).abs() > tol {
                    return Err(DotError::Diverged {
                        variant: variant.name,
                        expected,
                        got,
                    });
                }
            }
            tracing::debug!(size, variants = variants.len(), "dot_product variants agree");
        }

        Ok(())
    }
}
