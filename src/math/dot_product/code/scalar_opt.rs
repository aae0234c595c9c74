//! Optimized scalar implementation with loop unrolling.
//!
//! Four independent accumulators break the add dependency chain. The
//! summation order differs from the reference, so results may differ in the
//! last bits.

/// Compute the dot product with 4x loop unrolling.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_scalar_opt(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let mut sums = [0.0f64; 4];

    let a_chunks = a.chunks_exact(4);
    let b_chunks = b.chunks_exact(4);
    let a_tail = a_chunks.remainder();
    let b_tail = b_chunks.remainder();

    for (ca, cb) in a_chunks.zip(b_chunks) {
        sums[0] += ca[0] * cb[0];
        sums[1] += ca[1] * cb[1];
        sums[2] += ca[2] * cb[2];
        sums[3] += ca[3] * cb[3];
    }

    for (x, y) in a_tail.iter().zip(b_tail) {
        sums[0] += x * y;
    }

    (sums[0] + sums[1]) + (sums[2] + sums[3])
}
