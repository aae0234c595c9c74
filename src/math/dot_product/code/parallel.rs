//! Multi-threaded implementation on the rayon pool.
//!
//! Both inputs are split into fixed-size chunks; each chunk runs the
//! sequential kernel and the partial sums are combined by a parallel
//! reduction. The combination order depends on work stealing, so the result
//! can differ from the reference in the last bits.

use rayon::prelude::*;

use super::dot_product_original;

/// Elements per task. Smaller inputs run as a single chunk.
pub const PARALLEL_CHUNK: usize = 4096;

/// Compute the dot product with a chunked parallel reduction.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_parallel(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    if a.len() <= PARALLEL_CHUNK {
        return dot_product_original(a, b);
    }

    a.par_chunks(PARALLEL_CHUNK)
        .zip(b.par_chunks(PARALLEL_CHUNK))
        .map(|(ca, cb)| dot_product_original(ca, cb))
        .reduce(|| 0.0, |x, y| x + y)
}
