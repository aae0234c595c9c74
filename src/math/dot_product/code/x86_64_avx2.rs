//! x86_64 AVX2 SIMD implementation.
//!
//! Processes four f64 values per iteration in 256-bit registers. Only
//! compiled when the build enables `target-feature=+avx2`.

use std::arch::x86_64::*;

/// Compute the dot product using AVX2 SIMD instructions.
///
/// Uses fused multiply-add when the `fma` target feature is also enabled.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_x86_64_avx2(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let len = a.len();

    if len < 4 {
        return super::dot_product_original(a, b);
    }

    let chunks = len / 4;

    // SAFETY: this module is gated on `target_feature = "avx2"` and every
    // load reads `idx..idx + 4` with `idx + 4 <= chunks * 4 <= len`.
    let mut result = unsafe {
        let mut sum_vec = _mm256_setzero_pd();

        for i in 0..chunks {
            let idx = i * 4;
            let a_vec = _mm256_loadu_pd(a.as_ptr().add(idx));
            let b_vec = _mm256_loadu_pd(b.as_ptr().add(idx));

            #[cfg(target_feature = "fma")]
            {
                sum_vec = _mm256_fmadd_pd(a_vec, b_vec, sum_vec);
            }
            #[cfg(not(target_feature = "fma"))]
            {
                sum_vec = _mm256_add_pd(sum_vec, _mm256_mul_pd(a_vec, b_vec));
            }
        }

        // [a, b, c, d] -> [a+c, b+d] -> a+c+b+d
        let hi = _mm256_extractf128_pd(sum_vec, 1);
        let lo = _mm256_castpd256_pd128(sum_vec);
        let sum128 = _mm_add_pd(lo, hi);
        let shuf = _mm_unpackhi_pd(sum128, sum128);
        _mm_cvtsd_f64(_mm_add_sd(sum128, shuf))
    };

    let base = chunks * 4;
    for (x, y) in a[base..].iter().zip(&b[base..]) {
        result += x * y;
    }

    result
}
