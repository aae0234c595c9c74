//! Dot product implementations.
//!
//! This module contains all implementation variants of the dot product.
//! `original` is the reference; the others exist to be compared against it.

pub mod c_impl;
mod original;
mod parallel;
mod scalar_opt;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod x86_64_avx2;

#[cfg(c_implementation_active)]
pub use c_impl::{dot_product_c_original, dot_product_c_scalar_opt};
pub use c_impl::C_IMPL_AVAILABLE;
pub use original::dot_product_original;
pub use parallel::{dot_product_parallel, PARALLEL_CHUNK};
pub use scalar_opt::dot_product_scalar_opt;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::dot_product_x86_64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use x86_64_avx2::dot_product_x86_64_avx2;

use crate::utils::VariantInfo;

/// Name of the reference variant
pub const REFERENCE_VARIANT: &str = "original";

/// Type alias for dot product function signature
pub type DotProductFn = fn(&[f64], &[f64]) -> f64;

/// Get all available variants for the current build, reference first
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    let mut variants: Vec<VariantInfo<DotProductFn>> = vec![
        VariantInfo {
            name: REFERENCE_VARIANT,
            description: "Sequential left-to-right accumulation (reference)",
            function: dot_product_original,
        },
        VariantInfo {
            name: "scalar_opt",
            description: "4x unrolled scalar loop with independent accumulators",
            function: dot_product_scalar_opt,
        },
        VariantInfo {
            name: "parallel",
            description: "Chunked rayon reduction over the sequential kernel",
            function: dot_product_parallel,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    variants.push(VariantInfo {
        name: "x86_64-sse2",
        description: "x86_64 with SSE2 SIMD intrinsics (2 x f64)",
        function: dot_product_x86_64_sse2,
    });

    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    variants.push(VariantInfo {
        name: "x86_64-avx2",
        description: "x86_64 with AVX2 SIMD intrinsics (4 x f64)",
        function: dot_product_x86_64_avx2,
    });

    #[cfg(c_implementation_active)]
    {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C reference loop",
            function: dot_product_c_original,
        });
        variants.push(VariantInfo {
            name: "c-scalar_opt",
            description: "C 4x unrolled scalar loop",
            function: dot_product_c_scalar_opt,
        });
    }

    variants
}
