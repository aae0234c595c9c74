//! Bindings to the C variants compiled by the build script.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::{c_double, size_t};

    extern "C" {
        pub fn dot_product_c_original(a: *const c_double, b: *const c_double, len: size_t) -> c_double;
        pub fn dot_product_c_scalar_opt(a: *const c_double, b: *const c_double, len: size_t) -> c_double;
    }
}

/// Whether the C sources were compiled into this build
pub const C_IMPL_AVAILABLE: bool = cfg!(c_implementation_active);

/// C reference loop, same accumulation order as `original`
#[cfg(c_implementation_active)]
pub fn dot_product_c_original(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    // SAFETY: both pointers are valid for `a.len()` reads.
    unsafe { ffi::dot_product_c_original(a.as_ptr(), b.as_ptr(), a.len()) }
}

/// C 4x unrolled loop
#[cfg(c_implementation_active)]
pub fn dot_product_c_scalar_opt(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    // SAFETY: both pointers are valid for `a.len()` reads.
    unsafe { ffi::dot_product_c_scalar_opt(a.as_ptr(), b.as_ptr(), a.len()) }
}
