//! C ABI entry points for foreign callers.
//!
//! Two contracts are exported. [`dot_reducer_dot_product`] keeps the classic
//! `double dot_product(double v[], double u[], int n)` shape and trusts the
//! caller's count. [`dot_reducer_dot_product_checked`] takes the buffer lengths
//! as well and reports bad input through a status code.

use libc::{c_double, c_int, size_t};

use crate::math::dot_product::{dot_product, dot_product_original};

/// Result written to `out`.
pub const DOT_OK: c_int = 0;
/// `v`, `u` or `out` was null.
pub const DOT_ERR_NULL: c_int = -1;
/// `n` exceeded `v_len` or `u_len`.
pub const DOT_ERR_OUT_OF_BOUNDS: c_int = -2;

/// Dot product of the first `n` elements of `v` and `u`.
///
/// A negative `n`, or a null pointer, is an empty reduction and returns `0.0`.
///
/// # Safety
/// For `n > 0`, `v` and `u` must each point to at least `n` readable,
/// initialized `double`s that are not mutated during the call.
#[no_mangle]
pub unsafe extern "C" fn dot_reducer_dot_product(
    v: *const c_double,
    u: *const c_double,
    n: c_int,
) -> c_double {
    let Ok(n) = usize::try_from(n) else {
        return 0.0;
    };
    if n == 0 || v.is_null() || u.is_null() {
        return 0.0;
    }

    // SAFETY: upheld by the caller per the contract above.
    let (a, b) = unsafe { (std::slice::from_raw_parts(v, n), std::slice::from_raw_parts(u, n)) };
    dot_product_original(a, b)
}

/// Bounds-checked dot product of the first `n` elements of `v` and `u`.
///
/// Returns [`DOT_OK`] and stores the result in `*out`, or a negative status
/// code leaving `*out` untouched.
///
/// # Safety
/// `v` and `u` must point to `v_len` and `u_len` readable `double`s
/// respectively, and `out` must be valid for one write.
#[no_mangle]
pub unsafe extern "C" fn dot_reducer_dot_product_checked(
    v: *const c_double,
    v_len: size_t,
    u: *const c_double,
    u_len: size_t,
    n: size_t,
    out: *mut c_double,
) -> c_int {
    if v.is_null() || u.is_null() || out.is_null() {
        return DOT_ERR_NULL;
    }

    // SAFETY: upheld by the caller per the contract above.
    let (a, b) = unsafe {
        (
            std::slice::from_raw_parts(v, v_len),
            std::slice::from_raw_parts(u, u_len),
        )
    };

    match dot_product(a, b, n) {
        Ok(result) => {
            // SAFETY: `out` is non-null and valid for writes per the contract.
            unsafe { out.write(result) };
            DOT_OK
        }
        Err(err) => {
            tracing::debug!(%err, "checked dot product rejected input");
            DOT_ERR_OUT_OF_BOUNDS
        }
    }
}
