//! Original (reference) implementation of dot product.
//!
//! This is the reducer's contract: products are accumulated strictly from
//! index `0` to `len - 1` into an accumulator starting at `+0.0`. Every other
//! variant is verified against it.

/// Compute the dot product of two vectors by sequential accumulation.
///
/// The fold seeds with `0.0` explicitly: `f64`'s `Sum` starts from `-0.0`,
/// which would make an empty reduction negative zero.
///
/// # Panics
/// Panics if the vectors have different lengths.
///
/// # Example
/// ```
/// use dot_reducer::math::dot_product::dot_product_original;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert_eq!(dot_product_original(&a, &b), 32.0);
/// ```
pub fn dot_product_original(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    a.iter().zip(b).fold(0.0_f64, |acc, (x, y)| acc + x * y)
}
