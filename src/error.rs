use thiserror::Error;

/// Errors raised by the reducer and the benchmark harness around it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DotError {
    #[error("count {n} exceeds vector length (a: {len_a}, b: {len_b})")]
    CountOutOfBounds { n: usize, len_a: usize, len_b: usize },

    #[error("vectors must have the same length (a: {len_a}, b: {len_b})")]
    LengthMismatch { len_a: usize, len_b: usize },

    #[error("no '{0}' variant found for reference")]
    MissingReference(&'static str),

    #[error("variant '{variant}' failed verification: expected {expected}, got {got}")]
    Diverged {
        variant: &'static str,
        expected: f64,
        got: f64,
    },

    #[error("algorithm '{0}' not found")]
    UnknownAlgorithm(String),
}
