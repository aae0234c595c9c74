//! # dot-reducer
//!
//! A sequential `f64` dot product reducer, callable from Rust and over a C ABI,
//! together with a micro-benchmark harness comparing alternative implementations.

pub mod error;
pub mod ffi;
pub mod math;
pub mod registry;
pub mod utils;

pub use error::DotError;
pub use math::dot_product::{dot, dot_product};

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::DotError;
    pub use crate::math::dot_product::{self, dot, dot_product};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let registry = build_registry();
        let algorithms = registry.all();
        assert!(!algorithms.is_empty());

        for algo in algorithms {
            if let Err(e) = algo.verify() {
                panic!("Algorithm '{}' failed verification: {}", algo.name(), e);
            }
        }
    }
}
