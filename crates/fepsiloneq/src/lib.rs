//! Epsilon equality for floating-point numbers.
//!
//! Direct `==` on floats is unreliable: `0.1` summed ten times is not `1.0`
//! in double precision. This crate compares two floats as equal when their
//! absolute difference is at most `n` machine epsilons.
//!
//! - `epsilon_equal`: double precision (`f64::EPSILON ≈ 2.22e-16`).
//! - `epsilon_equal_single`: single precision (`f32::EPSILON ≈ 1.19e-7`).
//!
//! The test is absolute, not relative: `y` must lie in the closed interval
//! `[x − n·ε, x + n·ε]`. It is meant for values near unit magnitude.

pub mod eq;
pub mod tolerance;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use eq::{epsilon_equal, epsilon_equal1, epsilon_equal_single, epsilon_equal_single1};
pub use tolerance::{threshold, threshold_single, EpsilonEq, Tolerance};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::eq::{epsilon_equal, epsilon_equal1, epsilon_equal_single, epsilon_equal_single1};
    pub use crate::tolerance::{EpsilonEq, Tolerance};
}
