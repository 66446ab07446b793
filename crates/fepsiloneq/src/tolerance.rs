//! Tolerance thresholds and a precision-generic entry point.
//!
//! - `threshold`, `threshold_single`: the `n · ε` product for each precision.
//! - `EpsilonEq`: one trait over `f32` and `f64` for generic callers.
//! - `Tolerance`: a small config value carrying `n` between call sites.

use crate::eq::{epsilon_equal, epsilon_equal_single};

/// Double-precision threshold `n · f64::EPSILON`.
#[inline]
pub fn threshold(n: u32) -> f64 {
    f64::from(n) * f64::EPSILON
}

/// Single-precision threshold `n · f32::EPSILON`.
#[inline]
pub fn threshold_single(n: u32) -> f32 {
    n as f32 * f32::EPSILON
}

/// Epsilon equality over a floating-point type.
///
/// Each impl forwards to the precision-specific function, so
/// `x.epsilon_eq(y, n)` and `epsilon_equal(n, x, y)` never disagree.
pub trait EpsilonEq: Copy {
    /// Machine epsilon of the precision.
    const EPSILON: Self;

    /// `n · EPSILON` in this precision.
    fn threshold(n: u32) -> Self;

    /// True when `|self − other| <= n · EPSILON`.
    fn epsilon_eq(self, other: Self, n: u32) -> bool;
}

macro_rules! impl_epsilon_eq {
    ($t:ty, $threshold:ident, $eq:ident) => {
        impl EpsilonEq for $t {
            const EPSILON: Self = <$t>::EPSILON;

            #[inline]
            fn threshold(n: u32) -> Self {
                $threshold(n)
            }

            #[inline]
            fn epsilon_eq(self, other: Self, n: u32) -> bool {
                $eq(n, self, other)
            }
        }
    };
}

impl_epsilon_eq!(f64, threshold, epsilon_equal);
impl_epsilon_eq!(f32, threshold_single, epsilon_equal_single);

/// Tolerance configuration: how many epsilons two values may differ by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tolerance {
    pub n: u32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { n: 1 }
    }
}

impl Tolerance {
    #[inline]
    pub fn new(n: u32) -> Self {
        Self { n }
    }

    /// Zero epsilons, i.e. exact `==` for finite values.
    #[inline]
    pub fn exact() -> Self {
        Self { n: 0 }
    }

    #[inline]
    pub fn eq_f64(&self, x: f64, y: f64) -> bool {
        epsilon_equal(self.n, x, y)
    }

    #[inline]
    pub fn eq_f32(&self, x: f32, y: f32) -> bool {
        epsilon_equal_single(self.n, x, y)
    }

    #[inline]
    pub fn equal<T: EpsilonEq>(&self, x: T, y: T) -> bool {
        x.epsilon_eq(y, self.n)
    }

    #[inline]
    pub fn threshold<T: EpsilonEq>(&self) -> T {
        T::threshold(self.n)
    }
}

#[cfg(test)]
mod tests;
