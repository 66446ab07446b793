//! Epsilon-equality predicates, one per precision.
//!
//! Both predicates evaluate `n · ε >= |x − y|` in the operand precision.
//! No division is involved, so the only rounding is in the subtraction and
//! in the product `n · ε`.
//!
//! Non-finite operands follow IEEE comparison: a NaN anywhere gives `false`,
//! and two equal infinities give `false` because `inf − inf` is NaN.

/// Epsilon equality for double-precision numbers.
///
/// Succeeds when `|x − y|` is at most `n` multiples of `f64::EPSILON`.
/// `n = 0` reduces to exact equality.
#[inline]
pub fn epsilon_equal(n: u32, x: f64, y: f64) -> bool {
    f64::from(n) * f64::EPSILON >= (x - y).abs()
}

/// Epsilon equality for single-precision numbers.
///
/// Same test as [`epsilon_equal`] with `f32::EPSILON` and `f32` arithmetic.
#[inline]
pub fn epsilon_equal_single(n: u32, x: f32, y: f32) -> bool {
    // `as` rounds n to the nearest f32; exact for n < 2^24.
    n as f32 * f32::EPSILON >= (x - y).abs()
}

/// [`epsilon_equal`] with one epsilon of tolerance.
#[inline]
pub fn epsilon_equal1(x: f64, y: f64) -> bool {
    epsilon_equal(1, x, y)
}

/// [`epsilon_equal_single`] with one epsilon of tolerance.
#[inline]
pub fn epsilon_equal_single1(x: f32, y: f32) -> bool {
    epsilon_equal_single(1, x, y)
}
