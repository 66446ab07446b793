//! C ABI bindings for `fepsiloneq`.
//!
//! Notes
//! - Keep bindings thin: each symbol forwards to the Rust predicate of the
//!   same precision, so results are identical on both sides of the boundary.
//! - Symbols match the C header names, so C, C++ or R callers can declare
//!   `bool fepsiloneq(unsigned n, double x, double y);` and
//!   `bool fepsiloneqf(unsigned n, float x, float y);` and link against the
//!   `fepsiloneq_native` library.

use std::ffi::{c_double, c_float, c_uint};

use ::fepsiloneq::{epsilon_equal, epsilon_equal_single};

/// Double-precision epsilon equality: `n * DBL_EPSILON >= fabs(x - y)`.
#[no_mangle]
pub extern "C" fn fepsiloneq(n: c_uint, x: c_double, y: c_double) -> bool {
    epsilon_equal(n, x, y)
}

/// Single-precision epsilon equality: `n * FLT_EPSILON >= fabsf(x - y)`.
#[no_mangle]
pub extern "C" fn fepsiloneqf(n: c_uint, x: c_float, y: c_float) -> bool {
    epsilon_equal_single(n, x, y)
}
