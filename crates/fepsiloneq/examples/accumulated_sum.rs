//! Why `==` fails on floats, and what epsilon equality does instead.
//!
//! Sums `0.1` repeatedly in both precisions and compares each partial sum
//! against the decimal value it should equal, once with `==` and once with
//! a one-epsilon tolerance.
//!
//! Run: `cargo run -p fepsiloneq --example accumulated_sum`

use fepsiloneq::{epsilon_equal1, epsilon_equal_single1};

fn main() {
    println!("terms  sum(f64)              ==     eps    sum(f32)      ==     eps");
    let mut sum = 0.0f64;
    let mut sum_single = 0.0f32;
    for k in 1..=10u32 {
        sum += 0.1;
        sum_single += 0.1;
        let expected = f64::from(k) / 10.0;
        let expected_single = k as f32 / 10.0;
        println!(
            "{k:>5}  {sum:<20.17}  {:<5}  {:<5}  {sum_single:<12.9}  {:<5}  {:<5}",
            sum == expected,
            epsilon_equal1(sum, expected),
            sum_single == expected_single,
            epsilon_equal_single1(sum_single, expected_single),
        );
    }
}
