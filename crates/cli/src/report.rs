//! JSON reports for the `epsilon`, `compare` and `demo` subcommands.
//!
//! Single-precision values are computed in `f32` and widened to `f64` only
//! for serialization, which is lossless.

use anyhow::{Context, Result};
use clap::ValueEnum;
use fepsiloneq::{threshold, threshold_single, Tolerance};
use serde::Serialize;

/// Floating-point precision to compare in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Double,
    Single,
}

/// One evaluation of the predicate plus the numbers behind it.
#[derive(Clone, Debug, Serialize)]
pub struct Comparison {
    pub precision: Precision,
    pub n: u32,
    pub x: f64,
    pub y: f64,
    pub epsilon: f64,
    pub threshold: f64,
    pub difference: f64,
    pub exact_equal: bool,
    pub epsilon_equal: bool,
}

impl Comparison {
    pub fn double(tol: Tolerance, x: f64, y: f64) -> Self {
        Self {
            precision: Precision::Double,
            n: tol.n,
            x,
            y,
            epsilon: f64::EPSILON,
            threshold: tol.threshold::<f64>(),
            difference: (x - y).abs(),
            exact_equal: x == y,
            epsilon_equal: tol.eq_f64(x, y),
        }
    }

    pub fn single(tol: Tolerance, x: f32, y: f32) -> Self {
        Self {
            precision: Precision::Single,
            n: tol.n,
            x: f64::from(x),
            y: f64::from(y),
            epsilon: f64::from(f32::EPSILON),
            threshold: f64::from(tol.threshold::<f32>()),
            difference: f64::from((x - y).abs()),
            exact_equal: x == y,
            epsilon_equal: tol.eq_f32(x, y),
        }
    }

    /// Parse both operands directly in the target precision.
    ///
    /// Parsing `f32` from text rounds once; going through `f64` would round twice.
    pub fn parse(precision: Precision, tol: Tolerance, x: &str, y: &str) -> Result<Self> {
        match precision {
            Precision::Double => Ok(Self::double(tol, parse_operand(x)?, parse_operand(y)?)),
            Precision::Single => Ok(Self::single(tol, parse_operand(x)?, parse_operand(y)?)),
        }
    }
}

fn parse_operand<T>(text: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.trim()
        .parse::<T>()
        .with_context(|| format!("parsing operand {text:?} as a floating-point number"))
}

/// Epsilon and threshold of one precision.
#[derive(Clone, Debug, Serialize)]
pub struct PrecisionInfo {
    pub epsilon: f64,
    pub threshold: f64,
}

/// Machine epsilons of both precisions for a given `n`.
#[derive(Clone, Debug, Serialize)]
pub struct EpsilonTable {
    pub n: u32,
    pub double: PrecisionInfo,
    pub single: PrecisionInfo,
}

impl EpsilonTable {
    pub fn new(n: u32) -> Self {
        Self {
            n,
            double: PrecisionInfo {
                epsilon: f64::EPSILON,
                threshold: threshold(n),
            },
            single: PrecisionInfo {
                epsilon: f64::from(f32::EPSILON),
                threshold: f64::from(threshold_single(n)),
            },
        }
    }
}

/// `0.1` summed `terms` times, compared against `terms / 10`.
#[derive(Clone, Debug, Serialize)]
pub struct SumDemo {
    pub terms: u32,
    pub double: Comparison,
    pub single: Comparison,
}

pub fn accumulated_sum(terms: u32, tol: Tolerance) -> SumDemo {
    let mut sum = 0.0f64;
    let mut sum_single = 0.0f32;
    for _ in 0..terms {
        sum += 0.1;
        sum_single += 0.1;
    }
    SumDemo {
        terms,
        double: Comparison::double(tol, sum, f64::from(terms) / 10.0),
        single: Comparison::single(tol, sum_single, terms as f32 / 10.0),
    }
}
