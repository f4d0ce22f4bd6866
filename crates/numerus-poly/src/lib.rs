//! # numerus-poly
//!
//! Dense univariate polynomials over any value-carrying `Ring`.
//!
//! This crate provides:
//! - `Polynomial<T>` with ring arithmetic, evaluation, derivative and integral
//! - Pluggable multiplication through the `Multiplier<T>` strategy trait
//! - Truncated inverse modulo `x^L` by Newton iteration
//! - Euclidean division by long division or Hensel lifting
//!
//! ## Algorithm Selection
//!
//! Multiplication (`DefaultMultiplier`):
//! - Smaller operand of degree < 48: long multiplication O(l1 * l2)
//! - Otherwise: Karatsuba O(l1 * l2^0.59), recursing through the same dispatch
//!
//! Division (`Polynomial::div_rem`): long division unless the dividend has
//! degree >= 100, the divisor degree >= 50 and >= 25 * log2 of the dividend
//! degree, and the divisor's leading coefficient is a unit.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod dense;
pub mod error;

#[cfg(test)]
mod proptests;

pub use algorithms::division::{DivisionStrategy, HENSEL_LOG_FACTOR, HENSEL_MIN_DIVIDEND, HENSEL_MIN_DIVISOR};
pub use algorithms::multiply::{
    mul_into, DefaultMultiplier, KaratsubaMultiplier, LongMultiplier, Multiplier, LONG_MUL_THRESHOLD,
};
pub use algorithms::ntt::NttMultiplier;
pub use algorithms::sum::polynomial_sum;
pub use dense::Polynomial;
pub use error::PolyError;
