//! # numerus-series
//!
//! Truncated formal power series over any value-carrying `Ring`.
//!
//! This crate provides:
//! - [`Series`]: a polynomial known modulo `x^order`, with truncated arithmetic
//! - Inversion and division through Newton inversion of the polynomial engine
//! - `exp`, `ln` and powers, including normalization by the lowest term
//! - Conversion between ordinary and exponential generating functions
//!
//! # Key algorithms
//!
//! - Inversion: Newton iteration
//! - Log: `∫ a'/a`
//! - Exp: Newton iteration `r <- r (1 + a - ln r)`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ops;
pub mod series;

#[cfg(test)]
mod proptests;

pub use error::SeriesError;
pub use series::Series;
