//! Polynomial algorithms.
//!
//! This module contains:
//! - The `Multiplier` dispatch point with long, Karatsuba and NTT kernels
//! - Newton inversion modulo `x^L`
//! - Long and Hensel division
//! - Closed-form prefix sums

pub mod division;
pub mod karatsuba;
pub mod multiply;
pub mod ntt;
pub mod sum;
