//! # numerus-dirichlet
//!
//! Arithmetic functions and their Dirichlet algebra.
//!
//! This crate provides:
//! - Dirichlet convolution, division, inversion and Möbius transforms in
//!   three tiers: general (`O(n log n)`), multiplicative and completely
//!   multiplicative (near linear, driven by a prime table)
//! - Linear sieves for prefix sums `M` given `t(n) = sum p(k) M(n/k)`
//! - [`SqrtMap`]: storage keyed by the quotients `floor(n/k)`
//! - The hyperbola method for `M(n)` in `O(n^(2/3))`
//! - Applications: Mertens function, squarefree counts, totient sums and
//!   weighted sums of `mu * g` for polynomial `g`
//!
//! Tables are filled through `IndexMut<usize>`, so plain slices, `Vec`s
//! and the dense part of a [`SqrtMap`] all work as targets. Index `0` is
//! always set to zero and only indices below `n` are touched.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod applications;
pub mod hyperbola;
pub mod sieve;
pub mod sqrt_map;
pub mod tiers;

#[cfg(test)]
mod proptests;

pub use applications::{
    mertens, mertens_sieved, sqfree_count, sqfree_count_sieved, sum_g_l, sum_phi, sum_phi_d_l,
};
pub use hyperbola::{default_sieve_bound, sum_m, sum_m_unit, HyperbolaSum};
pub use sieve::{
    divisor_sigma, sieve_m, sieve_m_multiplicative, sieve_m_multiplicative_inv, sieve_m_unit,
    sieve_mertens, sieve_sqfree_count,
};
pub use sqrt_map::{Memo, SqrtMap};
pub use tiers::completely::{
    calc_completely_multiplicative, dirichlet_convolution_completely_multiplicative,
    dirichlet_division_completely_multiplicative, dirichlet_inverse_completely_multiplicative,
    moebius_transform_completely_multiplicative,
};
pub use tiers::general::{dirichlet_convolution, dirichlet_division, dirichlet_inverse, moebius_transform};
pub use tiers::multiplicative::{
    calc_multiplicative, dirichlet_convolution_multiplicative, dirichlet_division_multiplicative,
    dirichlet_inverse_multiplicative, moebius_transform_multiplicative,
};
