//! # numerus-ntheory
//!
//! Elementary number theory over machine words.
//!
//! This crate provides:
//! - [`PrimeTable`]: a linear sieve with the prime list and smallest prime factors
//! - Factorization helpers: Euler φ and Carmichael λ from a factorization
//! - Chinese remaindering for non-coprime moduli, and Garner's mixed radix form
//! - Jacobi symbols and modular square roots (Cipolla, Hensel lifting, CRT)
//! - Multiplicative orders, primitive roots and k-th roots
//!
//! Moduli are `u64` with products computed in `u128`. Prime powers passed to
//! the square root routines must fit in a `u64`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod crt;
pub mod primes;
pub mod residues;
pub mod roots;

#[cfg(test)]
mod proptests;

pub use crt::{chinese_remainder, chinese_remainder_many, garner};
pub use primes::{carmichael_lambda, euler_phi, prime_factors, Factorization, PrimeTable};
pub use residues::{jacobi, sqrt_cipolla, sqrt_hensel_lift, sqrt_hensel_lift_p2, sqrt_mod};
pub use roots::{
    kth_roots, kth_roots_of_unity, multiplicative_order, primitive_root, primitive_root_of_unity,
};
