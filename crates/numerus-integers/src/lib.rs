//! # numerus-integers
//!
//! Concrete number types for the numerus algorithms.
//!
//! This crate provides:
//! - Arbitrary precision integers (`Integer`) and rationals (`Rational`), backed by `dashu`
//! - Modular integers with a compile-time modulus (`ModInt<P>`)
//! - Modular integers with a runtime modulus (`Modulo`)
//! - Machine-word integer helpers: gcd, integer roots, modular products
//!
//! None of these types know about the ring abstraction; `numerus-rings`
//! wires them into it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod integer;
pub mod modular;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use modular::{ModInt, Modulo};
pub use rational::Rational;
