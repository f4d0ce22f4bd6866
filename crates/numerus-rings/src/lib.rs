//! # numerus-rings
//!
//! The ring abstraction shared by every numerus algorithm.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `StaticRing`, `Invertible`
//! - Free functions `pow` and `sq`
//! - Implementations for machine integers, `f64`, `Integer`, `Rational`,
//!   `ModInt<P>` and `Modulo`
//! - The quadratic extension `Quadratic<T>`
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring (value-carrying zero_of / identity_of / cast_of)
//!  ├── StaticRing (zero() / one() from the type)
//!  └── Invertible (Div + reciprocal)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod integers;
pub mod primitive;
pub mod quadratic;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use quadratic::Quadratic;
pub use traits::{pow, sq, Invertible, Ring, StaticRing};
