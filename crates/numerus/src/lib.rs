//! # Numerus
//!
//! Exact arithmetic building blocks for computational number theory and
//! combinatorics, generic over the ring the values live in.
//!
//! ## Features
//!
//! - **Rings**: machine integers, big integers and rationals, compile-time
//!   and runtime moduli, quadratic extensions
//! - **Polynomials**: long, Karatsuba and NTT multiplication; Newton
//!   inversion and Hensel division
//! - **Power series**: `exp`, `ln`, powers and generating function conversions
//! - **Arithmetic functions**: Dirichlet algebra in three tiers, linear
//!   sieves and sublinear prefix sums by the hyperbola method
//! - **Number theory**: CRT, Jacobi symbols, modular square roots,
//!   primitive roots and k-th roots
//! - **Counting**: factorials, Stirling numbers, partition numbers
//!
//! ## Quick Start
//!
//! ```rust
//! use numerus::prelude::*;
//!
//! // sum of Euler's totient up to 10
//! let table = sum_phi(10, &1i64, None);
//! assert_eq!(table.get(10), Some(&32));
//!
//! // (1 + x)^5
//! let p = Polynomial::from_vec(vec![1i64, 1]);
//! assert_eq!(pow(&p, 5).coeffs(), &[1, 5, 10, 10, 5, 1]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numerus_counting as counting;
pub use numerus_dirichlet as dirichlet;
pub use numerus_integers as integers;
pub use numerus_ntheory as ntheory;
pub use numerus_poly as poly;
pub use numerus_rings as rings;
pub use numerus_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numerus_counting::{factorial, partitions_p, stirling_s1_row, stirling_s2_row};
    pub use numerus_dirichlet::{
        dirichlet_convolution, dirichlet_inverse, mertens, moebius_transform, sum_m, sum_phi,
        HyperbolaSum, Memo, SqrtMap,
    };
    pub use numerus_integers::{Integer, ModInt, Modulo, Rational};
    pub use numerus_ntheory::{chinese_remainder, jacobi, sqrt_mod, PrimeTable};
    pub use numerus_poly::{polynomial_sum, Polynomial};
    pub use numerus_rings::{pow, Invertible, Ring, StaticRing};
    pub use numerus_series::Series;
}
