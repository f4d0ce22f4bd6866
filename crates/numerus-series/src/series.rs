//! Truncated power series.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use numerus_poly::Polynomial;
use numerus_rings::{Invertible, Ring};

use crate::error::SeriesError;

/// A formal power series known modulo `x^order`.
///
/// The backing polynomial always stores exactly `order` coefficients, for
/// `x^0` through `x^(order-1)`. Binary operations produce a series of the
/// smaller of the two orders.
#[derive(Clone)]
pub struct Series<T> {
    p: Polynomial<T>,
    order: usize,
}

impl<T: Ring> Series<T> {
    /// Wraps `p`, truncating or zero padding it to `order` coefficients.
    ///
    /// # Panics
    ///
    /// Panics if `order` is zero.
    #[must_use]
    pub fn new(mut p: Polynomial<T>, order: usize) -> Self {
        assert!(order > 0, "series order must be positive");
        p.resize(order);
        Self { p, order }
    }

    /// Builds a series from its leading coefficients.
    ///
    /// # Panics
    ///
    /// Panics if `coeffs` is empty or `order` is zero.
    #[must_use]
    pub fn from_vec(coeffs: Vec<T>, order: usize) -> Self {
        Self::new(Polynomial::from_vec(coeffs), order)
    }

    /// The constant series `c`.
    #[must_use]
    pub fn constant(c: T, order: usize) -> Self {
        Self::new(Polynomial::new(c), order)
    }

    /// Number of tracked coefficients.
    #[must_use]
    pub fn order(&self) -> usize {
        self.order
    }

    /// The coefficient of `x^i` (zero at or beyond the order).
    #[must_use]
    pub fn at(&self, i: usize) -> &T {
        self.p.at(i)
    }

    /// Mutable access to the coefficient of `x^i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= order`.
    pub fn coeff_mut(&mut self, i: usize) -> &mut T {
        assert!(i < self.order, "coefficient {i} beyond series order {}", self.order);
        self.p.coeff_mut(i)
    }

    /// The backing polynomial.
    #[must_use]
    pub fn poly(&self) -> &Polynomial<T> {
        &self.p
    }

    /// Consumes the series, returning the backing polynomial.
    #[must_use]
    pub fn into_poly(self) -> Polynomial<T> {
        self.p
    }

    /// The same series tracked to a different order.
    #[must_use]
    pub fn resize(&self, order: usize) -> Self {
        Self::new(self.p.clone(), order)
    }

    /// Multiplies every coefficient by `s`.
    #[must_use]
    pub fn scale(&self, s: &T) -> Self {
        Self::new(self.p.scale(s), self.order)
    }

    /// Computes `self^e` by repeated squaring of truncated products.
    #[must_use]
    pub fn powi(&self, mut e: u64) -> Self {
        let mut result = Self::constant(self.at(0).identity_of(), self.order);
        let mut base = self.clone();

        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }

        result
    }

    /// The formal derivative, keeping the order.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(self.p.derivative(), self.order)
    }
}

impl<T: Invertible> Series<T> {
    /// Divides every coefficient by `s`.
    #[must_use]
    pub fn div_scalar(&self, s: &T) -> Self {
        Self::new(self.p.div_scalar(s), self.order)
    }

    /// The antiderivative with constant term `c0`, truncated to the order.
    #[must_use]
    pub fn integral(&self, c0: T) -> Self {
        Self::new(self.p.integral(c0), self.order)
    }

    /// The multiplicative inverse modulo `x^order`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Poly`] if the constant term is not a unit.
    pub fn inverse(&self) -> Result<Self, SeriesError> {
        Ok(Self::new(self.p.inverse_mod_xl(self.order)?, self.order))
    }

    /// `self / other` modulo `x^order`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Poly`] if the constant term of `other` is not a unit.
    pub fn div(&self, other: &Self) -> Result<Self, SeriesError> {
        let order = self.order.min(other.order);
        let inv = other.resize(order).inverse()?;
        Ok(&self.resize(order) * &inv)
    }
}

impl<T: Ring> PartialEq for Series<T> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.p == other.p
    }
}

impl<T: Ring> fmt::Debug for Series<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + O(x^{})", self.p.coeffs(), self.order)
    }
}

impl<T: Ring> Add<&Series<T>> for &Series<T> {
    type Output = Series<T>;

    fn add(self, rhs: &Series<T>) -> Self::Output {
        Series::new(&self.p + &rhs.p, self.order.min(rhs.order))
    }
}

impl<T: Ring> Sub<&Series<T>> for &Series<T> {
    type Output = Series<T>;

    fn sub(self, rhs: &Series<T>) -> Self::Output {
        Series::new(&self.p - &rhs.p, self.order.min(rhs.order))
    }
}

impl<T: Ring> Mul<&Series<T>> for &Series<T> {
    type Output = Series<T>;

    fn mul(self, rhs: &Series<T>) -> Self::Output {
        let order = self.order.min(rhs.order);
        Series::new(self.p.mul_truncated(&rhs.p, order - 1), order)
    }
}

impl<T: Ring> Neg for &Series<T> {
    type Output = Series<T>;

    fn neg(self) -> Self::Output {
        Series::new(-&self.p, self.order)
    }
}

/// Panicking division; [`Series::div`] reports a non-unit constant term as
/// an error instead.
impl<T: Invertible> Div<&Series<T>> for &Series<T> {
    type Output = Series<T>;

    /// # Panics
    ///
    /// Panics if the constant term of `rhs` is not a unit; use
    /// [`Series::div`] for a fallible version.
    fn div(self, rhs: &Series<T>) -> Self::Output {
        match Series::div(self, rhs) {
            Ok(s) => s,
            Err(e) => panic!("series division failed: {e}"),
        }
    }
}
