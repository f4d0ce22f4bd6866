//! Quadratic extensions `a + b·√d`.
//!
//! Used by Cipolla's square-root algorithm, where `d` is a quadratic
//! non-residue chosen at run time, so `d` travels with every value.

use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::Ring;

/// An element `a + b·√d` of `T[√d]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Quadratic<T> {
    /// Rational part.
    pub a: T,
    /// Coefficient of `√d`.
    pub b: T,
    /// The square of the adjoined root.
    pub d: T,
}

impl<T: Ring> Quadratic<T> {
    /// Creates `a + b·√d`.
    #[must_use]
    pub fn new(a: T, b: T, d: T) -> Self {
        Self { a, b, d }
    }

    /// The conjugate `a - b·√d`.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.a.clone(), -self.b.clone(), self.d.clone())
    }

    /// The norm `a² - d·b²`, an element of the base ring.
    #[must_use]
    pub fn norm(&self) -> T {
        self.a.clone() * self.a.clone() - self.d.clone() * self.b.clone() * self.b.clone()
    }
}

impl<T: Ring> Add for Quadratic<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.a + rhs.a, self.b + rhs.b, self.d)
    }
}

impl<T: Ring> Sub for Quadratic<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.a - rhs.a, self.b - rhs.b, self.d)
    }
}

impl<T: Ring> Mul for Quadratic<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let a = self.a.clone() * rhs.a.clone() + self.b.clone() * rhs.b.clone() * self.d.clone();
        let b = self.a * rhs.b + self.b * rhs.a;
        Self::new(a, b, self.d)
    }
}

impl<T: Ring> Neg for Quadratic<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.a, -self.b, self.d)
    }
}

impl<T: Ring> Ring for Quadratic<T> {
    fn zero_of(&self) -> Self {
        Self::new(self.a.zero_of(), self.a.zero_of(), self.d.clone())
    }

    fn identity_of(&self) -> Self {
        Self::new(self.a.identity_of(), self.a.zero_of(), self.d.clone())
    }

    fn is_zero(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    fn is_one(&self) -> bool {
        self.a.is_one() && self.b.is_zero()
    }

    fn cast_of(&self, k: i64) -> Self {
        Self::new(self.a.cast_of(k), self.a.zero_of(), self.d.clone())
    }
}
