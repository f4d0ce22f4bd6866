//! Dense univariate polynomials.
//!
//! A `Polynomial<T>` owns its coefficients in ascending degree order
//! together with the zero of its coefficient ring, so that even a
//! polynomial over a runtime-parameterized ring can build new
//! coefficients. Trailing zero coefficients are allowed; the degree is
//! always computed from the last nonzero one.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use numerus_rings::Ring;

use crate::algorithms::multiply::{mul_into, DefaultMultiplier, Multiplier};

/// A dense univariate polynomial with coefficients in `T`.
#[derive(Clone, Debug)]
pub struct Polynomial<T> {
    /// Coefficients in ascending degree order; never empty.
    coeffs: Vec<T>,
    /// The zero of the coefficient ring.
    zero: T,
}

impl<T: Ring> Polynomial<T> {
    /// Creates the constant polynomial `c0`.
    #[must_use]
    pub fn new(c0: T) -> Self {
        Self {
            zero: c0.zero_of(),
            coeffs: vec![c0],
        }
    }

    /// Creates a polynomial from its coefficients in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `coeffs` is empty; use [`Polynomial::with_zero`] when the
    /// coefficient list may be empty.
    #[must_use]
    pub fn from_vec(coeffs: Vec<T>) -> Self {
        assert!(!coeffs.is_empty(), "polynomial needs at least one coefficient");
        Self {
            zero: coeffs[0].zero_of(),
            coeffs,
        }
    }

    /// Creates a polynomial from a possibly empty coefficient list and an
    /// explicit ring zero.
    #[must_use]
    pub fn with_zero(zero: T, mut coeffs: Vec<T>) -> Self {
        if coeffs.is_empty() {
            coeffs.push(zero.clone());
        }
        Self { coeffs, zero }
    }

    /// Creates the monomial `c * x^n`.
    #[must_use]
    pub fn monomial(c: T, n: usize) -> Self {
        let zero = c.zero_of();
        let mut coeffs = vec![zero.clone(); n + 1];
        coeffs[n] = c;
        Self { coeffs, zero }
    }

    /// Number of stored coefficients, including trailing zeros.
    #[must_use]
    pub fn size(&self) -> usize {
        self.coeffs.len()
    }

    /// The coefficient of `x^i`, or zero beyond the stored ones.
    #[must_use]
    pub fn at(&self, i: usize) -> &T {
        self.coeffs.get(i).unwrap_or(&self.zero)
    }

    /// Mutable access to the coefficient of `x^i`, growing storage as needed.
    pub fn coeff_mut(&mut self, i: usize) -> &mut T {
        self.reserve(i + 1);
        &mut self.coeffs[i]
    }

    /// All stored coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    /// Consumes the polynomial, returning its coefficients.
    #[must_use]
    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// The zero of the coefficient ring.
    #[must_use]
    pub fn zero_coeff(&self) -> &T {
        &self.zero
    }

    /// The identity of the coefficient ring.
    #[must_use]
    pub fn id_coeff(&self) -> T {
        self.zero.identity_of()
    }

    /// The largest index with a nonzero coefficient, or 0.
    #[must_use]
    pub fn deg(&self) -> usize {
        self.coeffs.iter().rposition(|c| !c.is_zero()).unwrap_or(0)
    }

    /// The smallest index with a nonzero coefficient, or 0.
    #[must_use]
    pub fn lowest(&self) -> usize {
        self.coeffs.iter().position(|c| !c.is_zero()).unwrap_or(0)
    }

    /// The coefficient of `x^deg`.
    #[must_use]
    pub fn leading_coeff(&self) -> &T {
        self.at(self.deg())
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(Ring::is_zero)
    }

    /// Returns true if this is a monic monomial `x^k`.
    #[must_use]
    pub fn is_power(&self) -> bool {
        self.lowest() == self.deg() && self.leading_coeff().is_one()
    }

    /// Sets the number of stored coefficients, padding with zero.
    /// Storage never drops below one coefficient.
    pub fn resize(&mut self, size: usize) -> &mut Self {
        self.coeffs.resize(size.max(1), self.zero.clone());
        self
    }

    /// Grows storage to at least `size` coefficients.
    pub fn reserve(&mut self, size: usize) -> &mut Self {
        if size > self.coeffs.len() {
            self.coeffs.resize(size, self.zero.clone());
        }
        self
    }

    /// Drops trailing zero coefficients.
    pub fn shrink_to_fit(&mut self) -> &mut Self {
        let d = self.deg();
        self.coeffs.truncate(d + 1);
        self
    }

    /// Multiplies every coefficient by `s`.
    #[must_use]
    pub fn scale(&self, s: &T) -> Self {
        let coeffs = self.coeffs[..=self.deg()]
            .iter()
            .map(|c| c.clone() * s.clone())
            .collect();
        Self::with_zero(self.zero.clone(), coeffs)
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &T) -> T {
        let mut r = x.zero_of();
        for c in self.coeffs[..=self.deg()].iter().rev() {
            r = r * x.clone() + c.clone();
        }
        r
    }

    /// Evaluates the polynomial at a point of another ring `U`, embedding
    /// each coefficient with `cast(x, c)`.
    #[must_use]
    pub fn eval_in<U: Ring>(&self, x: &U, cast: impl Fn(&U, &T) -> U) -> U {
        let mut r = x.zero_of();
        for c in self.coeffs[..=self.deg()].iter().rev() {
            r = r * x.clone() + cast(x, c);
        }
        r
    }

    /// The formal derivative `sum i * c[i] x^(i-1)`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let d = self.deg();
        let coeffs = (1..=d).map(|i| self.coeffs[i].mul_by_scalar(i as i64)).collect();
        Self::with_zero(self.zero.clone(), coeffs)
    }

    /// `x^deg * p(1/x)`.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut coeffs = self.coeffs[..=self.deg()].to_vec();
        coeffs.reverse();
        Self::with_zero(self.zero.clone(), coeffs)
    }

    /// Product with the default strategy, truncated to degree `lr`.
    #[must_use]
    pub fn mul_truncated(&self, other: &Self, lr: usize) -> Self {
        self.mul_with(other, Some(lr), &DefaultMultiplier::default())
    }

    /// Product with an explicit multiplication strategy.
    ///
    /// With `lr = None` the result has degree `deg(self) + deg(other)`;
    /// otherwise it is truncated (or zero padded) to degree `lr`.
    #[must_use]
    pub fn mul_with<M: Multiplier<T> + ?Sized>(&self, other: &Self, lr: Option<usize>, m: &M) -> Self {
        let (l1, l2) = (self.deg(), other.deg());
        let lr = lr.unwrap_or(l1 + l2);
        let mut coeffs = vec![self.zero.clone(); lr + 1];
        mul_into(m, &mut coeffs, &self.coeffs[..=l1], &other.coeffs[..=l2]);
        Self::with_zero(self.zero.clone(), coeffs)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        let len = self.deg().max(other.deg()) + 1;
        let coeffs = (0..len)
            .map(|i| f(self.at(i).clone(), other.at(i).clone()))
            .collect();
        Self::with_zero(self.zero.clone(), coeffs)
    }
}

impl<T: Ring + Div<Output = T>> Polynomial<T> {
    /// Divides every coefficient by `s`, which must be invertible.
    #[must_use]
    pub fn div_scalar(&self, s: &T) -> Self {
        let coeffs = self.coeffs[..=self.deg()]
            .iter()
            .map(|c| c.clone() / s.clone())
            .collect();
        Self::with_zero(self.zero.clone(), coeffs)
    }

    /// The antiderivative with constant term `c0`.
    ///
    /// Requires `1..=deg+1` to be invertible in `T`.
    #[must_use]
    pub fn integral(&self, c0: T) -> Self {
        let d = self.deg();
        let mut coeffs = Vec::with_capacity(d + 2);
        coeffs.push(c0);
        for (i, c) in self.coeffs[..=d].iter().enumerate() {
            coeffs.push(c.clone() / self.zero.cast_of(i as i64 + 1));
        }
        Self::with_zero(self.zero.clone(), coeffs)
    }
}

impl<T: Ring> PartialEq for Polynomial<T> {
    fn eq(&self, other: &Self) -> bool {
        let l = self.deg().max(other.deg());
        (0..=l).all(|i| self.at(i) == other.at(i))
    }
}

impl<T: Ring + Eq> Eq for Polynomial<T> {}

impl<T: Ring> Add<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: &Polynomial<T>) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Ring> Sub<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, rhs: &Polynomial<T>) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Ring> Mul<&Polynomial<T>> for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, rhs: &Polynomial<T>) -> Self::Output {
        self.mul_with(rhs, None, &DefaultMultiplier::default())
    }
}

impl<T: Ring> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Self::Output {
        let coeffs = self.coeffs[..=self.deg()].iter().map(|c| -c.clone()).collect();
        Polynomial::with_zero(self.zero.clone(), coeffs)
    }
}

macro_rules! forward_owned_binop {
    ($($tr:ident $method:ident $assign_tr:ident $assign_method:ident),*) => {$(
        impl<T: Ring> $tr for Polynomial<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                (&self).$method(&rhs)
            }
        }

        impl<T: Ring> $assign_tr<&Polynomial<T>> for Polynomial<T> {
            fn $assign_method(&mut self, rhs: &Polynomial<T>) {
                *self = (&*self).$method(rhs);
            }
        }
    )*};
}

forward_owned_binop!(Add add AddAssign add_assign, Sub sub SubAssign sub_assign, Mul mul MulAssign mul_assign);

impl<T: Ring> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<T: Ring> Ring for Polynomial<T> {
    fn zero_of(&self) -> Self {
        Self::new(self.zero.clone())
    }

    fn identity_of(&self) -> Self {
        Self::new(self.id_coeff())
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }

    fn cast_of(&self, k: i64) -> Self {
        Self::new(self.zero.cast_of(k))
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self.scale(&self.zero.cast_of(n))
    }
}

impl<T: Ring + fmt::Display> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "{c}")?,
                1 => write!(f, "{c}*x")?,
                _ => write!(f, "{c}*x^{i}")?,
            }
        }
        Ok(())
    }
}
