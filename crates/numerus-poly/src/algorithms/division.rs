//! Truncated inversion and Euclidean division.
//!
//! Division picks between schoolbook long division and a Newton/Hensel
//! scheme built on [`Polynomial::inverse_mod_xl`]. Both return the same
//! quotient and remainder; the choice only affects speed.

use tracing::{debug, trace};

use numerus_rings::{Invertible, Ring};

use super::multiply::{mul_into, DefaultMultiplier};
use crate::dense::Polynomial;
use crate::error::PolyError;

/// Dividend degree below which long division is always used.
pub const HENSEL_MIN_DIVIDEND: usize = 100;

/// Divisor degree below which long division is always used.
pub const HENSEL_MIN_DIVISOR: usize = 50;

/// Long division is used while `deg(b) < HENSEL_LOG_FACTOR * log2(deg(a))`.
pub const HENSEL_LOG_FACTOR: f64 = 25.0;

/// Division strategy chosen by [`Polynomial::div_rem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DivisionStrategy {
    /// Schoolbook long division, O((l1 - l2) * l2).
    Long,
    /// Reversed-divisor inverse modulo `x^(l1-l2+1)`, O(M(l1)).
    Hensel,
}

/// Picks the division strategy for dividend degree `l1` and divisor degree
/// `l2` whose leading coefficient is (`invertible`) or is not a unit.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn division_strategy(l1: usize, l2: usize, invertible: bool) -> DivisionStrategy {
    let small = l1 < HENSEL_MIN_DIVIDEND
        || l2 < HENSEL_MIN_DIVISOR
        || (l2 as f64) < HENSEL_LOG_FACTOR * (l1 as f64).log2();
    if small || !invertible {
        DivisionStrategy::Long
    } else {
        DivisionStrategy::Hensel
    }
}

impl<T: Invertible> Polynomial<T> {
    /// Computes `r` with `self * r == 1 (mod x^l)` by Newton iteration.
    ///
    /// The result has at most `l` coefficients (one, for `l <= 1`).
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::NotInvertible`] if the constant coefficient is
    /// not a unit.
    pub fn inverse_mod_xl(&self, l: usize) -> Result<Self, PolyError> {
        let c0 = self.at(0);
        if c0.is_one() {
            return Ok(self.inverse_unit_constant(l));
        }
        let inv = c0
            .reciprocal()
            .ok_or_else(|| PolyError::NotInvertible(format!("{c0:?}")))?;
        let mut a = self.scale(&inv);
        *a.coeff_mut(0) = c0.identity_of();
        Ok(a.inverse_unit_constant(l).scale(&inv))
    }

    /// Newton iteration for a polynomial whose constant term is one.
    fn inverse_unit_constant(&self, l: usize) -> Self {
        let zero = self.zero_coeff().clone();
        let multiplier = DefaultMultiplier::default();
        let a = &self.coeffs()[..=self.deg()];
        let mut r = vec![zero.identity_of()];
        let mut t = Vec::with_capacity(l + 1);
        let mut e = Vec::with_capacity(l + 1);

        // r is correct modulo x^k on entry to each round
        let mut len = 1;
        while len < 2 * l {
            let m = (l - 1).min(len);
            let k = len / 2 + 1;
            if m >= k {
                trace!(len, m, k, "newton inverse round");
                // t = (a * r)[k..=m], the error term above x^k
                t.clear();
                t.resize(m + 1, zero.clone());
                mul_into(&multiplier, &mut t, &a[..a.len().min(m + 1)], &r);
                e.clear();
                e.resize(m - k + 1, zero.clone());
                mul_into(&multiplier, &mut e, &t[k..], &r);

                r.resize(m + 1, zero.clone());
                for i in k..=m {
                    r[i] = -e[i - k].clone();
                }
            }
            len *= 2;
        }

        Self::with_zero(zero, r)
    }

    /// Computes `(q, r)` with `self = q * b + r` and `deg r < deg b`.
    ///
    /// The remainder of a division by a constant is the zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
    pub fn div_rem(&self, b: &Self) -> Result<(Self, Self), PolyError> {
        if b.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        let (l1, l2) = (self.deg(), b.deg());
        let strategy = division_strategy(l1, l2, b.leading_coeff().is_unit());
        debug!(l1, l2, ?strategy, "polynomial division");
        match strategy {
            DivisionStrategy::Long => self.div_rem_long(b),
            DivisionStrategy::Hensel => self.div_rem_hensel(b),
        }
    }

    /// Splits `self` at `x^l2` when dividing by a low-degree or monomial divisor.
    fn trivial_div_rem(&self, b: &Self) -> Option<(Self, Self)> {
        let (l1, l2) = (self.deg(), b.deg());
        let zero = self.zero_coeff().clone();
        if l1 < l2 {
            return Some((Self::new(zero), self.clone()));
        }
        if b.is_power() {
            let c = &self.coeffs()[..=l1];
            let q = Self::with_zero(zero.clone(), c[l2..].to_vec());
            let r = Self::with_zero(zero, c[..l2].to_vec());
            return Some((q, r));
        }
        None
    }

    /// Schoolbook long division.
    ///
    /// Works whenever the leading coefficient of `b` divides every
    /// intermediate leading coefficient, which always holds over a field.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
    pub fn div_rem_long(&self, b: &Self) -> Result<(Self, Self), PolyError> {
        if b.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        if let Some(qr) = self.trivial_div_rem(b) {
            return Ok(qr);
        }

        let (l1, l2) = (self.deg(), b.deg());
        let zero = self.zero_coeff().clone();
        let lead = b.leading_coeff().clone();
        let bc = b.coeffs();
        let mut w = self.coeffs()[..=l1].to_vec();

        for i in (l2..=l1).rev() {
            let s = w[i].clone() / lead.clone();
            w[i] = s.clone();
            if s.is_zero() {
                continue;
            }
            for j in 1..=l2 {
                w[i - j] = w[i - j].clone() - s.clone() * bc[l2 - j].clone();
            }
        }

        let q = w.split_off(l2);
        Ok((Self::with_zero(zero.clone(), q), Self::with_zero(zero, w)))
    }

    /// Division through the inverse of the reversed divisor.
    ///
    /// `q = rev(rev(b)^-1 * rev(self) mod x^(l1-l2+1))`, then `r = self - q*b`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial
    /// and [`PolyError::NotInvertible`] if its leading coefficient is not a unit.
    pub fn div_rem_hensel(&self, b: &Self) -> Result<(Self, Self), PolyError> {
        if b.is_zero() {
            return Err(PolyError::DivisionByZero);
        }
        if let Some(qr) = self.trivial_div_rem(b) {
            return Ok(qr);
        }

        let (l1, l2) = (self.deg(), b.deg());
        let lq = l1 - l2;
        let zero = self.zero_coeff().clone();

        let inv = b.reverse().inverse_mod_xl(lq + 1)?;
        let mut q = inv.mul_truncated(&self.reverse(), lq).into_coeffs();
        q.resize(lq + 1, zero.clone());
        q.reverse();
        let q = Self::with_zero(zero.clone(), q);

        let mut r = (self - &q.mul_truncated(b, l1)).into_coeffs();
        r.truncate(l2);
        Ok((q, Self::with_zero(zero, r)))
    }

    /// The quotient of `self / b`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
    pub fn div(&self, b: &Self) -> Result<Self, PolyError> {
        self.div_rem(b).map(|(q, _)| q)
    }

    /// The remainder of `self / b`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::DivisionByZero`] if `b` is the zero polynomial.
    pub fn rem(&self, b: &Self) -> Result<Self, PolyError> {
        self.div_rem(b).map(|(_, r)| r)
    }
}
