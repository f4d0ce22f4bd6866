//! Elementary functions of power series.
//!
//! All of these divide by small integers (`1..order`), so `T` must have
//! characteristic zero or larger than the order.

use tracing::trace;

use numerus_poly::{mul_into, DefaultMultiplier, Polynomial};
use numerus_rings::{pow, Invertible, Ring};

use crate::error::SeriesError;
use crate::series::Series;

impl<T: Invertible> Series<T> {
    /// The natural logarithm, `∫ a'/a`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NonUnitConstantTerm`] unless `a[0] = 1`.
    pub fn ln(&self) -> Result<Self, SeriesError> {
        if !self.at(0).is_one() {
            return Err(SeriesError::NonUnitConstantTerm);
        }
        let zero = self.at(0).zero_of();
        let inv = self.poly().inverse_mod_xl(self.order())?;
        let q = self
            .poly()
            .derivative()
            .mul_truncated(&inv, self.order().saturating_sub(2));
        Ok(Self::new(q.integral(zero), self.order()))
    }

    /// The exponential, by Newton iteration `r <- r * (1 + a - ln r)`.
    ///
    /// `1/r` is carried along and extended by its own Newton step each
    /// round, so `ln r` never restarts an inversion, and all rounds share
    /// the same scratch buffers.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NonZeroConstantTerm`] unless `a[0] = 0`.
    pub fn exp(&self) -> Result<Self, SeriesError> {
        if !self.at(0).is_zero() {
            return Err(SeriesError::NonZeroConstantTerm);
        }
        let zero = self.at(0).zero_of();
        let one = zero.identity_of();
        let order = self.order();
        let multiplier = DefaultMultiplier::default();

        let mut r = Vec::with_capacity(order);
        let mut g = Vec::with_capacity(order);
        let mut t = Vec::with_capacity(order);
        let mut u = Vec::with_capacity(order);
        r.push(one.clone());
        g.push(one.clone());

        // r is correct modulo x^len, g inverts r modulo x^g.len()
        let mut len = 1;
        while len < order {
            let n = (2 * len).min(order);
            trace!(len = n, order, "series exp round");
            while g.len() < n {
                let m = (2 * g.len()).min(n);
                extend_inverse(&mut g, &r, m, &mut t, &mut u);
            }

            // u = r' / r modulo x^(n-1)
            t.clear();
            t.extend((1..len).map(|i| r[i].mul_by_scalar(i as i64)));
            u.clear();
            u.resize(n - 1, zero.clone());
            mul_into(&multiplier, &mut u[..], &t, &g);

            // t = 1 + a - ln r
            t.clear();
            t.push(one.clone());
            for i in 1..n {
                t.push(self.at(i).clone() - u[i - 1].clone() / zero.cast_of(i as i64));
            }

            u.clear();
            u.resize(n, zero.clone());
            mul_into(&multiplier, &mut u[..], &r, &t);
            std::mem::swap(&mut r, &mut u);

            // the new r agrees with the old one only below x^len
            g.truncate(len);
            len = n;
        }
        Ok(Self::new(Polynomial::with_zero(zero, r), order))
    }

    /// `a^k` for an arbitrary ring exponent, as `exp(k * ln a)`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NonUnitConstantTerm`] unless `a[0] = 1`.
    pub fn pow_scalar(&self, k: &T) -> Result<Self, SeriesError> {
        self.ln()?.scale(k).exp()
    }

    /// `a^k` for an integer exponent.
    ///
    /// The series is first normalized by its lowest term `c * x^j`:
    /// `a^k = c^k x^(jk) (a / (c x^j))^k`, where the last factor has
    /// constant term one and is raised through `exp(k * ln)`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NotInvertible`] if `c` is not a unit, or if
    /// `k < 0` and the series has no constant term.
    pub fn pow(&self, k: i64) -> Result<Self, SeriesError> {
        let order = self.order();
        let zero = self.at(0).zero_of();
        if k == 0 {
            return Ok(Self::constant(zero.identity_of(), order));
        }
        if self.poly().is_zero() {
            return if k > 0 {
                Ok(Self::constant(zero, order))
            } else {
                Err(SeriesError::NotInvertible)
            };
        }

        let j = self.poly().lowest();
        if k < 0 && j > 0 {
            return Err(SeriesError::NotInvertible);
        }
        let shift = usize::try_from(k).map_or(0, |k| j.saturating_mul(k));
        if shift >= order {
            return Ok(Self::constant(zero, order));
        }

        let c = self.at(j).clone();
        let c_inv = c.reciprocal().ok_or(SeriesError::NotInvertible)?;
        let rest = order - shift;
        let normalized: Vec<T> = (j..j + rest)
            .map(|i| self.at(i).clone() * c_inv.clone())
            .collect();
        let b = Self::from_vec(normalized, rest);

        let powered = b.pow_scalar(&zero.cast_of(k))?;
        let ck = if k > 0 { pow(&c, k.unsigned_abs()) } else { pow(&c_inv, k.unsigned_abs()) };

        let mut coeffs = vec![zero.clone(); shift];
        coeffs.extend(powered.scale(&ck).into_poly().into_coeffs());
        Ok(Self::new(Polynomial::with_zero(zero, coeffs), order))
    }

    /// Converts an exponential generating function to an ordinary one,
    /// multiplying the coefficient of `x^i` by `i!`.
    #[must_use]
    pub fn make_ordinary(&self) -> Self {
        let mut r = self.clone();
        let mut f = self.at(0).identity_of();
        for i in 1..self.order() {
            f = f.clone() * f.cast_of(i as i64);
            let c = r.coeff_mut(i);
            *c = c.clone() * f.clone();
        }
        r
    }

    /// Converts an ordinary generating function to an exponential one,
    /// dividing the coefficient of `x^i` by `i!`.
    #[must_use]
    pub fn make_exponential(&self) -> Self {
        let mut r = self.clone();
        let mut f = self.at(0).identity_of();
        for i in 1..self.order() {
            f = f.clone() * f.cast_of(i as i64);
            let c = r.coeff_mut(i);
            *c = c.clone() / f.clone();
        }
        r
    }

    /// `e^(a x)` modulo `x^order`.
    ///
    /// # Panics
    ///
    /// Panics if `order` is zero.
    #[must_use]
    pub fn exp_scalar(a: &T, order: usize) -> Self {
        let mut coeffs = Vec::with_capacity(order);
        let mut t = a.identity_of();
        for i in 0..order {
            if i > 0 {
                t = t * a.clone() / a.cast_of(i as i64);
            }
            coeffs.push(t.clone());
        }
        Self::new(Polynomial::with_zero(a.zero_of(), coeffs), order)
    }
}

/// One Newton step for `g = 1/r`, from precision `g.len()` to `m <= 2 * g.len()`.
///
/// `t` and `e` are scratch.
fn extend_inverse<T: Ring>(g: &mut Vec<T>, r: &[T], m: usize, t: &mut Vec<T>, e: &mut Vec<T>) {
    let k = g.len();
    let zero = g[0].zero_of();
    let multiplier = DefaultMultiplier::default();

    // t = r * g = 1 + x^k * err modulo x^m
    t.clear();
    t.resize(m, zero.clone());
    mul_into(&multiplier, &mut t[..], &r[..r.len().min(m)], &g[..]);
    e.clear();
    e.resize(m - k, zero);
    mul_into(&multiplier, &mut e[..], &t[k..], &g[..]);

    g.extend(e.iter().map(|c| -c.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use numerus_integers::{ModInt, Rational};

    type F = ModInt<998_244_353>;

    fn r(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    fn rs(c: &[i64], order: usize) -> Series<Rational> {
        Series::from_vec(c.iter().map(|&x| Rational::from(x)).collect(), order)
    }

    #[test]
    fn test_exp_of_x() {
        // e^x = sum x^i / i!
        let e = rs(&[0, 1], 6).exp().unwrap();
        let expected: Vec<Rational> = [1, 1, 2, 6, 24, 120].iter().map(|&f| r(1, f)).collect();
        assert_eq!(e.poly().coeffs(), expected.as_slice());
        assert_eq!(e, Series::exp_scalar(&Rational::from(1), 6));
    }

    #[test]
    fn test_ln_of_one_plus_x() {
        // ln(1 + x) = x - x^2/2 + x^3/3 - ...
        let l = rs(&[1, 1], 5).ln().unwrap();
        let expected = vec![r(0, 1), r(1, 1), r(-1, 2), r(1, 3), r(-1, 4)];
        assert_eq!(l.poly().coeffs(), expected.as_slice());
    }

    #[test]
    fn test_exp_ln_inverse() {
        let a = Series::from_vec((0..20u64).map(|i| F::new(i * i + 1)).collect(), 20);
        let mut b = a.clone();
        *b.coeff_mut(0) = F::new(0);
        assert_eq!(a.ln().unwrap().exp().unwrap(), a);
        assert_eq!(b.exp().unwrap().ln().unwrap(), b);
    }

    #[test]
    fn test_exp_ln_across_orders() {
        for order in [1, 2, 8, 13, 64, 100] {
            let a = Series::from_vec((0..order as u64).map(|i| F::new(3 * i + 1)).collect(), order);
            assert_eq!(a.ln().unwrap().exp().unwrap(), a, "order {order}");

            // e^(2x) has coefficients 2^i / i!
            let two_x = Series::from_vec(vec![F::new(0), F::new(2)], order);
            assert_eq!(two_x.exp().unwrap(), Series::exp_scalar(&F::new(2), order));
        }
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(rs(&[1, 1], 4).exp(), Err(SeriesError::NonZeroConstantTerm));
        assert_eq!(rs(&[2, 1], 4).ln(), Err(SeriesError::NonUnitConstantTerm));
        assert_eq!(rs(&[0, 1], 4).pow(-1), Err(SeriesError::NotInvertible));
    }

    #[test]
    fn test_integer_pow_matches_powi() {
        // (2x + 3x^2)^3 = 8x^3 + 36x^4 + 54x^5 + ...
        let a = rs(&[0, 2, 3], 8);
        assert_eq!(a.pow(3).unwrap(), a.powi(3));
        assert_eq!(a.pow(3).unwrap().poly().lowest(), 3);

        let b = rs(&[3, 1, 4, 1, 5], 8);
        assert_eq!(b.pow(4).unwrap(), b.powi(4));
        assert_eq!(&b.pow(-2).unwrap() * &b.powi(2), rs(&[1], 8));
        assert_eq!(b.pow(0).unwrap(), rs(&[1], 8));
        assert_eq!(rs(&[0, 0, 1], 4).pow(2).unwrap(), rs(&[0], 4));
    }

    #[test]
    fn test_sqrt_by_rational_exponent() {
        // sqrt(1 + 2x + x^2) = 1 + x
        let a = rs(&[1, 2, 1], 6);
        assert_eq!(a.pow_scalar(&r(1, 2)).unwrap(), rs(&[1, 1], 6));
    }

    #[test]
    fn test_ogf_egf_conversion() {
        let e = Series::exp_scalar(&Rational::from(1), 6);
        assert_eq!(e.make_ordinary(), rs(&[1, 1, 1, 1, 1, 1], 6));
        assert_eq!(e.make_ordinary().make_exponential(), e);

        let e2 = Series::exp_scalar(&F::new(2), 5);
        let powers: Vec<F> = [1u64, 2, 4, 8, 16].into_iter().map(F::new).collect();
        assert_eq!(e2.make_ordinary().poly().coeffs(), powers.as_slice());
    }
}
