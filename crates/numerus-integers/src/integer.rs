//! Arbitrary precision integers.
//!
//! `Integer` is the exact ring used when sieved sums or factorials outgrow
//! a machine word. Arithmetic is delegated to `dashu::IBig`.

use dashu::base::{Gcd, Signed as _};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// An arbitrary precision integer.
///
/// Division truncates toward zero, like the machine integers, so that
/// polynomial long division over `Integer` behaves the same as over `i64`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// The integer `value`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses an integer written in base `radix`.
    ///
    /// # Errors
    ///
    /// Returns the `dashu` parse error for malformed digits.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, radix).map(Self)
    }

    /// True below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// The non-negative greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// The value as an `i64`, if it fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Unwraps the `dashu` integer.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! integer_binop {
    ($($tr:ident $method:ident),*) => {$(
        impl $tr for Integer {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0.$method(rhs.0))
            }
        }

        impl $tr<&Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Self::Output {
                Integer((&self.0).$method(&rhs.0))
            }
        }
    )*};
}

integer_binop!(Add add, Sub sub, Mul mul, Div div, Rem rem);

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncating_division() {
        let a = Integer::new(-7);
        let b = Integer::new(2);

        assert_eq!((&a / &b).to_i64(), Some(-3));
        assert_eq!((a % b).to_i64(), Some(-1));
    }

    #[test]
    fn test_gcd_is_non_negative() {
        assert_eq!(Integer::new(-48).gcd(&Integer::new(18)).to_i64(), Some(6));
    }

    #[test]
    fn test_factorial_overflows_i64() {
        let f = (2..=25).fold(Integer::new(1), |f, i| f * Integer::new(i));
        assert_eq!(f.to_i64(), None);
        assert_eq!(f.to_string(), "15511210043330985984000000");
        assert_eq!(Integer::from_str_radix("15511210043330985984000000", 10).ok(), Some(f));
    }
}
