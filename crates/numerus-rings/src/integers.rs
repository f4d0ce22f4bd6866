//! The rings Z and Q over arbitrary precision numbers.

use crate::traits::{Invertible, Ring, StaticRing};
use numerus_integers::{Integer, Rational};

impl Ring for Integer {
    fn zero_of(&self) -> Self {
        <Self as num_traits::Zero>::zero()
    }

    fn identity_of(&self) -> Self {
        <Self as num_traits::One>::one()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }

    fn cast_of(&self, k: i64) -> Self {
        Integer::new(k)
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self * &Integer::new(n)
    }
}

impl StaticRing for Integer {
    fn zero() -> Self {
        Integer::new(0)
    }

    fn one() -> Self {
        Integer::new(1)
    }
}

impl Invertible for Integer {
    fn reciprocal(&self) -> Option<Self> {
        match self.to_i64() {
            Some(v @ (1 | -1)) => Some(Integer::new(v)),
            _ => None,
        }
    }
}

impl Ring for Rational {
    fn zero_of(&self) -> Self {
        <Self as num_traits::Zero>::zero()
    }

    fn identity_of(&self) -> Self {
        <Self as num_traits::One>::one()
    }

    fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        num_traits::One::is_one(self)
    }

    fn cast_of(&self, k: i64) -> Self {
        Rational::from(k)
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        self.clone() * Rational::from(n)
    }
}

impl StaticRing for Rational {
    fn zero() -> Self {
        Rational::from(0)
    }

    fn one() -> Self {
        Rational::from(1)
    }
}

impl Invertible for Rational {
    fn reciprocal(&self) -> Option<Self> {
        if Ring::is_zero(self) {
            None
        } else {
            Some(self.recip())
        }
    }
}
