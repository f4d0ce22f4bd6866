//! Residue class rings Z/mZ.
//!
//! `ModInt<P>` knows its modulus statically; `Modulo` carries it in every
//! value, which is the case the value-carrying `Ring` design exists for.

use crate::traits::{Invertible, Ring, StaticRing};
use numerus_integers::{ModInt, Modulo};

impl<const P: u64> Ring for ModInt<P> {
    fn zero_of(&self) -> Self {
        ModInt::new(0)
    }

    fn identity_of(&self) -> Self {
        ModInt::new(1)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0
    }

    fn cast_of(&self, k: i64) -> Self {
        ModInt::from_signed(k)
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        *self * ModInt::from_signed(n)
    }
}

impl<const P: u64> StaticRing for ModInt<P> {
    fn zero() -> Self {
        ModInt::new(0)
    }

    fn one() -> Self {
        ModInt::new(1)
    }
}

impl<const P: u64> Invertible for ModInt<P> {
    fn reciprocal(&self) -> Option<Self> {
        self.inv()
    }
}

impl Ring for Modulo {
    fn zero_of(&self) -> Self {
        self.with_value(0)
    }

    fn identity_of(&self) -> Self {
        self.with_value(1)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0
    }

    fn cast_of(&self, k: i64) -> Self {
        Modulo::from_signed(k, self.modulus())
    }

    fn mul_by_scalar(&self, n: i64) -> Self {
        *self * self.cast_of(n)
    }
}

impl Invertible for Modulo {
    fn reciprocal(&self) -> Option<Self> {
        self.inv()
    }
}
