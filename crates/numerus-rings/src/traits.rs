//! Algebraic structure traits.
//!
//! Rings here are *value-carrying*: new elements are always built from a
//! reference element, because some rings (a residue class with a runtime
//! modulus, a polynomial over such residues) cannot produce a meaningful
//! zero from their type alone.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero_of(x)`
/// - Multiplication is associative and commutative with identity `identity_of(x)`
/// - Multiplication distributes over addition
/// - `zero_of(x)` and `identity_of(x)` depend only on the ring parameters
///   carried by `x`, never on its value
pub trait Ring:
    Clone + PartialEq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity of the ring `self` lives in.
    #[must_use]
    fn zero_of(&self) -> Self;

    /// The multiplicative identity of the ring `self` lives in.
    #[must_use]
    fn identity_of(&self) -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool {
        *self == self.zero_of()
    }

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == self.identity_of()
    }

    /// The element `k * identity_of(self)`.
    #[must_use]
    fn cast_of(&self, k: i64) -> Self {
        self.identity_of().mul_by_scalar(k)
    }

    /// Computes self + self + ... (n times), by doubling.
    #[must_use]
    fn mul_by_scalar(&self, n: i64) -> Self {
        let mut result = self.zero_of();
        let mut base = self.clone();
        let mut k = n.unsigned_abs();

        while k > 0 {
            if k & 1 == 1 {
                result = result + base.clone();
            }
            base = base.clone() + base;
            k >>= 1;
        }

        if n < 0 {
            -result
        } else {
            result
        }
    }
}

/// A ring whose zero and identity are known from the type alone.
pub trait StaticRing: Ring {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;
}

/// A ring that can divide by its units.
///
/// `Div` is only required to be correct when the divisor is a unit; for
/// rings such as the machine integers it truncates, which is exactly what
/// long division needs when the leading coefficient divides every
/// intermediate value.
pub trait Invertible: Ring + Div<Output = Self> {
    /// The multiplicative inverse, or `None` if `self` is not a unit.
    fn reciprocal(&self) -> Option<Self>;

    /// Returns true if `self` has a multiplicative inverse.
    fn is_unit(&self) -> bool {
        self.reciprocal().is_some()
    }
}

/// Computes `a^e` by repeated squaring. `pow(a, 0)` is `identity_of(a)`.
#[must_use]
pub fn pow<T: Ring>(a: &T, mut e: u64) -> T {
    let mut result = a.identity_of();
    if e == 0 {
        return result;
    }
    let mut base = a.clone();

    while e > 1 {
        if e & 1 == 1 {
            result = result * base.clone();
        }
        base = sq(&base);
        e >>= 1;
    }

    result * base
}

/// Computes `a * a`.
#[must_use]
pub fn sq<T: Ring>(a: &T) -> T {
    a.clone() * a.clone()
}
