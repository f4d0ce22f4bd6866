//! Modular arithmetic.
//!
//! Two residue types are provided: `ModInt<P>` with the modulus baked into
//! the type, used for NTT multiplication and table-driven sums, and
//! `Modulo` carrying its modulus at runtime, used by the number-theoretic
//! routines where the modulus changes from call to call (CRT, Hensel
//! lifting, primitive roots).

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::arith::{gcd_ex, mod_normalize};

/// The inverse of `a` modulo `m`, when `gcd(a, m) == 1`.
fn inverse_mod(a: u64, m: u64) -> Option<u64> {
    let (g, x, _) = gcd_ex(i128::from(a % m), i128::from(m));
    (g == 1).then(|| mod_normalize(x, m))
}

/// A modular integer with a compile-time modulus.
///
/// All operations are performed modulo P.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModInt<const P: u64>(u64);

impl<const P: u64> ModInt<P> {
    /// Creates a new modular integer.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// Creates a modular integer from a signed value.
    #[must_use]
    pub fn from_signed(value: i64) -> Self {
        Self(mod_normalize(i128::from(value), P))
    }

    /// Returns the value as a u64.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus() -> u64 {
        P
    }

    /// Computes the modular inverse.
    ///
    /// Returns `None` if the inverse doesn't exist (when gcd(self, P) != 1).
    #[must_use]
    pub fn inv(self) -> Option<Self> {
        inverse_mod(self.0, P).map(Self)
    }

    /// Computes self^exp using binary exponentiation.
    #[must_use]
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut result = Self::new(1);

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exp >>= 1;
        }

        result
    }
}

impl<const P: u64> Zero for ModInt<P> {
    fn zero() -> Self {
        Self(0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const P: u64> One for ModInt<P> {
    fn one() -> Self {
        Self::new(1)
    }

    fn is_one(&self) -> bool {
        *self == Self::new(1)
    }
}

impl<const P: u64> fmt::Debug for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.0, P)
    }
}

impl<const P: u64> fmt::Display for ModInt<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<const P: u64> Add for ModInt<P> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let s = self.0 + rhs.0;
        Self(if s >= P { s - P } else { s })
    }
}

impl<const P: u64> Sub for ModInt<P> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self(P - rhs.0 + self.0)
        }
    }
}

impl<const P: u64> Mul for ModInt<P> {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self((u128::from(self.0) * u128::from(rhs.0) % u128::from(P)) as u64)
    }
}

impl<const P: u64> Div for ModInt<P> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is not invertible modulo P.
    fn div(self, rhs: Self) -> Self::Output {
        match rhs.inv() {
            Some(r) => self * r,
            None => panic!("division by non-invertible element {rhs:?}"),
        }
    }
}

impl<const P: u64> Neg for ModInt<P> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            Self(0)
        } else {
            Self(P - self.0)
        }
    }
}

impl<const P: u64> AddAssign for ModInt<P> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const P: u64> SubAssign for ModInt<P> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const P: u64> MulAssign for ModInt<P> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const P: u64> From<u64> for ModInt<P> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<const P: u64> From<i64> for ModInt<P> {
    fn from(value: i64) -> Self {
        Self::from_signed(value)
    }
}

/// Common moduli.
pub mod primes {
    /// 2^23 * 7 * 17 + 1, NTT friendly with primitive root 3.
    pub const P998244353: u64 = 998_244_353;

    /// 10^9 + 7.
    pub const P1000000007: u64 = 1_000_000_007;
}

/// Type alias for the common NTT prime.
pub type Mod998244353 = ModInt<{ primes::P998244353 }>;

/// Type alias for 10^9 + 7.
pub type Mod1000000007 = ModInt<{ primes::P1000000007 }>;

/// A residue with a runtime-determined modulus.
///
/// Binary operations expect both operands to share a modulus; mixing
/// moduli is a logic error caught by debug assertions. The result always
/// carries the left operand's modulus.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modulo {
    v: u64,
    m: u64,
}

impl Modulo {
    /// Creates the residue of `value` modulo `modulus`.
    ///
    /// # Panics
    ///
    /// Panics if modulus is zero.
    #[must_use]
    pub fn new(value: u64, modulus: u64) -> Self {
        assert!(modulus != 0, "modulus cannot be zero");
        Self {
            v: value % modulus,
            m: modulus,
        }
    }

    /// Creates the residue of a signed value.
    ///
    /// # Panics
    ///
    /// Panics if modulus is zero.
    #[must_use]
    pub fn from_signed(value: i64, modulus: u64) -> Self {
        assert!(modulus != 0, "modulus cannot be zero");
        Self {
            v: mod_normalize(i128::from(value), modulus),
            m: modulus,
        }
    }

    /// Returns the canonical representative in `[0, modulus)`.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.v
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus(self) -> u64 {
        self.m
    }

    /// Returns a residue with the same modulus.
    #[must_use]
    pub fn with_value(self, value: u64) -> Self {
        Self::new(value, self.m)
    }

    /// Reinterprets the representative under another modulus.
    #[must_use]
    pub fn with_modulus(self, modulus: u64) -> Self {
        Self::new(self.v, modulus)
    }

    /// Computes the modular inverse, if `gcd(value, modulus) == 1`.
    #[must_use]
    pub fn inv(self) -> Option<Self> {
        inverse_mod(self.v, self.m).map(|v| Self { v, m: self.m })
    }

    /// Computes self^exp using binary exponentiation.
    #[must_use]
    pub fn pow(self, mut exp: u64) -> Self {
        let mut base = self;
        let mut result = self.with_value(1);

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            exp >>= 1;
        }

        result
    }
}

impl fmt::Debug for Modulo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.v, self.m)
    }
}

impl fmt::Display for Modulo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.v)
    }
}

impl Add for Modulo {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation)]
    fn add(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.m, rhs.m, "modulus mismatch");
        let s = (u128::from(self.v) + u128::from(rhs.v)) % u128::from(self.m);
        Self { v: s as u64, m: self.m }
    }
}

impl Sub for Modulo {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.m, rhs.m, "modulus mismatch");
        let v = if self.v >= rhs.v {
            self.v - rhs.v
        } else {
            self.m - rhs.v + self.v
        };
        Self { v, m: self.m }
    }
}

impl Mul for Modulo {
    type Output = Self;

    #[allow(clippy::cast_possible_truncation)]
    fn mul(self, rhs: Self) -> Self::Output {
        debug_assert_eq!(self.m, rhs.m, "modulus mismatch");
        let p = u128::from(self.v) * u128::from(rhs.v) % u128::from(self.m);
        Self { v: p as u64, m: self.m }
    }
}

impl Div for Modulo {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is not invertible.
    fn div(self, rhs: Self) -> Self::Output {
        match rhs.inv() {
            Some(r) => self * r,
            None => panic!("division by non-invertible element {rhs:?}"),
        }
    }
}

impl Neg for Modulo {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.v == 0 {
            self
        } else {
            Self {
                v: self.m - self.v,
                m: self.m,
            }
        }
    }
}

impl AddAssign for Modulo {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Modulo {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Modulo {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
