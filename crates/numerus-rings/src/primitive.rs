//! Ring implementations for the machine number types.
//!
//! Fixed-width integers wrap (or panic in debug builds) on overflow; the
//! caller chooses a width large enough for its problem.

use crate::traits::{Invertible, Ring, StaticRing};

macro_rules! impl_int_ring {
    ($($t:ty),*) => {$(
        impl Ring for $t {
            fn zero_of(&self) -> Self {
                0
            }

            fn identity_of(&self) -> Self {
                1
            }

            fn is_zero(&self) -> bool {
                *self == 0
            }

            fn is_one(&self) -> bool {
                *self == 1
            }

            #[allow(clippy::cast_possible_truncation)]
            fn cast_of(&self, k: i64) -> Self {
                k as $t
            }

            #[allow(clippy::cast_possible_truncation)]
            fn mul_by_scalar(&self, n: i64) -> Self {
                *self * (n as $t)
            }
        }

        impl StaticRing for $t {
            fn zero() -> Self {
                0
            }

            fn one() -> Self {
                1
            }
        }

        impl Invertible for $t {
            fn reciprocal(&self) -> Option<Self> {
                match *self {
                    1 => Some(1),
                    -1 => Some(-1),
                    _ => None,
                }
            }
        }
    )*};
}

impl_int_ring!(i32, i64, i128);

impl Ring for f64 {
    fn zero_of(&self) -> Self {
        0.0
    }

    fn identity_of(&self) -> Self {
        1.0
    }

    #[allow(clippy::float_cmp)]
    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    #[allow(clippy::float_cmp)]
    fn is_one(&self) -> bool {
        *self == 1.0
    }

    #[allow(clippy::cast_precision_loss)]
    fn cast_of(&self, k: i64) -> Self {
        k as f64
    }

    #[allow(clippy::cast_precision_loss)]
    fn mul_by_scalar(&self, n: i64) -> Self {
        *self * n as f64
    }
}

impl StaticRing for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

impl Invertible for f64 {
    fn reciprocal(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(1.0 / *self)
        }
    }
}
