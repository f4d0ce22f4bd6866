//! Property-based tests for the ring implementations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::traits::{pow, Invertible, Ring};
    use crate::Quadratic;
    use numerus_integers::{Integer, ModInt, Modulo};

    type F97 = ModInt<97>;

    proptest! {
        #[test]
        fn pow_adds_exponents(a in 0u64..97, e in 0u64..50, f in 0u64..50) {
            let x = F97::new(a);
            prop_assert_eq!(pow(&x, e) * pow(&x, f), pow(&x, e + f));
        }

        #[test]
        fn pow_matches_inherent(a in 0u64..1_000_000, e in 0u64..200, m in 1u64..1_000_000) {
            let x = Modulo::new(a, m);
            prop_assert_eq!(pow(&x, e), x.pow(e));
        }

        #[test]
        fn cast_is_scaled_identity(k in -10_000i64..10_000, m in 1u64..1000) {
            let r = Modulo::new(0, m);
            prop_assert_eq!(r.cast_of(k), r.identity_of().mul_by_scalar(k));
            let z = Integer::new(5);
            prop_assert_eq!(z.cast_of(k), Integer::new(k));
        }

        #[test]
        fn reciprocal_is_inverse(a in 0u64..500, m in 2u64..500) {
            let x = Modulo::new(a, m);
            if let Some(r) = x.reciprocal() {
                prop_assert!((x * r).is_one());
            }
        }

        #[test]
        fn quadratic_norm_multiplicative(
            a in -50i64..50, b in -50i64..50, c in -50i64..50, e in -50i64..50, d in -10i64..10
        ) {
            let x = Quadratic::new(a, b, d);
            let y = Quadratic::new(c, e, d);
            prop_assert_eq!((x.clone() * y.clone()).norm(), x.norm() * y.norm());
        }
    }
}
