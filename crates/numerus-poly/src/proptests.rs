//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::algorithms::multiply::{KaratsubaMultiplier, LongMultiplier};
    use crate::algorithms::ntt::{NttField, NttMultiplier};
    use crate::dense::Polynomial;
    use numerus_integers::{ModInt, Rational};

    type F = ModInt<1_000_003>;

    fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::vec(-100i64..100, 1..=6).prop_map(Polynomial::from_vec)
    }

    fn long_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::vec(-100i64..100, 1..=120).prop_map(Polynomial::from_vec)
    }

    fn field_poly(max_len: usize) -> impl Strategy<Value = Polynomial<F>> {
        proptest::collection::vec((0u64..1_000_003).prop_map(F::new), 1..=max_len)
            .prop_map(Polynomial::from_vec)
    }

    fn rational_poly() -> impl Strategy<Value = Polynomial<Rational>> {
        proptest::collection::vec((-50i64..50).prop_map(Rational::from), 1..=6).prop_map(Polynomial::from_vec)
    }

    proptest! {
        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn poly_trailing_zeros_irrelevant(a in small_poly(), b in small_poly(), pad in 0usize..5) {
            let mut padded = a.clone();
            padded.reserve(a.size() + pad);
            prop_assert_eq!(&padded * &b, &a * &b);
            prop_assert_eq!(&padded + &b, &a + &b);
        }

        #[test]
        fn mul_strategies_agree(a in long_poly(), b in long_poly(), lr in 0usize..250) {
            let long = a.mul_with(&b, Some(lr), &LongMultiplier);
            let kara = a.mul_with(&b, Some(lr), &KaratsubaMultiplier);
            let dflt = a.mul_truncated(&b, lr);
            prop_assert_eq!(&long, &kara);
            prop_assert_eq!(&long, &dflt);
        }

        #[test]
        fn ntt_agrees_with_long(a in proptest::collection::vec(0u64..998_244_353, 1..200),
                                b in proptest::collection::vec(0u64..998_244_353, 1..200)) {
            let a = Polynomial::from_vec(a.into_iter().map(NttField::new).collect());
            let b = Polynomial::from_vec(b.into_iter().map(NttField::new).collect());
            let ntt = a.mul_with(&b, None, &NttMultiplier { threshold: 0 });
            prop_assert_eq!(ntt, a.mul_with(&b, None, &LongMultiplier));
        }

        #[test]
        fn inverse_mod_xl_is_inverse(a in field_poly(30), l in 1usize..80) {
            prop_assume!(a.at(0).value() != 0);
            let r = a.inverse_mod_xl(l).unwrap();
            let prod = a.mul_truncated(&r, l - 1);
            prop_assert_eq!(prod, Polynomial::new(F::new(1)));
        }

        #[test]
        fn divmod_identity(a in field_poly(40), b in field_poly(20)) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r.is_zero() || r.deg() < b.deg());
            prop_assert_eq!(&(&q * &b) + &r, a.clone());
            prop_assert_eq!(a.div_rem_hensel(&b).unwrap(), (q, r));
        }

        #[test]
        fn divmod_rational(a in rational_poly(), b in rational_poly()) {
            prop_assume!(!b.is_zero());
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert!(r.is_zero() || r.deg() < b.deg());
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        #[test]
        fn integral_inverts_derivative(a in rational_poly()) {
            let c0 = a.at(0).clone();
            prop_assert_eq!(a.derivative().integral(c0), a);
        }
    }
}
