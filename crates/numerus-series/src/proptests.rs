//! Property-based tests for power series.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::Series;
    use numerus_integers::ModInt;

    type F = ModInt<998_244_353>;

    fn unit_series(order: usize) -> impl Strategy<Value = Series<F>> {
        proptest::collection::vec(0u64..998_244_353, order - 1).prop_map(move |tail| {
            let mut coeffs = vec![F::new(1)];
            coeffs.extend(tail.into_iter().map(F::new));
            Series::from_vec(coeffs, order)
        })
    }

    proptest! {
        #[test]
        fn ln_is_additive(a in unit_series(12), b in unit_series(12)) {
            let lhs = (&a * &b).ln().unwrap();
            let rhs = &a.ln().unwrap() + &b.ln().unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        #[test]
        fn exp_inverts_ln(a in unit_series(16)) {
            prop_assert_eq!(a.ln().unwrap().exp().unwrap(), a);
        }

        #[test]
        fn inverse_times_self_is_one(a in unit_series(10)) {
            let inv = a.inverse().unwrap();
            prop_assert_eq!(&a * &inv, Series::constant(F::new(1), 10));
        }

        #[test]
        fn pow_matches_powi(a in unit_series(9), k in 0u64..7) {
            prop_assert_eq!(a.pow(i64::try_from(k).unwrap()).unwrap(), a.powi(k));
        }
    }
}
