//! Property-based tests for the Dirichlet algebra.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rustc_hash::FxHashMap;

    use crate::hyperbola::{sum_m, sum_m_unit};
    use crate::tiers::completely::calc_completely_multiplicative;
    use crate::tiers::general::{dirichlet_convolution, dirichlet_inverse};
    use crate::tiers::multiplicative::dirichlet_convolution_multiplicative;
    use numerus_integers::modular::Mod998244353;
    use numerus_ntheory::PrimeTable;

    type F = Mod998244353;

    const N: usize = 80;

    fn function(lo: i64, hi: i64) -> impl Strategy<Value = Vec<i64>> {
        proptest::collection::vec(lo..hi, N)
    }

    fn convolve(a: &[i64], b: &[i64]) -> Vec<i64> {
        let mut h = vec![0i64; N];
        dirichlet_convolution(&mut h, |k| a[k], |k| b[k], N);
        h
    }

    proptest! {
        #[test]
        fn convolution_is_associative(a in function(-5, 5), b in function(-5, 5), c in function(-5, 5)) {
            prop_assert_eq!(convolve(&convolve(&a, &b), &c), convolve(&a, &convolve(&b, &c)));
        }

        #[test]
        fn convolution_is_commutative(a in function(-9, 9), b in function(-9, 9)) {
            prop_assert_eq!(convolve(&a, &b), convolve(&b, &a));
        }

        #[test]
        fn unit_is_identity(a in function(-9, 9)) {
            let delta: Vec<i64> = (0..N).map(|k| i64::from(k == 1)).collect();
            let mut expected = a.clone();
            expected[0] = 0;
            prop_assert_eq!(convolve(&a, &delta), expected);
        }

        #[test]
        fn inverse_convolves_to_unit(a in proptest::collection::vec(0u64..998_244_353, N)) {
            prop_assume!(a[1] != 0);
            let f: Vec<F> = a.into_iter().map(F::new).collect();
            let mut f_inv = vec![F::new(0); N];
            dirichlet_inverse(&mut f_inv, |k| f[k], N);
            let mut h = vec![F::new(0); N];
            dirichlet_convolution(&mut h, |k| f[k], |k| f_inv[k], N);
            for (k, v) in h.iter().enumerate() {
                prop_assert_eq!(*v, F::new(u64::from(k == 1)));
            }
        }

        #[test]
        fn multiplicative_tier_agrees(at_primes in proptest::collection::vec(-4i64..4, N)) {
            let t = PrimeTable::new(N);
            let mut f = vec![1i64; N];
            f[0] = 0;
            for &p in t.primes() {
                f[p] = at_primes[p];
            }
            calc_completely_multiplicative(&mut f, N, t.smallest_factors());

            let mut slow = vec![0i64; N];
            dirichlet_convolution(&mut slow, |k| f[k], |_| 1, N);
            let mut fast = vec![0i64; N];
            dirichlet_convolution_multiplicative(&mut fast, |k| f[k], |_| 1, N, t.primes());
            prop_assert_eq!(fast, slow);
        }

        #[test]
        fn hyperbola_recovers_prefix_sums(a in proptest::collection::vec(-20i64..20, 400), n in 1i64..400) {
            let big_m: Vec<i64> = a.iter().scan(0, |acc, &v| { *acc += v; Some(*acc) }).collect();
            let m_at = |k: i64| if k < 1 { 0 } else { big_m[k as usize - 1] };

            let t = |k: i64| (1..=k).map(|j| m_at(k / j)).sum::<i64>();
            let mut memo: FxHashMap<i64, i64> = FxHashMap::default();
            prop_assert_eq!(sum_m_unit(&t, n, &mut memo, &1), m_at(n));

            // weights p(k) = k
            let tw = |k: i64| (1..=k).map(|j| j * m_at(k / j)).sum::<i64>();
            let s = |k: i64| k * (k + 1) / 2;
            let mut memo: FxHashMap<i64, i64> = FxHashMap::default();
            prop_assert_eq!(sum_m(&tw, &s, n, &mut memo, &1), m_at(n));
        }
    }
}
