//! Property-based tests for the number theory routines.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::crt::chinese_remainder;
    use crate::primes::PrimeTable;
    use crate::residues::{jacobi, sqrt_mod};
    use numerus_integers::arith::{gcd, lcm, mul_mod};

    proptest! {
        #[test]
        fn crt_solves_both_congruences(a1 in 0u64..1_000_000, n1 in 1u64..1_000_000,
                                       a2 in 0u64..1_000_000, n2 in 1u64..1_000_000) {
            let (a1, a2) = (a1 % n1, a2 % n2);
            let (a, n) = chinese_remainder(a1, n1, a2, n2);
            let g = gcd(n1, n2);
            if a1 % g == a2 % g {
                prop_assert_eq!(n, lcm(n1, n2));
                prop_assert!(a < n);
                prop_assert_eq!(a % n1, a1);
                prop_assert_eq!(a % n2, a2);
            } else {
                prop_assert_eq!((a, n), (0, 0));
            }
        }

        #[test]
        fn jacobi_is_multiplicative(a in 0u64..10_000, b in 0u64..10_000, m in 0u64..5_000) {
            let m = 2 * m + 1;
            prop_assert_eq!(jacobi(a * b, m), jacobi(a, m) * jacobi(b, m));
        }

        #[test]
        fn jacobi_agrees_with_euler_criterion(n in 0u64..100_000, i in 1usize..160) {
            let t = PrimeTable::new(1000);
            let p = t.primes()[i] as u64;
            let euler = numerus_integers::arith::pow_mod(n, (p - 1) / 2, p);
            let expected = match euler {
                0 => 0,
                1 => 1,
                _ => -1,
            };
            prop_assert_eq!(jacobi(n, p), expected);
        }

        #[test]
        fn sqrt_mod_roots_square_back(x in 1u64..100_000, m in 2u64..5_000) {
            prop_assume!(gcd(x, m) == 1);
            let t = PrimeTable::new(5_000);
            let y = mul_mod(x, x, m);
            let roots = sqrt_mod(y, &t.factor_integer(m));
            prop_assert!(roots.contains(&(x % m)));
            for r in roots {
                prop_assert_eq!(mul_mod(r, r, m), y);
            }
        }
    }
}
