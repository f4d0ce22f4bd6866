//! Property-based tests for the counting sequences.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::factorial::factorial;
    use crate::partitions::partitions_p;
    use crate::stirling::{stirling_s1_row, stirling_s2, stirling_s2_row};
    use numerus_integers::modular::Mod998244353;

    type F = Mod998244353;

    /// Partition counts up to `n`, by adding one part size at a time.
    fn partitions_brute(n: usize) -> Vec<i64> {
        let mut ways = vec![0i64; n + 1];
        ways[0] = 1;
        for part in 1..=n {
            for total in part..=n {
                ways[total] += ways[total - part];
            }
        }
        ways
    }

    proptest! {
        #[test]
        fn factorial_recurrence(n in 1u64..500) {
            let id = F::new(1);
            prop_assert_eq!(factorial(n, &id), factorial(n - 1, &id) * F::new(n));
        }

        #[test]
        fn s1_row_sums_vanish(n in 2usize..60) {
            // sum_k s(n, k) = 1 (1-1)...(1-n+1) = 0 for n >= 2
            let row = stirling_s1_row(n, &F::new(1));
            let total = row.into_iter().fold(F::new(0), |a, b| a + b);
            prop_assert_eq!(total, F::new(0));
        }

        #[test]
        fn s2_row_sums_are_bell_numbers(n in 1usize..40) {
            // B(n + 1) = sum_k C(n, k) B(k)
            let bell: Vec<F> = (0..=n).map(|i| stirling_s2_row(i, &F::new(1)).into_iter().fold(F::new(0), |a, b| a + b)).collect();
            let mut binomial = F::new(1);
            let mut expected = F::new(0);
            for (k, b) in bell.iter().enumerate().take(n) {
                expected = expected + binomial * *b;
                binomial = binomial * F::new((n - 1 - k) as u64) / F::new(k as u64 + 1);
            }
            prop_assert_eq!(bell[n], expected);
        }

        #[test]
        fn s2_single_matches_row(n in 0usize..50, k in 0usize..50) {
            let row = stirling_s2_row(n, &F::new(1));
            let expected = row.get(k).copied().unwrap_or(F::new(0));
            prop_assert_eq!(stirling_s2(n as u64, k, &F::new(1)), expected);
        }

        #[test]
        fn partitions_match_direct_count(n in 1usize..120) {
            let p = partitions_p(n + 1, &1i64);
            prop_assert_eq!(p, partitions_brute(n));
        }
    }
}
