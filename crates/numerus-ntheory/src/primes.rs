//! Prime tables and factorizations.

use tracing::debug;

use numerus_integers::arith::lcm;

/// A factorization as `(prime, exponent)` pairs in increasing prime order.
pub type Factorization = Vec<(u64, u32)>;

/// Primes and smallest prime factors below a limit, from a linear sieve.
#[derive(Clone, Debug)]
pub struct PrimeTable {
    pa: Vec<usize>,
    pf: Vec<usize>,
}

impl PrimeTable {
    /// Sieves every integer in `[0, n)`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        let mut pf = vec![0usize; n];
        let mut pa = Vec::new();
        for i in 2..n {
            if pf[i] == 0 {
                pf[i] = i;
                pa.push(i);
            }
            for &p in &pa {
                if p > pf[i] || i * p >= n {
                    break;
                }
                pf[i * p] = p;
            }
        }
        debug!(limit = n, primes = pa.len(), "prime table built");
        Self { pa, pf }
    }

    /// The exclusive upper bound of the table.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.pf.len()
    }

    /// All primes below the limit, ascending.
    #[must_use]
    pub fn primes(&self) -> &[usize] {
        &self.pa
    }

    /// Smallest prime factor of every index; `pf[p] = p` for primes and
    /// `pf[0] = pf[1] = 0`.
    #[must_use]
    pub fn smallest_factors(&self) -> &[usize] {
        &self.pf
    }

    /// Returns true if `n` is a prime below the limit.
    #[must_use]
    pub fn is_prime(&self, n: usize) -> bool {
        n >= 2 && self.pf[n] == n
    }

    /// Factors `n` by repeated smallest-prime-factor lookups.
    ///
    /// `factor_integer(1)` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero or not below the limit.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn factor_integer(&self, n: u64) -> Factorization {
        assert!(n > 0, "cannot factor zero");
        let mut n = n as usize;
        let mut vf: Factorization = Vec::new();
        while n > 1 {
            let p = self.pf[n];
            let mut e = 0;
            while n % p == 0 {
                n /= p;
                e += 1;
            }
            vf.push((p as u64, e));
        }
        vf
    }

    /// Euler's totient of `n`.
    #[must_use]
    pub fn phi(&self, n: u64) -> u64 {
        euler_phi(&self.factor_integer(n))
    }

    /// Carmichael's function of `n`.
    #[must_use]
    pub fn lambda(&self, n: u64) -> u64 {
        carmichael_lambda(&self.factor_integer(n))
    }

    /// The smallest primitive root modulo `m`, or 0 if there is none.
    ///
    /// `phi(m)` must be below the limit as well.
    #[must_use]
    pub fn primitive_root(&self, m: u64) -> u64 {
        let phi = self.phi(m);
        let factors = prime_factors(&self.factor_integer(phi));
        crate::roots::primitive_root(m, phi, &factors)
    }

    /// The smallest element of maximal multiplicative order modulo `m`.
    #[must_use]
    pub fn primitive_root_of_unity(&self, m: u64) -> u64 {
        let lam = self.lambda(m);
        let factors = prime_factors(&self.factor_integer(lam));
        crate::roots::primitive_root_of_unity(m, lam, &factors)
    }

    /// All `x` modulo `m` with `x^k = 1`, when the unit group is cyclic.
    #[must_use]
    pub fn kth_roots_of_unity(&self, m: u64, k: u64) -> std::collections::BTreeSet<u64> {
        let lam = self.lambda(m);
        let g = self.primitive_root_of_unity(m);
        crate::roots::kth_roots_of_unity(m, k, lam, g)
    }
}

/// The distinct primes of a factorization.
#[must_use]
pub fn prime_factors(vf: &[(u64, u32)]) -> Vec<u64> {
    vf.iter().map(|&(p, _)| p).collect()
}

/// Euler's totient from a factorization.
#[must_use]
pub fn euler_phi(vf: &[(u64, u32)]) -> u64 {
    vf.iter().map(|&(p, e)| p.pow(e - 1) * (p - 1)).product()
}

/// Carmichael's function (the exponent of the unit group) from a factorization.
#[must_use]
pub fn carmichael_lambda(vf: &[(u64, u32)]) -> u64 {
    vf.iter().fold(1, |r, &(p, e)| {
        let e = if p == 2 && e > 2 { e - 1 } else { e };
        lcm(r, p.pow(e - 1) * (p - 1))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sieve() {
        let t = PrimeTable::new(30);
        assert_eq!(t.primes(), &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(t.smallest_factors()[25], 5);
        assert_eq!(t.smallest_factors()[28], 2);
        assert_eq!(t.smallest_factors()[29], 29);
        assert!(t.is_prime(23));
        assert!(!t.is_prime(1));
        assert!(!t.is_prime(27));
    }

    #[test]
    fn test_small_tables() {
        assert!(PrimeTable::new(0).primes().is_empty());
        assert!(PrimeTable::new(2).primes().is_empty());
        assert_eq!(PrimeTable::new(3).primes(), &[2]);
    }

    #[test]
    fn test_factor_integer() {
        let t = PrimeTable::new(1000);
        assert_eq!(t.factor_integer(360), vec![(2, 3), (3, 2), (5, 1)]);
        assert_eq!(t.factor_integer(997), vec![(997, 1)]);
        assert!(t.factor_integer(1).is_empty());
    }

    #[test]
    fn test_phi_and_lambda() {
        let t = PrimeTable::new(200);
        assert_eq!(t.phi(1), 1);
        assert_eq!(t.phi(36), 12);
        assert_eq!(t.lambda(8), 2);
        assert_eq!(t.lambda(16), 4);
        assert_eq!(t.lambda(15), 4);

        // 120120 = 2^3 * 3 * 5 * 7 * 11 * 13
        let vf = vec![(2, 3), (3, 1), (5, 1), (7, 1), (11, 1), (13, 1)];
        assert_eq!(euler_phi(&vf), 23040);
        assert_eq!(carmichael_lambda(&vf), 60);
        assert_eq!(prime_factors(&vf), vec![2, 3, 5, 7, 11, 13]);
    }

    #[test]
    fn test_phi_matches_gcd_count() {
        use numerus_integers::arith::gcd;
        let t = PrimeTable::new(100);
        for n in 1..100u64 {
            let count = (1..=n).filter(|&k| gcd(k, n) == 1).count() as u64;
            assert_eq!(t.phi(n), count, "phi({n})");
        }
    }
}
