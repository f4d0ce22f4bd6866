//! Summatory functions built on the hyperbola method.

use tracing::debug;

use numerus_ntheory::PrimeTable;
use numerus_poly::{polynomial_sum, Polynomial};
use numerus_rings::{pow, Invertible, Ring};

use crate::hyperbola::{default_sieve_bound, sum_m, sum_m_unit, HyperbolaSum};
use crate::sieve::{sieve_mertens, sieve_sqfree_count};
use crate::sqrt_map::{isqrt_i64, Memo, SqrtMap};
use crate::tiers::general::moebius_transform;

/// The Mertens function `M(n) = sum_{k<=n} mu(k)`.
///
/// Values of `M` sieved into `tbl` in advance bring the cost down to
/// `O(n^(2/3))`; see [`mertens_sieved`].
pub fn mertens<T, M>(n: i64, tbl: &mut M, id: &T) -> T
where
    T: Ring,
    M: Memo<T> + ?Sized,
{
    sum_m_unit(&|_| id.clone(), n, tbl, id)
}

/// `M(n)` with `M` sieved below `icbrt(n)^2` first.
pub fn mertens_sieved<T: Ring>(n: i64, id: &T) -> T {
    let mut engine = HyperbolaSum::new(n, 0, id.clone());
    let u = engine.bound();
    let primes = PrimeTable::new(u);
    engine = engine.sieve(|m| sieve_mertens(m, u, primes.primes(), id));
    engine.eval_unit(n, |_| id.clone())
}

/// The number of squarefree integers in `[1, n]`.
///
/// Uses `n = sum_{k>=1} Q(n / k^2)`: arguments `n / k^2` below `icbrt(n)`
/// are grouped by value, the rest are recursed on.
#[allow(clippy::many_single_char_names)]
pub fn sqfree_count<T, M>(n: i64, tbl: &mut M, id: &T) -> T
where
    T: Ring,
    M: Memo<T> + ?Sized,
{
    if n < 1 {
        return id.zero_of();
    }
    if let Some(v) = tbl.get(n) {
        return v.clone();
    }
    let mut r = id.cast_of(n);
    let q = icbrt_i64(n);
    for m in 1..q {
        let count = isqrt_i64(n / m) - isqrt_i64(n / (m + 1));
        r = r - id.cast_of(count) * sqfree_count(m, tbl, id);
    }
    for k in (2..=isqrt_i64(n / q)).rev() {
        r = r - sqfree_count(n / (k * k), tbl, id);
    }
    tbl.insert(n, r.clone());
    r
}

/// [`sqfree_count`] with the counts sieved below `icbrt(n)^2` first.
pub fn sqfree_count_sieved<T: Ring>(n: i64, id: &T) -> T {
    let u = default_sieve_bound(n);
    let primes = PrimeTable::new(isqrt_usize(u) + 1);
    let mut map = SqrtMap::new(u, n, id.zero_of());
    sieve_sqfree_count(map.dense_mut(), u, primes.primes(), id);
    sqfree_count(n, &mut map, id)
}

/// `sum_{k=1..n} k^l phi_g(k)` for every `n` in `vn`, where
/// `phi_g = mu * g` for a polynomial `g`.
///
/// With `p(k) = k^l` completely multiplicative, `p . g = p * (p . phi_g)`,
/// so the sum is an `M` of the hyperbola method with `t` and `s` the
/// polynomial prefix sums of `p g` and `p`. `u` is the sieving bound
/// (0 for `icbrt(max vn)^2`). `T` must be able to divide by `1..=deg+1`.
#[allow(clippy::cast_possible_wrap)]
pub fn sum_g_l<T: Invertible>(g: &Polynomial<T>, l: u32, vn: &[i64], u: usize) -> Vec<T> {
    let e0 = g.zero_coeff().clone();
    let e1 = e0.identity_of();

    let x = Polynomial::from_vec(vec![e0.clone(), e1.clone()]);
    let p = pow(&x, u64::from(l));
    let s = polynomial_sum(&p);
    let t = polynomial_sum(&(&p * g));

    let eval = |poly: &Polynomial<T>, k: i64| poly.eval(&e0.cast_of(k));
    let ts = |k: i64| eval(&t, k);
    let ss = |k: i64| eval(&s, k);

    let n = vn.iter().copied().max().unwrap_or(0);
    let u = if u == 0 { default_sieve_bound(n) } else { u };
    debug!(n, u, queries = vn.len(), "sum_g_l sieving bound");

    // phi_g below u, then its p-weighted prefix sums
    let mut mm = SqrtMap::new(u, n, e0.clone());
    moebius_transform(mm.dense_mut(), |k| eval(g, k as i64), u);
    let dense = mm.dense_mut();
    for k in 1..u {
        dense[k] = dense[k - 1].clone() + eval(&p, k as i64) * dense[k].clone();
    }

    vn.iter()
        .map(|&k| {
            mm.reset_max(k);
            sum_m(&ts, &ss, k, &mut mm, &e1)
        })
        .collect()
}

/// `sum_{k=1..n} k^l phi_d(k)` for every `n` in `vn`, where `phi_d` is the
/// `d`-dimensional totient: the number of `a_1 <= ... <= a_d <= k` with
/// `gcd(a_1, ..., a_d, k) = 1`.
///
/// `phi_d = mu * C(x + d - 1, d)`, so this is [`sum_g_l`] with that
/// binomial as `g`. `phi_0` is the unit `[k = 1]` and `phi_1` Euler's totient.
#[allow(clippy::cast_possible_wrap)]
pub fn sum_phi_d_l<T: Invertible>(d: u32, l: u32, vn: &[i64], u: usize, id: &T) -> Vec<T> {
    let mut g = Polynomial::new(id.clone());
    for i in 0..i64::from(d) {
        let factor = Polynomial::from_vec(vec![id.cast_of(i), id.clone()]);
        g = (&g * &factor).div_scalar(&id.cast_of(i + 1));
    }
    sum_g_l(&g, l, vn, u)
}

/// Euler's totient summed over `[1, n]`, evaluated at every `floor(n / k)`.
///
/// Returns the memo table: `table.get(n)` is the total, and every quotient
/// `floor(n / k)` is present too. `phi`, if given, must hold Euler's
/// totient on `0..icbrt(n)^2`; otherwise it is sieved.
#[allow(clippy::cast_possible_wrap)]
pub fn sum_phi<T: Invertible>(n: i64, id: &T, phi: Option<&[T]>) -> SqrtMap<T> {
    let u = default_sieve_bound(n);
    debug!(n, u, precomputed = phi.is_some(), "sum_phi sieving bound");

    let mut mm = SqrtMap::new(u, n, id.zero_of());
    match phi {
        Some(phi) => {
            let dense = mm.dense_mut();
            for k in 1..u {
                dense[k] = dense[k - 1].clone() + phi[k].clone();
            }
        }
        None => {
            moebius_transform(mm.dense_mut(), |k| id.cast_of(k as i64), u);
            let dense = mm.dense_mut();
            for k in 1..u {
                dense[k] = dense[k - 1].clone() + dense[k].clone();
            }
        }
    }

    let two = id.cast_of(2);
    let tri = |k: i64| {
        let r = id.cast_of(k);
        (r.clone() * (r + id.clone())) / two.clone()
    };
    let idn = |k: i64| id.cast_of(k);
    sum_m(&tri, &idn, n, &mut mm, id);
    mm
}

#[allow(clippy::cast_possible_truncation)]
fn isqrt_usize(n: usize) -> usize {
    numerus_integers::arith::isqrt(n as u64) as usize
}

fn icbrt_i64(n: i64) -> i64 {
    i64::try_from(numerus_integers::arith::icbrt(n.max(0).unsigned_abs())).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sieve::divisor_sigma;
    use crate::tiers::general::{dirichlet_convolution, dirichlet_inverse};
    use numerus_integers::modular::Mod1000000007;
    use numerus_integers::Rational;
    use rustc_hash::FxHashMap;

    type F = Mod1000000007;

    fn totients(n: usize) -> Vec<i64> {
        let mut phi = vec![0i64; n];
        moebius_transform(&mut phi, |k| k as i64, n);
        phi
    }

    #[test]
    fn test_mertens() {
        let mut memo: FxHashMap<i64, i64> = FxHashMap::default();
        assert_eq!(mertens(100, &mut memo, &1), 1);
        assert_eq!(mertens_sieved(100, &1i64), 1);

        let mut mu = vec![0i64; 5001];
        dirichlet_inverse(&mut mu, |_| 1i64, 5001);
        let mut acc = 0;
        for n in 1..=5000i64 {
            acc += mu[n as usize];
            if n % 97 == 0 || n == 5000 {
                assert_eq!(mertens(n, &mut memo, &1), acc, "M({n})");
                assert_eq!(mertens_sieved(n, &1i64), acc, "M({n}) sieved");
            }
        }
    }

    #[test]
    fn test_mertens_large() {
        // M(10^6) = 212, M(10^7) = 1037
        assert_eq!(mertens_sieved(1_000_000, &1i64), 212);
        assert_eq!(mertens_sieved(10_000_000, &1i64), 1037);
    }

    #[test]
    fn test_sqfree_count() {
        let squarefree = |k: i64| (2..).take_while(|d| d * d <= k).all(|d| k % (d * d) != 0);
        let mut memo: FxHashMap<i64, i64> = FxHashMap::default();
        let mut acc = 0;
        for n in 1..=3000i64 {
            acc += i64::from(squarefree(n));
            assert_eq!(sqfree_count(n, &mut memo, &1), acc, "Q({n})");
        }
        assert_eq!(sqfree_count_sieved(3000, &1i64), acc);
        assert_eq!(sqfree_count(0, &mut memo, &1), 0);
    }

    #[test]
    fn test_sqfree_count_large() {
        // Q(10^6) = 607926
        assert_eq!(sqfree_count_sieved(1_000_000, &1i64), 607_926);
    }

    #[test]
    fn test_sum_phi() {
        let table = sum_phi(10, &1i64, None);
        assert_eq!(table.get(10), Some(&32));

        let n = 10_000;
        let phi = totients(n + 1);
        let table = sum_phi(n as i64, &1i64, None);
        let mut acc = 0;
        let mut prefix = vec![0i64; n + 1];
        for k in 1..=n {
            acc += phi[k];
            prefix[k] = acc;
        }
        for k in 1..=n as i64 {
            assert_eq!(table.get(n as i64 / k), Some(&prefix[n / k as usize]), "Phi({})", n as i64 / k);
        }

        let precomputed = sum_phi(n as i64, &1i64, Some(&phi));
        assert_eq!(precomputed.get(n as i64), Some(&prefix[n]));
    }

    #[test]
    fn test_sum_phi_modular() {
        // Phi(10^9) mod 10^9 + 7
        let table = sum_phi(1_000_000_000, &F::new(1), None);
        let expected = F::new(303_963_551_173_008_414 % 1_000_000_007);
        assert_eq!(table.get(1_000_000_000), Some(&expected));
    }

    #[test]
    fn test_sum_phi_d_l_matches_sum_phi() {
        let vn = [1i64, 10, 100, 1000, 12345];
        let got = sum_phi_d_l(1, 0, &vn, 0, &Rational::from(1));
        for (n, v) in vn.iter().zip(got) {
            let expected = sum_phi(*n, &1i64, None).get(*n).copied();
            assert_eq!(Some(v), expected.map(Rational::from));
        }
    }

    #[test]
    fn test_sum_phi_d_l_brute_force() {
        let n = 2000usize;
        let mut mu = vec![0i64; n + 1];
        dirichlet_inverse(&mut mu, |_| 1i64, n + 1);
        let vn = [1i64, 2, 17, 500, 2000];
        for d in 0..4u32 {
            for l in 0..3u32 {
                // phi_d = mu * C(x + d - 1, d)
                let binomial = |x: usize| -> F {
                    (0..u64::from(d)).fold(F::new(1), |acc, i| acc * F::new(x as u64 + i) / F::new(i + 1))
                };
                let mut phi_d = vec![F::new(0); n + 1];
                dirichlet_convolution(&mut phi_d, |k| F::from_signed(mu[k]), binomial, n + 1);

                let got = sum_phi_d_l(d, l, &vn, 0, &F::new(1));
                for (&m, v) in vn.iter().zip(got) {
                    let expected = (1..=m as usize).fold(F::new(0), |acc, k| acc + F::new(k as u64).pow(u64::from(l)) * phi_d[k]);
                    assert_eq!(v, expected, "d = {d}, l = {l}, n = {m}");
                }
            }
        }
    }

    #[test]
    fn test_divisor_sigma_modular() {
        let t = PrimeTable::new(100);
        let mut ds = vec![F::new(0); 100];
        divisor_sigma(&mut ds, 2, 100, t.primes(), &F::new(1));
        assert_eq!(ds[12], F::new(1 + 4 + 9 + 16 + 36 + 144));
    }
}
