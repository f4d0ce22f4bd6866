//! Table sieves for summatory functions.
//!
//! These fill `M(0..n)` where `t(n) = sum_{k=1..n} p(k) M(n/k)`. Taking
//! backward differences turns this into a Dirichlet convolution,
//! `t' = p * M'`, so `M'` is a Dirichlet division and `M` its prefix sum.

use std::ops::IndexMut;

use numerus_rings::{pow, Invertible, Ring};

use crate::tiers::multiplicative::{dirichlet_convolution_multiplicative, dirichlet_inverse_multiplicative};

/// Sieves `M` below `n` for an arbitrary `p` with `p(1)` a unit, in
/// `O(n log n)`.
pub fn sieve_m<T, H, F, P>(m: &mut H, t: F, p: P, n: usize)
where
    T: Invertible,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
    P: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let t1 = t(1);
    let ip1 = t1.identity_of() / p(1);
    m[0] = t1.zero_of();
    fill_differences(m, &t, n);
    for d in 1..n {
        m[d] = m[d].clone() * ip1.clone();
        let md = m[d].clone();
        for (j, i) in (2 * d..n).step_by(d).enumerate() {
            m[i] = m[i].clone() - p(j + 2) * md.clone();
        }
        if d > 1 {
            m[d] = m[d].clone() + m[d - 1].clone();
        }
    }
}

/// [`sieve_m`] for `p = 1`.
pub fn sieve_m_unit<T, H, F>(m: &mut H, t: F, n: usize)
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    m[0] = t(1).zero_of();
    fill_differences(m, &t, n);
    for d in 1..n {
        let md = m[d].clone();
        for i in (2 * d..n).step_by(d) {
            m[i] = m[i].clone() - md.clone();
        }
        if d > 1 {
            m[d] = m[d].clone() + m[d - 1].clone();
        }
    }
}

/// Sieves `M` below `n` in `O(n log log n)`, given the Dirichlet inverse
/// `p_inv` of `p`. `M'` must be multiplicative.
pub fn sieve_m_multiplicative_inv<T, H, F, P>(m: &mut H, t: F, p_inv: P, n: usize, pa: &[usize])
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
    P: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let dt = |k: usize| if k == 1 { t(1) } else { t(k) - t(k - 1) };
    dirichlet_convolution_multiplicative(m, p_inv, dt, n, pa);
    for i in 1..n {
        m[i] = m[i].clone() + m[i - 1].clone();
    }
}

/// Sieves `M` below `n` in `O(n log log n)` for a multiplicative `p` with
/// `p(1) = 1`. `M'` must be multiplicative.
pub fn sieve_m_multiplicative<T, H, F, P>(m: &mut H, t: F, p: P, n: usize, pa: &[usize])
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
    P: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let e0 = p(1).zero_of();
    let mut p_inv = vec![e0; n];
    dirichlet_inverse_multiplicative(&mut p_inv, p, n, pa);
    sieve_m_multiplicative_inv(m, t, |k| p_inv[k].clone(), n, pa);
}

/// Sieves the Mertens function `M(k) = sum_{j<=k} mu(j)` below `n`.
pub fn sieve_mertens<T, H>(m: &mut H, n: usize, pa: &[usize], id: &T)
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
{
    sieve_m_multiplicative(m, |_| id.clone(), |_| id.clone(), n, pa);
}

/// Sieves the number of squarefree integers in `[1, k]` for every `k < n`.
///
/// `pa` must contain the primes up to `sqrt(n)`.
pub fn sieve_sqfree_count<T, H>(sqfc: &mut H, n: usize, pa: &[usize], id: &T)
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
{
    if n == 0 {
        return;
    }
    let e0 = id.zero_of();
    sqfc[0] = e0.clone();
    for i in 1..n {
        sqfc[i] = id.clone();
    }
    for &p in pa.iter().take_while(|&&p| p * p < n) {
        for j in (p * p..n).step_by(p * p) {
            sqfc[j] = e0.clone();
        }
    }
    for i in 1..n {
        sqfc[i] = sqfc[i].clone() + sqfc[i - 1].clone();
    }
}

/// Fills `sigma_k(i) = sum_{d | i} d^k` for `0 < i < n`, in
/// `O(n log log n)`.
#[allow(clippy::cast_possible_wrap)]
pub fn divisor_sigma<T, H>(ds: &mut H, k: u64, n: usize, pa: &[usize], id: &T)
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
{
    dirichlet_convolution_multiplicative(ds, |i| pow(&id.cast_of(i as i64), k), |_| id.clone(), n, pa);
}

fn fill_differences<T, H, F>(m: &mut H, t: &F, n: usize)
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
{
    if n > 1 {
        m[1] = t(1);
    }
    for i in 2..n {
        m[i] = t(i) - t(i - 1);
    }
}
