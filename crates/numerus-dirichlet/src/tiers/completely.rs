//! Dirichlet operations whose result is completely multiplicative, `O(n)`.
//!
//! Only primes are computed directly; `pf` then rebuilds every composite
//! as `h(i) = h(i / p) h(p)`.

use std::ops::IndexMut;

use numerus_rings::Ring;

/// Extends a completely multiplicative function from its primes to `[1, n)`.
///
/// `pf[i]` must be a prime factor of `i`, with `pf[p] = p` for primes. On
/// entry `f` must hold the true values at primes.
pub fn calc_completely_multiplicative<T, H>(f: &mut H, n: usize, pf: &[usize])
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
{
    for i in 2..n {
        let p = pf[i];
        if p != i {
            f[i] = f[i / p].clone() * f[p].clone();
        }
    }
}

/// Fills `h = f * g` below `n`, assuming `h` is completely multiplicative.
///
/// Uses `h(p) = f(p) g(1) + f(1) g(p)`.
pub fn dirichlet_convolution_completely_multiplicative<T, H, F, G>(h: &mut H, f: F, g: G, n: usize, pf: &[usize])
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
    G: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let (f1, g1) = (f(1), g(1));
    let e1 = f1.identity_of();
    h[0] = e1.zero_of();
    for i in 1..n {
        h[i] = e1.clone();
    }
    for p in (2..n).filter(|&p| pf[p] == p) {
        h[p] = f(p) * g1.clone() + g(p) * f1.clone();
    }
    calc_completely_multiplicative(h, n, pf);
}

/// Fills `h = f * g^-1` below `n`, assuming `h` is completely multiplicative.
///
/// Requires `f(1) = g(1) = 1`, so that `h(p) = f(p) - g(p)`.
pub fn dirichlet_division_completely_multiplicative<T, H, F, G>(h: &mut H, f: F, g: G, n: usize, pf: &[usize])
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
    G: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let e1 = f(1).identity_of();
    h[0] = e1.zero_of();
    for i in 1..n {
        h[i] = e1.clone();
    }
    for p in (2..n).filter(|&p| pf[p] == p) {
        h[p] = f(p) - g(p);
    }
    calc_completely_multiplicative(h, n, pf);
}

/// Fills `f_inv` with the inverse of `f` below `n`, assuming the inverse is
/// completely multiplicative (e.g. `f = id · mu`, `f_inv = id`).
pub fn dirichlet_inverse_completely_multiplicative<T, H, F>(f_inv: &mut H, f: F, n: usize, pf: &[usize])
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let e1 = f(1).identity_of();
    let e0 = e1.zero_of();
    let delta = |k: usize| if k == 1 { e1.clone() } else { e0.clone() };
    dirichlet_division_completely_multiplicative(f_inv, delta, f, n, pf);
}

/// Fills `g = mu * f` below `n`, assuming `g` is completely multiplicative.
pub fn moebius_transform_completely_multiplicative<T, H, F>(g: &mut H, f: F, n: usize, pf: &[usize])
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let e1 = f(1).identity_of();
    dirichlet_division_completely_multiplicative(g, f, |_| e1.clone(), n, pf);
}
