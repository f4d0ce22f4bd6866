//! Dirichlet operations whose result is multiplicative, `O(n log log n)`.
//!
//! Only prime powers are computed directly, each from a local convolution
//! of the operands at `1, p, p^2, ...`. Everything else follows from
//! [`calc_multiplicative`]. The operands themselves need not be
//! multiplicative; the caller certifies the result is.

use std::ops::IndexMut;

use smallvec::SmallVec;

use numerus_rings::Ring;

/// `1, p, p^2, ...` below `n`.
fn prime_powers(p: usize, n: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(1usize), move |&q| q.checked_mul(p)).take_while(move |&q| q < n)
}

/// Extends a multiplicative function from its prime powers to all of `[1, n)`.
///
/// On entry `f` must hold the true values at prime powers and the identity
/// everywhere else.
pub fn calc_multiplicative<T, H>(f: &mut H, n: usize, pa: &[usize])
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
{
    for &p in pa.iter().take_while(|&&p| p < n) {
        for q in prime_powers(p, n).skip(1) {
            let fq = f[q].clone();
            for (l, m) in (2 * q..n).step_by(q).enumerate() {
                if (l + 2) % p != 0 {
                    f[m] = f[m].clone() * fq.clone();
                }
            }
        }
    }
}

/// Fills `h = f * g` below `n`, assuming `h` is multiplicative.
///
/// `pa` lists the primes below `n`.
pub fn dirichlet_convolution_multiplicative<T, H, F, G>(h: &mut H, f: F, g: G, n: usize, pa: &[usize])
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
    for &p in pa.iter().take_while(|&&p| p < n) {
        let q: SmallVec<[usize; 32]> = prime_powers(p, n).collect();
        let fq: SmallVec<[T; 32]> = q.iter().map(|&qq| f(qq)).collect();
        let gq: SmallVec<[T; 32]> = q.iter().map(|&qq| g(qq)).collect();
        for k in 0..q.len() {
            let hq = (0..=k).fold(e1.zero_of(), |acc, j| acc + fq[k - j].clone() * gq[j].clone());
            h[q[k]] = hq;
        }
    }
    calc_multiplicative(h, n, pa);
}

/// Fills `h = f * g^-1` below `n`, assuming `h` is multiplicative.
///
/// Requires `f(1) = g(1) = 1`.
pub fn dirichlet_division_multiplicative<T, H, F, G>(h: &mut H, f: F, g: G, n: usize, pa: &[usize])
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
    for &p in pa.iter().take_while(|&&p| p < n) {
        let q: SmallVec<[usize; 32]> = prime_powers(p, n).collect();
        let gq: SmallVec<[T; 32]> = q.iter().map(|&qq| g(qq)).collect();
        let mut hq: SmallVec<[T; 32]> = SmallVec::with_capacity(q.len());
        hq.push(e1.clone());
        for k in 1..q.len() {
            let v = (0..k).fold(f(q[k]), |acc, j| acc - gq[k - j].clone() * hq[j].clone());
            h[q[k]] = v.clone();
            hq.push(v);
        }
    }
    calc_multiplicative(h, n, pa);
}

/// Fills `f_inv` with the Dirichlet inverse of a multiplicative `f` below `n`.
///
/// Requires `f(1) = 1`.
pub fn dirichlet_inverse_multiplicative<T, H, F>(f_inv: &mut H, f: F, n: usize, pa: &[usize])
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
    dirichlet_division_multiplicative(f_inv, delta, f, n, pa);
}

/// Fills `g = mu * f` below `n`, assuming `g` is multiplicative.
pub fn moebius_transform_multiplicative<T, H, F>(g: &mut H, f: F, n: usize, pa: &[usize])
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let e1 = f(1).identity_of();
    dirichlet_division_multiplicative(g, f, |_| e1.clone(), n, pa);
}
