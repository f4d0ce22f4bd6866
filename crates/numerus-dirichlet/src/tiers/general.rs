//! Dirichlet operations for arbitrary arithmetic functions, `O(n log n)`.

use std::ops::IndexMut;

use numerus_rings::{Invertible, Ring};

/// Fills `h[i] = sum_{d | i} f(d) g(i/d)` for `0 < i < n`, and `h[0] = 0`.
pub fn dirichlet_convolution<T, H, F, G>(h: &mut H, f: F, g: G, n: usize)
where
    T: Ring,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
    G: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let e0 = f(1).zero_of();
    for i in 0..n {
        h[i] = e0.clone();
    }
    for d in 1..n {
        let fd = f(d);
        for (e, i) in (d..n).step_by(d).enumerate() {
            h[i] = h[i].clone() + fd.clone() * g(e + 1);
        }
    }
}

/// Fills `h` with `f * g^-1` below `n`, so that `h * g = f`.
///
/// `g(1)` must be a unit.
pub fn dirichlet_division<T, H, F, G>(h: &mut H, f: F, g: G, n: usize)
where
    T: Invertible,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
    G: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let f1 = f(1);
    let ig1 = f1.identity_of() / g(1);
    h[0] = f1.zero_of();
    for i in 1..n {
        h[i] = f(i);
    }
    for d in 1..n {
        h[d] = h[d].clone() * ig1.clone();
        let hd = h[d].clone();
        for (j, i) in (2 * d..n).step_by(d).enumerate() {
            h[i] = h[i].clone() - g(j + 2) * hd.clone();
        }
    }
}

/// Fills `f_inv` with the Dirichlet inverse of `f` below `n`.
///
/// `f(1)` must be a unit.
pub fn dirichlet_inverse<T, H, F>(f_inv: &mut H, f: F, n: usize)
where
    T: Invertible,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let f1 = f(1);
    let (e0, e1) = (f1.zero_of(), f1.identity_of());
    let delta = |k: usize| if k == 1 { e1.clone() } else { e0.clone() };
    dirichlet_division(f_inv, delta, f, n);
}

/// Fills `g = mu * f` below `n`, the inverse of summing over divisors.
pub fn moebius_transform<T, H, F>(g: &mut H, f: F, n: usize)
where
    T: Invertible,
    H: IndexMut<usize, Output = T> + ?Sized,
    F: Fn(usize) -> T,
{
    if n == 0 {
        return;
    }
    let e1 = f(1).identity_of();
    dirichlet_division(g, f, |_| e1.clone(), n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use numerus_integers::Rational;

    const MU: [i64; 21] = [0, 1, -1, -1, 0, -1, 1, -1, 0, 0, 1, -1, 0, -1, 1, 1, 0, -1, 0, -1, 0];
    const SIGMA0: [i64; 21] = [0, 1, 2, 2, 3, 2, 4, 2, 4, 3, 4, 2, 6, 2, 4, 4, 5, 2, 6, 4, 6];
    const PHI: [i64; 21] = [0, 1, 1, 2, 2, 4, 2, 6, 4, 6, 4, 10, 4, 12, 6, 8, 8, 16, 6, 18, 8];

    #[test]
    fn test_convolution_of_ones_counts_divisors() {
        let mut h = vec![0i64; 21];
        dirichlet_convolution(&mut h[..], |_| 1i64, |_| 1i64, 21);
        assert_eq!(h, SIGMA0);
    }

    #[test]
    fn test_phi_is_id_times_mu() {
        let mut h = vec![0i64; 21];
        dirichlet_convolution(&mut h, |k| k as i64, |k| MU[k], 21);
        assert_eq!(h, PHI);

        let mut g = vec![0i64; 21];
        moebius_transform(&mut g, |k| k as i64, 21);
        assert_eq!(g, PHI);
    }

    #[test]
    fn test_inverse_of_one_is_mu() {
        let mut mu = vec![0i64; 21];
        dirichlet_inverse(&mut mu, |_| 1i64, 21);
        assert_eq!(mu, MU);
    }

    #[test]
    fn test_division_undoes_convolution() {
        // h = sigma_0 / 1 = 1
        let mut h = vec![0i64; 21];
        dirichlet_division(&mut h, |k| SIGMA0[k], |_| 1, 21);
        assert_eq!(&h[1..], &[1; 20]);
        assert_eq!(h[0], 0);
    }

    #[test]
    fn test_division_by_non_unit_leading_term() {
        // g = 2 * delta + 1 * [k == 2], f = g => h = delta
        let g = |k: usize| match k {
            1 => Rational::from(2),
            2 => Rational::from(1),
            _ => Rational::from(0),
        };
        let mut h = vec![Rational::from(0); 16];
        dirichlet_division(&mut h, g, g, 16);
        assert_eq!(h[1], Rational::from(1));
        assert!(h[2..].iter().all(|v| *v == Rational::from(0)));

        let mut inv = vec![Rational::from(0); 16];
        dirichlet_inverse(&mut inv, g, 16);
        // (2 + 2^-s)^-1 = 1/2 - 1/4 2^-s + 1/8 4^-s - ...
        assert_eq!(inv[1], Rational::from_i64(1, 2));
        assert_eq!(inv[2], Rational::from_i64(-1, 4));
        assert_eq!(inv[4], Rational::from_i64(1, 8));
        assert_eq!(inv[8], Rational::from_i64(-1, 16));
        assert_eq!(inv[3], Rational::from(0));
    }

    #[test]
    fn test_empty_bound() {
        let mut h: Vec<i64> = Vec::new();
        dirichlet_convolution(&mut h[..], |_| 1i64, |_| 1i64, 0);
        dirichlet_inverse(&mut h[..], |_| 1i64, 0);
        assert!(h.is_empty());
    }
}
