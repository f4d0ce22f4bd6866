//! Stirling numbers of the first and second kind.
//!
//! First kind numbers are signed: `x(x-1)...(x-n+1) = sum_k s(n, k) x^k`.

use tracing::trace;

use numerus_poly::Polynomial;
use numerus_rings::{pow, Invertible, Ring};
use numerus_series::Series;

use crate::factorial::factorial;

/// `s(i, j)` for `i < n` and `j < min(i + 1, k)`, by the recurrence
/// `s(i, j) = s(i-1, j-1) - (i-1) s(i-1, j)`. `O(n k)`.
#[allow(clippy::cast_possible_wrap)]
pub fn stirling_s1_table<T: Ring>(n: usize, k: usize, id: &T) -> Vec<Vec<T>> {
    let e0 = id.zero_of();
    let mut s1: Vec<Vec<T>> = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = vec![e0.clone(); (i + 1).min(k)];
        if let Some(prev) = i.checked_sub(1).map(|p| &s1[p]) {
            for j in 1..i.min(k) {
                row[j] = prev[j - 1].clone() - prev[j].mul_by_scalar(i as i64 - 1);
            }
        }
        if i < k {
            row[i] = id.clone();
        }
        s1.push(row);
    }
    s1
}

/// `s(i, k)` for `i < n`, read off the exponential generating function
/// `ln(1 + x)^k / k!`. `O(n log n log k)`.
#[allow(clippy::cast_possible_wrap)]
pub fn stirling_s1_column<T: Invertible>(n: usize, k: usize, id: &T) -> Vec<T> {
    if n == 0 {
        return Vec::new();
    }
    // ln(1 + x) = sum (-1)^(i+1) x^i / i
    let ln1p: Vec<T> = (0..n)
        .map(|i| match i {
            0 => id.zero_of(),
            i if i % 2 == 1 => id.clone() / id.cast_of(i as i64),
            i => -(id.clone() / id.cast_of(i as i64)),
        })
        .collect();
    let egf = Series::from_vec(ln1p, n)
        .powi(k as u64)
        .div_scalar(&factorial(k as u64, id));
    egf.make_ordinary().into_poly().into_coeffs()
}

/// `s(n, j)` for `j <= n`, the coefficients of `x(x-1)...(x-n+1)`.
///
/// The product is taken as a balanced tree. `O(n log^2 n)`.
#[allow(clippy::cast_possible_wrap)]
pub fn stirling_s1_row<T: Ring>(n: usize, id: &T) -> Vec<T> {
    let mut level: Vec<Polynomial<T>> = (0..n)
        .map(|i| Polynomial::from_vec(vec![id.cast_of(-(i as i64)), id.clone()]))
        .collect();
    if level.is_empty() {
        return vec![id.clone()];
    }
    while level.len() > 1 {
        trace!(factors = level.len(), "stirling_s1_row level");
        level = level
            .chunks(2)
            .map(|pair| pair[1..].iter().fold(pair[0].clone(), |acc, q| &acc * q))
            .collect();
    }
    let mut coeffs = level.swap_remove(0).into_coeffs();
    coeffs.resize(n + 1, id.zero_of());
    coeffs
}

/// A single `s(n, k)`.
pub fn stirling_s1<T: Ring>(n: usize, k: usize, id: &T) -> T {
    if k == n {
        return id.clone();
    }
    if k == 0 || k > n {
        return id.zero_of();
    }
    stirling_s1_row(n, id).swap_remove(k)
}

/// `S(i, j)` for `i < n` and `j < min(i + 1, k)`, by the recurrence
/// `S(i, j) = S(i-1, j-1) + j S(i-1, j)`. `O(n k)`.
#[allow(clippy::cast_possible_wrap)]
pub fn stirling_s2_table<T: Ring>(n: usize, k: usize, id: &T) -> Vec<Vec<T>> {
    let e0 = id.zero_of();
    let mut s2: Vec<Vec<T>> = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = vec![e0.clone(); (i + 1).min(k)];
        if let Some(prev) = i.checked_sub(1).map(|p| &s2[p]) {
            for j in 1..i.min(k) {
                row[j] = prev[j - 1].clone() + prev[j].mul_by_scalar(j as i64);
            }
        }
        if i < k {
            row[i] = id.clone();
        }
        s2.push(row);
    }
    s2
}

/// `S(i, k)` for `i < n`, from `(e^x - 1)^k / k!`. `O(n log n log k)`.
pub fn stirling_s2_column<T: Invertible>(n: usize, k: usize, id: &T) -> Vec<T> {
    if n == 0 {
        return Vec::new();
    }
    let em1 = &Series::exp_scalar(id, n) - &Series::constant(id.clone(), n);
    let egf = em1.powi(k as u64).div_scalar(&factorial(k as u64, id));
    egf.make_ordinary().into_poly().into_coeffs()
}

/// `S(n, j)` for `j <= n`, as the product of `e^(-x)` and
/// `sum_i i^n x^i / i!`. `O(n log n)`.
#[allow(clippy::cast_possible_wrap)]
pub fn stirling_s2_row<T: Invertible>(n: usize, id: &T) -> Vec<T> {
    let powers: Vec<T> = (0..=n).map(|i| pow(&id.cast_of(i as i64), n as u64)).collect();
    let row = &Series::exp_scalar(&-id.clone(), n + 1) * &Series::from_vec(powers, n + 1).make_exponential();
    row.into_poly().into_coeffs()
}

/// A single `S(n, k)`, by inclusion-exclusion over surjections:
/// `S(n, k) = sum_j (-1)^(k-j) C(k, j) j^n / k!`. `O(k log n)`.
#[allow(clippy::cast_possible_wrap)]
pub fn stirling_s2<T: Invertible>(n: u64, k: usize, id: &T) -> T {
    if k as u64 == n {
        return id.clone();
    }
    if k == 0 || k as u64 > n {
        return id.zero_of();
    }
    let mut binomial = id.clone();
    let mut r = id.zero_of();
    for j in 1..=k {
        binomial = binomial.mul_by_scalar((k + 1 - j) as i64) / id.cast_of(j as i64);
        let t = binomial.clone() * pow(&id.cast_of(j as i64), n);
        r = if (k - j) % 2 == 1 { r - t } else { r + t };
    }
    r / factorial(k as u64, id)
}
