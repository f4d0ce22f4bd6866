//! Closed-form prefix sums of polynomials.

use numerus_rings::{Invertible, Ring};

use crate::dense::Polynomial;

/// Returns `s` with `s(n) = p(1) + p(2) + ... + p(n)` and `s(0) = 0`.
///
/// `p` is expanded in the binomial basis through its forward differences at
/// 1, `p(k) = sum_j Δ^j p(1) C(k-1, j)`, and summed termwise with
/// `sum_{k=1..n} C(k-1, j) = C(n, j+1)`. Requires `1..=deg(p)+1` to be
/// invertible in `T`.
#[must_use]
pub fn polynomial_sum<T: Invertible>(p: &Polynomial<T>) -> Polynomial<T> {
    let zero = p.zero_coeff().clone();
    let one = zero.identity_of();
    let d = p.deg();

    // Δ^j p(1) for j = 0..=d
    let mut row: Vec<T> = (1..=d as i64 + 1).map(|k| p.eval(&zero.cast_of(k))).collect();
    let mut diffs = Vec::with_capacity(d + 1);
    while let Some(first) = row.first() {
        diffs.push(first.clone());
        row = row.windows(2).map(|w| w[1].clone() - w[0].clone()).collect();
    }

    // binomial = C(n, j+1) as a polynomial in n
    let mut binomial = Polynomial::from_vec(vec![zero.clone(), one.clone()]);
    let mut s = Polynomial::new(zero.clone());
    for (j, delta) in diffs.iter().enumerate() {
        if j > 0 {
            let factor = Polynomial::from_vec(vec![zero.cast_of(-(j as i64)), one.clone()]);
            binomial = (&binomial * &factor).div_scalar(&zero.cast_of(j as i64 + 1));
        }
        s += &binomial.scale(delta);
    }
    s
}
