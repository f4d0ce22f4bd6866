//! Chinese remaindering.

use numerus_integers::arith::{gcd_ex, mod_normalize, mul_mod};
use numerus_integers::Modulo;

/// Solves `a ≡ a1 (mod n1)`, `a ≡ a2 (mod n2)` for moduli that need not be
/// coprime.
///
/// Returns `(a, n)` with `n = lcm(n1, n2)` and `0 <= a < n`, or `(0, 0)` if
/// the congruences are inconsistent. The lcm must fit in a `u64`.
///
/// # Panics
///
/// Panics if either modulus is zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn chinese_remainder(a1: u64, n1: u64, a2: u64, n2: u64) -> (u64, u64) {
    assert!(n1 != 0 && n2 != 0, "modulus cannot be zero");
    let (g, x, _) = gcd_ex(i128::from(n1), i128::from(n2));
    let g = g as u64;
    let (a1, a2) = (a1 % n1, a2 % n2);

    // a2 - a1 taken modulo n2; g divides n2 so this preserves the residue mod g
    let diff = mod_normalize(i128::from(a2) - i128::from(a1), n2);
    if diff % g != 0 {
        return (0, 0);
    }

    // n1 * x = g (mod n2), so x inverts n1 / g modulo n2 / g
    let (m1, m2) = (n1 / g, n2 / g);
    let t = mul_mod(diff / g, mod_normalize(x, m2), m2);
    let a = u128::from(a1) + u128::from(n1) * u128::from(t);
    (a as u64, m1 * n2)
}

/// Folds [`chinese_remainder`] over a list of `(residue, modulus)` pairs.
///
/// An empty list yields `(0, 1)`; any inconsistency yields `(0, 0)`.
#[must_use]
pub fn chinese_remainder_many(congruences: &[(u64, u64)]) -> (u64, u64) {
    let mut acc = (0, 1);
    for &(a, n) in congruences {
        acc = chinese_remainder(acc.0, acc.1, a, n);
        if acc.1 == 0 {
            return (0, 0);
        }
    }
    acc
}

/// Mixed radix coefficients by Garner's algorithm.
///
/// Given `u ≡ a_i (mod p_i)` for pairwise coprime `p_i`, returns `x_i`
/// (modulo `p_i`) with `u = x_0 + x_1 p_0 + x_2 p_0 p_1 + ...`.
///
/// # Panics
///
/// Panics if two moduli are not coprime.
#[must_use]
pub fn garner(residues: &[Modulo]) -> Vec<Modulo> {
    let mut vx: Vec<Modulo> = Vec::with_capacity(residues.len());
    for &a in residues {
        let mut y = a;
        for (x, r) in vx.iter().zip(residues) {
            y -= y.with_value(x.value());
            y = y / y.with_value(r.modulus());
        }
        vx.push(y);
    }
    vx
}
