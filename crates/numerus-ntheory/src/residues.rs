//! Quadratic residues: Jacobi symbols and modular square roots.

use rustc_hash::FxHashSet;

use numerus_integers::arith::mul_mod;
use numerus_integers::Modulo;
use numerus_rings::{pow, Quadratic, Ring};

use crate::crt::chinese_remainder;

/// The Jacobi symbol `(n / m)` for odd positive `m`.
///
/// For prime `m` this is the Legendre symbol: 0 if `m | n`, 1 for a
/// quadratic residue and -1 for a non-residue. For composite `m` a value of
/// 1 does not imply that `n` is a residue.
///
/// # Panics
///
/// Panics if `m` is zero.
#[must_use]
pub fn jacobi(mut n: u64, mut m: u64) -> i32 {
    let mut j = 1;
    loop {
        if m == 1 {
            return j;
        }
        n %= m;
        if n == 0 {
            return 0;
        }
        let e = n.trailing_zeros();
        n >>= e;
        if e % 2 == 1 && (m % 8 == 3 || m % 8 == 5) {
            j = -j;
        }
        if n % 4 == 3 && m % 4 == 3 {
            j = -j;
        }
        std::mem::swap(&mut n, &mut m);
    }
}

/// A square root of `y` modulo the prime `y.modulus()`, by Cipolla's method.
///
/// `y` must be a quadratic residue; zero maps to zero.
#[must_use]
pub fn sqrt_cipolla(y: Modulo) -> Modulo {
    let p = y.modulus();
    if p == 2 || y.is_zero() {
        return y;
    }
    let one = y.identity_of();

    // find a with a^2 - y a non-residue
    let mut a = y.zero_of();
    let mut d;
    loop {
        a += one;
        d = a * a - y;
        if d.pow((p - 1) / 2) != one {
            break;
        }
    }

    // (a + sqrt(d))^((p + 1) / 2)
    pow(&Quadratic::new(a, one, d), (p + 1) / 2).a
}

/// Square roots of odd `y` modulo `2^k`.
///
/// All roots are `{x1, x2, -x1, -x2}`. Returns `(x1, x2)`, or `(0, 0)` if
/// `y` is not a square modulo `2^k`.
#[must_use]
pub fn sqrt_hensel_lift_p2(y: u64, k: u32) -> (u64, u64) {
    if y % 2 != 1 {
        return (0, 0);
    }
    if k == 1 {
        return (1, 1);
    }
    if y % 4 != 1 {
        return (0, 0);
    }
    if k == 2 {
        return (1, 1);
    }
    if y % 8 != 1 {
        return (0, 0);
    }

    let mut s = [1u64, 3];
    let mut w2 = 4u64;
    for _ in 4..=k {
        for x in &mut s {
            let r = Modulo::new(*x, w2 * 4);
            let v = r * r - Modulo::new(y, w2 * 4);
            if !v.is_zero() {
                *x += w2;
            } else if *x >= w2 {
                *x += w2 * 2;
            }
        }
        w2 *= 2;
    }
    (s[0], s[1])
}

/// A square root of `y` modulo the odd prime power `p^k`, `gcd(y, p) = 1`.
///
/// The roots are `{x, -x}`. Each Newton step squares the modulus.
#[must_use]
pub fn sqrt_hensel_lift(y: u64, p: u64, k: u32) -> u64 {
    let pk = p.pow(k);
    let mut r = sqrt_cipolla(Modulo::new(y, p));
    let mut i = 1;
    while i < k {
        let m = r.modulus();
        // (2r)^-1 by Euler's theorem
        let u = (r * r.cast_of(2)).pow(m / p * (p - 1) - 1);
        let lifted = if i * 2 < k { m * m } else { pk };
        r = r.with_modulus(lifted);
        let v = r * r - Modulo::new(y, lifted);
        r -= v * u.with_modulus(lifted);
        i *= 2;
    }
    r.value()
}

/// All square roots of `y` modulo `m`, given the factorization of `m`.
///
/// Roots modulo each prime power are combined by Chinese remaindering.
/// Requires `gcd(y, m) = 1`; the result is sorted and empty if `y` is not
/// a square.
#[must_use]
pub fn sqrt_mod(y: u64, factors: &[(u64, u32)]) -> Vec<u64> {
    let mut m = 1u64;
    let mut sr: FxHashSet<u64> = std::iter::once(0).collect();

    for &(p, e) in factors {
        let prev = std::mem::take(&mut sr);
        let q = p.pow(e);
        let candidates = if p == 2 {
            let (x1, x2) = sqrt_hensel_lift_p2(y, e);
            vec![x1, x2]
        } else {
            vec![sqrt_hensel_lift(y, p, e)]
        };
        for x in candidates {
            if mul_mod(x, x, q) != y % q {
                continue;
            }
            for &r0 in &prev {
                sr.insert(chinese_remainder(r0, m, x, q).0);
                sr.insert(chinese_remainder(r0, m, (q - x % q) % q, q).0);
            }
        }
        m *= q;
    }

    let mut roots: Vec<u64> = sr.into_iter().collect();
    roots.sort_unstable();
    roots
}
