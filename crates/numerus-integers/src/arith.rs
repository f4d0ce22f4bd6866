//! Machine-word integer helpers.
//!
//! These are the small routines the sieves and modular algorithms lean on:
//! gcd variants, exact integer roots, and overflow-free modular products.

/// Greatest common divisor of two unsigned integers.
#[must_use]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Extended Euclid: returns `(g, x, y)` with `a*x + b*y == g` and `g >= 0`.
///
/// Works in `i128` so that any pair of `u64` moduli fits; the Bezout
/// coefficients are bounded by the inputs.
#[must_use]
pub fn gcd_ex(a: i128, b: i128) -> (i128, i128, i128) {
    let (mut r0, mut r1) = (a, b);
    let (mut x0, mut x1) = (1i128, 0i128);
    let (mut y0, mut y1) = (0i128, 1i128);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (x0, x1) = (x1, x0 - q * x1);
        (y0, y1) = (y1, y0 - q * y1);
    }
    if r0 < 0 {
        (-r0, -x0, -y0)
    } else {
        (r0, x0, y0)
    }
}

/// Least common multiple. `lcm(0, x) == 0`.
#[must_use]
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Floor of the square root.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r > 0 && r.checked_mul(r).map_or(true, |s| s > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|s| s <= n) {
        r += 1;
    }
    r
}

/// Floor of the cube root.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn icbrt(n: u64) -> u64 {
    let cube = |r: u64| r.checked_mul(r).and_then(|s| s.checked_mul(r));
    let mut r = (n as f64).cbrt() as u64;
    while r > 0 && cube(r).map_or(true, |c| c > n) {
        r -= 1;
    }
    while cube(r + 1).is_some_and(|c| c <= n) {
        r += 1;
    }
    r
}

/// `(a * b) mod m` without overflow.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    (u128::from(a) * u128::from(b) % u128::from(m)) as u64
}

/// `b^e mod m` by binary exponentiation. `pow_mod(_, 0, 1) == 0`.
#[must_use]
pub fn pow_mod(b: u64, mut e: u64, m: u64) -> u64 {
    let mut base = b % m;
    let mut r = 1 % m;
    while e > 0 {
        if e & 1 == 1 {
            r = mul_mod(r, base, m);
        }
        base = mul_mod(base, base, m);
        e >>= 1;
    }
    r
}

/// Canonical residue of a signed value in `[0, m)`.
///
/// # Panics
///
/// Panics if `m` is zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mod_normalize(v: i128, m: u64) -> u64 {
    // the result is below m, so it fits
    v.rem_euclid(i128::from(m)) as u64
}
