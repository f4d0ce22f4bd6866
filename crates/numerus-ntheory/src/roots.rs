//! Multiplicative orders, primitive roots and k-th roots.

use std::collections::BTreeSet;

use numerus_integers::arith::{gcd, pow_mod};
use numerus_integers::Modulo;

/// The multiplicative order of `a` modulo `m`.
///
/// `phi` is any multiple of the order, typically `φ(m)`, and `phi_factors`
/// are its distinct prime factors.
#[must_use]
pub fn multiplicative_order(a: u64, m: u64, phi: u64, phi_factors: &[u64]) -> u64 {
    let mut o = phi;
    for &p in phi_factors {
        while o % p == 0 && pow_mod(a, o / p, m) == 1 % m {
            o /= p;
        }
    }
    o
}

/// The smallest primitive root modulo `m`, or 0 if there is none.
///
/// A primitive root exists only for `m` of the form 2, 4, `p^k` or `2p^k`.
/// `phi` is `φ(m)` and `phi_factors` are its distinct prime factors.
#[must_use]
pub fn primitive_root(m: u64, phi: u64, phi_factors: &[u64]) -> u64 {
    (1..m)
        .filter(|&g| gcd(g, m) == 1)
        .find(|&g| phi_factors.iter().all(|&p| pow_mod(g, phi / p, m) != 1))
        .unwrap_or(0)
}

/// The smallest unit of maximal order `λ(m)` modulo `m`.
///
/// Unlike [`primitive_root`] this exists for every `m`. `lam` is the
/// Carmichael function `λ(m)` and `lam_factors` its distinct prime factors.
#[must_use]
pub fn primitive_root_of_unity(m: u64, lam: u64, lam_factors: &[u64]) -> u64 {
    primitive_root(m, lam, lam_factors)
}

/// The `k`-th roots of unity modulo `m`.
///
/// `lam` is `λ(m)` and `g` a [`primitive_root_of_unity`]. The result is the
/// cyclic subgroup generated by `g^(λ/d)`, `d = gcd(k, λ)`, which is every
/// root when `m` has a primitive root.
#[must_use]
pub fn kth_roots_of_unity(m: u64, k: u64, lam: u64, g: u64) -> BTreeSet<u64> {
    let d = gcd(k, lam);
    let w = Modulo::new(g, m).pow(lam / d);
    let mut r = Modulo::new(1, m);
    let mut sr = BTreeSet::new();
    for _ in 0..d {
        sr.insert(r.value());
        r *= w;
    }
    sr
}

/// The `k`-th roots of `n = g^l` modulo `m`.
///
/// `m` must have a primitive root `g`, and `phi = φ(m)`. Returns the empty
/// set if `n` has no `k`-th root.
#[must_use]
pub fn kth_roots(m: u64, k: u64, phi: u64, g: u64, l: u64) -> BTreeSet<u64> {
    let d = gcd(k, phi);
    if d == 0 || l % d != 0 {
        return BTreeSet::new();
    }
    let (phi, l, k) = (phi / d, l / d, k / d);

    // g^(l/k) is one root; the rest differ by the d-th roots of unity
    let Some(k_inv) = Modulo::new(k, phi).inv() else {
        return BTreeSet::new();
    };
    let h = Modulo::new(l, phi) * k_inv;
    let mut r = Modulo::new(g, m).pow(h.value());
    let w = Modulo::new(g, m).pow(phi);
    let mut sr = BTreeSet::new();
    for _ in 0..d {
        sr.insert(r.value());
        r *= w;
    }
    sr
}
