//! Sublinear prefix sums by the Dirichlet hyperbola method.
//!
//! Given `t(n) = sum_{k=1..n} p(k) M(floor(n/k))` and the prefix sums
//! `s` of `p`, `M(n)` follows from `t(n)` and `M` at the `O(sqrt(n))`
//! distinct quotients `floor(n/k)`:
//!
//! ```text
//! M(n) = (t(n) - sum_{k=2..n/q} p(k) M(n/k)
//!              - sum_{m=1..q-1} (s(n/m) - s(n/(m+1))) M(m)) / p(1)
//! ```
//!
//! with `q = isqrt(n)`. With `M` sieved below `U ~ n^(2/3)` this runs in
//! `O(n / sqrt(U)) = O(n^(2/3))`.

use tracing::debug;

use numerus_integers::arith::icbrt;
use numerus_rings::{Invertible, Ring};

use crate::sqrt_map::{isqrt_i64, Memo, SqrtMap};

/// Evaluates `M(n)` for `t(n) = sum_{k=1..n} p(k) M(n/k)`.
///
/// `s` is the prefix sum of `p`, and `p(1) = s(1) - s(0)` must be a unit.
/// Every computed `M(n/k)` is memoized in `tbl`; values the caller sieved
/// in advance are used as they are.
pub fn sum_m<T, M, F, S>(t: &F, s: &S, n: i64, tbl: &mut M, id: &T) -> T
where
    T: Invertible,
    M: Memo<T> + ?Sized,
    F: Fn(i64) -> T,
    S: Fn(i64) -> T,
{
    if n < 1 {
        return id.zero_of();
    }
    if let Some(v) = tbl.get(n) {
        return v.clone();
    }
    let p1 = s(1) - s(0);
    let q = isqrt_i64(n);
    let mut r = t(n);
    for k in 2..=n / q {
        r = r - (s(k) - s(k - 1)) * sum_m(t, s, n / k, tbl, id);
    }
    for m in 1..q {
        r = r - (s(n / m) - s(n / (m + 1))) * sum_m(t, s, m, tbl, id);
    }
    let v = r / p1;
    tbl.insert(n, v.clone());
    v
}

/// [`sum_m`] for `p = 1`: evaluates `M(n)` for `t(n) = sum_{k=1..n} M(n/k)`.
///
/// Needs no division, so works over any ring.
pub fn sum_m_unit<T, M, F>(t: &F, n: i64, tbl: &mut M, id: &T) -> T
where
    T: Ring,
    M: Memo<T> + ?Sized,
    F: Fn(i64) -> T,
{
    if n < 1 {
        return id.zero_of();
    }
    if let Some(v) = tbl.get(n) {
        return v.clone();
    }
    let q = isqrt_i64(n);
    let mut r = t(n);
    for k in 2..=n / q {
        r = r - sum_m_unit(t, n / k, tbl, id);
    }
    for m in 1..q {
        r = r - sum_m_unit(t, m, tbl, id) * id.cast_of(n / m - n / (m + 1));
    }
    tbl.insert(n, r.clone());
    r
}

/// The sieving bound `icbrt(n)^2` used when none is given.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn default_sieve_bound(n: i64) -> usize {
    let c = icbrt(n.max(0).unsigned_abs()) as usize;
    c * c
}

/// A hyperbola-method evaluator that owns its memo table.
///
/// The dense part of the table holds `M` below the sieving bound and is
/// filled once through [`HyperbolaSum::sieve`]. Queries at different
/// arguments share everything computed so far.
#[derive(Clone, Debug)]
pub struct HyperbolaSum<T> {
    map: SqrtMap<T>,
    id: T,
}

impl<T: Ring> HyperbolaSum<T> {
    /// An engine for arguments up to `n` with `M` sieved below `u`
    /// (`u = 0` picks [`default_sieve_bound`]).
    #[must_use]
    pub fn new(n: i64, u: usize, id: T) -> Self {
        let u = if u == 0 { default_sieve_bound(n) } else { u };
        debug!(n, u, "hyperbola sum sieving bound");
        Self {
            map: SqrtMap::new(u, n, id.zero_of()),
            id,
        }
    }

    /// Fills the dense region, `M(0..u)`, with `fill`.
    #[must_use]
    pub fn sieve(mut self, fill: impl FnOnce(&mut [T])) -> Self {
        fill(self.map.dense_mut());
        self
    }

    /// The sieving bound.
    #[must_use]
    pub fn bound(&self) -> usize {
        self.map.dense_len()
    }

    /// `M(n)` for `t(n) = sum_{k=1..n} M(n/k)`.
    pub fn eval_unit<F: Fn(i64) -> T>(&mut self, n: i64, t: F) -> T {
        self.retune(n);
        let v = sum_m_unit(&t, n, &mut self.map, &self.id);
        debug!(n, memo = self.map.len(), "hyperbola sum evaluated");
        v
    }

    /// The memo table.
    #[must_use]
    pub fn map(&self) -> &SqrtMap<T> {
        &self.map
    }

    /// Consumes the engine, returning the memo table.
    #[must_use]
    pub fn into_map(self) -> SqrtMap<T> {
        self.map
    }

    fn retune(&mut self, n: i64) {
        if n != self.map.max() {
            self.map.reset_max(n);
        }
    }
}

impl<T: Invertible> HyperbolaSum<T> {
    /// `M(n)` for `t(n) = sum_{k=1..n} p(k) M(n/k)`, with `s` the prefix
    /// sum of `p`.
    pub fn eval<F, S>(&mut self, n: i64, t: F, s: S) -> T
    where
        F: Fn(i64) -> T,
        S: Fn(i64) -> T,
    {
        self.retune(n);
        let v = sum_m(&t, &s, n, &mut self.map, &self.id);
        debug!(n, memo = self.map.len(), "hyperbola sum evaluated");
        v
    }
}
