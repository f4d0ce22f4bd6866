//! Memo tables for the hyperbola method.

use std::ops::{Index, IndexMut};

use rustc_hash::FxHashMap;

use numerus_integers::arith::isqrt;

/// A memo table keyed by the arguments of a recursive prefix sum.
pub trait Memo<T> {
    /// The stored value at `k`, if any.
    fn get(&self, k: i64) -> Option<&T>;

    /// Stores `v` at `k`, replacing any previous value.
    fn insert(&mut self, k: i64, v: T);

    /// Returns true if a value is stored at `k`.
    fn contains(&self, k: i64) -> bool {
        self.get(k).is_some()
    }
}

impl<T> Memo<T> for FxHashMap<i64, T> {
    fn get(&self, k: i64) -> Option<&T> {
        FxHashMap::get(self, &k)
    }

    fn insert(&mut self, k: i64, v: T) {
        FxHashMap::insert(self, k, v);
    }
}

/// A memo specialized to the keys `floor(N / k)`.
///
/// Keys below `u` live in a dense array, which is considered populated from
/// the start (a sieve fills it). Keys above `sqrt(N)` of the form
/// `floor(N / k)` are stored at slot `k` of a second array of `O(sqrt(N))`
/// slots. Any other key falls back to a hash map.
#[derive(Clone, Debug)]
pub struct SqrtMap<T> {
    dense: Vec<T>,
    sparse: Vec<Option<T>>,
    fallback: FxHashMap<i64, T>,
    n: i64,
    q: i64,
    zero: T,
}

impl<T: Clone> SqrtMap<T> {
    /// A table with dense keys `0..u` set to `zero`, tuned for the maximum
    /// argument `n`.
    #[must_use]
    pub fn new(u: usize, n: i64, zero: T) -> Self {
        let q = isqrt_i64(n);
        Self {
            dense: vec![zero.clone(); u],
            sparse: vec![None; slot_count(q)],
            fallback: FxHashMap::default(),
            n,
            q,
            zero,
        }
    }

    /// The size of the dense region.
    #[must_use]
    pub fn dense_len(&self) -> usize {
        self.dense.len()
    }

    /// The argument the sparse region is currently tuned for.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.n
    }

    /// The dense region.
    #[must_use]
    pub fn dense(&self) -> &[T] {
        &self.dense
    }

    /// The dense region, mutably.
    pub fn dense_mut(&mut self) -> &mut [T] {
        &mut self.dense
    }

    /// Number of stored values, counting the whole dense region.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dense.len() + self.sparse.iter().flatten().count() + self.fallback.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retunes the sparse region to the maximum argument `n`.
    ///
    /// Stored values are kept; they move to the slots of the new layout.
    pub fn reset_max(&mut self, n: i64) {
        let old_n = self.n;
        let mut old: Vec<(i64, T)> = std::mem::take(&mut self.sparse)
            .into_iter()
            .enumerate()
            .filter_map(|(slot, v)| v.map(|v| (old_n / slot as i64, v)))
            .collect();
        old.extend(self.fallback.drain());
        self.n = n;
        self.q = isqrt_i64(n);
        self.sparse = vec![None; slot_count(self.q)];
        for (k, v) in old {
            self.insert(k, v);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn dense_index(&self, k: i64) -> Option<usize> {
        (k >= 0 && (k as u64) < self.dense.len() as u64).then_some(k as usize)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn sparse_index(&self, k: i64) -> Option<usize> {
        if k <= self.q || k > self.n {
            return None;
        }
        let slot = self.n / k;
        (self.n / slot == k).then_some(slot as usize)
    }

    fn entry(&mut self, k: i64) -> &mut T {
        if let Some(i) = self.dense_index(k) {
            return &mut self.dense[i];
        }
        if let Some(i) = self.sparse_index(k) {
            return self.sparse[i].get_or_insert_with(|| self.zero.clone());
        }
        self.fallback.entry(k).or_insert_with(|| self.zero.clone())
    }
}

fn slot_count(q: i64) -> usize {
    usize::try_from(q).map_or(0, |q| q + 2)
}

pub(crate) fn isqrt_i64(n: i64) -> i64 {
    i64::try_from(isqrt(n.max(0).unsigned_abs())).unwrap_or(i64::MAX)
}

impl<T: Clone> Memo<T> for SqrtMap<T> {
    fn get(&self, k: i64) -> Option<&T> {
        if let Some(i) = self.dense_index(k) {
            return Some(&self.dense[i]);
        }
        if let Some(i) = self.sparse_index(k) {
            return self.sparse[i].as_ref();
        }
        self.fallback.get(&k)
    }

    fn insert(&mut self, k: i64, v: T) {
        *self.entry(k) = v;
    }
}

impl<T: Clone> Index<usize> for SqrtMap<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if nothing is stored at `k`; use [`Memo::get`] to look up a key
    /// that may be missing.
    fn index(&self, k: usize) -> &T {
        let key = i64::try_from(k).unwrap_or(i64::MAX);
        match Memo::get(self, key) {
            Some(v) => v,
            None => panic!("no value stored at key {k}"),
        }
    }
}

impl<T: Clone> IndexMut<usize> for SqrtMap<T> {
    /// Stores zero first if nothing is stored at `k`.
    fn index_mut(&mut self, k: usize) -> &mut T {
        let key = i64::try_from(k).unwrap_or(i64::MAX);
        self.entry(key)
    }
}
