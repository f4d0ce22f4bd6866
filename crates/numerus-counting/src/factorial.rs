//! Factorials.

use numerus_rings::Ring;

/// `n!` in the ring of `id`.
#[allow(clippy::cast_possible_wrap)]
pub fn factorial<T: Ring>(n: u64, id: &T) -> T {
    (2..=n).fold(id.clone(), |f, i| f.mul_by_scalar(i as i64))
}
