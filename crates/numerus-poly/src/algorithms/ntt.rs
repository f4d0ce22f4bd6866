//! Number Theoretic Transform (NTT) multiplication.
//!
//! An exact O(n log n) kernel for coefficients in Z/998244353Z, installed
//! through the [`Multiplier`] dispatch point.

use numerus_integers::modular::{primes, Mod998244353};

use super::multiply::{mul_long, Multiplier, LONG_MUL_THRESHOLD};

/// NTT-friendly prime: 998244353 = 2^23 * 7 * 17 + 1.
pub const NTT_PRIME: u64 = primes::P998244353;

/// Primitive root of `NTT_PRIME`.
pub const PRIMITIVE_ROOT: u64 = 3;

/// Largest supported transform length.
pub const MAX_NTT_LEN: usize = 1 << 23;

/// Coefficient type the transform works over.
pub type NttField = Mod998244353;

/// Reverses the lower `bits` bits of `x`.
#[inline]
fn reverse_bits(x: usize, bits: u32) -> usize {
    if bits == 0 {
        0
    } else {
        x.reverse_bits() >> (usize::BITS - bits)
    }
}

fn bit_reverse(a: &mut [NttField]) {
    let n = a.len();
    let log_n = n.trailing_zeros();

    for i in 0..n {
        let j = reverse_bits(i, log_n);
        if i < j {
            a.swap(i, j);
        }
    }
}

fn transform(a: &mut [NttField], invert: bool) {
    let n = a.len();
    debug_assert!(n.is_power_of_two(), "NTT length must be power of 2");
    if n == 1 {
        return;
    }

    bit_reverse(a);

    let g = NttField::new(PRIMITIVE_ROOT);
    let g = if invert { g.pow(NTT_PRIME - 2) } else { g };

    let mut len = 2;
    while len <= n {
        let w_len = g.pow((NTT_PRIME - 1) / len as u64);
        for chunk in a.chunks_mut(len) {
            let (lo, hi) = chunk.split_at_mut(len / 2);
            let mut w = NttField::new(1);
            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                let x = *u;
                let y = *v * w;
                *u = x + y;
                *v = x - y;
                w *= w_len;
            }
        }
        len <<= 1;
    }

    if invert {
        let n_inv = NttField::new(n as u64).pow(NTT_PRIME - 2);
        for x in a.iter_mut() {
            *x *= n_inv;
        }
    }
}

/// Computes the forward NTT in place. The length must be a power of 2.
pub fn ntt(a: &mut [NttField]) {
    transform(a, false);
}

/// Computes the inverse NTT in place. The length must be a power of 2.
pub fn intt(a: &mut [NttField]) {
    transform(a, true);
}

/// NTT kernel for `Polynomial<Mod998244353>`.
///
/// Falls back to long multiplication below `threshold`, where the
/// transforms cost more than they save.
#[derive(Clone, Copy, Debug)]
pub struct NttMultiplier {
    /// Degree of the smaller operand at which the NTT takes over.
    pub threshold: usize,
}

impl Default for NttMultiplier {
    fn default() -> Self {
        Self {
            threshold: LONG_MUL_THRESHOLD,
        }
    }
}

impl Multiplier<NttField> for NttMultiplier {
    fn mul_impl(&self, pr: &mut [NttField], p1: &[NttField], p2: &[NttField]) {
        let n = (p1.len() + p2.len() - 1).next_power_of_two();
        if p2.len() - 1 < self.threshold || n > MAX_NTT_LEN {
            mul_long(pr, p1, p2);
            return;
        }

        let mut fa = Vec::with_capacity(n);
        fa.extend_from_slice(p1);
        fa.resize(n, NttField::new(0));
        let mut fb = Vec::with_capacity(n);
        fb.extend_from_slice(p2);
        fb.resize(n, NttField::new(0));

        ntt(&mut fa);
        ntt(&mut fb);
        for (x, y) in fa.iter_mut().zip(&fb) {
            *x *= *y;
        }
        intt(&mut fa);

        pr.copy_from_slice(&fa[..pr.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::multiply::{mul_to_vec, LongMultiplier};

    #[test]
    fn test_ntt_intt_roundtrip() {
        let original: Vec<NttField> = (0..8).map(|i| NttField::new(i + 1)).collect();

        let mut a = original.clone();
        ntt(&mut a);
        intt(&mut a);
        assert_eq!(a, original);
    }

    #[test]
    fn test_bit_reverse() {
        let mut a: Vec<NttField> = (0..8).map(NttField::new).collect();
        bit_reverse(&mut a);

        let expected = [0, 4, 2, 6, 1, 5, 3, 7];
        for (i, &exp) in expected.iter().enumerate() {
            assert_eq!(a[i].value(), exp, "mismatch at index {i}");
        }
    }

    #[test]
    fn test_ntt_matches_long() {
        let a: Vec<NttField> = (0..300u64).map(|i| NttField::new(i * i + 7)).collect();
        let b: Vec<NttField> = (0..120u64).map(|i| NttField::new(998_244_352 - i)).collect();
        let m = NttMultiplier { threshold: 0 };
        let zero = NttField::new(0);

        for len in [1, 100, 419] {
            assert_eq!(
                mul_to_vec(&m, &a, &b, len, &zero),
                mul_to_vec(&LongMultiplier, &a, &b, len, &zero),
                "length {len}"
            );
        }
    }
}
