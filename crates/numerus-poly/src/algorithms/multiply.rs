//! Multiplication strategies on coefficient slices.
//!
//! Every product goes through [`mul_into`], which normalizes the operand
//! lengths and then hands off to a [`Multiplier`]. Strategies that recurse
//! (Karatsuba) call back into [`mul_into`] with the same multiplier, so a
//! caller can install a faster kernel (NTT) for the sub-products without
//! touching the recursion itself.

use numerus_rings::Ring;

use super::karatsuba::karatsuba;

/// Degree of the smaller operand below which long multiplication wins.
pub const LONG_MUL_THRESHOLD: usize = 48;

/// A polynomial multiplication kernel.
pub trait Multiplier<T> {
    /// Writes coefficients `0..pr.len()` of `p1 * p2` into `pr`.
    ///
    /// Only ever called through [`mul_into`], which guarantees that all
    /// slices are non-empty and
    /// `p2.len() <= p1.len() <= pr.len() <= p1.len() + p2.len() - 1`.
    fn mul_impl(&self, pr: &mut [T], p1: &[T], p2: &[T]);
}

impl<T, M: Multiplier<T> + ?Sized> Multiplier<T> for &M {
    fn mul_impl(&self, pr: &mut [T], p1: &[T], p2: &[T]) {
        (**self).mul_impl(pr, p1, p2);
    }
}

/// Computes `pr = p1 * p2` truncated to `pr.len()` coefficients.
///
/// Operands are swapped so the longer one comes first, clamped to the
/// output length, and any output positions beyond the full product are
/// zeroed before `m` is invoked.
pub fn mul_into<T: Ring, M: Multiplier<T> + ?Sized>(m: &M, pr: &mut [T], p1: &[T], p2: &[T]) {
    if pr.is_empty() {
        return;
    }
    if p1.is_empty() || p2.is_empty() {
        let zero = pr[0].zero_of();
        pr.fill(zero);
        return;
    }

    let (p1, p2) = if p2.len() > p1.len() { (p2, p1) } else { (p1, p2) };
    let lr = pr.len();
    let p1 = &p1[..p1.len().min(lr)];
    let p2 = &p2[..p2.len().min(lr)];

    let full = p1.len() + p2.len() - 1;
    if lr > full {
        pr[full..].fill(p1[0].zero_of());
    }
    m.mul_impl(&mut pr[..lr.min(full)], p1, p2);
}

/// Schoolbook multiplication: O(l1 * l2).
pub fn mul_long<T: Ring>(pr: &mut [T], p1: &[T], p2: &[T]) {
    let zero = p1[0].zero_of();
    let (l1, l2) = (p1.len(), p2.len());

    for (i, out) in pr.iter_mut().enumerate() {
        let jmin = (i + 1).saturating_sub(l2);
        let jmax = i.min(l1 - 1);
        let mut r = zero.clone();
        for j in jmin..=jmax {
            r = r + p1[j].clone() * p2[i - j].clone();
        }
        *out = r;
    }
}

/// Always multiplies the long way.
#[derive(Clone, Copy, Debug, Default)]
pub struct LongMultiplier;

impl<T: Ring> Multiplier<T> for LongMultiplier {
    fn mul_impl(&self, pr: &mut [T], p1: &[T], p2: &[T]) {
        mul_long(pr, p1, p2);
    }
}

/// Always splits with Karatsuba, down to a single coefficient.
#[derive(Clone, Copy, Debug, Default)]
pub struct KaratsubaMultiplier;

impl<T: Ring> Multiplier<T> for KaratsubaMultiplier {
    fn mul_impl(&self, pr: &mut [T], p1: &[T], p2: &[T]) {
        karatsuba(self, pr, p1, p2);
    }
}

/// Long multiplication for small operands, Karatsuba above `threshold`.
#[derive(Clone, Copy, Debug)]
pub struct DefaultMultiplier {
    /// Degree of the smaller operand at which Karatsuba takes over.
    pub threshold: usize,
}

impl Default for DefaultMultiplier {
    fn default() -> Self {
        Self {
            threshold: LONG_MUL_THRESHOLD,
        }
    }
}

impl<T: Ring> Multiplier<T> for DefaultMultiplier {
    fn mul_impl(&self, pr: &mut [T], p1: &[T], p2: &[T]) {
        if p2.len() - 1 < self.threshold {
            mul_long(pr, p1, p2);
        } else {
            karatsuba(self, pr, p1, p2);
        }
    }
}

/// Multiplies two coefficient slices into a fresh vector of `len` coefficients.
#[must_use]
pub fn mul_to_vec<T: Ring, M: Multiplier<T> + ?Sized>(m: &M, p1: &[T], p2: &[T], len: usize, zero: &T) -> Vec<T> {
    let mut pr = vec![zero.clone(); len];
    mul_into(m, &mut pr, p1, p2);
    pr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_long() {
        // (1 + 2x)(3 + 4x) = 3 + 10x + 8x^2
        let p1 = [1i64, 2];
        let p2 = [3i64, 4];
        assert_eq!(mul_to_vec(&LongMultiplier, &p1, &p2, 3, &0), vec![3, 10, 8]);
    }

    #[test]
    fn test_mul_into_pads_and_truncates() {
        let p1 = [1i64, 1];
        let p2 = [1i64, 1, 1];
        assert_eq!(mul_to_vec(&LongMultiplier, &p1, &p2, 6, &0), vec![1, 2, 2, 1, 0, 0]);
        assert_eq!(mul_to_vec(&LongMultiplier, &p1, &p2, 2, &0), vec![1, 2]);
        assert_eq!(mul_to_vec(&LongMultiplier, &p1, &[], 2, &0), vec![0, 0]);
    }

    #[test]
    fn test_strategies_agree() {
        let n = 150i64;
        let a: Vec<i64> = (0..n).map(|i| (i * 37) % 101 - 50).collect();
        let b: Vec<i64> = (0..n - 17).map(|i| (i * 53) % 97 - 48).collect();
        let full = a.len() + b.len() - 1;

        let long = mul_to_vec(&LongMultiplier, &a, &b, full, &0);
        let kara = mul_to_vec(&KaratsubaMultiplier, &a, &b, full, &0);
        let dflt = mul_to_vec(&DefaultMultiplier::default(), &a, &b, full, &0);
        assert_eq!(long, kara);
        assert_eq!(long, dflt);

        for lr in [1, 40, 149, 200] {
            let long = mul_to_vec(&LongMultiplier, &a, &b, lr, &0);
            let kara = mul_to_vec(&KaratsubaMultiplier, &a, &b, lr, &0);
            assert_eq!(long, kara, "truncated to {lr}");
        }
    }

    #[test]
    fn test_dyn_dispatch() {
        let m: &dyn Multiplier<i64> = &DefaultMultiplier { threshold: 2 };
        let p = [1i64, 1, 1, 1, 1];
        assert_eq!(mul_to_vec(m, &p, &p, 9, &0), vec![1, 2, 3, 4, 5, 4, 3, 2, 1]);
    }
}
