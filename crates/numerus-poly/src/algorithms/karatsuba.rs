//! Karatsuba multiplication algorithm.
//!
//! Splits the longer operand at `k = floor(deg/2) + 1` and recovers the
//! middle product from one multiplication of the folded halves. Sub-products
//! are dispatched through [`mul_into`], so the installed [`Multiplier`]
//! decides how each of them is computed.

use numerus_rings::Ring;

use super::multiply::{mul_into, Multiplier};

/// `pr[i] += p[i]` for every `i < p.len()`.
fn add_to<T: Ring>(pr: &mut [T], p: &[T]) {
    for (r, x) in pr.iter_mut().zip(p) {
        *r = r.clone() + x.clone();
    }
}

/// `pr[i] -= p[i]` for every `i < p.len()`.
fn sub_from<T: Ring>(pr: &mut [T], p: &[T]) {
    for (r, x) in pr.iter_mut().zip(p) {
        *r = r.clone() - x.clone();
    }
}

/// Karatsuba multiplication: O(l1 * l2^0.59).
///
/// Same contract as [`Multiplier::mul_impl`]: all slices non-empty and
/// `p2.len() <= p1.len() <= pr.len() <= p1.len() + p2.len() - 1`.
pub fn karatsuba<T: Ring, M: Multiplier<T> + ?Sized>(m: &M, pr: &mut [T], p1: &[T], p2: &[T]) {
    let zero = p1[0].zero_of();
    let (n1, n2, nr) = (p1.len(), p2.len(), pr.len());
    // k > deg(p1) - k >= 0
    let k = (n1 - 1) / 2 + 1;

    if n2 == 1 {
        for (r, x) in pr.iter_mut().zip(p1) {
            *r = x.clone() * p2[0].clone();
        }
    } else if n2 <= k {
        // p2 fits in the low half: no high x high term.
        let mut mid = vec![zero.clone(); nr - k];
        mul_into(m, &mut mid, &p1[k..], p2);

        let low = nr.min(n2 + k - 1);
        mul_into(m, &mut pr[..low], &p1[..k], p2);
        pr[low..].fill(zero);
        add_to(&mut pr[k..], &mid);
    } else {
        let mut s1 = p1[..k].to_vec();
        add_to(&mut s1, &p1[k..]);
        let mut s2 = p2[..k].to_vec();
        add_to(&mut s2, &p2[k..]);

        let mid_len = (nr - k).min(2 * k - 1);
        let mut mid = vec![zero.clone(); mid_len];
        mul_into(m, &mut mid, &s1, &s2);

        let high_len = mid_len.min(n1 + n2 - 2 * k - 1);
        let mut high = vec![zero.clone(); high_len];
        mul_into(m, &mut high, &p1[k..], &p2[k..]);

        mul_into(m, &mut pr[..2 * k - 1], &p1[..k], &p2[..k]);
        pr[2 * k - 1..].fill(zero);

        sub_from(&mut mid, &pr[..mid_len]);
        sub_from(&mut mid, &high);
        add_to(&mut pr[k..], &mid);
        if nr > 2 * k {
            add_to(&mut pr[2 * k..], &high);
        }
    }
}
