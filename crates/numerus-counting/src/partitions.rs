//! Integer partitions.

use numerus_rings::Ring;

/// `p(i)` for `i < n`, the number of partitions of `i`.
///
/// Euler's pentagonal number theorem gives
/// `p(i) = sum_{j>=1} (-1)^(j+1) (p(i - j(3j-1)/2) + p(i - j(3j+1)/2))`.
/// `O(n sqrt(n))`.
pub fn partitions_p<T: Ring>(n: usize, id: &T) -> Vec<T> {
    let mut p = vec![id.zero_of(); n];
    if n == 0 {
        return p;
    }
    p[0] = id.clone();
    for i in 1..n {
        let mut acc = id.zero_of();
        for j in 1.. {
            let g1 = j * (3 * j - 1) / 2;
            if g1 > i {
                break;
            }
            let mut term = p[i - g1].clone();
            let g2 = g1 + j;
            if g2 <= i {
                term = term + p[i - g2].clone();
            }
            acc = if j % 2 == 1 { acc + term } else { acc - term };
        }
        p[i] = acc;
    }
    p
}
