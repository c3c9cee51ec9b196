use std::cmp::Ordering;

use rand::Rng;

use super::{partition, pivot};

/// Returns the `k`-th smallest element of `data` (zero-indexed), permuting
/// `data` along the way.
///
/// Each step partitions around a uniformly random pivot and keeps only the
/// side that still contains `k`, so the loop replaces tail recursion and the
/// expected total work is linear. The caller validates `k < data.len()`.
pub fn select<T, R>(data: &mut [T], k: usize, rng: &mut R) -> T
where
    T: Ord + Copy,
    R: Rng + ?Sized,
{
    debug_assert!(k < data.len());

    let mut left = 0;
    let mut right = data.len() - 1;

    loop {
        if left == right {
            return data[left];
        }

        let pivot_idx = pivot::random_pivot(rng, left, right);
        let p = partition::partition_lomuto(data, left, right, pivot_idx);

        match k.cmp(&p) {
            Ordering::Equal => return data[k],
            Ordering::Less => right = p - 1,
            Ordering::Greater => left = p + 1,
        }
        debug_assert!(left <= k && k <= right);
    }
}
