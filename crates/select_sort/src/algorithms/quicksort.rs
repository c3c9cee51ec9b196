use crate::TUNED_PARAMS;

use super::{common, partition, pivot};

/// Inclusive index range `[left, right]` waiting to be sorted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Segment {
    left: usize,
    right: usize,
}

impl Segment {
    #[inline]
    fn new(left: usize, right: usize) -> Self {
        debug_assert!(left <= right);
        Self { left, right }
    }

    #[inline]
    fn len(self) -> usize {
        self.right - self.left + 1
    }
}

pub fn sort<T: Ord + Copy>(data: &mut [T]) {
    sort_tracking_depth(data);
}

/// Sorts `data` and returns the deepest the pending-segment stack got.
///
/// The larger half of every partition is pushed first so the smaller half is
/// popped next; that keeps the stack at `O(log n)` segments no matter how
/// lopsided the pivots are.
pub fn sort_tracking_depth<T: Ord + Copy>(data: &mut [T]) -> usize {
    if data.len() <= 1 {
        return 0;
    }

    let mut stack = vec![Segment::new(0, data.len() - 1)];
    let mut max_depth = stack.len();

    while let Some(seg) = stack.pop() {
        let Segment { left, right } = seg;

        if seg.len() <= TUNED_PARAMS.insertion_max_len {
            common::insertion_sort(&mut data[left..=right]);
            continue;
        }

        if common::is_sorted_non_decreasing(&data[left..=right]) {
            continue;
        }

        pivot::median_of_three(data, left, right);
        let p = partition::partition_crossing(data, left, right);

        // `p` is strictly inside the segment, so neither side is empty.
        let low = Segment::new(left, p - 1);
        let high = Segment::new(p + 1, right);
        if low.len() < high.len() {
            stack.push(high);
            stack.push(low);
        } else {
            stack.push(low);
            stack.push(high);
        }
        max_depth = max_depth.max(stack.len());
    }

    max_depth
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn floor_log2(n: usize) -> usize {
        (usize::BITS - 1 - n.leading_zeros()) as usize
    }

    fn assert_sorts_like_std(data: &[i64]) {
        let mut actual = data.to_vec();
        sort(&mut actual);
        let mut expected = data.to_vec();
        expected.sort_unstable();
        assert_eq!(actual, expected, "input_len={}", data.len());
    }

    #[test]
    fn segment_len_is_inclusive() {
        assert_eq!(Segment::new(3, 3).len(), 1);
        assert_eq!(Segment::new(0, 16).len(), 17);
    }

    #[test]
    fn cutoff_boundary_sizes() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for len in [16_usize, 17, 18, 19, 34, 35, 36] {
            let data = (0..len)
                .map(|_| rng.random_range(-50..50))
                .collect::<Vec<i64>>();
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn patterned_inputs() {
        let n = 5_000_i64;
        let ascending = (0..n).collect::<Vec<_>>();
        let descending = (0..n).rev().collect::<Vec<_>>();
        let organ_pipe = (0..n / 2).chain((0..n / 2).rev()).collect::<Vec<_>>();
        let saw = (0..n).map(|i| i % 37).collect::<Vec<_>>();
        let equal = vec![11_i64; n as usize];
        let two_values = (0..n).map(|i| (i * 7919) % 2).collect::<Vec<_>>();

        for case in [ascending, descending, organ_pipe, saw, equal, two_values] {
            assert_sorts_like_std(&case);
        }
    }

    #[test]
    fn stack_depth_is_logarithmic() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[1_000_usize, 10_000, 100_000] {
            let mut random = (0..size)
                .map(|_| rng.random::<i64>())
                .collect::<Vec<_>>();
            let depth = sort_tracking_depth(&mut random);
            assert!(depth <= floor_log2(size) + 2, "size={size} depth={depth}");

            let mut few = (0..size)
                .map(|_| rng.random_range(0..4_i64))
                .collect::<Vec<_>>();
            let depth = sort_tracking_depth(&mut few);
            assert!(depth <= floor_log2(size) + 2, "size={size} depth={depth}");
        }
    }

    #[test]
    fn sorted_input_skips_partitioning() {
        let mut data = (0..1_000_i64).collect::<Vec<_>>();
        assert_eq!(sort_tracking_depth(&mut data), 1);
    }

    #[test]
    fn trivial_inputs_never_touch_the_stack() {
        assert_eq!(sort_tracking_depth::<i64>(&mut []), 0);
        assert_eq!(sort_tracking_depth(&mut [1_i64]), 0);
    }
}
