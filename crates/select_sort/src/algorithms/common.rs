/// Insertion sort over the whole slice.
///
/// Used as the base case for short segments, so the caller passes the
/// segment `data[left..=right]` rather than the full buffer.
#[inline]
pub fn insertion_sort<T: Ord + Copy>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for i in 1..len {
        let key = data[i];
        let mut j = i;
        while j > 0 {
            let prev = data[j - 1];
            if prev <= key {
                break;
            }
            data[j] = prev;
            j -= 1;
        }
        data[j] = key;
    }
}

/// Returns `true` when `data` is non-decreasing. Stops at the first descent.
#[inline]
pub fn is_sorted_non_decreasing<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn insertion_sort_matches_std() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for len in 0..=40 {
            let mut data = (0..len)
                .map(|_| rng.random_range(0..16_i32))
                .collect::<Vec<_>>();
            let mut expected = data.clone();
            expected.sort();
            insertion_sort(&mut data);
            assert_eq!(data, expected, "len={len}");
        }
    }

    #[test]
    fn insertion_sort_touches_only_its_segment() {
        let mut data = [9, 8, 7, 3, 1, 2, 0, -1];
        insertion_sort(&mut data[2..=5]);
        assert_eq!(data, [9, 8, 1, 2, 3, 7, 0, -1]);
    }

    #[test]
    fn sortedness_probe() {
        assert!(is_sorted_non_decreasing::<u64>(&[]));
        assert!(is_sorted_non_decreasing(&[4]));
        assert!(is_sorted_non_decreasing(&[1, 1, 2, 2, 3]));
        assert!(!is_sorted_non_decreasing(&[1, 3, 2]));
        assert!(!is_sorted_non_decreasing(&[2, 1, 1, 1]));
    }
}
