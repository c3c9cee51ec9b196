//! The two partition schemes. They stay separate: the single-pass scheme
//! places the pivot with a strict `<` split and is what selection relies on,
//! while the crossing-pointer scheme depends on the sentinels left by
//! median-of-three and stops on equal keys so runs of duplicates split evenly.

/// Single-pass (Lomuto) partition of `data[left..=right]` around
/// `data[pivot_idx]`.
///
/// Returns the pivot's final index `p`: everything in `[left, p)` is strictly
/// less than the pivot and everything in `(p, right]` is greater or equal.
pub fn partition_lomuto<T: Ord + Copy>(
    data: &mut [T],
    left: usize,
    right: usize,
    pivot_idx: usize,
) -> usize {
    debug_assert!(left <= pivot_idx && pivot_idx <= right);

    let pivot = data[pivot_idx];
    data.swap(pivot_idx, right);

    let mut store = left;
    for i in left..right {
        if data[i] < pivot {
            data.swap(store, i);
            store += 1;
        }
    }

    data.swap(store, right);
    store
}

/// Crossing-pointer (Hoare-style) partition of `data[left..=right]`.
///
/// The pivot must already sit at `right - 1` with
/// `data[left] <= pivot <= data[right]`, as `median_of_three` leaves it. Those
/// two ends act as sentinels for the inner scans, so neither pointer needs a
/// bounds check. Returns the pivot's final index, always in
/// `[left + 1, right - 1]`.
pub fn partition_crossing<T: Ord + Copy>(data: &mut [T], left: usize, right: usize) -> usize {
    debug_assert!(left + 2 <= right);
    debug_assert!(data[left] <= data[right - 1] && data[right - 1] <= data[right]);

    let pivot = data[right - 1];
    let mut i = left;
    let mut j = right - 1;

    loop {
        i += 1;
        while data[i] < pivot {
            i += 1;
        }

        j -= 1;
        while data[j] > pivot {
            j -= 1;
        }

        if i >= j {
            break;
        }
        data.swap(i, j);
    }

    data.swap(i, right - 1);
    i
}
