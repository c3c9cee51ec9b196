use rand::Rng;

/// Draws a pivot index uniformly from `[left, right]`.
#[inline]
pub fn random_pivot<R: Rng + ?Sized>(rng: &mut R, left: usize, right: usize) -> usize {
    debug_assert!(left <= right);
    rng.random_range(left..=right)
}

/// Orders `data[left]`, `data[mid]` and `data[right]` in place, then parks the
/// median at `right - 1` and returns that index.
///
/// Afterwards `data[left] <= data[right - 1] <= data[right]`, which gives the
/// crossing-pointer partition its sentinels on both ends. Needs at least three
/// elements in the segment.
#[inline]
pub fn median_of_three<T: Ord>(data: &mut [T], left: usize, right: usize) -> usize {
    debug_assert!(left + 2 <= right);
    let mid = left + (right - left) / 2;

    if data[left] > data[mid] {
        data.swap(left, mid);
    }
    if data[left] > data[right] {
        data.swap(left, right);
    }
    if data[mid] > data[right] {
        data.swap(mid, right);
    }

    data.swap(mid, right - 1);
    right - 1
}
