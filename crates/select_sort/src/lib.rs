mod algorithms;
mod error;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use error::SelectError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Algorithm {
    Quickselect,
    Quicksort,
}

pub const ALL_ALGORITHMS: [Algorithm; 2] = [Algorithm::Quickselect, Algorithm::Quicksort];

pub fn all_algorithms() -> &'static [Algorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: Algorithm) -> &'static str {
    match algo {
        Algorithm::Quickselect => "quickselect",
        Algorithm::Quicksort => "quicksort",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    /// Segments with at most this many elements are finished by insertion sort.
    pub insertion_max_len: usize,
    pub report_sizes: [usize; 5],
    pub report_trials: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_max_len: 17,
    report_sizes: [10_000, 20_000, 40_000, 80_000, 160_000],
    report_trials: 20,
};

/// Pivot randomness shared across selection calls.
///
/// Building one context and reusing it avoids reseeding from the OS on every
/// call; `quickselect` still creates a fresh one per call for callers that
/// don't care.
#[derive(Clone, Debug)]
pub struct SelectContext {
    rng: StdRng,
}

impl Default for SelectContext {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl SelectContext {
    /// Deterministic context, for reproducible benchmarks and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

/// Returns the `k`-th smallest element of `data` (zero-indexed).
///
/// `data` is reordered so that the answer ends up at index `k`, but is not
/// sorted. Fails with [`SelectError::InvalidArgument`] before touching `data`
/// when `k >= data.len()`.
pub fn quickselect<T: Ord + Copy>(data: &mut [T], k: usize) -> Result<T, SelectError> {
    let mut ctx = SelectContext::default();
    quickselect_with_ctx(data, k, &mut ctx)
}

pub fn quickselect_with_ctx<T: Ord + Copy>(
    data: &mut [T],
    k: usize,
    ctx: &mut SelectContext,
) -> Result<T, SelectError> {
    quickselect_with_rng(data, k, ctx.rng())
}

pub fn quickselect_with_rng<T, R>(data: &mut [T], k: usize, rng: &mut R) -> Result<T, SelectError>
where
    T: Ord + Copy,
    R: Rng + ?Sized,
{
    if k >= data.len() {
        return Err(SelectError::out_of_range(k as i128, data.len()));
    }
    Ok(algorithms::quickselect::select(data, k, rng))
}

/// [`quickselect`] for callers holding a signed rank; negative ranks are
/// rejected the same way as ranks past the end.
pub fn quickselect_signed<T: Ord + Copy>(data: &mut [T], k: i64) -> Result<T, SelectError> {
    match usize::try_from(k) {
        Ok(k) => quickselect(data, k),
        Err(_) => Err(SelectError::out_of_range(k as i128, data.len())),
    }
}

/// Sorts `data` in ascending order, in place. Not stable.
pub fn quicksort<T: Ord + Copy>(data: &mut [T]) {
    algorithms::quicksort::sort(data);
}
