//! Wall-clock comparison of selecting one order statistic against sorting the
//! whole buffer, with CSV and plain-text table output.

use std::io::{self, Write};
use std::time::Instant;

use rand::Rng;
use select_sort::{SelectContext, quickselect_with_ctx, quicksort};

use crate::shuffled_permutation;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingRow {
    pub size: usize,
    /// Mean over all selection trials.
    pub quickselect_secs: f64,
    /// A single full sort.
    pub quicksort_secs: f64,
}

/// Times `trials` selections of a random rank and one full sort for every size.
///
/// Every run works on a fresh copy of the same shuffled permutation of
/// `0..size`. One line of progress per size is written to `progress`.
pub fn benchmark_select_vs_sort<R, W>(
    sizes: &[usize],
    trials: usize,
    rng: &mut R,
    progress: &mut W,
) -> io::Result<Vec<TimingRow>>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    let trials = trials.max(1);
    let mut ctx = SelectContext::with_seed(rng.random());
    let mut rows = Vec::with_capacity(sizes.len());

    for &size in sizes.iter().filter(|&&size| size > 0) {
        writeln!(progress, "array size {size}...")?;
        let base = shuffled_permutation(rng, size);

        let mut select_total = 0.0;
        for _ in 0..trials {
            let k = rng.random_range(0..size);
            let mut data = base.clone();
            let start = Instant::now();
            let value = quickselect_with_ctx(&mut data, k, &mut ctx);
            select_total += start.elapsed().as_secs_f64();
            debug_assert_eq!(value, Ok(k as u64));
        }

        let mut data = base.clone();
        let start = Instant::now();
        quicksort(&mut data);
        let quicksort_secs = start.elapsed().as_secs_f64();

        let row = TimingRow {
            size,
            quickselect_secs: select_total / trials as f64,
            quicksort_secs,
        };
        writeln!(progress, "quickselect: {:.6} seconds", row.quickselect_secs)?;
        writeln!(progress, "quicksort: {:.6} seconds", row.quicksort_secs)?;
        rows.push(row);
    }

    Ok(rows)
}

pub fn write_csv<W: Write + ?Sized>(rows: &[TimingRow], out: &mut W) -> io::Result<()> {
    writeln!(out, "Size,QuickSelect,QuickSort")?;
    for row in rows {
        writeln!(
            out,
            "{},{},{}",
            row.size, row.quickselect_secs, row.quicksort_secs
        )?;
    }
    Ok(())
}

pub fn write_summary<W: Write + ?Sized>(rows: &[TimingRow], out: &mut W) -> io::Result<()> {
    writeln!(out, "Results summary:")?;
    writeln!(out, "Size, QuickSelect Time (s), QuickSort Time (s)")?;
    writeln!(out, "{}", "-".repeat(48))?;
    for row in rows {
        writeln!(
            out,
            "{:>12}, {:>20.6}, {:>18.6}",
            group_thousands(row.size),
            row.quickselect_secs,
            row.quicksort_secs
        )?;
    }
    Ok(())
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
