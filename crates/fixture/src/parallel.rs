//! Parallel fixture generation.

use rayon::prelude::*;
use tracing::debug;

use crate::range::DateRange;
use crate::record::FixtureRecord;

/// Generates every fixture record of `range`, splitting the outer dates
/// across the rayon thread pool.
///
/// Each row (one `d1`, every `d2 >= d1`) is built independently. Rows are
/// collected by index, so the result is in the same canonical order as
/// [`DateRange::fixtures`].
pub fn generate_parallel(range: DateRange) -> Vec<FixtureRecord> {
    let outer: Vec<_> = range.dates().collect();
    debug!(
        rows = outer.len(),
        threads = rayon::current_num_threads(),
        "generating fixture rows in parallel"
    );

    let rows: Vec<Vec<FixtureRecord>> = outer
        .par_iter()
        .map(|&d1| {
            range
                .starting_at(d1)
                .dates()
                .map(|d2| FixtureRecord::compute(d1, d2))
                .collect()
        })
        .collect();

    let mut records = Vec::with_capacity(range.pair_count() as usize);
    records.extend(rows.into_iter().flatten());
    records
}
