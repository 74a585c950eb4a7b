//! Most-significant-digit radix sort, 8 bits per level, falling back
//! to insertion sort on short segments.

use super::super::index::Rank;
use super::{insertion_sort, prefix_sums, significant_bytes, KeyValue, Sorter};

const CUTOFF: usize = 32;

/// MSD radix sorter. The counting scatter is stable at every level, so
/// both entry points share one implementation.
pub struct MsdSort;

impl Sorter for MsdSort {
    fn sort_stable<B: Rank>(
        records: &mut [KeyValue<B>],
        scratch: &mut [KeyValue<B>],
        increasing: bool,
        key_bound: usize,
    ) {
        msd_sort(records, scratch, increasing, key_bound);
    }

    fn sort_unstable<B: Rank>(
        records: &mut [KeyValue<B>],
        scratch: &mut [KeyValue<B>],
        increasing: bool,
        key_bound: usize,
    ) {
        msd_sort(records, scratch, increasing, key_bound);
    }
}

fn msd_sort<B: Rank>(
    records: &mut [KeyValue<B>],
    scratch: &mut [KeyValue<B>],
    increasing: bool,
    key_bound: usize,
) {
    let n = records.len();
    if n < 2 {
        return;
    }
    debug_assert!(scratch.len() >= n);
    sort_level(
        records,
        &mut scratch[..n],
        significant_bytes(key_bound) - 1,
        increasing,
    );
}

fn sort_level<B: Rank>(
    records: &mut [KeyValue<B>],
    scratch: &mut [KeyValue<B>],
    level: usize,
    increasing: bool,
) {
    if records.len() <= CUTOFF {
        // segments at a deeper level share all digits above it, so the
        // full-key comparison is equivalent to the remaining digits
        insertion_sort(records, increasing);
        return;
    }

    let shift = 8 * level;
    let mut counts = [0usize; 256];
    for r in records.iter() {
        counts[r.key.rank() >> shift & 0xff] += 1;
    }

    let mut borders = counts;
    prefix_sums(&mut borders, increasing);
    let ends = {
        let mut ends = borders;
        for (e, c) in ends.iter_mut().zip(counts.iter()) {
            *e += c;
        }
        ends
    };

    let mut write = borders;
    for r in records.iter() {
        let d = r.key.rank() >> shift & 0xff;
        scratch[write[d]] = *r;
        write[d] += 1;
    }
    records.copy_from_slice(scratch);

    if level == 0 {
        return;
    }
    for d in 0..256 {
        let (a, b) = (borders[d], ends[d]);
        if b - a > 1 {
            sort_level(&mut records[a..b], &mut scratch[a..b], level - 1, increasing);
        }
    }
}
