//! Least-significant-digit radix sort, 8 bits per pass.

use super::super::index::Rank;
use super::{counting_pass, significant_bytes, KeyValue, Sorter};

/// LSD radix sorter. Naturally stable, so both entry points share one
/// implementation.
pub struct LsdSort;

impl Sorter for LsdSort {
    fn sort_stable<B: Rank>(
        records: &mut [KeyValue<B>],
        scratch: &mut [KeyValue<B>],
        increasing: bool,
        key_bound: usize,
    ) {
        lsd_sort(records, scratch, increasing, key_bound);
    }

    fn sort_unstable<B: Rank>(
        records: &mut [KeyValue<B>],
        scratch: &mut [KeyValue<B>],
        increasing: bool,
        key_bound: usize,
    ) {
        lsd_sort(records, scratch, increasing, key_bound);
    }
}

fn lsd_sort<B: Rank>(
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

    // ping-pong between the two buffers; every direction of a pass is
    // stable, so the digit sequence low-to-high yields a stable total
    // order
    let mut in_records = true;
    for pass in 0..significant_bytes(key_bound) {
        if in_records {
            counting_pass(&records[..n], &mut scratch[..n], 8 * pass, increasing);
        } else {
            counting_pass(&scratch[..n], &mut records[..n], 8 * pass, increasing);
        }
        in_records = !in_records;
    }
    if !in_records {
        records[..n].copy_from_slice(&scratch[..n]);
    }
}
