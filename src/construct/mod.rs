//! Two-phase suffix array construction over Lyndon-style groups.
//!
//! The engine buckets the interior positions by a short prefix, refines
//! the buckets into groups of suffixes with a known common prefix
//! (phase 1), and finalizes the groups left to right by sorting on the
//! ranks of successor suffixes (phase 2). The three entry points differ
//! only in the initial sort prefix, which is a tuning knob rather than a
//! semantic choice.

mod bucket;
pub(crate) mod index;
mod phase1;
mod phase2;
pub(crate) mod sort;
mod types;

pub use index::{Rank, SaIndex, Symbol, U40};
pub use sort::{KeyValue, LsdSort, MsdSort, Sorter};
pub use types::{Phase1Group, Phase2Group};

use crate::stats::{NoStats, StatsSink, Timer};

/// Build the suffix array of `text` in place, bucketing by single
/// symbols first.
///
/// `text` must carry the sentinel value 0 at both ends and nowhere
/// else, and `sa` must have the same length. On return `sa[i]` is the
/// starting position of the i-th smallest suffix, with `sa[0] = n - 1`
/// and `sa[1] = 0`.
pub fn build_ds1<T: Symbol, I: SaIndex>(text: &[T], sa: &mut [I]) {
    build_with::<T, I, MsdSort>(text, sa, 1, &mut NoStats);
}

/// Like [`build_ds1`], bucketing by 2-symbol prefixes.
pub fn build_ds2<T: Symbol, I: SaIndex>(text: &[T], sa: &mut [I]) {
    build_with::<T, I, MsdSort>(text, sa, 2, &mut NoStats);
}

/// Like [`build_ds1`], bucketing by 3-symbol prefixes.
pub fn build_ds3<T: Symbol, I: SaIndex>(text: &[T], sa: &mut [I]) {
    build_with::<T, I, MsdSort>(text, sa, 3, &mut NoStats);
}

/// Engine entry with an explicit sorter, sort prefix and stats sink.
pub fn build_with<T, I, S>(text: &[T], sa: &mut [I], prefix: usize, stats: &mut dyn StatsSink)
where
    T: Symbol,
    I: SaIndex,
    S: Sorter,
{
    let n = text.len();
    assert_eq!(sa.len(), n, "suffix array buffer must match the text");
    assert!(n >= 3, "text must hold both sentinels and a symbol");
    assert!(
        n <= I::MAX_TEXT_LEN,
        "text too long for the chosen suffix array width"
    );
    assert!(prefix >= 1 && prefix <= 3, "sort prefix must be 1, 2 or 3");
    debug_assert!(
        text[0] == T::zero() && text[n - 1] == T::zero(),
        "sentinels missing"
    );
    debug_assert!(
        text[1..n - 1].iter().all(|&c| c != T::zero()),
        "interior position holds the sentinel value"
    );

    // the rank buffer width only depends on the text length
    if n <= <u32 as SaIndex>::MAX_TEXT_LEN {
        run::<T, I, u32, S>(text, sa, prefix, stats);
    } else {
        run::<T, I, u64, S>(text, sa, prefix, stats);
    }
}

fn run<T, I, B, S>(text: &[T], sa: &mut [I], prefix: usize, stats: &mut dyn StatsSink)
where
    T: Symbol,
    I: SaIndex,
    B: Rank,
    S: Sorter,
{
    let n = text.len();

    let mut timer = Timer::start();
    let buckets = bucket::sort_by_prefix::<T, I, B>(text, sa, prefix);
    stats.record("initial_buckets", timer.elapsed_millis());

    timer = Timer::start();
    let mut isa = vec![B::from_rank(0); n];
    let groups = phase1::refine_groups::<I, B, S>(sa, &mut isa, buckets);
    stats.record("phase1", timer.elapsed_millis());

    timer = Timer::start();
    phase2::finalize_groups::<I, B, S>(sa, &mut isa, &groups);
    stats.record("phase2", timer.elapsed_millis());
}
