//! Initial partition of the suffix array into prefix-equal buckets.
//!
//! Byte alphabets are bucketed by histogram over the `prefix`-byte keys;
//! wide alphabets fill the array with the identity permutation and sort
//! it by zero-padded symbol windows. Either way the output is a stable
//! arrangement of the interior positions into buckets ordered by their
//! `prefix`-long window, with positions inside a bucket in ascending
//! text order, plus one initial group per non-empty bucket.

use super::index::{Rank, SaIndex, Symbol};
use super::types::{extract, prefix_eq, prefix_then_pos, safe_extract, Phase1Group};

/// Write the preliminary ordering into `sa` and return the initial
/// group list. Slots 0 and 1 receive the two sentinel suffixes; the
/// groups cover `[2, n)` left to right.
pub fn sort_by_prefix<T, I, B>(text: &[T], sa: &mut [I], prefix: usize) -> Vec<Phase1Group<B>>
where
    T: Symbol,
    I: SaIndex,
    B: Rank,
{
    let n = text.len();
    debug_assert_eq!(sa.len(), n);
    debug_assert!(prefix >= 1 && prefix <= 3);

    let mut groups = Vec::new();
    if T::WIDTH == 1 {
        if prefix == 1 {
            byte_buckets(text, sa, &mut groups);
        } else {
            wide_byte_buckets(text, sa, prefix, &mut groups);
        }
    } else {
        comparison_buckets(text, sa, prefix, &mut groups);
    }

    sa[0] = I::from_index(n - 1);
    sa[1] = I::from_index(0);
    groups
}

fn byte_buckets<T, I, B>(text: &[T], sa: &mut [I], groups: &mut Vec<Phase1Group<B>>)
where
    T: Symbol,
    I: SaIndex,
    B: Rank,
{
    let n = text.len();
    let mut borders = [0usize; 256];
    for &c in text {
        borders[c.to_usize()] += 1;
    }

    let mut left_border = 2;
    for b in 1..256 {
        let gsize = borders[b];
        borders[b] = left_border;
        if gsize > 0 {
            groups.push(Phase1Group::initial(left_border, gsize));
        }
        left_border += gsize;
    }

    // the two sentinel occurrences of symbol 0 land in the reserved
    // slots and are overwritten by the caller
    borders[0] = 0;
    for i in 0..n {
        let c = text[i].to_usize();
        sa[borders[c]] = I::from_index(i);
        borders[c] += 1;
    }
}

fn wide_byte_buckets<T, I, B>(
    text: &[T],
    sa: &mut [I],
    prefix: usize,
    groups: &mut Vec<Phase1Group<B>>,
) where
    T: Symbol,
    I: SaIndex,
    B: Rank,
{
    let n = text.len();
    let buckets = 1 << (8 * prefix);
    let mut borders = vec![0usize; buckets];

    // the tail of the text needs zero padding; everything before it
    // can use the unchecked window
    let stop = std::cmp::max(1, n.saturating_sub(prefix + 1));
    for i in 1..stop {
        borders[extract(text, i, prefix)] += 1;
    }
    for i in stop..n - 1 {
        borders[safe_extract(text, i, prefix)] += 1;
    }

    // interior symbols are nonzero, so every occupied bucket starts
    // with a key whose first byte is at least 1
    let mut left_border = 2;
    for b in (buckets >> 8)..buckets {
        let gsize = borders[b];
        borders[b] = left_border;
        if gsize > 0 {
            groups.push(Phase1Group::initial(left_border, gsize));
        }
        left_border += gsize;
    }

    for i in 1..stop {
        let key = extract(text, i, prefix);
        sa[borders[key]] = I::flagged_if(text[i - 1] < text[i], i);
        borders[key] += 1;
    }
    for i in stop..n - 1 {
        let key = safe_extract(text, i, prefix);
        sa[borders[key]] = I::flagged_if(text[i - 1] < text[i], i);
        borders[key] += 1;
    }
}

fn comparison_buckets<T, I, B>(
    text: &[T],
    sa: &mut [I],
    prefix: usize,
    groups: &mut Vec<Phase1Group<B>>,
) where
    T: Symbol,
    I: SaIndex,
    B: Rank,
{
    let n = text.len();
    for i in 0..n {
        sa[i] = I::from_index(i);
    }
    sa.sort_unstable_by(|&a, &b| prefix_then_pos(text, a.index(), b.index(), prefix));

    // the sentinel suffixes sort below every interior position and end
    // up in the two reserved slots on their own
    let mut left_border = 2;
    let mut gsize = 1;
    for i in 2..n - 1 {
        if prefix_eq(text, sa[i].index(), sa[i + 1].index(), prefix) {
            gsize += 1;
        } else {
            groups.push(Phase1Group::initial(left_border, gsize));
            left_border = i + 1;
            gsize = 1;
        }
    }
    groups.push(Phase1Group::initial(left_border, gsize));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::random;
    use std::cmp::Ordering;

    fn bucketed<T: Symbol>(text: &[T], prefix: usize) -> (Vec<u32>, Vec<Phase1Group<u32>>) {
        let mut sa = vec![0u32; text.len()];
        let groups = sort_by_prefix::<_, _, u32>(text, &mut sa, prefix);
        (sa, groups)
    }

    fn assert_bucket_order<T: Symbol>(text: &[T], sa: &[u32], prefix: usize) {
        for i in 3..sa.len() {
            let (a, b) = (sa[i - 1].index(), sa[i].index());
            assert_ne!(
                prefix_then_pos(text, a, b, prefix),
                Ordering::Greater,
                "window order violated at slot {}",
                i
            );
        }
    }

    fn with_sentinels(interior: &[u8]) -> Vec<u8> {
        let mut text = vec![0];
        text.extend_from_slice(interior);
        text.push(0);
        text
    }

    #[test]
    fn windows_are_sorted_for_every_prefix() {
        for _ in 0..50 {
            let len = 3 + random::<usize>() % 120;
            let interior: Vec<u8> = (0..len).map(|_| 1 + random::<u8>() % 4).collect();
            let text = with_sentinels(&interior);
            for prefix in 1..=3 {
                let (sa, groups) = bucketed(&text, prefix);
                assert_eq!(sa[0].index(), text.len() - 1);
                assert_eq!(sa[1].index(), 0);
                assert_bucket_order(&text, &sa, prefix);
                let total: usize = groups.iter().map(|g| g.size as usize).sum();
                assert_eq!(total, text.len() - 2);
                assert_eq!(groups[0].start, 2);
            }
        }
    }

    #[test]
    fn groups_are_adjacent_and_prefix_equal() {
        let text = with_sentinels(b"mississippi");
        for prefix in 1..=3 {
            let (sa, groups) = bucketed(&text, prefix);
            let mut expected_start = 2;
            for g in &groups {
                assert_eq!(g.start, expected_start);
                assert_eq!(g.lyndon, 1);
                assert!(g.resolvable);
                assert!(!g.finalized);
                expected_start += g.size;
                for w in sa[g.start as usize..expected_start as usize].windows(2) {
                    assert!(prefix_eq(&text, w[0].index(), w[1].index(), prefix));
                }
            }
        }
    }

    #[test]
    fn flags_mark_ascents_for_wide_prefixes() {
        let text = with_sentinels(b"banana");
        for prefix in 2..=3 {
            let (sa, _) = bucketed(&text, prefix);
            for &e in &sa[2..] {
                let i = e.index();
                assert_eq!(e.is_flagged(), text[i - 1] < text[i]);
            }
        }
    }

    #[test]
    fn wide_alphabet_falls_back_to_comparison() {
        let text: Vec<u32> = vec![0, 7, 7, 5, 5, 0];
        for prefix in 1..=3 {
            let (sa, groups) = bucketed(&text, prefix);
            assert_eq!(sa[0].index(), 5);
            assert_eq!(sa[1].index(), 0);
            assert_bucket_order(&text, &sa, prefix);
            let total: usize = groups.iter().map(|g| g.size as usize).sum();
            assert_eq!(total, 4);
        }
    }
}
