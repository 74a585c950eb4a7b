//! Phase 2: left-to-right finalization of the refined groups.
//!
//! Members of a group agree on their first `lyndon` symbols, so their
//! relative order is the order of their successor suffixes at distance
//! `lyndon`. Successors either sit in an earlier block (their ranks
//! are final by now) or chain through the group itself in adjacent
//! slots. The chains are peeled tail first: members are partitioned by
//! their distance from the chain tail, and each distance class is
//! sorted by the successor rank after the previous class has been
//! written, so every fetched rank is final.

use super::index::{to_rank_repr, to_sa_repr, Rank, SaIndex};
use super::sort::{insertion_sort, KeyValue, Sorter};
use super::types::Phase2Group;

/// Chain-count capacity of the shared border buffer; longer chains take
/// a side allocation scoped to their group.
const SUBGROUP_LIMIT: usize = 256 * 1024;

/// Finalize every group interval in `sa` and complete `isa` to the
/// inverse permutation for all non-type-S positions. No entry carries
/// the marker afterwards.
pub fn finalize_groups<I, B, S>(sa: &mut [I], isa: &mut [B], groups: &[Phase2Group<B>])
where
    I: SaIndex,
    B: Rank,
    S: Sorter,
{
    let n = sa.len();
    let max_group_size = groups.iter().map(|g| g.size.rank()).max().unwrap_or(0);

    // one arena for the whole pass
    let mut shared_borders = vec![0usize; SUBGROUP_LIMIT];
    let mut grouped = vec![KeyValue::<B>::zero(); max_group_size + 1];
    let mut scratch = vec![KeyValue::<B>::zero(); max_group_size + 1];
    let mut sub_size = vec![0usize; max_group_size + 1];
    let mut sub_id = vec![0usize; max_group_size + 1];
    let mut overflow: Vec<usize> = Vec::new();

    let mut left = 2;
    for g in groups {
        debug_assert_eq!(left, g.start.rank(), "groups must be contiguous");
        let z = g.size.rank();
        if z == 1 {
            let e = sa[left].unflagged();
            sa[left] = e;
            isa[e.index()] = B::from_rank(left);
            left += 1;
            continue;
        }
        let ell = g.lyndon.rank();

        // distance of every slot from the tail of its chain, scanning
        // right to left; non-chained slots are their own tails
        for s in sub_size[..z + 1].iter_mut() {
            *s = 0;
        }
        sub_id[z - 1] = 0;
        sub_size[0] = 1;
        for i in (1..z).rev() {
            sub_id[i - 1] = if sa[left + i].index() == sa[left + i - 1].index() + ell {
                sub_id[i] + 1
            } else {
                0
            };
            sub_size[sub_id[i - 1]] += 1;
        }

        let mut sub_count = 0;
        while sub_size[sub_count] > 0 {
            sub_count += 1;
        }

        let borders: &mut [usize] = if sub_count <= SUBGROUP_LIMIT {
            &mut shared_borders[..sub_count]
        } else {
            overflow.clear();
            overflow.resize(sub_count, 0);
            &mut overflow[..]
        };
        let mut acc = 0;
        for (border, size) in borders.iter_mut().zip(sub_size.iter()) {
            *border = acc;
            acc += size;
        }

        // stable partition into distance classes; ties keep their slot
        // order, which the class sort below relies on
        for i in 0..z {
            let slot = borders[sub_id[i]];
            borders[sub_id[i]] += 1;
            grouped[slot].value = to_rank_repr(sa[left + i]);
        }

        let mut prev = 0;
        for k in 0..sub_count {
            let stop = borders[k];

            // lexicographic ranks of the inducing successors
            for i in prev..stop {
                grouped[i].key = isa[grouped[i].value.index() + ell];
                debug_assert!(
                    grouped[i].key.rank() < left + prev,
                    "successor rank must be final before its class is sorted"
                );
            }

            if stop - prev < 33 {
                insertion_sort(&mut grouped[prev..stop], true);
            } else {
                S::sort_unstable(
                    &mut grouped[prev..stop],
                    &mut scratch[..stop - prev],
                    true,
                    n - 1,
                );
            }

            for i in prev..stop {
                sa[left + i] = to_sa_repr(grouped[i].value);
            }
            for i in prev..stop {
                let e = sa[left + i];
                if !e.is_flagged() {
                    isa[e.index()] = B::from_rank(left + i);
                } else {
                    sa[left + i] = e.unflagged();
                }
            }
            prev = stop;
        }
        left += z;
    }
}
