//! Phase 1: iterative refinement of the prefix buckets.
//!
//! Every group is a suffix array interval whose members share a known
//! common prefix of `lyndon` symbols, and the inverse array maps each
//! unfinalized position to the left border of its current group. Since
//! the borders appear in suffix order, the border of the successor
//! suffix `p + lyndon` is a rank fingerprint: sorting a group by these
//! fingerprints splits it into sub-groups whose members additionally
//! agree on the successor group's prefix.
//!
//! A sub-group leaves the work list as soon as phase 2 can finish it,
//! which is the case once every member's successor either lies in an
//! earlier block (its rank is final by the time phase 2 arrives) or is
//! the member's own right neighbor (an arithmetic chain that phase 2
//! peels off tail first). Until then the sub-group is re-queued with
//! its agreement grown by the successor group's agreement.
//!
//! All sorts are stable, which keeps the members of any group in
//! ascending text order (the bucketer inserts them that way). Chains
//! therefore sit in adjacent slots whenever they exist at all, and the
//! neighbor test above is exhaustive.

use super::index::{to_rank_repr, to_sa_repr, Rank, SaIndex};
use super::sort::{KeyValue, Sorter};
use super::types::{Phase1Group, Phase2Group};

/// Refine `input` until every group is ready for phase 2. Returns the
/// group list covering `[2, n)` in suffix array order; on return,
/// `isa[p]` is the left border of the group containing `p` for every
/// interior position, and the sentinel suffixes hold ranks 0 and 1.
pub fn refine_groups<I, B, S>(
    sa: &mut [I],
    isa: &mut [B],
    input: Vec<Phase1Group<B>>,
) -> Vec<Phase2Group<B>>
where
    I: SaIndex,
    B: Rank,
    S: Sorter,
{
    let n = sa.len();
    debug_assert_eq!(isa.len(), n);

    for g in &input {
        let s = g.start.rank();
        for i in s..s + g.size.rank() {
            isa[sa[i].index()] = g.start;
        }
    }
    isa[sa[0].index()] = B::from_rank(0);
    isa[sa[1].index()] = B::from_rank(1);

    // current agreement length of the live group starting at each
    // border; read when a sub-group is re-queued behind its successor
    // group, so `lyndon` grows by exactly what the successors share
    let mut agree: Vec<B> = vec![B::from_rank(0); n];

    let mut done: Vec<Phase1Group<B>> = Vec::with_capacity(input.len());
    let mut work: Vec<Phase1Group<B>> = Vec::new();
    let mut max_size = 1;
    for g in input {
        agree[g.start.rank()] = g.lyndon;
        if g.size.rank() == 1 {
            done.push(Phase1Group {
                finalized: true,
                ..g
            });
        } else {
            max_size = max_size.max(g.size.rank());
            work.push(g);
        }
    }

    let mut records = vec![KeyValue::<B>::zero(); max_size];
    let mut scratch = vec![KeyValue::<B>::zero(); max_size];
    let mut runs: Vec<(usize, usize, usize)> = Vec::new();

    while let Some(g) = work.pop() {
        let s = g.start.rank();
        let z = g.size.rank();
        let ell = g.lyndon.rank();

        for i in 0..z {
            let e = sa[s + i];
            records[i] = KeyValue {
                key: isa[e.index() + ell],
                value: to_rank_repr(e),
            };
        }
        S::sort_stable(&mut records[..z], &mut scratch[..z], true, n - 1);
        for i in 0..z {
            sa[s + i] = to_sa_repr(records[i].value);
        }

        // maximal equal-key runs; each run's successor agreement is
        // captured before the borders below overwrite `agree`
        runs.clear();
        let mut begin = 0;
        for i in 1..=z {
            if i == z || records[i].key != records[begin].key {
                runs.push((begin, i, agree[records[begin].key.rank()].rank()));
                begin = i;
            }
        }

        // new borders first, so the readiness scan sees a consistent
        // picture of the entire split
        for &(a, b, _) in &runs {
            let border = B::from_rank(s + a);
            for r in &records[a..b] {
                isa[r.value.index()] = border;
            }
        }

        for &(a, b, succ) in &runs {
            let border = s + a;
            let size = b - a;
            let sub = Phase1Group {
                start: B::from_rank(border),
                size: B::from_rank(size),
                lyndon: g.lyndon,
                resolvable: true,
                finalized: size == 1,
            };
            if size == 1 {
                agree[border] = g.lyndon;
                done.push(sub);
                continue;
            }

            let mut ready = true;
            for i in a..b {
                let v = records[i].value.index();
                let succ_border = isa[v + ell].rank();
                let chained =
                    succ_border == border && i + 1 < b && records[i + 1].value.index() == v + ell;
                if succ_border >= border && !chained {
                    ready = false;
                    break;
                }
            }

            if ready {
                agree[border] = g.lyndon;
                done.push(sub);
            } else {
                let grown = B::from_rank(ell + succ);
                agree[border] = grown;
                work.push(Phase1Group {
                    lyndon: grown,
                    finalized: false,
                    ..sub
                });
            }
        }
    }

    done.sort_unstable_by_key(|g| g.start.rank());
    debug_assert_eq!(
        done.iter().map(|g| g.size.rank()).sum::<usize>(),
        n - 2,
        "groups must cover the working range"
    );
    done.into_iter()
        .map(|g| Phase2Group {
            start: g.start,
            size: g.size,
            lyndon: g.lyndon,
        })
        .collect()
}
