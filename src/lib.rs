//! Suffix array construction for in-memory byte or integer strings,
//! built on grouping suffixes by Lyndon-prefix agreement and resolving
//! the groups with two sort-and-refine passes, as described in
//! [Lyndon Words Accelerate Suffix Sorting](https://arxiv.org/abs/2106.12578).
//!
//! The engine entry points ([`build_ds1`], [`build_ds2`], [`build_ds3`])
//! work on texts framed by a sentinel at both ends; [`SuffixArray`]
//! wraps preparation and construction for plain byte strings.

mod construct;
pub mod prepare;
pub mod stats;
pub mod verify;

pub use construct::{
    build_ds1, build_ds2, build_ds3, build_with, KeyValue, LsdSort, MsdSort, Phase1Group,
    Phase2Group, Rank, SaIndex, Sorter, Symbol, U40,
};

/// Suffix array over a plain byte string.
///
/// Construction prepares a sentinel-framed copy of the input, so the
/// original bytes may contain zeros; lookups are reported as positions
/// into the original string.
pub struct SuffixArray {
    text: Vec<u8>,
    sa: Vec<u32>,
}

impl SuffixArray {
    /// Construct the suffix array of a byte string.
    pub fn new(data: &[u8]) -> SuffixArray {
        let (text, _) = prepare::prepare_bytes(data);
        let mut sa = vec![0; text.len()];
        if data.is_empty() {
            sa[0] = 1;
            sa[1] = 0;
        } else {
            build_ds1(&text, &mut sa);
        }
        SuffixArray { text, sa }
    }

    /// Length of the underlying byte string.
    pub fn len(&self) -> usize {
        self.text.len() - 2
    }

    /// Test if the underlying byte string is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Starting positions of the suffixes of the original string in
    /// lexicographic order.
    pub fn suffixes(&self) -> impl Iterator<Item = usize> + '_ {
        self.sa[2..].iter().map(|&i| i as usize - 1)
    }

    /// Run the linear checker against the prepared text.
    pub fn verify(&self) -> bool {
        verify::check(&self.text, &self.sa)
    }

    /// The prepared text and raw array, sentinel slots included.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u32>) {
        (self.text, self.sa)
    }
}
