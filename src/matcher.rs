//! Prefix-scan matcher: finds every near-duplicate pair in a corpus
//!
//! For each permutation produced by [`crate::permutation_set::PermutationSet`],
//! the corpus is permuted, sorted, and walked in runs that share the same
//! masked prefix. Every pair within a run is validated by Hamming distance
//! and reverse-permuted back to the caller's original fingerprints.

use std::collections::BTreeSet;

use crate::bitops::hamming;
use crate::error::Result;
use crate::permutation_set::PermutationSet;

/// An unordered pair of fingerprints, stored with `low <= high`
///
/// # Examples
///
/// ```
/// use neardup::matcher::MatchPair;
///
/// let pair = MatchPair::new(20, 10);
/// assert_eq!((pair.low, pair.high), (10, 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchPair {
    /// The smaller of the two fingerprints
    pub low: u64,
    /// The larger of the two fingerprints
    pub high: u64,
}

impl MatchPair {
    /// Creates a pair, ordering the two fingerprints so `low <= high`
    pub fn new(a: u64, b: u64) -> Self {
        if a <= b {
            MatchPair { low: a, high: b }
        } else {
            MatchPair { low: b, high: a }
        }
    }
}

/// Finds every pair of fingerprints in `hashes` whose Hamming distance is at
/// most `different_bits`, using `blocks` bit-blocks to index the search.
///
/// `hashes` is a set: callers cannot observe a self-pair `(x, x)`, since
/// every fingerprint appears at most once and the inner scan only considers
/// distinct positions.
///
/// # Errors
///
/// Returns an error under the same conditions as
/// [`PermutationSet::create`].
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use neardup::matcher::{find_all, MatchPair};
///
/// let hashes: BTreeSet<u64> = [0x0000_00FFu64, 0x0000_00EF].into_iter().collect();
/// let matches = find_all(&hashes, 4, 3).unwrap();
/// assert!(matches.contains(&MatchPair::new(0x0000_00EF, 0x0000_00FF)));
/// ```
pub fn find_all(hashes: &BTreeSet<u64>, blocks: usize, different_bits: usize) -> Result<BTreeSet<MatchPair>> {
    let permutations = PermutationSet::create(blocks, different_bits)?;
    let mut results = BTreeSet::new();

    if hashes.len() < 2 {
        return Ok(results);
    }

    let mut scratch: Vec<u64> = Vec::with_capacity(hashes.len());
    for permutation in &permutations {
        scratch.clear();
        scratch.extend(hashes.iter().map(|&h| permutation.apply(h)));
        scratch.sort_unstable();

        let mask = permutation.search_mask();
        let mut start = 0;
        while start < scratch.len() {
            let prefix = scratch[start] & mask;
            let mut end = start + 1;
            while end < scratch.len() && scratch[end] & mask == prefix {
                end += 1;
            }

            for a in start..end {
                for b in (a + 1)..end {
                    if hamming(scratch[a], scratch[b]) <= different_bits as u32 {
                        let original_a = permutation.reverse(scratch[a]);
                        let original_b = permutation.reverse(scratch[b]);
                        results.insert(MatchPair::new(original_a, original_b));
                    }
                }
            }

            start = end;
        }
    }

    Ok(results)
}
