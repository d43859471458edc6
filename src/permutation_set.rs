//! Generation of the complete set of permutations needed to find every
//! near-duplicate pair within a given Hamming distance

use crate::combinator::choose;
use crate::error::{NearDupError, Result};
use crate::permutation::Permutation;

/// Builds the set of permutations covering every way to choose `B - d`
/// leading (prefix) blocks out of `B` blocks.
pub struct PermutationSet;

impl PermutationSet {
    /// Produces `C(B, d)` permutations for a given block count `B` and
    /// tolerance `d`.
    ///
    /// For every fingerprint pair within Hamming distance `d`, at least one
    /// of the returned permutations places `B - d` untouched blocks in the
    /// permuted word's high prefix, making the pair agree there.
    ///
    /// # Errors
    ///
    /// Returns [`NearDupError::InvalidArgument`] if `blocks > 64` or
    /// `blocks <= different_bits`.
    ///
    /// # Examples
    ///
    /// ```
    /// use neardup::permutation_set::PermutationSet;
    ///
    /// let permutations = PermutationSet::create(6, 3).unwrap();
    /// assert_eq!(permutations.len(), 20);
    ///
    /// assert!(PermutationSet::create(65, 3).is_err());
    /// assert!(PermutationSet::create(2, 3).is_err());
    /// ```
    pub fn create(blocks: usize, different_bits: usize) -> Result<Vec<Permutation>> {
        if blocks > 64 {
            return Err(NearDupError::InvalidArgument {
                message: format!("number of blocks ({}) must not exceed 64", blocks),
            });
        }
        if blocks <= different_bits {
            return Err(NearDupError::InvalidArgument {
                message: format!(
                    "number of blocks ({}) must be greater than different_bits ({})",
                    blocks, different_bits
                ),
            });
        }

        let block_masks: Vec<u64> = (0..blocks)
            .map(|i| {
                let start = i * 64 / blocks;
                let end = (i + 1) * 64 / blocks;
                let mut mask = 0u64;
                for bit in start..end {
                    mask |= 1u64 << bit;
                }
                mask
            })
            .collect();

        let prefix_count = blocks - different_bits;
        let mut results = Vec::with_capacity(binomial(blocks, prefix_count));
        for prefix in choose(&block_masks, prefix_count)? {
            let mut ordering = prefix.clone();
            for &mask in &block_masks {
                if !prefix.contains(&mask) {
                    ordering.push(mask);
                }
            }
            results.push(Permutation::new(different_bits, &ordering));
        }

        Ok(results)
    }
}

fn binomial(n: usize, r: usize) -> usize {
    if r > n {
        return 0;
    }
    let r = r.min(n - r);
    let mut result = 1u128;
    for i in 0..r {
        result = result * (n - i) as u128 / (i + 1) as u128;
    }
    result as usize
}
