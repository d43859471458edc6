//! Column-wise sign aggregation of fingerprints into a single fingerprint
//!
//! This is the weighted-majority-vote step at the heart of SimHash
//! (Charikar 2002): given a stream of already-computed component hashes
//! (e.g. per-token hashes of a document), each bit position is set in the
//! result iff more of the inputs had that bit set than unset.

use crate::bitops::BITS;

/// Computes a single fingerprint from a sequence of component hashes.
///
/// For each of the 64 bit positions, sums `+1` for every input hash with
/// that bit set and `-1` for every input hash with that bit unset. The
/// result's bit is set iff that sum is strictly positive; ties (sum == 0)
/// produce an unset bit.
///
/// Empty input yields `0`.
///
/// # Examples
///
/// ```
/// use neardup::simhash::compute;
///
/// assert_eq!(compute(&[]), 0);
/// assert_eq!(compute(&[0xDEADBEEFu64; 100]), 0xDEADBEEF);
/// assert_eq!(compute(&[0xDEADBEEFu64, !0xDEADBEEFu64]), 0);
/// ```
pub fn compute(hashes: &[u64]) -> u64 {
    let mut counts = [0i64; BITS];

    for &hash in hashes {
        for (i, count) in counts.iter_mut().enumerate() {
            *count += if (hash >> i) & 1 == 1 { 1 } else { -1 };
        }
    }

    let mut result = 0u64;
    for (i, &count) in counts.iter().enumerate() {
        if count > 0 {
            result |= 1u64 << i;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(compute(&[]), 0);
    }

    #[test]
    fn duplicating_every_input_does_not_change_the_result() {
        let hashes = vec![0xDEADBEEFu64, 0x1234_5678, 0xCAFEBABE];
        let doubled: Vec<u64> = hashes.iter().chain(hashes.iter()).copied().collect();
        assert_eq!(compute(&hashes), compute(&doubled));
    }

    #[test]
    fn is_invariant_to_input_order() {
        let hashes = vec![0xABCDu64, 0xBCDE, 0xCDEF];
        let mut shuffled = hashes.clone();
        shuffled.reverse();
        assert_eq!(compute(&hashes), compute(&shuffled));
    }

    #[test]
    fn repeating_a_single_hash_reproduces_it() {
        assert_eq!(compute(&[0xDEADBEEFu64; 100]), 0xDEADBEEF);
    }

    #[test]
    fn a_value_and_its_complement_cancel_out() {
        let x = 0xDEADBEEFu64;
        assert_eq!(compute(&[x, !x]), 0);
    }

    #[test]
    fn ties_produce_an_unset_bit() {
        // Two inputs disagreeing on every bit sum to exactly 0 per position.
        assert_eq!(compute(&[0u64, u64::MAX]), 0);
    }

    #[test]
    fn concrete_three_value_scenario() {
        assert_eq!(compute(&[0xABCDu64, 0xBCDE, 0xCDEF]), 0xADCF);
    }
}
