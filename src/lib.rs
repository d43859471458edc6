//! neardup: permutation-indexed near-duplicate detection over 64-bit
//! fingerprints
//!
//! Given a corpus of previously-computed 64-bit fingerprints, this crate
//! finds every pair that differs in at most `d` bit positions (Hamming
//! distance) and groups such pairs into connected-component clusters. It
//! also computes a fingerprint from a stream of component hashes
//! ([`simhash::compute`]).
//!
//! The approach (Manku, Jain & Das Sarma, 2007; implemented here the way
//! `seomoz/simhash-cpp` does) partitions the 64-bit word into `B` blocks and
//! generates every permutation that could plausibly place `B - d` of those
//! blocks, untouched, into a contiguous high-bit prefix. Sorting the corpus
//! under each permutation and scanning runs with an equal prefix is then
//! guaranteed (by pigeonhole) to surface every pair within distance `d`.
//!
//! Textual tokenization, word hashing, and file-format framing are
//! deliberately outside this crate's scope. See the `find-all` and
//! `find-clusters` binaries for a minimal CLI built on top of this library.
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitops;
pub mod cluster;
pub mod combinator;
pub mod error;
pub mod matcher;
pub mod permutation;
pub mod permutation_set;
pub mod simhash;

pub use bitops::hamming;
pub use cluster::{find_clusters, Cluster};
pub use combinator::choose;
pub use error::{NearDupError, Result};
pub use matcher::{find_all, MatchPair};
pub use permutation::Permutation;
pub use permutation_set::PermutationSet;
pub use simhash::compute;
