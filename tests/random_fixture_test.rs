use std::collections::BTreeSet;

use neardup::{find_all, hamming};
use rand::Rng;

#[test]
fn random_pairs_within_distance_are_always_found() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let blocks = rng.random_range(5..=16);
        let different_bits = rng.random_range(1..blocks);

        let a: u64 = rng.random();
        let mut b = a;
        let flips = rng.random_range(0..=different_bits);
        for _ in 0..flips {
            let bit = rng.random_range(0..64);
            b ^= 1u64 << bit;
        }

        if hamming(a, b) as usize > different_bits || a == b {
            continue;
        }

        let hashes: BTreeSet<u64> = [a, b].into_iter().collect();
        let matches = find_all(&hashes, blocks, different_bits).unwrap();
        let low = a.min(b);
        let high = a.max(b);
        assert!(
            matches.iter().any(|m| m.low == low && m.high == high),
            "blocks={blocks} different_bits={different_bits} a={a:#x} b={b:#x} missed"
        );
    }
}

#[test]
fn random_corpora_never_report_a_pair_outside_the_threshold() {
    let mut rng = rand::rng();

    for _ in 0..50 {
        let blocks = rng.random_range(5..=10);
        let different_bits = rng.random_range(1..blocks);
        let size = rng.random_range(0..80);

        let hashes: BTreeSet<u64> = (0..size).map(|_| rng.random()).collect();
        let matches = find_all(&hashes, blocks, different_bits).unwrap();
        for pair in &matches {
            assert!(hamming(pair.low, pair.high) as usize <= different_bits);
        }
    }
}
