//! Lexicographic enumeration of size-`r` subsequences of a population
//!
//! Cribbed from the classic itertools `combinations` algorithm: an index
//! vector is advanced in place, always finding the rightmost index that can
//! still be incremented and resetting everything to its right.

use crate::error::{NearDupError, Result};

/// Returns every `r`-element subsequence of `population`, in lexicographic
/// order of index tuples.
///
/// Elements are selected by position, not by equality, so duplicate values
/// in `population` do not collapse into a single choice.
///
/// # Errors
///
/// Returns [`NearDupError::InvalidArgument`] if `r` exceeds the size of
/// `population`.
///
/// # Examples
///
/// ```
/// use neardup::combinator::choose;
///
/// let population = vec![0u64, 1, 2, 3, 4, 5];
/// let combos = choose(&population, 3).unwrap();
/// assert_eq!(combos.len(), 20);
/// assert_eq!(combos[0], vec![0, 1, 2]);
/// assert_eq!(combos[combos.len() - 1], vec![3, 4, 5]);
/// ```
pub fn choose<T: Clone>(population: &[T], r: usize) -> Result<Vec<Vec<T>>> {
    let n = population.len();
    if r > n {
        return Err(NearDupError::InvalidArgument {
            message: format!("r ({}) cannot be greater than population size ({})", r, n),
        });
    }

    if r == 0 {
        return Ok(vec![Vec::new()]);
    }

    let mut indices: Vec<usize> = (0..r).collect();
    let mut results = vec![indices.iter().map(|&i| population[i].clone()).collect()];

    loop {
        let mut advance = None;
        for i in (0..r).rev() {
            if indices[i] < i + n - r {
                advance = Some(i);
                break;
            }
        }

        let Some(i) = advance else {
            return Ok(results);
        };

        indices[i] += 1;
        for j in (i + 1)..r {
            indices[j] = indices[j - 1] + 1;
        }

        results.push(indices.iter().map(|&i| population[i].clone()).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_3_from_6() {
        let population: Vec<u64> = (0..6).collect();
        let expected: Vec<Vec<u64>> = vec![
            vec![0, 1, 2],
            vec![0, 1, 3],
            vec![0, 1, 4],
            vec![0, 1, 5],
            vec![0, 2, 3],
            vec![0, 2, 4],
            vec![0, 2, 5],
            vec![0, 3, 4],
            vec![0, 3, 5],
            vec![0, 4, 5],
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 2, 5],
            vec![1, 3, 4],
            vec![1, 3, 5],
            vec![1, 4, 5],
            vec![2, 3, 4],
            vec![2, 3, 5],
            vec![2, 4, 5],
            vec![3, 4, 5],
        ];

        let actual = choose(&population, 3).unwrap();
        assert_eq!(actual.len(), 20);
        assert_eq!(actual, expected);
    }

    #[test]
    fn choose_too_many_fails() {
        let population: Vec<u64> = (0..6).collect();
        assert!(choose(&population, 7).is_err());
    }

    #[test]
    fn choose_zero_returns_one_empty_sequence() {
        let population: Vec<u64> = (0..6).collect();
        let actual = choose(&population, 0).unwrap();
        assert_eq!(actual, vec![Vec::<u64>::new()]);
    }

    #[test]
    fn choose_all_returns_single_full_sequence() {
        let population: Vec<u64> = (0..4).collect();
        let actual = choose(&population, 4).unwrap();
        assert_eq!(actual, vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn result_size_matches_binomial_coefficient() {
        let population: Vec<u64> = (0..10).collect();
        // C(10, 4) = 210
        assert_eq!(choose(&population, 4).unwrap().len(), 210);
    }

    #[test]
    fn no_two_results_share_an_index_tuple() {
        let population: Vec<u64> = (0..8).collect();
        let combos = choose(&population, 3).unwrap();
        let unique: std::collections::HashSet<_> = combos.iter().cloned().collect();
        assert_eq!(unique.len(), combos.len());
    }
}
