//! Range-sum and point-update queries over an array, answered directly or through an
//! `LruCache` of range sums.

use crate::lru_cache::LruCache;
use rand::Rng;

/// Largest value stored in a generated array or written by a generated update.
pub const MAX_VALUE: u64 = 1000;

/// A single query against the array.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Query {
    /// Sum of the elements in `left..=right`.
    Range { left: usize, right: usize },
    /// Overwrite the element at `index`.
    Update { index: usize, value: u64 },
}

/// Returns `len` values drawn uniformly from `1..=MAX_VALUE`.
pub fn random_array<R: Rng>(rng: &mut R, len: usize) -> Vec<u64> {
    (0..len).map(|_| rng.gen_range(1, MAX_VALUE + 1)).collect()
}

/// Returns `count` queries over an array of length `len`, each equally likely to be a range sum
/// or an update. No queries can be generated for an empty array.
pub fn generate_queries<R: Rng>(rng: &mut R, len: usize, count: usize) -> Vec<Query> {
    if len == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            if rng.gen::<bool>() {
                let left = rng.gen_range(0, len);
                let right = rng.gen_range(left, len);
                Query::Range { left, right }
            } else {
                Query::Update {
                    index: rng.gen_range(0, len),
                    value: rng.gen_range(1, MAX_VALUE + 1),
                }
            }
        })
        .collect()
}

/// Sums `array[left..=right]`.
pub fn range_sum(array: &[u64], left: usize, right: usize) -> u64 {
    array[left..=right].iter().sum()
}

/// Applies `queries` to `array` in order and returns the answers to the range queries.
pub fn run_uncached(array: &mut [u64], queries: &[Query]) -> Vec<u64> {
    let mut answers = Vec::new();
    for query in queries {
        match *query {
            Query::Range { left, right } => answers.push(range_sum(array, left, right)),
            Query::Update { index, value } => array[index] = value,
        }
    }
    answers
}

/// Applies `queries` to `array` in order, serving range sums from `cache` when possible. An
/// update evicts every cached range that contains the updated index.
pub fn run_cached(
    array: &mut [u64],
    queries: &[Query],
    cache: &mut LruCache<(usize, usize), u64>,
) -> Vec<u64> {
    let mut answers = Vec::new();
    for query in queries {
        match *query {
            Query::Range { left, right } => {
                let sum = match cache.get(&(left, right)) {
                    Some(sum) => *sum,
                    None => {
                        let sum = range_sum(array, left, right);
                        cache.put((left, right), sum);
                        sum
                    },
                };
                answers.push(sum);
            },
            Query::Update { index, value } => {
                array[index] = value;
                cache.invalidate(|&(left, right)| left <= index && index <= right);
            },
        }
    }
    answers
}

#[cfg(test)]
mod tests {
    use super::{generate_queries, random_array, range_sum, run_cached, run_uncached, Query, MAX_VALUE};
    use crate::lru_cache::LruCache;
    use rand::XorShiftRng;

    fn rng() -> XorShiftRng {
        rand::SeedableRng::from_seed([1, 1, 1, 1])
    }

    #[test]
    fn test_range_sum() {
        let array = [1, 2, 3, 4, 5];
        assert_eq!(range_sum(&array, 0, 4), 15);
        assert_eq!(range_sum(&array, 2, 2), 3);
        assert_eq!(range_sum(&array, 1, 3), 9);
    }

    #[test]
    fn test_random_array_bounds() {
        let array = random_array(&mut rng(), 1000);
        assert_eq!(array.len(), 1000);
        assert!(array.iter().all(|value| *value >= 1 && *value <= MAX_VALUE));
    }

    #[test]
    fn test_generate_queries_bounds() {
        let queries = generate_queries(&mut rng(), 50, 1000);
        assert_eq!(queries.len(), 1000);
        for query in queries {
            match query {
                Query::Range { left, right } => assert!(left <= right && right < 50),
                Query::Update { index, value } => {
                    assert!(index < 50);
                    assert!(value >= 1 && value <= MAX_VALUE);
                },
            }
        }
        assert!(generate_queries(&mut rng(), 0, 10).is_empty());
    }

    #[test]
    fn test_update_invalidates() {
        let mut array = vec![1, 1, 1, 1];
        let mut cache = LruCache::new(8);
        let queries = [
            Query::Range { left: 0, right: 1 },
            Query::Range { left: 2, right: 3 },
            Query::Update { index: 1, value: 10 },
            Query::Range { left: 0, right: 1 },
            Query::Range { left: 2, right: 3 },
        ];
        assert_eq!(run_cached(&mut array, &queries, &mut cache), vec![2, 2, 11, 2]);
        assert!(cache.contains_key(&(0, 1)));
        assert_eq!(cache.len(), 2);
        assert_eq!(array, vec![1, 10, 1, 1]);
    }

    #[test]
    fn test_cached_matches_uncached() {
        let mut rng = rng();
        let array = random_array(&mut rng, 200);
        let queries = generate_queries(&mut rng, 200, 5000);

        let mut uncached_array = array.clone();
        let expected = run_uncached(&mut uncached_array, &queries);

        let mut cached_array = array.clone();
        let mut cache = LruCache::new(16);
        let actual = run_cached(&mut cached_array, &queries, &mut cache);

        assert_eq!(expected, actual);
        assert_eq!(uncached_array, cached_array);
        assert!(cache.len() <= 16);
    }
}
