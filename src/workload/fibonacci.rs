//! Memoized Fibonacci numbers.
//!
//! The memoized variants recurse on `n - 1` before `n - 2`, so every call below the top one
//! finds `n - 2` already cached. Recursion depth is linear in `n` on a cold cache.

use crate::lru_cache::LruCache;
use crate::splay_tree::SplayMap;
use num_bigint::BigUint;

/// How `fibonacci_splay` looks up memoized values in a `SplayMap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lookup {
    /// `SplayMap::find`, which answers from the hash index without touching the tree.
    Index,
    /// `SplayMap::find_and_splay`, which splays the looked up key to the root.
    Splay,
}

/// Computes the `n`th Fibonacci number without any cache.
///
/// # Examples
///
/// ```
/// use num_bigint::BigUint;
/// use splay_memo::workload::fibonacci;
///
/// assert_eq!(fibonacci(10), BigUint::from(55u32));
/// ```
pub fn fibonacci(n: u64) -> BigUint {
    let mut prev = BigUint::from(0u32);
    let mut curr = BigUint::from(1u32);
    if n == 0 {
        return prev;
    }
    for _ in 1..n {
        let next = &prev + &curr;
        prev = curr;
        curr = next;
    }
    curr
}

/// Computes the `n`th Fibonacci number, memoizing every intermediate result in `tree`.
pub fn fibonacci_splay(n: u64, tree: &mut SplayMap<u64, BigUint>, lookup: Lookup) -> BigUint {
    if n < 2 {
        return BigUint::from(n);
    }
    let cached = match lookup {
        Lookup::Index => tree.find(&n),
        Lookup::Splay => tree.find_and_splay(&n),
    };
    if let Some(value) = cached {
        return value.clone();
    }
    let result = fibonacci_splay(n - 1, tree, lookup) + fibonacci_splay(n - 2, tree, lookup);
    tree.insert(n, result.clone());
    result
}

/// Computes the `n`th Fibonacci number, memoizing intermediate results in `cache`.
///
/// Results survive only as long as the cache keeps them. A capacity of three keeps the number of
/// calls linear in `n`; with two or fewer the recursion turns exponential again.
pub fn fibonacci_lru(n: u64, cache: &mut LruCache<u64, BigUint>) -> BigUint {
    if n < 2 {
        return BigUint::from(n);
    }
    if let Some(value) = cache.get(&n) {
        return value.clone();
    }
    let result = fibonacci_lru(n - 1, cache) + fibonacci_lru(n - 2, cache);
    cache.put(n, result.clone());
    result
}

#[cfg(test)]
mod tests {
    use super::{fibonacci, fibonacci_lru, fibonacci_splay, Lookup};
    use crate::lru_cache::LruCache;
    use crate::splay_tree::SplayMap;
    use num_bigint::BigUint;

    #[test]
    fn test_fibonacci_small() {
        let expected = [0u32, 1, 1, 2, 3, 5, 8, 13, 21, 34];
        for (n, value) in expected.iter().enumerate() {
            assert_eq!(fibonacci(n as u64), BigUint::from(*value));
        }
    }

    #[test]
    fn test_fibonacci_large() {
        assert_eq!(fibonacci(100), BigUint::from(354_224_848_179_261_915_075u128));
    }

    #[test]
    fn test_fibonacci_splay_index() {
        let mut tree = SplayMap::new();
        assert_eq!(fibonacci_splay(90, &mut tree, Lookup::Index), fibonacci(90));
        assert_eq!(tree.len(), 89);
        assert_eq!(tree.root().map(|(key, _)| *key), Some(90));
        assert_eq!(tree.find(&50), Some(&fibonacci(50)));
    }

    #[test]
    fn test_fibonacci_splay_adaptive() {
        let mut tree = SplayMap::new();
        assert_eq!(fibonacci_splay(90, &mut tree, Lookup::Splay), fibonacci(90));
        assert_eq!(fibonacci_splay(40, &mut tree, Lookup::Splay), fibonacci(40));
        assert_eq!(tree.root().map(|(key, _)| *key), Some(40));
        assert_eq!(tree.len(), 89);
    }

    #[test]
    fn test_fibonacci_lru() {
        let mut cache = LruCache::new(1000);
        assert_eq!(fibonacci_lru(300, &mut cache), fibonacci(300));
        assert_eq!(cache.len(), 299);
    }

    #[test]
    fn test_fibonacci_lru_small_capacity() {
        let mut cache = LruCache::new(3);
        assert_eq!(fibonacci_lru(200, &mut cache), fibonacci(200));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_fibonacci_base_cases() {
        let mut tree = SplayMap::new();
        let mut cache = LruCache::new(4);
        for n in 0..2 {
            assert_eq!(fibonacci_splay(n, &mut tree, Lookup::Index), BigUint::from(n));
            assert_eq!(fibonacci_lru(n, &mut cache), BigUint::from(n));
        }
        assert!(tree.is_empty());
        assert!(cache.is_empty());
    }
}
