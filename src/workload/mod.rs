//! Workloads that use the caches in this crate as memoization tables.

pub mod fibonacci;
pub mod range_query;

pub use self::fibonacci::{fibonacci, fibonacci_lru, fibonacci_splay, Lookup};
pub use self::range_query::{generate_queries, random_array, range_sum, run_cached, run_uncached, Query};
