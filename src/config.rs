//! Benchmark configuration, read from command-line arguments.

use clap::{Parser, ValueEnum};
use rand::XorShiftRng;
use std::path::PathBuf;

/// Largest accepted `--fib-step`. The memoizers recurse once per index not cached by an earlier
/// row, so the step bounds the recursion depth of every timed call.
pub const MAX_FIB_STEP: u64 = 5000;

/// Which workloads to run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Mode {
    #[value(name = "fib", alias = "fibonacci")]
    Fibonacci,
    Range,
    All,
}

impl Mode {
    pub fn runs_fibonacci(self) -> bool {
        self != Mode::Range
    }

    pub fn runs_range(self) -> bool {
        self != Mode::Fibonacci
    }
}

/// Parameters of a benchmark run.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use splay_memo::config::{BenchConfig, Mode};
///
/// let config = BenchConfig::try_parse_from(vec!["splay-memo", "fib", "--fib-max", "200"]).unwrap();
/// assert_eq!(config.mode, Mode::Fibonacci);
/// assert_eq!(config.fib_max, 200);
/// assert_eq!(config.fib_step, 50);
/// ```
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "splay-memo", version, about = "Times a splay tree and an LRU cache as memoization tables")]
pub struct BenchConfig {
    /// Workloads to run
    #[arg(value_enum, default_value_t = Mode::All)]
    pub mode: Mode,

    /// Largest Fibonacci index to time, exclusive
    #[arg(long, default_value_t = 1000)]
    pub fib_max: u64,

    /// Distance between timed Fibonacci indices
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..=MAX_FIB_STEP))]
    pub fib_step: u64,

    /// Calls per timed Fibonacci index
    #[arg(long, default_value_t = 100)]
    pub repeats: usize,

    /// Length of the range-query array
    #[arg(long, default_value_t = 100_000)]
    pub array_len: usize,

    /// Number of range queries and updates
    #[arg(long = "queries", default_value_t = 50_000)]
    pub query_count: usize,

    /// Capacity of the range-sum LRU cache
    #[arg(long = "capacity", default_value_t = 1000)]
    pub lru_capacity: usize,

    /// Seed for the generated array and queries
    #[arg(long, default_value_t = 1)]
    pub seed: u32,

    /// Write the report to this file with bincode
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Draw the Fibonacci timings to this SVG file
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Log every phase of the run
    #[arg(long)]
    pub verbose: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            mode: Mode::All,
            fib_max: 1000,
            fib_step: 50,
            repeats: 100,
            array_len: 100_000,
            query_count: 50_000,
            lru_capacity: 1000,
            seed: 1,
            output: None,
            plot: None,
            verbose: false,
        }
    }
}

impl BenchConfig {
    /// The Fibonacci indices timed by the harness.
    pub fn fib_inputs(&self) -> impl Iterator<Item = u64> {
        (0..self.fib_max).step_by(self.fib_step as usize)
    }

    /// A generator seeded from `seed`. The seed words are never all zero.
    pub fn rng(&self) -> XorShiftRng {
        rand::SeedableRng::from_seed([1, 1, 1, self.seed])
    }
}
