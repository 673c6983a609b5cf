//! A splay tree and an LRU cache used as memoization tables, plus the workloads and the
//! harness that compare them against recomputation.

extern crate bincode;
extern crate clap;
#[macro_use]
extern crate log;
extern crate num_bigint;
extern crate plotters;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod entry;
pub mod arena;
pub mod bench;
pub mod config;
pub mod error;
pub mod lru_cache;
pub mod splay_tree;
pub mod workload;

pub use crate::error::{Error, Result};
