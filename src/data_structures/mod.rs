//! Data structures provided by this crate.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Safe for concurrent use without external synchronization

pub mod bloom_filter;

// Re-export common data structures
pub use bloom_filter::{BloomFilter, BloomFilterConfig, BloomFilterError};
