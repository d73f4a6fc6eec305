//! Bloom filter library
//!
//! A probabilistic set-membership structure: a fixed-size bit array probed at
//! several hashed positions, answering "might this value be present?" with no
//! false negatives, a tunable false positive rate, and far less memory than
//! an exact set.
//!
//! # Architecture
//!
//! - [`data_structures::bloom_filter`] holds the filter, the seeded FNV-1a
//!   digest, double-hash position generation and parameter estimation.
//! - [`config`] loads filter sizing and logging settings from files and the
//!   environment.
//! - [`error`] defines the crate-wide error type.
//! - [`logging`] installs a `tracing` subscriber.
//!
//! # Example
//!
//! ```
//! use bloomfilter::{estimate_parameters, BloomFilter};
//!
//! let (bits, hashes) = estimate_parameters(1_000, 0.01);
//! let filter = BloomFilter::new(bits, hashes);
//!
//! filter.add(b"alpha");
//! assert!(filter.test(b"alpha"));
//! ```

pub mod config;
pub mod data_structures;
pub mod error;
pub mod logging;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::bloom_filter::{
    estimate_parameters, BloomFilter, BloomFilterConfig, BloomFilterError,
};
pub use error::{BloomError, BloomResult};

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
