// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bloom filter for probabilistic set membership.
//!
//! A fixed-size bit array probed at `k` positions per value, answering "might
//! this value be present?" with no false negatives and a tunable false
//! positive rate.
//!
//! # Features
//!
//! - Thread-safe: one reader/writer lock per filter, shared by lookups.
//! - Parameter estimation from expected item count and target error rate.
//! - Double hashing over a seeded FNV-1a variant, bit-exact with filters
//!   exported by other implementations of the same scheme.
//! - Raw export/import as big-endian 32-bit words.
//! - Zero unsafe code.
//!
//! # Example
//!
//! ```
//! use bloomfilter::data_structures::bloom_filter::{BloomFilter, BloomFilterConfig};
//!
//! let config = BloomFilterConfig::new()
//!     .with_expected_items(10_000)
//!     .with_false_positive_rate(0.001);
//! let filter = BloomFilter::with_config(config).unwrap();
//!
//! filter.add(b"hello");
//! assert!(filter.test(b"hello"));
//! assert!(!filter.test(b"world"));
//! ```
//!
//! # Interchange
//!
//! Only the bit array is exported. Whoever imports it has to know the hash
//! count the exporter used:
//!
//! ```
//! use bloomfilter::data_structures::bloom_filter::BloomFilter;
//!
//! let filter = BloomFilter::new(64, 4);
//! filter.add(b"foo");
//! assert_eq!(filter.to_bytes(), [0x00, 0x00, 0x02, 0x00, 0x20, 0x00, 0x80, 0x08]);
//!
//! let imported = BloomFilter::from_bytes(&filter.to_bytes(), 4);
//! assert!(imported.test(b"foo"));
//! ```

// Module declarations
mod config;
mod error;
mod filter;
mod hash;
mod params;

// Re-exports
pub use config::BloomFilterConfig;
pub use error::{BloomFilterError, Result};
pub use filter::BloomFilter;
pub use hash::{fnv_1a, PRIMARY_SEED, SECONDARY_SEED};
pub use params::{estimate_parameters, false_positive_rate};
