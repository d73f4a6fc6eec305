// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Bloom filter.

use serde::{Deserialize, Serialize};

use super::error::{BloomFilterError, Result};
use super::params::{estimate_parameters, required_bits, MAX_BIT_COUNT};

/// Sizing configuration for a [`BloomFilter`](super::BloomFilter).
///
/// By default the bit array size and hash count are estimated from the
/// expected number of items and the target false positive rate. Either can be
/// pinned explicitly, which takes precedence over the estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomFilterConfig {
    /// Expected number of distinct items that will be inserted
    expected_items: usize,

    /// Desired probability of false positives, exclusive range (0.0, 1.0)
    false_positive_rate: f64,

    /// Explicit bit array size, rounded up to a multiple of 32
    bit_count: Option<u32>,

    /// Explicit number of hash positions per value
    hash_functions: Option<usize>,
}

impl BloomFilterConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - expected_items: 100,000
    /// - false_positive_rate: 0.01 (1%)
    /// - bit_count: None (estimated)
    /// - hash_functions: None (estimated)
    pub fn new() -> Self {
        Self {
            expected_items: 100_000,
            false_positive_rate: 0.01,
            bit_count: None,
            hash_functions: None,
        }
    }

    /// Set the expected number of items to be inserted into the filter.
    pub fn with_expected_items(mut self, expected_items: usize) -> Self {
        self.expected_items = expected_items;
        self
    }

    /// Set the desired false positive rate (between 0.0 and 1.0 exclusive).
    ///
    /// Lower values increase accuracy but require more memory.
    pub fn with_false_positive_rate(mut self, false_positive_rate: f64) -> Self {
        self.false_positive_rate = false_positive_rate;
        self
    }

    /// Pin the size of the bit array instead of estimating it.
    pub fn with_bit_count(mut self, bit_count: u32) -> Self {
        self.bit_count = Some(bit_count);
        self
    }

    /// Pin the number of hash positions instead of estimating it.
    pub fn with_hash_functions(mut self, hash_functions: usize) -> Self {
        self.hash_functions = Some(hash_functions);
        self
    }

    /// Get the expected number of items
    pub fn expected_items(&self) -> usize {
        self.expected_items
    }

    /// Get the target false positive rate
    pub fn false_positive_rate(&self) -> f64 {
        self.false_positive_rate
    }

    /// Check that the configuration describes a usable filter.
    pub fn validate(&self) -> Result<()> {
        if self.expected_items == 0 {
            return Err(BloomFilterError::InvalidConfiguration(
                "expected_items must be greater than 0".to_string(),
            ));
        }

        if !(self.false_positive_rate > 0.0 && self.false_positive_rate < 1.0) {
            return Err(BloomFilterError::InvalidConfiguration(format!(
                "false_positive_rate must be between 0.0 and 1.0 exclusive, got {}",
                self.false_positive_rate
            )));
        }

        if self.bit_count.is_none() {
            let required = required_bits(self.expected_items, self.false_positive_rate);
            if required > u64::from(MAX_BIT_COUNT) {
                return Err(BloomFilterError::InvalidConfiguration(format!(
                    "{} items at false_positive_rate {} need {required} bits, more than the maximum of {MAX_BIT_COUNT}",
                    self.expected_items, self.false_positive_rate
                )));
            }
        }

        if self.bit_count == Some(0) {
            return Err(BloomFilterError::InvalidConfiguration(
                "bit_count must be greater than 0".to_string(),
            ));
        }

        if self.hash_functions == Some(0) {
            return Err(BloomFilterError::InvalidConfiguration(
                "Number of hash functions must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the `(bit_count, hash_count)` pair this configuration describes.
    pub fn parameters(&self) -> (u32, usize) {
        let (estimated_bits, estimated_hashes) =
            estimate_parameters(self.expected_items, self.false_positive_rate);

        (
            self.bit_count.unwrap_or(estimated_bits),
            self.hash_functions.unwrap_or(estimated_hashes),
        )
    }
}

impl Default for BloomFilterConfig {
    fn default() -> Self {
        Self::new()
    }
}
