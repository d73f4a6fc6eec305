// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Main implementation of the Bloom filter.

use parking_lot::RwLock;

use super::config::BloomFilterConfig;
use super::error::{BloomFilterError, Result};
use super::hash::{FnvMultiHasher, MultiHasher};
use super::params::{false_positive_rate, MAX_BIT_COUNT};

/// Bits per storage word.
const WORD_BITS: u32 = 32;

/// Bytes per storage word in the exported form.
const WORD_BYTES: usize = 4;

/// Largest word count whose bit count still fits in a `u32`.
const MAX_WORDS: usize = (MAX_BIT_COUNT / WORD_BITS) as usize;

/// A thread-safe Bloom filter over byte strings.
///
/// The bit array is stored as 32-bit words guarded by a single reader/writer
/// lock: [`add`](Self::add) takes it exclusively, [`test`](Self::test) and
/// [`to_bytes`](Self::to_bytes) share it. Bits only ever go from 0 to 1.
///
/// # Examples
///
/// ```
/// use bloomfilter::{estimate_parameters, BloomFilter};
///
/// let (bits, hashes) = estimate_parameters(1_000, 0.01);
/// let filter = BloomFilter::new(bits, hashes);
///
/// filter.add(b"hello_world");
/// filter.add_int(42);
///
/// assert!(filter.test(b"hello_world"));
/// assert!(filter.test_int(42));
/// assert!(!filter.test(b"not_inserted"));
///
/// // The hash count travels out of band.
/// let restored = BloomFilter::from_bytes(&filter.to_bytes(), hashes);
/// assert!(restored.test(b"hello_world"));
/// ```
#[derive(Debug)]
pub struct BloomFilter {
    /// Total number of addressable bits (m), always `words.len() * 32`
    bit_count: u32,

    /// Number of bit positions probed per value (k)
    hash_count: usize,

    /// The bit array, word `i` holding bits `32*i .. 32*i + 31`
    words: RwLock<Vec<u32>>,

    /// Hasher for computing bit positions
    hasher: FnvMultiHasher,
}

impl BloomFilter {
    /// Create an empty filter of at least `bit_count` bits probed at
    /// `hash_count` positions.
    ///
    /// The bit count is rounded up to the next multiple of 32. A zero bit
    /// count yields a single word.
    pub fn new(bit_count: u32, hash_count: usize) -> Self {
        Self::from_words(vec![0; word_count_for_bits(bit_count)], hash_count)
    }

    /// Create a filter sized by the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BloomFilterError::InvalidConfiguration`] if the configuration
    /// does not validate.
    pub fn with_config(config: BloomFilterConfig) -> Result<Self> {
        config.validate()?;
        let (bit_count, hash_count) = config.parameters();
        Ok(Self::new(bit_count, hash_count))
    }

    /// Rebuild a filter from bytes produced by [`to_bytes`](Self::to_bytes).
    ///
    /// The bytes are read as big-endian 32-bit words. `hash_count` must match
    /// the exporting filter; nothing checks this, and a mismatch silently
    /// changes which bits are probed. A trailing partial word is dropped, and
    /// an input shorter than one word yields an empty single-word filter.
    /// Use [`try_from_bytes`](Self::try_from_bytes) to reject such input.
    pub fn from_bytes(bytes: &[u8], hash_count: usize) -> Self {
        let chunks = bytes.chunks_exact(WORD_BYTES);
        let remainder = chunks.remainder().len();
        if remainder > 0 {
            tracing::warn!(
                len = bytes.len(),
                dropped = remainder,
                "Bloom filter export is not word aligned, dropping trailing bytes"
            );
        }

        let mut words = chunks
            .take(MAX_WORDS)
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect::<Vec<_>>();
        if words.is_empty() {
            words.push(0);
        }

        Self::from_words(words, hash_count)
    }

    /// Strict variant of [`from_bytes`](Self::from_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`BloomFilterError::SerializationError`] if `bytes` is empty,
    /// not a whole number of words, or too large to address with 32-bit offsets.
    pub fn try_from_bytes(bytes: &[u8], hash_count: usize) -> Result<Self> {
        export_word_count(bytes.len())?;
        Ok(Self::from_bytes(bytes, hash_count))
    }

    fn from_words(words: Vec<u32>, hash_count: usize) -> Self {
        // from_words callers cap the length at MAX_WORDS, so this cannot overflow.
        let bit_count = words.len() as u32 * WORD_BITS;

        tracing::debug!(bit_count, hash_count, "Created bloom filter");

        Self {
            bit_count,
            hash_count,
            words: RwLock::new(words),
            hasher: FnvMultiHasher::new(),
        }
    }

    /// Insert a value into the filter.
    ///
    /// Adding a value twice leaves the filter unchanged the second time.
    pub fn add(&self, value: &[u8]) {
        let positions = self.locations(value);

        let mut words = self.words.write();
        for pos in positions {
            words[(pos / WORD_BITS) as usize] |= 1 << (pos % WORD_BITS);
        }
    }

    /// Insert an integer, encoded as the big-endian bytes of its low 32 bits.
    pub fn add_int(&self, value: i64) {
        self.add(&encode_int(value));
    }

    /// Returns true if the filter might contain the value.
    ///
    /// False positives are possible, but false negatives are not.
    pub fn test(&self, value: &[u8]) -> bool {
        let positions = self.locations(value);

        let words = self.words.read();
        positions
            .into_iter()
            .all(|pos| words[(pos / WORD_BITS) as usize] & (1 << (pos % WORD_BITS)) != 0)
    }

    /// Check an integer using the same encoding as [`add_int`](Self::add_int).
    pub fn test_int(&self, value: i64) -> bool {
        self.test(&encode_int(value))
    }

    /// Export the bit array as big-endian 32-bit words.
    ///
    /// Returns a copy; the hash count is not included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let words = self.words.read();
        words.iter().flat_map(|word| word.to_be_bytes()).collect()
    }

    /// Get the total size of the bit array in bits.
    pub fn bit_count(&self) -> u32 {
        self.bit_count
    }

    /// Get the number of positions probed per value.
    pub fn hash_count(&self) -> usize {
        self.hash_count
    }

    /// Get the number of 32-bit storage words.
    pub fn word_count(&self) -> usize {
        (self.bit_count / WORD_BITS) as usize
    }

    /// Get the fraction of bits currently set, between 0.0 and 1.0.
    pub fn fill_ratio(&self) -> f64 {
        f64::from(self.set_bits()) / f64::from(self.bit_count)
    }

    /// Estimate how many distinct values have been added.
    ///
    /// Uses `-(m / k) * ln(1 - X / m)` where `X` is the number of set bits.
    /// Returns infinity once every bit is set.
    pub fn estimated_item_count(&self) -> f64 {
        if self.hash_count == 0 {
            return 0.0;
        }
        let m = f64::from(self.bit_count);
        let set = f64::from(self.set_bits());
        -(m / self.hash_count as f64) * (1.0 - set / m).ln()
    }

    /// Theoretical false positive probability after `items` insertions.
    pub fn expected_false_positive_rate(&self, items: usize) -> f64 {
        false_positive_rate(self.bit_count, self.hash_count, items)
    }

    fn set_bits(&self) -> u32 {
        let words = self.words.read();
        words.iter().map(|word| word.count_ones()).sum()
    }

    fn locations(&self, value: &[u8]) -> Vec<u32> {
        self.hasher.compute_hashes(value, self.hash_count, self.bit_count)
    }
}

/// Words needed for `bit_count` bits: at least one, at most [`MAX_WORDS`].
fn word_count_for_bits(bit_count: u32) -> usize {
    (bit_count.div_ceil(WORD_BITS) as usize).clamp(1, MAX_WORDS)
}

/// Word count of a strictly valid export of `len` bytes.
fn export_word_count(len: usize) -> Result<usize> {
    if len == 0 {
        return Err(BloomFilterError::SerializationError(
            "empty bloom filter export".to_string(),
        ));
    }
    if len % WORD_BYTES != 0 {
        return Err(BloomFilterError::SerializationError(format!(
            "export length {len} is not a multiple of {WORD_BYTES}"
        )));
    }
    if len / WORD_BYTES > MAX_WORDS {
        return Err(BloomFilterError::SerializationError(format!(
            "export of {len} bytes exceeds the maximum of {MAX_BIT_COUNT} bits"
        )));
    }
    Ok(len / WORD_BYTES)
}

/// Truncate to 32 bits and encode big-endian.
fn encode_int(value: i64) -> [u8; 4] {
    (value as u32).to_be_bytes()
}
