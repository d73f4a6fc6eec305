// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hashing utilities for the Bloom filter.
//!
//! Bit positions are derived from two seeded 32-bit Fowler/Noll/Vo digests
//! combined by double hashing. The digest is a nonstandard FNV-1a variant:
//! the seed is folded into the offset basis and the result goes through a
//! final avalanche mix. Its output must stay bit-exact, otherwise filters
//! exported elsewhere would test different bits than the ones that were set.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// Seed of the first digest (the plain offset basis).
pub const PRIMARY_SEED: u32 = 0;

/// Seed of the second digest, used as the double-hashing stride.
pub const SECONDARY_SEED: u32 = 1_576_284_489;

/// A trait for computing multiple bit positions from a single input.
pub(crate) trait MultiHasher {
    /// Compute `hash_count` bit offsets for `value`, each in `[0, bit_count)`.
    ///
    /// # Arguments
    ///
    /// * `value` - The bytes to hash
    /// * `hash_count` - The number of positions to generate
    /// * `bit_count` - Size of the bit array; must be non-zero
    ///
    /// # Returns
    ///
    /// The offsets in generation order. Offsets may repeat.
    fn compute_hashes(&self, value: &[u8], hash_count: usize, bit_count: u32) -> Vec<u32>;
}

/// Double hashing over two seeded FNV-1a digests (Kirsch–Mitzenmacher).
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FnvMultiHasher;

impl FnvMultiHasher {
    /// Create a new instance of the FNV multi-hasher.
    pub fn new() -> Self {
        Self
    }
}

impl MultiHasher for FnvMultiHasher {
    fn compute_hashes(&self, value: &[u8], hash_count: usize, bit_count: u32) -> Vec<u32> {
        let h1 = fnv_1a(value, PRIMARY_SEED);
        let h2 = fnv_1a(value, SECONDARY_SEED);

        let mut result = Vec::with_capacity(hash_count);
        let mut x = h1 % bit_count;
        for _ in 0..hash_count {
            result.push(x);
            // The stride addition wraps at 32 bits before the modulus.
            x = x.wrapping_add(h2) % bit_count;
        }

        result
    }
}

/// Seeded 32-bit FNV-1a digest with a final avalanche mix.
///
/// `seed` is XORed into the offset basis; "almost any offset basis will serve
/// so long as it is non-zero".
pub fn fnv_1a(value: &[u8], seed: u32) -> u32 {
    let mut a = FNV_OFFSET_BASIS ^ seed;
    for &byte in value {
        a = fnv_multiply(a ^ u32::from(byte));
    }
    fnv_mix(a)
}

/// `a * 16777619 mod 2^32`, spelled as the shift-add expansion of the FNV prime.
#[inline]
fn fnv_multiply(a: u32) -> u32 {
    a.wrapping_add(a << 1)
        .wrapping_add(a << 4)
        .wrapping_add(a << 7)
        .wrapping_add(a << 8)
        .wrapping_add(a << 24)
}

/// Final avalanche step (Bret Mulvey's FNV mix).
#[inline]
fn fnv_mix(mut a: u32) -> u32 {
    a = a.wrapping_add(a << 13);
    a ^= a >> 7;
    a = a.wrapping_add(a << 3);
    a ^= a >> 17;
    a = a.wrapping_add(a << 5);
    a
}
