// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bloom filter sizing.
//!
//! - `m = ceil(-n * ln(p) / ln(2)^2)`
//! - `k = ceil(ln(2) * m / n)`
//! - `FPR = (1 - e^(-k * n / m))^k`

use std::f64::consts::LN_2;

/// Largest multiple of 32 representable as a `u32` bit count.
pub(crate) const MAX_BIT_COUNT: u32 = u32::MAX - u32::MAX % 32;

/// Estimate the bit count `m` and hash count `k` for `expected_items`
/// distinct values at a target false positive probability.
///
/// `k` is derived from the unrounded `m`; only afterwards is `m` rounded up to
/// a multiple of 32 for allocation. Filters exported by other implementations
/// were sized this way, so the order matters for reproducing them.
///
/// The bit count is capped at 4294967264, the largest multiple of 32 that fits
/// in a `u32`; `k` still reflects the uncapped estimate.
///
/// No validation is performed: `expected_items == 0` or a probability outside
/// `(0, 1)` give meaningless (saturated) results.
///
/// # Examples
///
/// ```
/// use bloomfilter::estimate_parameters;
///
/// assert_eq!(estimate_parameters(1_000, 0.01), (9_600, 7));
/// ```
pub fn estimate_parameters(expected_items: usize, false_positive_rate: f64) -> (u32, usize) {
    let n = expected_items as f64;
    let m = optimal_bits(n, false_positive_rate);
    let k = (LN_2 * m / n).ceil() as usize;

    let bits = round_up_to_word(m as u64).min(u64::from(MAX_BIT_COUNT)) as u32;

    tracing::debug!(
        expected_items,
        false_positive_rate,
        bit_count = bits,
        hash_count = k,
        "Estimated bloom filter parameters"
    );

    (bits, k)
}

/// Word-aligned bit count the estimate asks for, before capping at
/// [`MAX_BIT_COUNT`].
pub(crate) fn required_bits(expected_items: usize, false_positive_rate: f64) -> u64 {
    round_up_to_word(optimal_bits(expected_items as f64, false_positive_rate) as u64)
}

fn optimal_bits(n: f64, false_positive_rate: f64) -> f64 {
    (-n * false_positive_rate.ln() / (LN_2 * LN_2)).ceil()
}

fn round_up_to_word(bits: u64) -> u64 {
    if bits % 32 > 0 {
        bits.saturating_add(32 - bits % 32)
    } else {
        bits
    }
}

/// Theoretical false positive probability after `items` insertions into a
/// filter of `bit_count` bits probed at `hash_count` positions.
pub fn false_positive_rate(bit_count: u32, hash_count: usize, items: usize) -> f64 {
    if bit_count == 0 {
        return 1.0;
    }
    let exponent = -(hash_count as f64) * (items as f64) / f64::from(bit_count);
    (1.0 - exponent.exp()).powi(hash_count as i32)
}
