// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Bloom filter.

/// Errors that can occur in Bloom filter operations.
///
/// The core operations (`add`, `test`, `to_bytes`) never fail; these only come
/// from the checked constructors.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BloomFilterError {
    /// The filter has an invalid configuration
    #[error("Invalid filter configuration: {0}")]
    InvalidConfiguration(String),

    /// A byte export could not be turned back into a filter
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for Bloom filter operations
pub type Result<T> = std::result::Result<T, BloomFilterError>;
