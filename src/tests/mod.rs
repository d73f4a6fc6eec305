//! Test modules for the bloomfilter crate.
//!
//! This module contains crate-internal test suites:
//! - Property-based tests using proptest
//! - Concurrency stress tests
//! - Configuration loading against temporary files
//! - Test fixtures and utilities

pub mod config_tests;

pub use test_utils::{bytes_strategy, TestFixture};
