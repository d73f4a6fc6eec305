//! Error module for the bloomfilter crate.
//!
//! Filter operations themselves are infallible; errors come from the checked
//! constructors, configuration loading and logging setup. Each area has its
//! own error type, all of which convert into [`BloomError`].

use std::fmt::{Display, Formatter};
use thiserror::Error;

use crate::data_structures::bloom_filter::BloomFilterError;

pub mod config;

/// Result type alias used throughout the crate.
pub type BloomResult<T> = Result<T, BloomError>;

/// Crate-wide error enum.
#[derive(Error, Debug)]
pub enum BloomError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by the checked filter constructors.
    #[error("Filter error: {0}")]
    Filter(#[from] BloomFilterError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure to install the tracing subscriber.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// An error together with where it happened.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: BloomError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    pub fn new<S: Into<String>>(error: BloomError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Log an error with its context through `tracing`.
pub fn report_error(context: &ErrorContext) {
    tracing::error!(
        error = %context.error,
        component = %context.component,
        details = context.details.as_deref().unwrap_or("None"),
        "Error reported"
    );
}
