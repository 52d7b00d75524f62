//! Tree error types.

use thiserror::Error;
use treewalk_query::SelectorError;

/// Errors that can occur in tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Invalid or incomplete accessor configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A query could not be compiled.
    #[error("Selector error: {0}")]
    Selector(#[from] SelectorError),
}

impl TreeError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
