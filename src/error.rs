//! Error types for the near-duplicate detection core

use std::fmt;

/// Errors that can occur while constructing the permutation machinery
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NearDupError {
    /// An argument violated a precondition of the operation it was passed to
    InvalidArgument {
        /// Human-readable description of the violated constraint
        message: String,
    },
}

impl fmt::Display for NearDupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NearDupError::InvalidArgument { message } => {
                write!(f, "invalid argument: {}", message)
            }
        }
    }
}

impl std::error::Error for NearDupError {}

/// Result type alias for near-duplicate detection operations
pub type Result<T> = std::result::Result<T, NearDupError>;
