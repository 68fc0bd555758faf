//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: callers report it and carry on. Terminal and
/// IO failures belong to the shell, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A name was empty after trimming whitespace.
    #[error("name cannot be empty")]
    EmptyName,

    /// An item with the same case-insensitive name already exists.
    #[error("'{0}' already exists")]
    DuplicateName(String),

    /// No item matches the given name.
    #[error("'{0}' not found")]
    NotFound(String),

    /// A sack count below the minimum of one.
    #[error("sack count must be at least 1 (got {0})")]
    InvalidSackCount(u64),
}

impl DomainError {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Stable machine-readable tag, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::EmptyName => "empty_name",
            DomainError::DuplicateName(_) => "duplicate_name",
            DomainError::NotFound(_) => "not_found",
            DomainError::InvalidSackCount(_) => "invalid_sack_count",
        }
    }
}
