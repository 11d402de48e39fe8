//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every store operation either succeeds or fails with exactly one of these
/// kinds. The message is meant to be shown to the operator as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The SKU is already present in the live inventory.
    #[error("duplicate SKU: {0} already exists")]
    DuplicateKey(String),

    /// The SKU is not present in the live inventory.
    #[error("item {0} not found")]
    NotFound(String),

    /// A text field was empty, or an update named a field that does not exist.
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// A numeric field was negative (or not a finite number).
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl DomainError {
    pub fn duplicate_key(sku: impl Into<String>) -> Self {
        Self::DuplicateKey(sku.into())
    }

    pub fn not_found(sku: impl Into<String>) -> Self {
        Self::NotFound(sku.into())
    }

    pub fn invalid_field(msg: impl Into<String>) -> Self {
        Self::InvalidField(msg.into())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Short machine-friendly name of the error kind (used as a log field).
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::DuplicateKey(_) => "duplicate_key",
            DomainError::NotFound(_) => "not_found",
            DomainError::InvalidField(_) => "invalid_field",
            DomainError::InvalidValue(_) => "invalid_value",
        }
    }
}
