//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, conflicts). Storage concerns belong elsewhere.
///
/// Every variant is recoverable: the presentation layer reports it and
/// re-presents the form. No variant leaves the table mutated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// An item with the same (case-insensitive) name already exists.
    #[error("item '{0}' already exists in inventory")]
    DuplicateItem(String),

    /// A sell was attempted for more stock than is available.
    #[error("not enough stock to sell: {requested} requested, {available} available")]
    InsufficientStock { available: f64, requested: f64 },

    /// The named item is not present in the table.
    #[error("item '{0}' not found")]
    NotFound(String),

    /// A value failed validation (e.g. blank name, negative quantity).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn duplicate_item(name: impl Into<String>) -> Self {
        Self::DuplicateItem(name.into())
    }

    pub fn insufficient_stock(available: f64, requested: f64) -> Self {
        Self::InsufficientStock {
            available,
            requested,
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
