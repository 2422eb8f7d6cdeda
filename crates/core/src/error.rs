//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, lookups). IO failures belong to the infrastructure layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field failed validation (e.g. non-numeric cost).
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Another record already uses this code (case-insensitive).
    #[error("a shoe with code '{0}' already exists")]
    DuplicateCode(String),

    /// An aggregate query (lowest/highest) was made with no records.
    #[error("the inventory is empty")]
    EmptyInventory,

    /// No record matches the requested code.
    #[error("no shoe with code '{0}' exists")]
    NotFound(String),
}

impl DomainError {
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn duplicate_code(code: impl Into<String>) -> Self {
        Self::DuplicateCode(code.into())
    }

    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound(code.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            DomainError::invalid_field("cost", "must be a whole number").to_string(),
            "invalid cost: must be a whole number"
        );
        assert_eq!(
            DomainError::duplicate_code("SKU123").to_string(),
            "a shoe with code 'SKU123' already exists"
        );
        assert_eq!(DomainError::EmptyInventory.to_string(), "the inventory is empty");
        assert_eq!(
            DomainError::not_found("nope").to_string(),
            "no shoe with code 'nope' exists"
        );
    }
}
