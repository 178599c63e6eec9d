//! Unified error types for the domain layer
//!
//! Domain operations report failures through `DomainError` so adapters never
//! need to fall back to `String` or `anyhow`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a domain invariant is not satisfied by caller input.
    ///
    /// # Example
    /// ```ignore
    /// if bomb_count >= cells {
    ///     return Err(DomainError::validation("the number of bombs is invalid"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Returns the bare message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("the number of bombs is invalid");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: the number of bombs is invalid"
        );
        assert_eq!(err.message(), "the number of bombs is invalid");
    }
}
