//! Store error types

use thiserror::Error;

use crate::book::ValidationError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by `BookStore` mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Candidate record failed validation; the store was not touched
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record carries the requested key
    #[error("Book not found")]
    NotFound(String),
}

impl StoreError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::Validation(e) => e.code(),
            StoreError::NotFound(_) => "BOOK_NOT_FOUND",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = StoreError::from(ValidationError::MissingTitle);
        assert_eq!(err.to_string(), "Missing book title");
        assert_eq!(err.code(), "BOOK_VALIDATION_FAILED");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found() {
        let err = StoreError::NotFound("9".to_string());
        assert_eq!(err.to_string(), "Book not found");
        assert_eq!(err.code(), "BOOK_NOT_FOUND");
        assert!(err.is_not_found());
    }
}
