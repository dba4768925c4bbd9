//! Book validation errors

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A required field was empty after trimming.
///
/// Only the first missing field is reported, in the order ID, Title, Author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing book ID")]
    MissingId,

    #[error("Missing book title")]
    MissingTitle,

    #[error("Missing author")]
    MissingAuthor,
}

impl ValidationError {
    /// JSON name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingId => "Id",
            ValidationError::MissingTitle => "Title",
            ValidationError::MissingAuthor => "Author",
        }
    }

    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        "BOOK_VALIDATION_FAILED"
    }
}
