//! Required-field validation for book records
//!
//! Validation semantics:
//! - `Id`, `Title` and `Author` must be non-empty after trimming whitespace
//! - Fields are checked in that order and the first failure is reported
//! - Optional fields are never inspected
//! - Validation does not mutate the record

use super::errors::{ValidationError, ValidationResult};
use super::types::Book;

/// Validates that all required fields of `book` are present.
///
/// # Errors
///
/// Returns the `ValidationError` for the first blank required field.
pub fn validate_book(book: &Book) -> ValidationResult<()> {
    if is_blank(&book.id) {
        return Err(ValidationError::MissingId);
    }
    if is_blank(&book.title) {
        return Err(ValidationError::MissingTitle);
    }
    if is_blank(&book.author) {
        return Err(ValidationError::MissingAuthor);
    }
    Ok(())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_book_passes() {
        let book = Book::new("1", "Title", "Author");
        assert!(validate_book(&book).is_ok());
    }

    #[test]
    fn test_optional_fields_are_not_required() {
        let book = Book::new("1", "Title", "Author").with_rating(0);
        assert!(book.publisher.is_empty());
        assert!(validate_book(&book).is_ok());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let book = Book::new(" \t\n", "Title", "Author");
        assert_eq!(validate_book(&book), Err(ValidationError::MissingId));

        let book = Book::new("1", "   ", "Author");
        assert_eq!(validate_book(&book), Err(ValidationError::MissingTitle));

        let book = Book::new("1", "Title", "");
        assert_eq!(validate_book(&book), Err(ValidationError::MissingAuthor));
    }

    #[test]
    fn test_first_missing_field_wins() {
        let book = Book::default();
        assert_eq!(validate_book(&book), Err(ValidationError::MissingId));

        let book = Book::new("4", "", "");
        assert_eq!(validate_book(&book), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn test_surrounding_whitespace_is_allowed() {
        let book = Book::new(" 1 ", " Title ", " Author ");
        assert!(validate_book(&book).is_ok());
    }
}
