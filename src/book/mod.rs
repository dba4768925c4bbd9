//! Book records and their validation
//!
//! A book is a flat record keyed by a string `Id`. Three fields are
//! required (`Id`, `Title`, `Author`); the rest are free-form.

mod errors;
mod types;
mod validator;
mod wire;

pub use errors::{ValidationError, ValidationResult};
pub use types::{seed_books, Book};
pub use validator::validate_book;
pub use wire::decode_book;
