//! In-memory book store
//!
//! An ordered `Vec<Book>` is the single source of truth. Every keyed
//! operation is a linear scan that acts on the FIRST record whose id matches
//! exactly; duplicate ids are tolerated and later duplicates are shadowed.
//!
//! Store guarantees:
//! - Create appends, so insertion order is preserved
//! - Delete preserves the relative order of the remaining records
//! - Validation runs before any scan; a rejected record never mutates the store
//! - Every operation is all-or-nothing

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{StoreError, StoreResult};
use crate::book::{seed_books, validate_book, Book};

/// Where an updated record lands in the sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePlacement {
    /// Remove the old record and push the new one to the end
    #[default]
    Append,
    /// Overwrite the old record at its current index
    InPlace,
}

/// Ordered collection of books.
///
/// Not synchronized; the owner is responsible for serializing access.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    books: Vec<Book>,
    placement: UpdatePlacement,
}

impl BookStore {
    /// Create an empty store
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a store holding the two seed records
    pub fn seeded() -> Self {
        Self {
            books: seed_books(),
            placement: UpdatePlacement::default(),
        }
    }

    /// Set the update placement policy
    pub fn with_placement(mut self, placement: UpdatePlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn placement(&self) -> UpdatePlacement {
        self.placement
    }

    /// Discard all records and reload the seed records
    pub fn reset(&mut self) {
        self.books = seed_books();
    }

    /// All records in sequence order
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Validate `book` and append it to the end of the sequence.
    ///
    /// Returns the stored record.
    pub fn create(&mut self, book: Book) -> StoreResult<&Book> {
        validate_book(&book)?;

        debug!(id = %book.id, "appending book");
        self.books.push(book);
        Ok(&self.books[self.books.len() - 1])
    }

    /// First record whose id equals `id` exactly. `None` means not found.
    pub fn get(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Replace the first record matching `id` with `book`.
    ///
    /// `book` is validated before the scan. The replacement's own id is not
    /// required to equal `id`.
    pub fn update(&mut self, id: &str, book: Book) -> StoreResult<&Book> {
        validate_book(&book)?;

        let index = self.position(id)?;
        debug!(id, new_id = %book.id, placement = ?self.placement, "replacing book");

        let slot = match self.placement {
            UpdatePlacement::Append => {
                self.books.remove(index);
                self.books.push(book);
                self.books.len() - 1
            }
            UpdatePlacement::InPlace => {
                self.books[index] = book;
                index
            }
        };

        Ok(&self.books[slot])
    }

    /// Remove the first record matching `id`, returning it.
    pub fn delete(&mut self, id: &str) -> StoreResult<Book> {
        let index = self.position(id)?;
        debug!(id, "removing book");
        Ok(self.books.remove(index))
    }

    fn position(&self, id: &str) -> StoreResult<usize> {
        self.books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
