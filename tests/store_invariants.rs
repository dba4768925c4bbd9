//! Store Invariant Tests
//!
//! - Rejected records never mutate the store
//! - Create appends in insertion order
//! - Update and delete act on the first matching id only
//! - Not-found operations leave the store untouched

use bookshelf::book::{Book, ValidationError};
use bookshelf::store::{BookStore, StoreError, UpdatePlacement};

// =============================================================================
// Helper Functions
// =============================================================================

fn ids(store: &BookStore) -> Vec<String> {
    store.list().iter().map(|b| b.id.clone()).collect()
}

fn hello_hello() -> Book {
    Book::new("4", "Hello Hello", "Jane Doe")
        .with_publisher("Publish House")
        .with_publish_date("10/23/2017")
        .with_rating(3)
        .with_status("Published")
}

// =============================================================================
// Create
// =============================================================================

#[test]
fn test_create_with_blank_required_field_leaves_store_unchanged() {
    let cases = [
        (Book::new("", "T", "A"), ValidationError::MissingId),
        (Book::new("5", " ", "A"), ValidationError::MissingTitle),
        (Book::new("5", "T", "\t"), ValidationError::MissingAuthor),
    ];

    for (book, expected) in cases {
        let mut store = BookStore::seeded();
        let before = store.list().to_vec();

        let err = store.create(book).unwrap_err();
        assert_eq!(err, StoreError::Validation(expected));
        assert_eq!(store.list(), before.as_slice());
    }
}

#[test]
fn test_create_appends_and_is_readable() {
    let mut store = BookStore::seeded();
    store.create(hello_hello()).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(ids(&store), vec!["1", "2", "4"]);
    assert_eq!(store.get("4"), Some(&hello_hello()));
}

#[test]
fn test_create_allows_duplicate_ids() {
    let mut store = BookStore::seeded();
    store.create(Book::new("1", "Shadowed", "Nobody")).unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.get("1").unwrap().title, "Hello World");
}

// =============================================================================
// Get
// =============================================================================

#[test]
fn test_get_unknown_id_is_none() {
    let store = BookStore::seeded();
    assert!(store.get("99").is_none());
    assert!(store.get("").is_none());
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn test_update_unknown_id_leaves_store_unchanged() {
    let mut store = BookStore::seeded();
    let before = store.list().to_vec();

    let err = store.update("99", hello_hello()).unwrap_err();
    assert_eq!(err, StoreError::NotFound("99".to_string()));
    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn test_update_invalid_record_leaves_store_unchanged() {
    let mut store = BookStore::seeded();
    let before = store.list().to_vec();

    let err = store.update("1", Book::new("1", "T", "")).unwrap_err();
    assert_eq!(err, StoreError::Validation(ValidationError::MissingAuthor));
    assert_eq!(store.list(), before.as_slice());
}

/// Seed [1, 2]; update "1" with record 4 gives [2, 4].
#[test]
fn test_update_moves_record_to_end() {
    let mut store = BookStore::seeded();
    let updated = store.update("1", hello_hello()).unwrap().clone();

    assert_eq!(updated, hello_hello());
    assert_eq!(ids(&store), vec!["2", "4"]);
    assert!(store.get("1").is_none());
    assert_eq!(store.get("4"), Some(&hello_hello()));
}

#[test]
fn test_update_in_place_keeps_order() {
    let mut store = BookStore::seeded().with_placement(UpdatePlacement::InPlace);
    store.update("1", hello_hello()).unwrap();

    assert_eq!(ids(&store), vec!["4", "2"]);
    assert!(store.get("1").is_none());
}

#[test]
fn test_update_same_id_keeps_key() {
    let mut store = BookStore::seeded();
    store
        .update("2", Book::new("2", "Hello Town", "John Smith").with_rating(5))
        .unwrap();

    assert_eq!(ids(&store), vec!["1", "2"]);
    assert_eq!(store.get("2").unwrap().title, "Hello Town");
    assert_eq!(store.get("2").unwrap().rating, 5);
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_unknown_id_leaves_store_unchanged() {
    let mut store = BookStore::seeded();
    let err = store.delete("3").unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(ids(&store), vec!["1", "2"]);
}

#[test]
fn test_delete_known_id() {
    let mut store = BookStore::seeded();
    let removed = store.delete("1").unwrap();

    assert_eq!(removed.title, "Hello World");
    assert!(store.get("1").is_none());
    assert_eq!(ids(&store), vec!["2"]);
}

#[test]
fn test_reset_after_mutations() {
    let mut store = BookStore::seeded();
    store.create(hello_hello()).unwrap();
    store.delete("1").unwrap();

    store.reset();
    assert_eq!(ids(&store), vec!["1", "2"]);
}
