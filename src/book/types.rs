//! Book record type
//!
//! JSON field names are capitalized on the wire (`Id`, `Title`, ...) and must
//! stay that way for client compatibility.

use serde::{Deserialize, Deserializer, Serialize};

/// A single book record.
///
/// Every field defaults to its zero value when absent from the JSON body or
/// set to `null`, so a record missing `Title` still decodes and is rejected
/// by the validator instead of the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    #[serde(rename = "Id", deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(rename = "Title", deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(rename = "Author", deserialize_with = "null_as_default")]
    pub author: String,

    #[serde(rename = "Publisher", deserialize_with = "null_as_default")]
    pub publisher: String,

    /// Free-form date string, never parsed
    #[serde(rename = "PublishDate", deserialize_with = "null_as_default")]
    pub publish_date: String,

    #[serde(rename = "Rating", deserialize_with = "null_as_default")]
    pub rating: i64,

    #[serde(rename = "Status", deserialize_with = "null_as_default")]
    pub status: String,
}

/// Decode a field, treating an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Book {
    /// Create a book with only the required fields set
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            ..Default::default()
        }
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    pub fn with_publish_date(mut self, publish_date: impl Into<String>) -> Self {
        self.publish_date = publish_date.into();
        self
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

/// The two records every freshly seeded store starts with.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new("1", "Hello World", "Jane Doe")
            .with_publisher("Publish House")
            .with_publish_date("10/01/2017")
            .with_rating(2)
            .with_status("Published"),
        Book::new("2", "Hello City", "John Smith")
            .with_publisher("Publish House")
            .with_publish_date("10/01/2019")
            .with_rating(2)
            .with_status("Under Review"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_names_are_capitalized() {
        let book = Book::new("7", "Dune", "Frank Herbert").with_rating(5);
        let value = serde_json::to_value(&book).unwrap();

        assert_eq!(
            value,
            json!({
                "Id": "7",
                "Title": "Dune",
                "Author": "Frank Herbert",
                "Publisher": "",
                "PublishDate": "",
                "Rating": 5,
                "Status": ""
            })
        );
    }

    #[test]
    fn test_missing_fields_default_to_zero_values() {
        let book: Book = serde_json::from_str(r#"{"Id":"4"}"#).unwrap();
        assert_eq!(book.id, "4");
        assert!(book.title.is_empty());
        assert_eq!(book.rating, 0);
    }

    #[test]
    fn test_null_fields_default_to_zero_values() {
        let book: Book = serde_json::from_str(
            r#"{"Id":"5","Title":"T","Author":"A","Publisher":null,"Rating":null}"#,
        )
        .unwrap();
        assert_eq!(book, Book::new("5", "T", "A"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let book: Book =
            serde_json::from_str(r#"{"Id":"4","Title":"T","Author":"A","Pages":300}"#).unwrap();
        assert_eq!(book, Book::new("4", "T", "A"));
    }

    #[test]
    fn test_seed_books() {
        let seed = seed_books();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].id, "1");
        assert_eq!(seed[0].status, "Published");
        assert_eq!(seed[1].id, "2");
        assert_eq!(seed[1].author, "John Smith");
    }
}
