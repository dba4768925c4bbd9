//! Request body decoding
//!
//! Object keys are matched against the wire names case-insensitively, so
//! `{"id": ..}` and `{"ID": ..}` both land in `Id`. When a body carries the
//! same field under several casings, the exact-case key wins.

use serde_json::{Map, Value};

use super::types::Book;

const WIRE_FIELDS: [&str; 7] = [
    "Id",
    "Title",
    "Author",
    "Publisher",
    "PublishDate",
    "Rating",
    "Status",
];

/// Decode a JSON request body into a `Book`.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed JSON, a non-object body or a
/// field of the wrong type.
pub fn decode_book(body: &[u8]) -> serde_json::Result<Book> {
    let value = match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Value::Object(canonicalize_keys(map)),
        other => other,
    };
    serde_json::from_value(value)
}

/// Rename keys to their wire spelling and drop unknown keys
fn canonicalize_keys(map: Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    let mut exact = Vec::new();

    for (key, value) in map {
        match WIRE_FIELDS.iter().find(|field| field.eq_ignore_ascii_case(&key)) {
            Some(field) if *field == key => exact.push((key, value)),
            Some(field) => {
                out.insert((*field).to_string(), value);
            }
            None => {}
        }
    }

    for (key, value) in exact {
        out.insert(key, value);
    }
    out
}
