//! Book HTTP Routes
//!
//! CRUD endpoints over the shared book store.
//!
//! - `GET    /books`      list every book
//! - `POST   /book`       create
//! - `GET    /book/:id`   read
//! - `PUT    /book/:id`   replace
//! - `DELETE /book/:id`   remove

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use tokio::sync::RwLock;
use tracing::info;

use super::errors::{ApiError, ApiResult};
use crate::book::{self, Book};
use crate::observability::MetricsRegistry;
use crate::store::{BookStore, StoreError};

// ==================
// Shared State
// ==================

/// Book state shared across handlers.
///
/// Reads take the read lock; every mutation holds the write lock for the
/// whole validate, scan and splice step.
#[derive(Debug)]
pub struct BookState {
    pub store: RwLock<BookStore>,
    pub metrics: MetricsRegistry,
}

impl BookState {
    pub fn new(store: BookStore) -> Self {
        Self {
            store: RwLock::new(store),
            metrics: MetricsRegistry::new(),
        }
    }

    /// Count a rejected request and convert the error
    fn reject(&self, err: impl Into<ApiError>) -> ApiError {
        self.metrics.increment_rejected();
        err.into()
    }
}

impl Default for BookState {
    fn default() -> Self {
        Self::new(BookStore::seeded())
    }
}

// ==================
// Book Routes
// ==================

/// Create book routes.
///
/// Unsupported verbs answer 405 with the JSON error body.
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        // listing is read-only; only GET (and the implied HEAD) is served
        .route(
            "/books",
            get(list_books_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/book",
            post(create_book_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/book/:id",
            get(get_book_handler)
                .put(update_book_handler)
                .delete(delete_book_handler)
                .fallback(method_not_allowed_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Keys must look like positive integers. The raw string is still what the
/// store matches on, so "+1" passes this check but does not find book "1".
fn check_key(key: &str) -> ApiResult<()> {
    match key.parse::<i64>() {
        Ok(id) if id > 0 => Ok(()),
        _ => Err(ApiError::InvalidKey(key.to_string())),
    }
}

/// Extract and check the `:id` segment. Undecodable segments are invalid keys.
fn path_key(key: Result<Path<String>, PathRejection>) -> ApiResult<String> {
    let Path(key) = key.map_err(|e| ApiError::InvalidKey(e.body_text()))?;
    check_key(&key)?;
    Ok(key)
}

fn decode_book(body: Result<Bytes, BytesRejection>) -> ApiResult<Book> {
    let body = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    book::decode_book(&body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

// ==================
// Handlers
// ==================

async fn list_books_handler(State(state): State<Arc<BookState>>) -> Json<Vec<Book>> {
    info!("Endpoint List Books");
    state.metrics.increment_listed();

    let store = state.store.read().await;
    Json(store.list().to_vec())
}

async fn create_book_handler(
    State(state): State<Arc<BookState>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    info!("Endpoint Create Book");

    let book = decode_book(body).map_err(|e| state.reject(e))?;

    let mut store = state.store.write().await;
    let created = store.create(book).map_err(|e| state.reject(e))?.clone();
    drop(store);

    state.metrics.increment_created();
    Ok((StatusCode::CREATED, Json(created)))
}

async fn get_book_handler(
    State(state): State<Arc<BookState>>,
    key: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Book>> {
    let key = path_key(key).map_err(|e| state.reject(e))?;
    info!(key = %key, "Endpoint Get Book");

    let store = state.store.read().await;
    let book = store
        .get(&key)
        .cloned()
        .ok_or_else(|| state.reject(StoreError::NotFound(key.clone())))?;
    drop(store);

    state.metrics.increment_read();
    Ok(Json(book))
}

async fn update_book_handler(
    State(state): State<Arc<BookState>>,
    key: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let key = path_key(key).map_err(|e| state.reject(e))?;
    info!(key = %key, "Endpoint Update Book");

    let book = decode_book(body).map_err(|e| state.reject(e))?;

    let mut store = state.store.write().await;
    let updated = store.update(&key, book).map_err(|e| state.reject(e))?.clone();
    drop(store);

    state.metrics.increment_updated();
    Ok((StatusCode::CREATED, Json(updated)))
}

async fn delete_book_handler(
    State(state): State<Arc<BookState>>,
    key: Result<Path<String>, PathRejection>,
) -> ApiResult<StatusCode> {
    let key = path_key(key).map_err(|e| state.reject(e))?;
    info!(key = %key, "Endpoint Delete Book");

    state
        .store
        .write()
        .await
        .delete(&key)
        .map_err(|e| state.reject(e))?;

    state.metrics.increment_deleted();
    Ok(StatusCode::OK)
}

async fn method_not_allowed_handler(
    State(state): State<Arc<BookState>>,
    method: Method,
) -> ApiError {
    state.reject(ApiError::MethodNotAllowed(method.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key() {
        assert!(check_key("1").is_ok());
        assert!(check_key("42").is_ok());
        assert!(check_key("+7").is_ok());

        assert!(check_key("abc").is_err());
        assert!(check_key("0").is_err());
        assert!(check_key("-1").is_err());
        assert!(check_key("").is_err());
        assert!(check_key("1.5").is_err());
    }

    fn decode(body: &'static [u8]) -> ApiResult<Book> {
        decode_book(Ok(Bytes::from_static(body)))
    }

    #[test]
    fn test_decode_book() {
        let book = decode(br#"{"Id":"4","Title":"T","Author":"A"}"#).unwrap();
        assert_eq!(book.id, "4");

        assert!(matches!(decode(b""), Err(ApiError::InvalidBody(_))));
        assert!(matches!(decode(b"not json"), Err(ApiError::InvalidBody(_))));

        let wrong_type = decode(br#"{"Rating":"high"}"#);
        assert!(matches!(wrong_type, Err(ApiError::InvalidBody(_))));
    }

    #[test]
    fn test_default_state_is_seeded() {
        let state = BookState::default();
        assert_eq!(state.store.try_read().unwrap().len(), 2);
    }
}
