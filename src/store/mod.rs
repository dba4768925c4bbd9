//! In-memory record store for books

mod book_store;
mod config;
mod errors;

pub use book_store::{BookStore, UpdatePlacement};
pub use config::StoreConfig;
pub use errors::{StoreError, StoreResult};
