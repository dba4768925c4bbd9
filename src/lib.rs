//! bookshelf - an in-memory book catalog served over HTTP
//!
//! - `book`: the record type and required-field validation
//! - `store`: the ordered in-memory collection and its CRUD operations
//! - `http_server`: axum routes mapping HTTP onto the store
//! - `observability`: logging and request counters
//! - `cli`: configuration and the `init` / `serve` commands

pub mod book;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
