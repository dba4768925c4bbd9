//! # Book HTTP Server Module
//!
//! Maps HTTP verbs and paths onto the book store and serializes results as
//! JSON. All routers are combined into a single Axum server.
//!
//! # Endpoints
//!
//! - `/books`, `/book`, `/book/:id` - Book CRUD
//! - `/` - Welcome page
//! - `/health` - Health check
//! - `/metrics` - Request counters

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use book_routes::BookState;
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
