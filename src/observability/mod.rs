//! Observability for the book service
//!
//! - Structured logging via `tracing`
//! - Request counters exposed at `/metrics`

mod logging;
mod metrics;

pub use logging::{init_logging, LogConfig, LoggingError};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
