//! Request counters
//!
//! - Counters only, monotonic
//! - Reset only on process start
//! - Relaxed atomics; exactness across threads is not required

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for the book API
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    books_listed: AtomicU64,
    books_read: AtomicU64,
    books_created: AtomicU64,
    books_updated: AtomicU64,
    books_deleted: AtomicU64,
    requests_rejected: AtomicU64,
}

/// Point-in-time copy of every counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub books_listed: u64,
    pub books_read: u64,
    pub books_created: u64,
    pub books_updated: u64,
    pub books_deleted: u64,
    pub requests_rejected: u64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_listed(&self) {
        self.books_listed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_read(&self) {
        self.books_read.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_created(&self) {
        self.books_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.books_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.books_deleted.fetch_add(1, Ordering::Relaxed);
    }

    /// Any request answered with a 4xx status
    pub fn increment_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            books_listed: self.books_listed.load(Ordering::Relaxed),
            books_read: self.books_read.load(Ordering::Relaxed),
            books_created: self.books_created.load(Ordering::Relaxed),
            books_updated: self.books_updated.load(Ordering::Relaxed),
            books_deleted: self.books_deleted.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
        }
    }
}
