//! Request counters
//!
//! - Counters only, monotonic, reset on process start
//! - Relaxed atomics; exact totals, no cross-counter consistency

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests_created: AtomicU64,
    requests_rejected: AtomicU64,
    invalid_bodies: AtomicU64,
    listings_served: AtomicU64,
    encoding_failures: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_created(&self) {
        self.requests_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_invalid_bodies(&self) {
        self.invalid_bodies.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_listings(&self) {
        self.listings_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_encoding_failures(&self) {
        self.encoding_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_created: self.requests_created.load(Ordering::Relaxed),
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            invalid_bodies: self.invalid_bodies.load(Ordering::Relaxed),
            listings_served: self.listings_served.load(Ordering::Relaxed),
            encoding_failures: self.encoding_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of all counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub requests_created: u64,
    pub requests_rejected: u64,
    pub invalid_bodies: u64,
    pub listings_served: u64,
    pub encoding_failures: u64,
}
