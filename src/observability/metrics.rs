//! Command and request counters.
//!
//! Lightweight atomic counters shared between the mediator and the HTTP
//! layer. They are reported by the health endpoint.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker for the application.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    commands_total: Arc<AtomicU64>,
    commands_rejected_total: Arc<AtomicU64>,
    http_requests_total: Arc<AtomicU64>,
    http_errors_total: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub commands_total: u64,
    pub commands_rejected_total: u64,
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub command_rejection_rate: f64,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            commands_total: Arc::new(AtomicU64::new(0)),
            commands_rejected_total: Arc::new(AtomicU64::new(0)),
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a dispatched command.
    pub fn track_command(&self, command: &str, duration_ms: u128, valid: bool) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);

        if !valid {
            self.commands_rejected_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::debug!(
            command = %command,
            duration_ms = duration_ms,
            valid = valid,
            "Command dispatched"
        );
    }

    /// Track an answered HTTP request.
    pub fn track_http_request(&self, route: &str, success: bool) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);

        if !success {
            self.http_errors_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::trace!(route = %route, success = success, "HTTP request answered");
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total.load(Ordering::Relaxed)
    }

    pub fn commands_rejected_total(&self) -> u64 {
        self.commands_rejected_total.load(Ordering::Relaxed)
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get the command rejection rate (0.0 to 1.0).
    pub fn command_rejection_rate(&self) -> f64 {
        let rejected = self.commands_rejected_total() as f64;
        let total = self.commands_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            commands_total: self.commands_total(),
            commands_rejected_total: self.commands_rejected_total(),
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            command_rejection_rate: self.command_rejection_rate(),
        }
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}
