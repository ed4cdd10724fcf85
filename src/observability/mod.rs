//! Observability module for monitoring and metrics.
//!
//! Counters for dispatched commands and answered requests. Structured
//! logging goes through `tracing` directly at the call sites.

pub mod metrics;

pub use metrics::{MetricsSnapshot, MetricsTracker, Timer};
