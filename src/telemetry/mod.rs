//! Telemetry for sitekit
//!
//! Prometheus metrics for the synchronizer and the contact validator.
//! Metrics are optional everywhere: a component constructed without a
//! handle behaves identically and records nothing.

pub mod metrics;

pub use metrics::{SiteMetrics, SiteMetricsRegistry};
