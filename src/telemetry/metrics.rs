//! Prometheus metrics for sitekit
//!
//! Metrics collected:
//! - `seo_fetch_total` (counter) - metadata fetches by source outcome
//! - `seo_fetch_duration_seconds` (histogram) - fetch latency
//! - `seo_sync_total` (counter) - synchronizer passes by result
//! - `head_mutations_total` (counter) - head upserts applied
//! - `contact_findings_total` (counter) - validation findings by field and code

use prometheus::{Counter, CounterVec, Histogram, HistogramOpts, Opts, Registry};
use std::sync::Arc;

use crate::error::{Result, SiteError};
use crate::seo::MetadataSource;

/// Site metrics handles
pub struct SiteMetrics {
    /// Metadata fetches by outcome (backend or defaults)
    seo_fetch_total: CounterVec,

    /// Metadata fetch duration distribution
    seo_fetch_duration_seconds: Histogram,

    /// Synchronizer passes by result (applied or superseded)
    seo_sync_total: CounterVec,

    /// Head upserts applied
    head_mutations_total: Counter,

    /// Contact-form findings by field and code
    contact_findings_total: CounterVec,
}

impl SiteMetrics {
    /// Create the metrics and register them with the provided registry
    pub fn new(registry: Arc<Registry>) -> Result<Self> {
        let seo_fetch_total = CounterVec::new(
            Opts::new("seo_fetch_total", "Total SEO metadata fetches by source").namespace("sitekit"),
            &["source"],
        )?;

        let seo_fetch_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "seo_fetch_duration_seconds",
                "SEO metadata fetch duration in seconds",
            )
            .namespace("sitekit")
            .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
        )?;

        let seo_sync_total = CounterVec::new(
            Opts::new("seo_sync_total", "Total synchronizer passes by result").namespace("sitekit"),
            &["result"],
        )?;

        let head_mutations_total = Counter::with_opts(
            Opts::new("head_mutations_total", "Total head tag upserts applied").namespace("sitekit"),
        )?;

        let contact_findings_total = CounterVec::new(
            Opts::new(
                "contact_findings_total",
                "Total contact-form validation findings",
            )
            .namespace("sitekit"),
            &["field", "code"],
        )?;

        registry.register(Box::new(seo_fetch_total.clone()))?;
        registry.register(Box::new(seo_fetch_duration_seconds.clone()))?;
        registry.register(Box::new(seo_sync_total.clone()))?;
        registry.register(Box::new(head_mutations_total.clone()))?;
        registry.register(Box::new(contact_findings_total.clone()))?;

        Ok(Self {
            seo_fetch_total,
            seo_fetch_duration_seconds,
            seo_sync_total,
            head_mutations_total,
            contact_findings_total,
        })
    }

    /// Record a metadata fetch outcome and its duration
    pub fn record_fetch(&self, source: MetadataSource, duration_secs: f64) {
        let label = match source {
            MetadataSource::Backend => "backend",
            MetadataSource::Defaults => "defaults",
        };
        self.seo_fetch_total.with_label_values(&[label]).inc();
        self.seo_fetch_duration_seconds.observe(duration_secs);
    }

    /// Record a synchronizer pass that applied mutations
    pub fn record_sync_applied(&self, mutations: usize) {
        self.seo_sync_total.with_label_values(&["applied"]).inc();
        self.head_mutations_total.inc_by(mutations as f64);
    }

    /// Record a synchronizer pass that was superseded
    pub fn record_sync_superseded(&self) {
        self.seo_sync_total.with_label_values(&["superseded"]).inc();
    }

    /// Record a contact-form validation finding
    pub fn record_finding(&self, field: &str, code: &str) {
        self.contact_findings_total
            .with_label_values(&[field, code])
            .inc();
    }
}

/// Registry for all site metrics
pub struct SiteMetricsRegistry {
    registry: Arc<Registry>,
    metrics: Arc<SiteMetrics>,
}

impl SiteMetricsRegistry {
    /// Create a new metrics registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        let metrics = Arc::new(SiteMetrics::new(Arc::clone(&registry))?);
        Ok(Self { registry, metrics })
    }

    /// Create with an existing Prometheus registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let metrics = Arc::new(SiteMetrics::new(Arc::clone(&registry))?);
        Ok(Self { registry, metrics })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        Arc::clone(&self.registry)
    }

    /// Shared handle to the metrics
    pub fn metrics(&self) -> Arc<SiteMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Gather all metrics in Prometheus format
    pub fn gather(&self) -> Vec<prometheus::proto::MetricFamily> {
        self.registry.gather()
    }

    /// Encode metrics as text for scraping
    pub fn encode_text(&self) -> Result<String> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = self.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(SiteError::MetricsError)?;
        String::from_utf8(buffer)
            .map_err(|e| SiteError::MetricsError(prometheus::Error::Msg(e.to_string())))
    }
}
