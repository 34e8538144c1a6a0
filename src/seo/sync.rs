//! SEO head synchronizer
//!
//! One pass per navigation: fetch the page's metadata with caching
//! disabled, fall back to the immutable defaults on any failure, and
//! reconcile the resolved record into the head sink. Overlapping passes
//! are ordered by a monotonic generation token; a pass whose token is no
//! longer the latest discards its result before touching the sink, so
//! the head always reflects the most recent navigation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::client::SiteClient;
use crate::telemetry::SiteMetrics;

use super::head::{reconcile, HeadSink};
use super::metadata::{ResolvedSeo, SeoDefaults, SeoMetadata};

/// Identity of one routed page view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Backend page-type identifier (e.g. `home`, `service_detail`)
    pub page_type: String,
    /// Optional reference id for detail pages
    pub reference_id: Option<String>,
    /// Current route path, used for the canonical fallback
    pub path: String,
}

impl PageContext {
    pub fn new(page_type: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            page_type: page_type.into(),
            reference_id: None,
            path: path.into(),
        }
    }

    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = Some(reference_id.into());
        self
    }
}

/// Where the applied metadata came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataSource {
    /// The backend returned a usable record
    Backend,
    /// Any failure branch: non-success status, empty record, transport
    /// or parse error
    Defaults,
}

/// Outcome of a synchronizer pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The resolved metadata was applied to the sink
    Applied {
        source: MetadataSource,
        /// Number of head mutations that were needed to converge
        mutations: usize,
    },
    /// A newer pass started before this one resolved; nothing was applied
    Superseded,
}

/// Synchronizes the head sink with backend-supplied page metadata
pub struct SeoSynchronizer {
    client: SiteClient,
    defaults: SeoDefaults,
    generation: AtomicU64,
    metrics: Option<Arc<SiteMetrics>>,
}

impl SeoSynchronizer {
    /// Create a synchronizer using the process-wide defaults
    pub fn new(client: SiteClient) -> Self {
        Self::with_defaults(client, SeoDefaults::global().clone())
    }

    /// Create a synchronizer with explicit defaults
    pub fn with_defaults(client: SiteClient, defaults: SeoDefaults) -> Self {
        Self {
            client,
            defaults,
            generation: AtomicU64::new(0),
            metrics: None,
        }
    }

    /// Record fetch and sync outcomes to the given metrics handle
    pub fn with_metrics(mut self, metrics: Arc<SiteMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// The defaults this synchronizer falls back to
    pub fn defaults(&self) -> &SeoDefaults {
        &self.defaults
    }

    /// Run one synchronization pass for a page view
    ///
    /// Never fails: every failure branch degrades to the defaults, and
    /// the only non-applied outcome is being superseded by a newer pass.
    pub async fn sync(&self, page: &PageContext, sink: &mut dyn HeadSink) -> SyncOutcome {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let started = Instant::now();

        let fetched = self.fetch(page).await;
        let source = if fetched.is_some() {
            MetadataSource::Backend
        } else {
            MetadataSource::Defaults
        };

        if let Some(metrics) = &self.metrics {
            metrics.record_fetch(source, started.elapsed().as_secs_f64());
        }

        // A later pass has started; its result owns the head now.
        if self.generation.load(Ordering::SeqCst) != token {
            tracing::debug!(
                page_type = %page.page_type,
                path = %page.path,
                "discarding superseded seo resolution"
            );
            if let Some(metrics) = &self.metrics {
                metrics.record_sync_superseded();
            }
            return SyncOutcome::Superseded;
        }

        let resolved = ResolvedSeo::resolve(fetched.as_ref(), &self.defaults, &page.path);
        let mutations = reconcile(&sink.current(), &resolved);
        for mutation in &mutations {
            sink.apply(mutation);
        }

        if let Some(metrics) = &self.metrics {
            metrics.record_sync_applied(mutations.len());
        }

        SyncOutcome::Applied {
            source,
            mutations: mutations.len(),
        }
    }

    /// Fetch the page metadata, collapsing every failure branch to `None`
    ///
    /// "Not found", an empty record, and transport/parse errors are
    /// deliberately indistinguishable to callers; the distinction only
    /// reaches the logs.
    async fn fetch(&self, page: &PageContext) -> Option<SeoMetadata> {
        match self
            .client
            .fetch_public_seo(&page.page_type, page.reference_id.as_deref())
            .await
        {
            Ok(Some(metadata)) => Some(metadata),
            Ok(None) => {
                tracing::warn!(
                    page_type = %page.page_type,
                    path = %page.path,
                    "no seo metadata for page, using defaults"
                );
                None
            }
            Err(error) => {
                tracing::warn!(
                    page_type = %page.page_type,
                    path = %page.path,
                    error = %error,
                    "seo metadata fetch failed, using defaults"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_context_builder() {
        let page = PageContext::new("service_detail", "/services/payroll")
            .with_reference_id("42");
        assert_eq!(page.page_type, "service_detail");
        assert_eq!(page.reference_id.as_deref(), Some("42"));
        assert_eq!(page.path, "/services/payroll");
    }

    #[test]
    fn test_sync_outcome_equality() {
        assert_eq!(
            SyncOutcome::Applied {
                source: MetadataSource::Defaults,
                mutations: 14
            },
            SyncOutcome::Applied {
                source: MetadataSource::Defaults,
                mutations: 14
            }
        );
        assert_ne!(
            SyncOutcome::Superseded,
            SyncOutcome::Applied {
                source: MetadataSource::Backend,
                mutations: 0
            }
        );
    }
}
