//! sitekit
//!
//! Toolkit behind the marketing website of a labour-law compliance
//! consultancy: contact-form validation and SEO head synchronization,
//! plus thin clients for the content-admin endpoints.
//!
//! ## Features
//!
//! - **Field Validation**: Pure, synchronous per-field rules for the
//!   contact form with stable, user-facing messages
//! - **SEO Synchronization**: Fetch per-page metadata with caching
//!   disabled, degrade to immutable defaults on any failure, and
//!   reconcile idempotently into a head sink
//! - **Last Request Wins**: Overlapping synchronization passes are
//!   ordered by a generation token; stale resolutions are discarded
//! - **Admin Clients**: Typed wrappers for the compliance-bulletin and
//!   holiday-calendar CRUD endpoints
//! - **Telemetry**: Optional Prometheus metrics for fetch outcomes,
//!   sync passes, and validation findings
//! - **CLI Support**: Full command-line interface with table/JSON/YAML
//!   output and conventional exit codes
//!
//! ## Architecture
//!
//! 1. **Contact** (`contact/`): Field rules and the submission validator.
//! 2. **SEO** (`seo/`): Metadata model, fallback resolution, head
//!    reconciliation behind the [`HeadSink`] adapter, and the
//!    synchronizer.
//! 3. **Client** (`client/`): HTTP client for the site backend.
//! 4. **Admin** (`admin/`): Content entity models.
//! 5. **Telemetry** (`telemetry/`): Prometheus metrics.
//! 6. **CLI** (`cli/`): Command definitions and output rendering.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sitekit::{MemoryHead, PageContext, SeoSynchronizer, SiteClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = SiteClient::new("http://localhost:8080");
//!     let synchronizer = SeoSynchronizer::new(client);
//!
//!     let page = PageContext::new("home", "/");
//!     let mut head = MemoryHead::new();
//!     let outcome = synchronizer.sync(&page, &mut head).await;
//!     println!("{:?}", outcome);
//! }
//! ```

pub mod admin;
pub mod cli;
pub mod client;
pub mod contact;
pub mod error;
pub mod seo;
pub mod telemetry;

// Re-export commonly used types
pub use admin::{ComplianceBulletin, Holiday, NEW_ID};
pub use client::{SiteClient, SiteClientBuilder, SiteClientConfig};
pub use contact::rules::{
    validate_email, validate_message, validate_name, validate_phone, validate_service, FieldRule,
};
pub use contact::{
    ContactField, ContactSubmission, ContactValidator, FieldFinding, ValidationReport,
};
pub use error::{Result, SiteError};
pub use seo::{
    reconcile, HeadKey, HeadMutation, HeadSink, HeadState, MemoryHead, MetadataSource,
    PageContext, ResolvedSeo, SeoDefaults, SeoMetadata, SeoSynchronizer, SyncOutcome,
};
pub use telemetry::{SiteMetrics, SiteMetricsRegistry};

// Re-export CLI types for command-line usage
pub use cli::{ExitCode, OutputFormat, SiteCli, SiteCommands};

/// Crate version (from Cargo.toml)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the CLI application
///
/// This is the main entry point for the CLI binary.
pub async fn run_cli(cli: SiteCli) -> ExitCode {
    match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from_error(&e)
        }
    }
}
