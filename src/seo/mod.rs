//! SEO metadata synchronization
//!
//! Keeps the document head's discoverability metadata consistent with
//! backend-supplied, page-specific configuration, degrading to immutable
//! site defaults whenever the backend cannot provide a usable record.
//!
//! The module splits into:
//! - `metadata`: the wire record, the site defaults, and the per-slot
//!   fallback chains that resolve a partial record into a complete one
//! - `head`: the keyed head model, pure reconciliation, and the
//!   [`HeadSink`] adapter boundary
//! - `sync`: the fetch-resolve-apply pass with last-request-wins ordering

pub mod head;
pub mod metadata;
pub mod sync;

pub use head::{reconcile, HeadKey, HeadMutation, HeadSink, HeadState, MemoryHead};
pub use metadata::{ResolvedSeo, SeoDefaults, SeoMetadata};
pub use sync::{MetadataSource, PageContext, SeoSynchronizer, SyncOutcome};
