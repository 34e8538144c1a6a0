//! HTTP client for the site backend

pub mod api;

pub use api::{SiteClient, SiteClientBuilder, SiteClientConfig};
