//! sitekit CLI
//!
//! Command-line interface for the site toolkit.
//!
//! # Usage
//!
//! ```bash
//! # Validate a contact submission
//! sitekit validate --submission lead.json
//!
//! # Resolve and print the head metadata for a page
//! sitekit seo --page-type home --path /
//!
//! # Manage admin content
//! sitekit bulletins list
//! sitekit holidays upsert --file holiday.yaml
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Submission validation failed
//! - 3: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 10: Internal error

use clap::Parser;
use sitekit::{run_cli, SiteCli};

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let cli = SiteCli::parse();

    let exit_code = run_cli(cli).await;
    std::process::exit(exit_code.into());
}
