//! CLI command definitions for sitekit
//!
//! Clap-based commands for validating contact submissions, running SEO
//! synchronization passes, and managing admin content.

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use super::output::{render_bulletins, render_holidays, HeadOutput, OutputFormat, ReportOutput};
use super::ExitCode;
use crate::admin::{ComplianceBulletin, Holiday};
use crate::client::SiteClient;
use crate::contact::{ContactSubmission, ContactValidator};
use crate::error::{Result, SiteError};
use crate::seo::{HeadSink, MemoryHead, PageContext, SeoSynchronizer};

/// sitekit CLI
///
/// Validate contact-form submissions, synchronize SEO head metadata, and
/// manage the site's admin content.
#[derive(Parser, Debug)]
#[command(name = "sitekit")]
#[command(about = "Site toolkit - contact validation and SEO head synchronization", long_about = None)]
#[command(version)]
pub struct SiteCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Backend API base URL
    #[arg(
        long,
        global = true,
        env = "SITE_API_BASE_URL",
        default_value = "http://localhost:8080"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: SiteCommands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum SiteCommands {
    /// Validate a contact-form submission
    ///
    /// Reads a submission file (JSON or YAML by extension) and runs every
    /// field rule against it. Exits 1 when any field is invalid.
    Validate {
        /// Path to the submission file
        #[arg(short, long)]
        submission: PathBuf,

        /// Output format for the validation report
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Run one SEO synchronization pass and print the resolved head
    ///
    /// Fetches the page's metadata from the backend (falling back to the
    /// site defaults on any failure) and reconciles it into an in-memory
    /// head.
    Seo {
        /// Backend page-type identifier
        #[arg(long)]
        page_type: String,

        /// Reference id for detail pages
        #[arg(long)]
        reference_id: Option<String>,

        /// Route path, used for the canonical fallback
        #[arg(long, default_value = "/")]
        path: String,

        /// Output format for the resolved head
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Manage compliance bulletins
    Bulletins {
        #[command(subcommand)]
        command: BulletinCommands,
    },

    /// Manage the holiday calendar
    Holidays {
        #[command(subcommand)]
        command: HolidayCommands,
    },
}

/// Bulletin management commands
#[derive(Subcommand, Debug)]
pub enum BulletinCommands {
    /// List all bulletins
    List {
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },
    /// Create or update a bulletin from a file (id 0 creates)
    Upsert {
        /// Path to the bulletin file (JSON or YAML by extension)
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a bulletin by id
    Delete {
        /// Bulletin id
        id: u64,
    },
}

/// Holiday management commands
#[derive(Subcommand, Debug)]
pub enum HolidayCommands {
    /// List all holidays
    List {
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },
    /// Create or update a holiday from a file (id 0 creates)
    Upsert {
        /// Path to the holiday file (JSON or YAML by extension)
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Delete a holiday by id
    Delete {
        /// Holiday id
        id: u64,
    },
}

/// Load a JSON or YAML file into a typed value, by extension
fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SiteError::file_error(format!("{}: {}", path.display(), e)))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
        _ => Ok(serde_json::from_str(&content)?),
    }
}

/// Execute the validate command
pub fn execute_validate(
    submission: PathBuf,
    format: Option<OutputFormat>,
) -> Result<ExitCode> {
    let submission: ContactSubmission = load_file(&submission)?;
    let report = ContactValidator::new().validate(&submission);

    ReportOutput::from_report(&report).render(format.unwrap_or_default())?;

    Ok(if report.valid {
        ExitCode::Success
    } else {
        ExitCode::ValidationError
    })
}

/// Execute the seo command
pub async fn execute_seo(
    api_url: &str,
    page_type: String,
    reference_id: Option<String>,
    path: String,
    format: Option<OutputFormat>,
) -> Result<ExitCode> {
    let client = SiteClient::new(api_url);
    let synchronizer = SeoSynchronizer::new(client);

    let mut page = PageContext::new(page_type, path);
    if let Some(id) = reference_id {
        page = page.with_reference_id(id);
    }

    let mut head = MemoryHead::new();
    let outcome = synchronizer.sync(&page, &mut head).await;

    HeadOutput::from_sync(&outcome, &head.current()).render(format.unwrap_or_default())?;
    Ok(ExitCode::Success)
}

/// Execute a bulletin command
pub async fn execute_bulletins(api_url: &str, command: BulletinCommands) -> Result<ExitCode> {
    let client = SiteClient::new(api_url);
    match command {
        BulletinCommands::List { format } => {
            let bulletins = client.list_bulletins().await?;
            render_bulletins(&bulletins, format.unwrap_or_default())?;
        }
        BulletinCommands::Upsert { file } => {
            let bulletin: ComplianceBulletin = load_file(&file)?;
            let created = bulletin.is_new();
            let saved = client.upsert_bulletin(&bulletin).await?;
            if created {
                println!("Created bulletin #{}: {}", saved.id, saved.title);
            } else {
                println!("Updated bulletin #{}: {}", saved.id, saved.title);
            }
        }
        BulletinCommands::Delete { id } => {
            client.delete_bulletin(id).await?;
            println!("Deleted bulletin #{}", id);
        }
    }
    Ok(ExitCode::Success)
}

/// Execute a holiday command
pub async fn execute_holidays(api_url: &str, command: HolidayCommands) -> Result<ExitCode> {
    let client = SiteClient::new(api_url);
    match command {
        HolidayCommands::List { format } => {
            let holidays = client.list_holidays().await?;
            render_holidays(&holidays, format.unwrap_or_default())?;
        }
        HolidayCommands::Upsert { file } => {
            let holiday: Holiday = load_file(&file)?;
            let created = holiday.is_new();
            let saved = client.upsert_holiday(&holiday).await?;
            if created {
                println!("Created holiday #{}: {} ({})", saved.id, saved.name, saved.date);
            } else {
                println!("Updated holiday #{}: {} ({})", saved.id, saved.name, saved.date);
            }
        }
        HolidayCommands::Delete { id } => {
            client.delete_holiday(id).await?;
            println!("Deleted holiday #{}", id);
        }
    }
    Ok(ExitCode::Success)
}
