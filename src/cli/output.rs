//! Output formatting for the sitekit CLI
//!
//! Structured output in JSON, YAML, and human-readable table formats.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

use crate::admin::{ComplianceBulletin, Holiday};
use crate::contact::ValidationReport;
use crate::error::{Result, SiteError};
use crate::seo::{HeadState, MetadataSource, SyncOutcome};

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

fn to_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| SiteError::SerializationError(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn to_yaml<T: Serialize>(value: &T) -> Result<()> {
    let yaml =
        serde_yaml::to_string(value).map_err(|e| SiteError::SerializationError(e.to_string()))?;
    println!("{}", yaml);
    Ok(())
}

/// Validation report output for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    /// Overall validation status
    pub valid: bool,
    /// Number of findings
    pub finding_count: usize,
    /// Per-field findings
    pub findings: Vec<FindingRow>,
    /// Summary message
    pub summary: String,
}

/// Individual finding row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindingRow {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ReportOutput {
    /// Create output from a validation report
    pub fn from_report(report: &ValidationReport) -> Self {
        let findings: Vec<FindingRow> = report
            .findings
            .iter()
            .map(|f| FindingRow {
                field: f.field.to_string(),
                code: f.code.clone(),
                message: f.message.clone(),
            })
            .collect();

        let summary = if report.valid {
            "Submission is valid".to_string()
        } else {
            format!("Submission has {} invalid field(s)", findings.len())
        };

        Self {
            valid: report.valid,
            finding_count: findings.len(),
            findings,
            summary,
        }
    }

    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => to_json(self),
            OutputFormat::Yaml => to_yaml(self),
            OutputFormat::Table => self.render_table(),
        }
    }

    fn render_table(&self) -> Result<()> {
        let mut stdout = io::stdout();

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "Submission Validation".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();
        writeln!(stdout).ok();

        let status_icon = if self.valid { "+".green() } else { "x".red() };
        writeln!(stdout, "{} {}", status_icon, self.summary).ok();

        if !self.findings.is_empty() {
            writeln!(stdout).ok();
            for finding in &self.findings {
                writeln!(
                    stdout,
                    "{} [{}] {}: {}",
                    "x".red(),
                    finding.code.dimmed(),
                    finding.field.cyan(),
                    finding.message
                )
                .ok();
            }
        }

        stdout.flush().ok();
        Ok(())
    }
}

/// Resolved head output for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadOutput {
    /// Where the metadata came from
    pub source: String,
    /// Number of mutations applied this pass
    pub mutations: usize,
    /// The resulting head entries
    pub entries: Vec<HeadRow>,
}

/// One rendered head tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadRow {
    pub key: String,
    pub value: String,
}

impl HeadOutput {
    /// Create output from a sync outcome and the resulting head state
    pub fn from_sync(outcome: &SyncOutcome, head: &HeadState) -> Self {
        let (source, mutations) = match outcome {
            SyncOutcome::Applied { source, mutations } => {
                let source = match source {
                    MetadataSource::Backend => "backend",
                    MetadataSource::Defaults => "defaults",
                };
                (source.to_string(), *mutations)
            }
            SyncOutcome::Superseded => ("superseded".to_string(), 0),
        };

        let entries = head
            .iter()
            .map(|(key, value)| HeadRow {
                key: key.to_string(),
                value: value.to_string(),
            })
            .collect();

        Self {
            source,
            mutations,
            entries,
        }
    }

    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => to_json(self),
            OutputFormat::Yaml => to_yaml(self),
            OutputFormat::Table => self.render_table(),
        }
    }

    fn render_table(&self) -> Result<()> {
        let mut stdout = io::stdout();

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "Resolved Head".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();
        writeln!(
            stdout,
            "source: {}   mutations: {}",
            self.source.green(),
            self.mutations
        )
        .ok();
        writeln!(stdout).ok();

        for entry in &self.entries {
            writeln!(stdout, "  {:<32} {}", entry.key.cyan(), entry.value).ok();
        }

        stdout.flush().ok();
        Ok(())
    }
}

/// Render a bulletin list in the requested format
pub fn render_bulletins(bulletins: &[ComplianceBulletin], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => to_json(&bulletins),
        OutputFormat::Yaml => to_yaml(&bulletins),
        OutputFormat::Table => {
            let mut stdout = io::stdout();
            writeln!(stdout).ok();
            writeln!(stdout, "{}", "Compliance Bulletins".cyan().bold()).ok();
            writeln!(stdout, "{}", "=".repeat(60)).ok();
            for bulletin in bulletins {
                let published = if bulletin.published {
                    "published".green()
                } else {
                    "draft".yellow()
                };
                writeln!(
                    stdout,
                    "  #{:<5} [{}] {} ({})",
                    bulletin.id,
                    published,
                    bulletin.title,
                    bulletin.category
                )
                .ok();
            }
            if bulletins.is_empty() {
                writeln!(stdout, "  {}", "no bulletins".dimmed()).ok();
            }
            stdout.flush().ok();
            Ok(())
        }
    }
}

/// Render a holiday list in the requested format
pub fn render_holidays(holidays: &[Holiday], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => to_json(&holidays),
        OutputFormat::Yaml => to_yaml(&holidays),
        OutputFormat::Table => {
            let mut stdout = io::stdout();
            writeln!(stdout).ok();
            writeln!(stdout, "{}", "Holiday Calendar".cyan().bold()).ok();
            writeln!(stdout, "{}", "=".repeat(60)).ok();
            for holiday in holidays {
                let kind = if holiday.optional {
                    "optional".yellow()
                } else {
                    "mandatory".green()
                };
                writeln!(
                    stdout,
                    "  #{:<5} {} {} [{}] {}",
                    holiday.id,
                    holiday.date,
                    holiday.name,
                    kind,
                    holiday.region.dimmed()
                )
                .ok();
            }
            if holidays.is_empty() {
                writeln!(stdout, "  {}", "no holidays".dimmed()).ok();
            }
            stdout.flush().ok();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactField, FieldFinding};

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_report_output_valid() {
        let report = ValidationReport::valid();
        let output = ReportOutput::from_report(&report);
        assert!(output.valid);
        assert_eq!(output.finding_count, 0);
        assert_eq!(output.summary, "Submission is valid");
    }

    #[test]
    fn test_report_output_with_findings() {
        let report = ValidationReport::from_findings(vec![
            FieldFinding::new(ContactField::Email, "email.invalid", "Invalid email address"),
            FieldFinding::new(ContactField::Service, "service.required", "Please select a service"),
        ]);
        let output = ReportOutput::from_report(&report);
        assert!(!output.valid);
        assert_eq!(output.finding_count, 2);
        assert_eq!(output.summary, "Submission has 2 invalid field(s)");
        assert_eq!(output.findings[0].field, "email");
    }

    #[test]
    fn test_head_output_from_superseded() {
        let output = HeadOutput::from_sync(&SyncOutcome::Superseded, &HeadState::new());
        assert_eq!(output.source, "superseded");
        assert_eq!(output.mutations, 0);
        assert!(output.entries.is_empty());
    }
}
