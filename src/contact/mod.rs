//! Contact-form validation
//!
//! Pure, synchronous validation of contact-form submissions. Each field
//! rule is independent of every other field and of any UI state; rules
//! return findings as values and never fail.

pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::telemetry::SiteMetrics;
use rules::{builtin_rules, FieldRule};

/// The fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    FullName,
    Email,
    Phone,
    Service,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactField::FullName => write!(f, "full_name"),
            ContactField::Email => write!(f, "email"),
            ContactField::Phone => write!(f, "phone"),
            ContactField::Service => write!(f, "service"),
            ContactField::Message => write!(f, "message"),
        }
    }
}

/// A single validation finding for a contact-form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFinding {
    /// The field the finding applies to
    pub field: ContactField,
    /// Stable code for this finding type
    pub code: String,
    /// Human-readable message, suitable for direct display next to the field
    pub message: String,
}

impl FieldFinding {
    /// Create a new finding
    pub fn new(field: ContactField, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.field, self.message)
    }
}

/// A raw contact-form submission
///
/// All fields default to empty so a partial payload still validates (and
/// reports the missing fields as findings) instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

/// Result of validating a full contact submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the submission is acceptable (no findings)
    pub valid: bool,
    /// Per-field findings, in form-field order
    pub findings: Vec<FieldFinding>,
}

impl ValidationReport {
    /// Create a report with no findings
    pub fn valid() -> Self {
        Self {
            valid: true,
            findings: Vec::new(),
        }
    }

    /// Create a report from a list of findings
    pub fn from_findings(findings: Vec<FieldFinding>) -> Self {
        Self {
            valid: findings.is_empty(),
            findings,
        }
    }

    /// Add a finding
    pub fn add_finding(&mut self, finding: FieldFinding) {
        self.valid = false;
        self.findings.push(finding);
    }

    /// Get the finding for a specific field, if any
    pub fn finding_for(&self, field: ContactField) -> Option<&FieldFinding> {
        self.findings.iter().find(|f| f.field == field)
    }
}

/// Validator aggregating the per-field rules over a submission
///
/// The caller is expected to block submission while the report is invalid;
/// the validator itself has no side effects beyond optional metrics.
pub struct ContactValidator {
    rules: Vec<Box<dyn FieldRule>>,
    metrics: Option<Arc<SiteMetrics>>,
}

impl Default for ContactValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactValidator {
    /// Create a validator with the built-in field rules
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
            metrics: None,
        }
    }

    /// Record findings to the given metrics handle
    pub fn with_metrics(mut self, metrics: Arc<SiteMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Registered rules, in evaluation order
    pub fn rules(&self) -> &[Box<dyn FieldRule>] {
        &self.rules
    }

    /// Validate a submission against every field rule
    pub fn validate(&self, submission: &ContactSubmission) -> ValidationReport {
        let mut findings = Vec::new();
        for rule in &self.rules {
            if let Some(finding) = rule.check(submission) {
                if let Some(metrics) = &self.metrics {
                    metrics.record_finding(&finding.field.to_string(), &finding.code);
                }
                findings.push(finding);
            }
        }
        ValidationReport::from_findings(findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_display() {
        assert_eq!(ContactField::FullName.to_string(), "full_name");
        assert_eq!(ContactField::Service.to_string(), "service");
    }

    #[test]
    fn test_report_from_findings() {
        let report = ValidationReport::from_findings(vec![]);
        assert!(report.valid);

        let report = ValidationReport::from_findings(vec![FieldFinding::new(
            ContactField::Email,
            "email.invalid",
            "Invalid email address",
        )]);
        assert!(!report.valid);
        assert!(report.finding_for(ContactField::Email).is_some());
        assert!(report.finding_for(ContactField::Phone).is_none());
    }

    #[test]
    fn test_validator_accepts_complete_submission() {
        let submission = ContactSubmission {
            full_name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+919876543210".to_string(),
            service: "Payroll Compliance".to_string(),
            message: "Need an audit of our contractor payroll.".to_string(),
        };
        let report = ContactValidator::new().validate(&submission);
        assert!(report.valid, "unexpected findings: {:?}", report.findings);
    }

    #[test]
    fn test_validator_reports_every_empty_field() {
        let report = ContactValidator::new().validate(&ContactSubmission::default());
        assert!(!report.valid);
        // One finding per form field
        assert_eq!(report.findings.len(), 5);
        for field in [
            ContactField::FullName,
            ContactField::Email,
            ContactField::Phone,
            ContactField::Service,
            ContactField::Message,
        ] {
            assert!(report.finding_for(field).is_some(), "missing {}", field);
        }
    }

    #[test]
    fn test_submission_parses_partial_payload() {
        let submission: ContactSubmission =
            serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert_eq!(submission.email, "a@b.c");
        assert!(submission.full_name.is_empty());
    }
}
