//! Field rules for the contact form
//!
//! Each rule checks exactly one raw string value and returns a finding or
//! `None`. Rules are total: every input, including empty and non-UTF
//! boundary cases, maps to a value and never panics.

use regex::Regex;
use std::sync::OnceLock;

use super::{ContactField, ContactSubmission, FieldFinding};

/// Minimal `local@domain.tld` shape. Deliberately not RFC 5322.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Optional leading `+` followed by digits only.
fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+?[0-9]+$").expect("phone pattern is valid"))
}

/// Validate the full-name field
pub fn validate_name(value: &str) -> Option<FieldFinding> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldFinding::new(
            ContactField::FullName,
            "full_name.required",
            "Full Name is required",
        ));
    }
    if trimmed.chars().count() < 2 {
        return Some(FieldFinding::new(
            ContactField::FullName,
            "full_name.too_short",
            "Name is too short",
        ));
    }
    None
}

/// Validate the email field
pub fn validate_email(value: &str) -> Option<FieldFinding> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(FieldFinding::new(
            ContactField::Email,
            "email.required",
            "Email is required",
        ));
    }
    if !email_pattern().is_match(trimmed) {
        return Some(FieldFinding::new(
            ContactField::Email,
            "email.invalid",
            "Invalid email address",
        ));
    }
    None
}

/// Validate the phone field
///
/// Whitespace is stripped before any structural check, so grouped input
/// like `+91 98765 43210` is acceptable. Region-aware length rules apply
/// in priority order: `+91` numbers must be exactly 10 digits after the
/// prefix; a bare `91` prefix with 12 characters total is accepted as a
/// national-format Indian number; everything else falls to the general
/// 10..=15 length window.
pub fn validate_phone(value: &str) -> Option<FieldFinding> {
    if value.trim().is_empty() {
        return Some(FieldFinding::new(
            ContactField::Phone,
            "phone.required",
            "Phone number is required",
        ));
    }

    let cleaned: String = value.chars().filter(|c| !c.is_whitespace()).collect();

    if !phone_pattern().is_match(&cleaned) {
        return Some(FieldFinding::new(
            ContactField::Phone,
            "phone.numbers_only",
            "Phone must contain numbers only",
        ));
    }

    if cleaned.starts_with("+91") {
        if cleaned.len() != 13 {
            return Some(FieldFinding::new(
                ContactField::Phone,
                "phone.in_10_digits",
                "Indian numbers must be 10 digits after +91",
            ));
        }
        return None;
    }

    if cleaned.starts_with("91") && cleaned.len() == 12 {
        return None;
    }

    if cleaned.len() < 10 {
        return Some(FieldFinding::new(
            ContactField::Phone,
            "phone.too_short",
            "Phone number is too short (min 10 digits)",
        ));
    }
    if cleaned.len() > 15 {
        return Some(FieldFinding::new(
            ContactField::Phone,
            "phone.too_long",
            "Phone number is too long (max 15 digits)",
        ));
    }
    None
}

/// Validate the service selection
///
/// The form's placeholder option submits the empty string; anything else
/// is a concrete selection.
pub fn validate_service(value: &str) -> Option<FieldFinding> {
    if value.is_empty() {
        return Some(FieldFinding::new(
            ContactField::Service,
            "service.required",
            "Please select a service",
        ));
    }
    None
}

/// Validate the message field
pub fn validate_message(value: &str) -> Option<FieldFinding> {
    if value.trim().is_empty() {
        return Some(FieldFinding::new(
            ContactField::Message,
            "message.required",
            "Message is required",
        ));
    }
    None
}

/// Trait for per-field validation rules
///
/// Rules are deterministic, synchronous and side-effect free.
pub trait FieldRule: Send + Sync {
    /// The field this rule covers
    fn field(&self) -> ContactField;

    /// Rule name for diagnostics
    fn name(&self) -> &'static str;

    /// Check the submission, returning a finding when the field is unacceptable
    fn check(&self, submission: &ContactSubmission) -> Option<FieldFinding>;
}

struct NameRule;

impl FieldRule for NameRule {
    fn field(&self) -> ContactField {
        ContactField::FullName
    }

    fn name(&self) -> &'static str {
        "full_name"
    }

    fn check(&self, submission: &ContactSubmission) -> Option<FieldFinding> {
        validate_name(&submission.full_name)
    }
}

struct EmailRule;

impl FieldRule for EmailRule {
    fn field(&self) -> ContactField {
        ContactField::Email
    }

    fn name(&self) -> &'static str {
        "email"
    }

    fn check(&self, submission: &ContactSubmission) -> Option<FieldFinding> {
        validate_email(&submission.email)
    }
}

struct PhoneRule;

impl FieldRule for PhoneRule {
    fn field(&self) -> ContactField {
        ContactField::Phone
    }

    fn name(&self) -> &'static str {
        "phone"
    }

    fn check(&self, submission: &ContactSubmission) -> Option<FieldFinding> {
        validate_phone(&submission.phone)
    }
}

struct ServiceRule;

impl FieldRule for ServiceRule {
    fn field(&self) -> ContactField {
        ContactField::Service
    }

    fn name(&self) -> &'static str {
        "service"
    }

    fn check(&self, submission: &ContactSubmission) -> Option<FieldFinding> {
        validate_service(&submission.service)
    }
}

struct MessageRule;

impl FieldRule for MessageRule {
    fn field(&self) -> ContactField {
        ContactField::Message
    }

    fn name(&self) -> &'static str {
        "message"
    }

    fn check(&self, submission: &ContactSubmission) -> Option<FieldFinding> {
        validate_message(&submission.message)
    }
}

/// The built-in rules, in form-field order
pub fn builtin_rules() -> Vec<Box<dyn FieldRule>> {
    vec![
        Box::new(NameRule),
        Box::new(EmailRule),
        Box::new(PhoneRule),
        Box::new(ServiceRule),
        Box::new(MessageRule),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn message_of(finding: Option<FieldFinding>) -> Option<String> {
        finding.map(|f| f.message)
    }

    #[test]
    fn test_name_cases() {
        let cases = [
            ("", Some("Full Name is required")),
            ("   ", Some("Full Name is required")),
            ("A", Some("Name is too short")),
            (" A ", Some("Name is too short")),
            ("Al", None),
            ("Asha Verma", None),
        ];
        for (input, expected) in cases {
            assert_eq!(
                message_of(validate_name(input)).as_deref(),
                expected,
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_email_cases() {
        let cases = [
            ("", Some("Email is required")),
            ("  ", Some("Email is required")),
            ("not-an-email", Some("Invalid email address")),
            ("missing@tld", Some("Invalid email address")),
            ("two@@b.c", Some("Invalid email address")),
            ("spaced name@b.c", Some("Invalid email address")),
            ("a@b.c", None),
            ("asha.verma@firm.co.in", None),
        ];
        for (input, expected) in cases {
            assert_eq!(
                message_of(validate_email(input)).as_deref(),
                expected,
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_phone_cases() {
        let cases = [
            ("", Some("Phone number is required")),
            ("   ", Some("Phone number is required")),
            ("abc1234567", Some("Phone must contain numbers only")),
            ("98-76543210", Some("Phone must contain numbers only")),
            ("+919876543210", None),
            ("+91 98765 43210", None),
            ("+91987654321", Some("Indian numbers must be 10 digits after +91")),
            ("+9198765432101", Some("Indian numbers must be 10 digits after +91")),
            ("919876543210", None),
            ("123", Some("Phone number is too short (min 10 digits)")),
            ("1234567890", None),
            ("+123456789", None),
            ("1234567890123456", Some("Phone number is too long (max 15 digits)")),
        ];
        for (input, expected) in cases {
            assert_eq!(
                message_of(validate_phone(input)).as_deref(),
                expected,
                "input: {:?}",
                input
            );
        }
    }

    #[test]
    fn test_phone_bare_91_prefix_accepts_any_12_digit_value() {
        // National-format branch: length 12 with a bare 91 prefix passes,
        // even when the remainder would not survive the +91 rule.
        assert!(validate_phone("910000000000").is_none());
        assert!(validate_phone("91 9876 543 210").is_none());
        // One character off in either direction falls to the general window.
        assert!(validate_phone("91987654321").is_none()); // 11 chars, within 10..=15
        assert!(validate_phone("9198765").is_some()); // 7 chars, too short
    }

    #[test]
    fn test_service_cases() {
        assert_eq!(
            message_of(validate_service("")).as_deref(),
            Some("Please select a service")
        );
        assert!(validate_service("Payroll Compliance").is_none());
        assert!(validate_service("Statutory Audits").is_none());
    }

    #[test]
    fn test_message_cases() {
        assert_eq!(
            message_of(validate_message("")).as_deref(),
            Some("Message is required")
        );
        assert_eq!(
            message_of(validate_message(" \t\n")).as_deref(),
            Some("Message is required")
        );
        assert!(validate_message("We need help with PF filings.").is_none());
    }

    #[test]
    fn test_rules_cover_all_fields() {
        let rules = builtin_rules();
        assert_eq!(rules.len(), 5);
        let fields: Vec<ContactField> = rules.iter().map(|r| r.field()).collect();
        assert!(fields.contains(&ContactField::FullName));
        assert!(fields.contains(&ContactField::Email));
        assert!(fields.contains(&ContactField::Phone));
        assert!(fields.contains(&ContactField::Service));
        assert!(fields.contains(&ContactField::Message));
    }

    proptest! {
        /// Whitespace-only input always produces the "required" finding
        /// for the trimmed fields.
        #[test]
        fn whitespace_only_is_required(ws in "[ \t\r\n]*") {
            let name_msg = message_of(validate_name(&ws));
            prop_assert_eq!(name_msg.as_deref(), Some("Full Name is required"));
            let email_msg = message_of(validate_email(&ws));
            prop_assert_eq!(email_msg.as_deref(), Some("Email is required"));
            let phone_msg = message_of(validate_phone(&ws));
            prop_assert_eq!(phone_msg.as_deref(), Some("Phone number is required"));
            let message_msg = message_of(validate_message(&ws));
            prop_assert_eq!(message_msg.as_deref(), Some("Message is required"));
        }

        /// The phone rule is total: any input yields a verdict, never a panic.
        #[test]
        fn phone_rule_is_total(input in ".*") {
            let _ = validate_phone(&input);
        }
    }
}
