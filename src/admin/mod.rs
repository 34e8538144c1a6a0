//! Admin content models
//!
//! Entities managed through the content-admin endpoints. These are thin
//! wire shapes: all behaviour lives in the backend, and the client only
//! dispatches them. An `id` of zero marks an entity that has not been
//! created yet; the backend assigns the real id on upsert.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel id for entities not yet persisted
pub const NEW_ID: u64 = 0;

/// A compliance bulletin shown on the resources page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceBulletin {
    #[serde(default)]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub published: bool,
}

impl ComplianceBulletin {
    /// Whether this bulletin has not been created on the backend yet
    pub fn is_new(&self) -> bool {
        self.id == NEW_ID
    }
}

/// An entry in the statutory holiday calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub region: String,
    /// Restricted/optional holiday rather than a mandated closure
    #[serde(default)]
    pub optional: bool,
}

impl Holiday {
    /// Whether this holiday has not been created on the backend yet
    pub fn is_new(&self) -> bool {
        self.id == NEW_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulletin_is_new() {
        let bulletin = ComplianceBulletin {
            title: "Minimum wages revised for FY 2026-27".to_string(),
            ..Default::default()
        };
        assert!(bulletin.is_new());

        let saved = ComplianceBulletin { id: 7, ..bulletin };
        assert!(!saved.is_new());
    }

    #[test]
    fn test_holiday_roundtrip() {
        let holiday = Holiday {
            id: 3,
            name: "Republic Day".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
            region: "national".to_string(),
            optional: false,
        };
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(json.contains("\"2026-01-26\""));

        let parsed: Holiday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, holiday);
    }

    #[test]
    fn test_holiday_defaults_for_partial_payload() {
        let parsed: Holiday =
            serde_json::from_str(r#"{"name": "Labour Day", "date": "2026-05-01"}"#).unwrap();
        assert!(parsed.is_new());
        assert!(parsed.region.is_empty());
        assert!(!parsed.optional);
    }
}
