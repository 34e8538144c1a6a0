//! SEO metadata model and fallback resolution
//!
//! The backend returns a flat, possibly partial record per page. Absent
//! fields are resolved through explicit, ordered fallback chains so that
//! every head slot ends up populated no matter how sparse the response
//! was. The site-wide defaults are immutable for the life of the process.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Per-page SEO metadata as served by `GET /api/v1/seo/public`
///
/// Every field is optional: a partial record is valid and the missing
/// fields fall back per [`ResolvedSeo::resolve`]. An all-empty record is
/// treated the same as no record at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robots: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

impl SeoMetadata {
    /// Whether the record carries no usable field at all
    ///
    /// An empty-object response (`{}`) deserializes to this state and is
    /// handled identically to a missing record.
    pub fn is_empty(&self) -> bool {
        blank(&self.meta_title)
            && blank(&self.meta_description)
            && blank(&self.meta_keywords)
            && blank(&self.canonical_url)
            && blank(&self.og_title)
            && blank(&self.og_description)
            && blank(&self.og_image)
            && blank(&self.twitter_title)
            && blank(&self.twitter_description)
            && blank(&self.robots)
            && blank(&self.schema_type)
    }
}

/// Site-wide default metadata
///
/// Defined once at startup and never mutated. Also carries the site
/// origin used to derive canonical URLs for pages without an explicit
/// `canonical_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoDefaults {
    pub site_origin: String,
    pub meta_title: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub robots: String,
    pub og_image: String,
    pub og_type: String,
    pub twitter_card: String,
}

impl Default for SeoDefaults {
    fn default() -> Self {
        Self {
            site_origin: "https://www.complianceadvisors.in".to_string(),
            meta_title: "Compliance Advisors | Labour Law & Payroll Compliance Consultancy"
                .to_string(),
            meta_description: "Labour law compliance, payroll outsourcing, statutory audits \
                               and licensing support for employers across India."
                .to_string(),
            meta_keywords: "labour law compliance, payroll compliance, statutory compliance, \
                            PF, ESI, shops and establishments"
                .to_string(),
            robots: "index, follow".to_string(),
            og_image: "https://www.complianceadvisors.in/assets/og-banner.jpg".to_string(),
            og_type: "website".to_string(),
            twitter_card: "summary_large_image".to_string(),
        }
    }
}

impl SeoDefaults {
    /// The process-wide default record
    pub fn global() -> &'static SeoDefaults {
        static GLOBAL: OnceLock<SeoDefaults> = OnceLock::new();
        GLOBAL.get_or_init(SeoDefaults::default)
    }

    /// Canonical URL for a route path, built from the site origin
    pub fn canonical_for(&self, path: &str) -> String {
        let origin = self.site_origin.trim_end_matches('/');
        if path.is_empty() {
            format!("{}/", origin)
        } else if path.starts_with('/') {
            format!("{}{}", origin, path)
        } else {
            format!("{}/{}", origin, path)
        }
    }
}

/// Fully resolved head metadata
///
/// Every slot is a concrete, non-empty string. Construction goes through
/// [`ResolvedSeo::resolve`], which applies the per-slot fallback chains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSeo {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub robots: String,
    pub canonical: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_url: String,
    pub og_type: String,
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: String,
}

/// First chain entry that is present and non-blank
fn first_filled<'a>(chain: &[Option<&'a String>]) -> Option<&'a str> {
    chain
        .iter()
        .copied()
        .flatten()
        .map(String::as_str)
        .find(|s| !s.trim().is_empty())
}

impl ResolvedSeo {
    /// Resolve a (possibly absent, possibly partial) metadata record
    /// against the defaults and the current route path.
    ///
    /// Fallback chains per slot:
    /// - title/description/keywords/robots: page field, else default
    /// - canonical and `og:url`: `canonical_url`, else origin + path
    /// - `og:title`: `og_title` -> `meta_title` -> default title
    /// - `og:description`: `og_description` -> `meta_description` -> default
    /// - `og:image` and `twitter:image`: `og_image` -> default image
    /// - `og:type`: `schema_type` -> default type
    /// - `twitter:title`: `twitter_title` -> `og_title` -> `meta_title` -> default
    /// - `twitter:description`: `twitter_description` -> `og_description`
    ///   -> `meta_description` -> default
    /// - `twitter:card`: site-wide constant from the defaults
    pub fn resolve(fetched: Option<&SeoMetadata>, defaults: &SeoDefaults, path: &str) -> Self {
        let fallback = SeoMetadata::default();
        let page = fetched.unwrap_or(&fallback);

        let canonical = first_filled(&[page.canonical_url.as_ref()])
            .map(str::to_string)
            .unwrap_or_else(|| defaults.canonical_for(path));

        Self {
            title: first_filled(&[page.meta_title.as_ref()])
                .unwrap_or(&defaults.meta_title)
                .to_string(),
            description: first_filled(&[page.meta_description.as_ref()])
                .unwrap_or(&defaults.meta_description)
                .to_string(),
            keywords: first_filled(&[page.meta_keywords.as_ref()])
                .unwrap_or(&defaults.meta_keywords)
                .to_string(),
            robots: first_filled(&[page.robots.as_ref()])
                .unwrap_or(&defaults.robots)
                .to_string(),
            og_title: first_filled(&[page.og_title.as_ref(), page.meta_title.as_ref()])
                .unwrap_or(&defaults.meta_title)
                .to_string(),
            og_description: first_filled(&[
                page.og_description.as_ref(),
                page.meta_description.as_ref(),
            ])
            .unwrap_or(&defaults.meta_description)
            .to_string(),
            og_image: first_filled(&[page.og_image.as_ref()])
                .unwrap_or(&defaults.og_image)
                .to_string(),
            og_url: canonical.clone(),
            og_type: first_filled(&[page.schema_type.as_ref()])
                .unwrap_or(&defaults.og_type)
                .to_string(),
            twitter_card: defaults.twitter_card.clone(),
            twitter_title: first_filled(&[
                page.twitter_title.as_ref(),
                page.og_title.as_ref(),
                page.meta_title.as_ref(),
            ])
            .unwrap_or(&defaults.meta_title)
            .to_string(),
            twitter_description: first_filled(&[
                page.twitter_description.as_ref(),
                page.og_description.as_ref(),
                page.meta_description.as_ref(),
            ])
            .unwrap_or(&defaults.meta_description)
            .to_string(),
            twitter_image: first_filled(&[page.og_image.as_ref()])
                .unwrap_or(&defaults.og_image)
                .to_string(),
            canonical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_empty() {
        let metadata: SeoMetadata = serde_json::from_str("{}").unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_blank_fields_count_as_empty() {
        let metadata = SeoMetadata {
            meta_title: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(metadata.is_empty());

        let metadata = SeoMetadata {
            meta_title: Some("About Us".to_string()),
            ..Default::default()
        };
        assert!(!metadata.is_empty());
    }

    #[test]
    fn test_canonical_for_path_shapes() {
        let defaults = SeoDefaults::default();
        assert_eq!(
            defaults.canonical_for("/services"),
            "https://www.complianceadvisors.in/services"
        );
        assert_eq!(
            defaults.canonical_for(""),
            "https://www.complianceadvisors.in/"
        );
        assert_eq!(
            defaults.canonical_for("faq"),
            "https://www.complianceadvisors.in/faq"
        );
    }

    #[test]
    fn test_resolve_all_defaults_when_absent() {
        let defaults = SeoDefaults::default();
        let resolved = ResolvedSeo::resolve(None, &defaults, "/contact");

        assert_eq!(resolved.title, defaults.meta_title);
        assert_eq!(resolved.description, defaults.meta_description);
        assert_eq!(resolved.keywords, defaults.meta_keywords);
        assert_eq!(resolved.robots, defaults.robots);
        assert_eq!(resolved.canonical, defaults.canonical_for("/contact"));
        assert_eq!(resolved.og_url, resolved.canonical);
        assert_eq!(resolved.og_type, "website");
        assert_eq!(resolved.twitter_card, "summary_large_image");
        assert_eq!(resolved.twitter_image, defaults.og_image);
    }

    #[test]
    fn test_resolve_title_only_record_flows_through_chains() {
        let defaults = SeoDefaults::default();
        let page = SeoMetadata {
            meta_title: Some("Payroll Compliance Services".to_string()),
            ..Default::default()
        };
        let resolved = ResolvedSeo::resolve(Some(&page), &defaults, "/services/payroll");

        // The one supplied field propagates through the OG and Twitter chains.
        assert_eq!(resolved.title, "Payroll Compliance Services");
        assert_eq!(resolved.og_title, "Payroll Compliance Services");
        assert_eq!(resolved.twitter_title, "Payroll Compliance Services");
        // Unsupplied slots still resolve to defaults, never empty.
        assert_eq!(resolved.description, defaults.meta_description);
        assert_eq!(resolved.twitter_description, defaults.meta_description);
        assert!(!resolved.og_image.is_empty());
    }

    #[test]
    fn test_resolve_prefers_most_specific_chain_entry() {
        let defaults = SeoDefaults::default();
        let page = SeoMetadata {
            meta_description: Some("Generic description".to_string()),
            og_description: Some("Social description".to_string()),
            twitter_description: Some("Tweet description".to_string()),
            ..Default::default()
        };
        let resolved = ResolvedSeo::resolve(Some(&page), &defaults, "/");

        assert_eq!(resolved.description, "Generic description");
        assert_eq!(resolved.og_description, "Social description");
        assert_eq!(resolved.twitter_description, "Tweet description");
    }

    #[test]
    fn test_resolve_explicit_canonical_wins() {
        let defaults = SeoDefaults::default();
        let page = SeoMetadata {
            canonical_url: Some("https://www.complianceadvisors.in/about".to_string()),
            ..Default::default()
        };
        let resolved = ResolvedSeo::resolve(Some(&page), &defaults, "/about-us-old");
        assert_eq!(resolved.canonical, "https://www.complianceadvisors.in/about");
        assert_eq!(resolved.og_url, resolved.canonical);
    }

    #[test]
    fn test_global_defaults_are_stable() {
        let a = SeoDefaults::global();
        let b = SeoDefaults::global();
        assert_eq!(a, b);
        assert!(std::ptr::eq(a, b));
    }
}
