//! Rule-based SEO scoring.
//!
//! Every record starts at a score of 100 and loses a fixed penalty per
//! finding:
//!
//! | Finding | Kind | Penalty |
//! |---------|------|---------|
//! | missing title / description, title > 60, description > 160, bad slug | error | 10 |
//! | title < 30, description < 120 | warning | 5 |
//! | no keywords | warning | 10 |
//! | fewer than 3 or more than 10 keywords | warning | 5 |
//! | no Open Graph record | warning | 15 |
//! | no canonical URL | warning | 10 |
//!
//! Penalties stack and the score is not clamped, so it can go negative.
//! Only errors make a record invalid.

pub mod content;

use crate::{
    data::{PageMetadata, SeoConfig},
    utils::slug::{is_normalized, normalize_slug},
};
use serde::Serialize;

pub const TITLE_MAX: usize = 60;
pub const TITLE_MIN: usize = 30;
pub const DESCRIPTION_MAX: usize = 160;
pub const DESCRIPTION_MIN: usize = 120;
pub const KEYWORDS_MIN: usize = 3;
pub const KEYWORDS_MAX: usize = 10;

/// Score below which a review suggestion is added.
const REVIEW_THRESHOLD: i32 = 90;

const ERROR_PENALTY: i32 = 10;

/// Outcome of validating one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub score: i32,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    /// Errors plus warnings.
    pub fn issue_count(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

/// Accumulates findings while rules run.
struct Findings {
    score: i32,
    errors: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<String>,
}

impl Findings {
    fn new() -> Self {
        Self {
            score: 100,
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        self.score -= ERROR_PENALTY;
        self.errors.push(message.into());
    }

    fn warning(&mut self, penalty: i32, message: impl Into<String>) {
        self.score -= penalty;
        self.warnings.push(message.into());
    }

    fn suggest(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    fn finish(mut self) -> ValidationResult {
        if self.score < REVIEW_THRESHOLD {
            self.suggest("Review the warnings above to raise the SEO score above 90");
        }
        ValidationResult {
            is_valid: self.errors.is_empty(),
            score: self.score,
            errors: self.errors,
            warnings: self.warnings,
            suggestions: self.suggestions,
        }
    }
}

// ============================================================================
// Shared rules
// ============================================================================

fn check_title(findings: &mut Findings, title: &str) {
    let len = title.trim().chars().count();
    if len == 0 {
        findings.error("Title is required");
    } else if len > TITLE_MAX {
        findings.error(format!(
            "Title is too long ({len} characters, max {TITLE_MAX})"
        ));
    } else if len < TITLE_MIN {
        findings.warning(
            5,
            format!("Title is short ({len} characters, aim for at least {TITLE_MIN})"),
        );
    }
}

fn check_description(findings: &mut Findings, description: &str) {
    let len = description.trim().chars().count();
    if len == 0 {
        findings.error("Description is required");
    } else if len > DESCRIPTION_MAX {
        findings.error(format!(
            "Description is too long ({len} characters, max {DESCRIPTION_MAX})"
        ));
    } else if len < DESCRIPTION_MIN {
        findings.warning(
            5,
            format!("Description is short ({len} characters, aim for at least {DESCRIPTION_MIN})"),
        );
    }
}

fn check_keywords(findings: &mut Findings, keywords: &[String]) {
    match keywords.len() {
        0 => findings.warning(10, "No keywords defined"),
        n if n < KEYWORDS_MIN => findings.warning(
            5,
            format!("Only {n} keywords defined, aim for at least {KEYWORDS_MIN}"),
        ),
        n if n > KEYWORDS_MAX => findings.warning(
            5,
            format!("{n} keywords defined, keep it to {KEYWORDS_MAX} or fewer"),
        ),
        _ => {}
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Score a render-ready config.
pub fn validate_seo_config(config: &SeoConfig) -> ValidationResult {
    let mut findings = Findings::new();

    check_title(&mut findings, &config.title);
    check_description(&mut findings, &config.description);
    check_keywords(&mut findings, &config.keywords);

    if config.open_graph.is_none() {
        findings.warning(15, "Missing Open Graph data");
    }
    if config.canonical_url.as_deref().is_none_or(str::is_empty) {
        findings.warning(10, "Missing canonical URL");
    }
    if config.structured_data.is_empty() {
        findings.suggest("Add structured data (JSON-LD) for rich results");
    }

    findings.finish()
}

/// Score a stored page record.
///
/// Open Graph and canonical URL are derived from the record, so only the
/// slug shape is checked in their place.
pub fn validate_page_metadata(page: &PageMetadata) -> ValidationResult {
    let mut findings = Findings::new();

    check_title(&mut findings, &page.title);
    check_description(&mut findings, &page.description);
    check_keywords(&mut findings, &page.keywords);

    if !page.slug.starts_with('/') {
        findings.error(format!("Slug `{}` must start with `/`", page.slug));
    } else if !is_normalized(&page.slug) {
        findings.error(format!(
            "Slug `{}` is not normalized, expected `{}`",
            page.slug,
            normalize_slug(&page.slug)
        ));
    }

    findings.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Category, OpenGraph};

    fn good_config() -> SeoConfig {
        SeoConfig {
            title: "Food Truck Permits: A Complete Guide for New Owners".into(),
            description: "Learn which permits and licenses a food truck needs, how long each takes, what they cost and how to keep them current as you grow your food truck business.".into(),
            keywords: vec!["permits".into(), "licenses".into(), "food truck".into()],
            canonical_url: Some("https://diyfoodtruckers.com/getting-started/permits".into()),
            open_graph: Some(OpenGraph {
                title: "t".into(),
                description: "d".into(),
                url: "u".into(),
                site_name: "s".into(),
                og_type: "article".into(),
                image: "i".into(),
                image_alt: "a".into(),
                locale: "en_US".into(),
            }),
            twitter: None,
            structured_data: vec![serde_json::json!({})],
            no_index: false,
            no_follow: false,
        }
    }

    #[test]
    fn test_perfect_config_scores_100() {
        let result = validate_seo_config(&good_config());
        assert!(result.is_valid);
        assert_eq!(result.score, 100);
        assert!(result.warnings.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_scenario_short_config_is_valid_with_warnings() {
        let config = SeoConfig {
            title: "Short".into(),
            description: "Short description".into(),
            keywords: vec!["test".into()],
            ..Default::default()
        };
        let result = validate_seo_config(&config);

        assert!(result.is_valid);
        assert!(!result.warnings.is_empty());
        assert!(result.score < 100);
        // title -5, description -5, keywords -5, open graph -15, canonical -10
        assert_eq!(result.score, 60);
        assert_eq!(result.suggestions.len(), 2);
    }

    #[test]
    fn test_score_is_not_clamped() {
        let config = SeoConfig {
            title: "x".repeat(61),
            description: "y".repeat(161),
            ..Default::default()
        };
        let mut result = validate_seo_config(&config);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.score, 100 - 20 - 10 - 15 - 10);

        let page = PageMetadata::new("bad", "", "", Category::Marketing);
        result = validate_page_metadata(&page);
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.score, 100 - 30 - 10);
    }

    #[test]
    fn test_missing_title_is_error() {
        let mut config = good_config();
        config.title = "   ".into();
        let result = validate_seo_config(&config);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Title is required".to_string()]);
        assert_eq!(result.score, 90);
    }

    #[test]
    fn test_title_length_counts_chars() {
        let mut config = good_config();
        // 60 multi-byte chars is still within bounds
        config.title = "é".repeat(60);
        assert!(validate_seo_config(&config).is_valid);
    }

    #[test]
    fn test_keyword_count_bounds() {
        let mut config = good_config();
        config.keywords = (0..11).map(|i| format!("k{i}")).collect();
        let result = validate_seo_config(&config);
        assert_eq!(result.score, 95);
        assert!(result.warnings[0].contains("11 keywords"));

        config.keywords.clear();
        assert_eq!(validate_seo_config(&config).score, 90);
    }

    #[test]
    fn test_missing_structured_data_only_suggests() {
        let mut config = good_config();
        config.structured_data.clear();
        let result = validate_seo_config(&config);
        assert_eq!(result.score, 100);
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_page_metadata_skips_derived_checks() {
        let mut page = PageMetadata::new(
            "/getting-started/permits",
            "Food Truck Permits: A Complete Guide for New Owners",
            "Learn which permits and licenses a food truck needs, how long each takes, what they cost and how to keep them current as you grow.",
            Category::GettingStarted,
        );
        page.keywords = vec!["permits".into(), "licenses".into(), "food truck".into()];
        let result = validate_page_metadata(&page);
        assert!(result.is_valid);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_page_slug_must_be_normalized() {
        let page = PageMetadata::new("/operations/", "t", "d", Category::Operations);
        let result = validate_page_metadata(&page);
        assert!(result.errors.iter().any(|e| e.contains("not normalized")));
    }

    #[test]
    fn test_issue_count() {
        let config = SeoConfig {
            title: "Short".into(),
            ..Default::default()
        };
        let result = validate_seo_config(&config);
        assert_eq!(result.issue_count(), result.errors.len() + result.warnings.len());
    }
}
