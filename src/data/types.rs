//! Page metadata and render-ready SEO records.
//!
//! These types are the wire format of the page registry (a JSON array of
//! [`PageMetadata`]) and of the export/import round trip, so field names
//! follow the site's camelCase JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

// ============================================================================
// Category
// ============================================================================

/// Content category of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    GettingStarted,
    Operations,
    Financial,
    Marketing,
    Resources,
    Community,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Self; 6] = [
        Self::GettingStarted,
        Self::Operations,
        Self::Financial,
        Self::Marketing,
        Self::Resources,
        Self::Community,
    ];

    /// URL segment, identical to the serialized form.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GettingStarted => "getting-started",
            Self::Operations => "operations",
            Self::Financial => "financial",
            Self::Marketing => "marketing",
            Self::Resources => "resources",
            Self::Community => "community",
        }
    }

    /// Human-readable name used in breadcrumbs and `articleSection`.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::GettingStarted => "Getting Started",
            Self::Operations => "Operations",
            Self::Financial => "Financial Management",
            Self::Marketing => "Marketing",
            Self::Resources => "Resources",
            Self::Community => "Community",
        }
    }

    /// Lesson categories get the Course schema.
    pub const fn is_lesson(self) -> bool {
        matches!(
            self,
            Self::GettingStarted | Self::Operations | Self::Financial | Self::Marketing
        )
    }

    /// Bare category path, e.g. `/operations`.
    pub fn path(self) -> String {
        format!("/{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category `{s}`"))
    }
}

/// Difficulty tier of a lesson, mapped to `educationalLevel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

// ============================================================================
// Page Metadata
// ============================================================================

/// Author of a page. Owned by the page that embeds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AuthorRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
            image: None,
            description: None,
        }
    }
}

/// One step of a navigational trail. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
    pub position: u32,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>, position: u32) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            position,
        }
    }
}

/// Per-page SEO record held by the registry, keyed by `slug`.
///
/// | Field | Example |
/// |-------|---------|
/// | `slug` | `/lessons/permits-and-licenses` |
/// | `category` | `getting-started` |
/// | `estimated_read_time` | `12` (minutes) |
/// | `last_updated` | `2025-03-01T00:00:00Z` |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_read_time: Option<u32>,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadcrumbs: Option<Vec<BreadcrumbItem>>,
    /// Hand-written JSON-LD documents shipped with the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured_data: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_index: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_follow: bool,
}

impl PageMetadata {
    /// Minimal record; everything optional left empty.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
            keywords: Vec::new(),
            category,
            difficulty: None,
            estimated_read_time: None,
            last_updated: Utc::now(),
            author: None,
            breadcrumbs: None,
            structured_data: None,
            no_index: false,
            no_follow: false,
        }
    }

    pub fn is_home(&self) -> bool {
        self.slug == "/"
    }

    /// `last_updated` as RFC 3339, the form schema.org dates use.
    pub fn last_updated_iso(&self) -> String {
        self.last_updated.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }

    /// `last_updated` as `YYYY-MM-DD` for sitemaps.
    pub fn lastmod_ymd(&self) -> String {
        self.last_updated.format("%Y-%m-%d").to_string()
    }
}

/// Caller-supplied values laid over a synthesized fallback page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub estimated_read_time: Option<u32>,
    pub author: Option<AuthorRecord>,
    pub no_index: Option<bool>,
    pub no_follow: Option<bool>,
}

impl SeoOverrides {
    /// Apply every set field onto `page`.
    pub fn apply_to(&self, page: &mut PageMetadata) {
        if let Some(title) = &self.title {
            page.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            page.description.clone_from(description);
        }
        if let Some(keywords) = &self.keywords {
            page.keywords.clone_from(keywords);
        }
        if let Some(category) = self.category {
            page.category = category;
        }
        if self.difficulty.is_some() {
            page.difficulty = self.difficulty;
        }
        if self.estimated_read_time.is_some() {
            page.estimated_read_time = self.estimated_read_time;
        }
        if let Some(author) = &self.author {
            page.author = Some(author.clone());
        }
        if let Some(no_index) = self.no_index {
            page.no_index = no_index;
        }
        if let Some(no_follow) = self.no_follow {
            page.no_follow = no_follow;
        }
    }
}

// ============================================================================
// Render-ready output
// ============================================================================

/// Open Graph tags for a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    #[serde(rename = "type")]
    pub og_type: String,
    pub image: String,
    pub image_alt: String,
    pub locale: String,
}

/// Twitter Card tags for a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterCard {
    pub card: String,
    pub site: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Everything the rendering layer needs for a page's `<head>`.
///
/// Derived from [`PageMetadata`] plus site defaults on every request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoConfig {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<TwitterCard>,
    #[serde(default)]
    pub structured_data: Vec<serde_json::Value>,
    #[serde(default)]
    pub no_index: bool,
    #[serde(default)]
    pub no_follow: bool,
}
