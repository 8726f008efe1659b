//! schema.org structured data (JSON-LD).
//!
//! # Architecture
//!
//! ```text
//! input records ──► builders::* ──► StructuredData { @context, Schema }
//!                                          │
//!                                          ▼
//!                                  to_json_ld() ──► validate ──► Vec<Value>
//!                                                   (invalid docs dropped)
//! ```
//!
//! Every document shares the base shape `{"@context": "https://schema.org"}`;
//! the [`Schema`] enum supplies `@type` and the type-specific fields.

pub mod builders;
pub mod input;
pub mod types;

use crate::{data::BreadcrumbItem, log};
use input::{ArticleInput, CourseInput, FaqItem, OrganizationInput, WebSiteInput};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// The only accepted `@context`.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

// ============================================================================
// Errors
// ============================================================================

/// Construction failures of the list-based builders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("FAQ data is required to build an FAQPage schema")]
    MissingFaqData,

    #[error("Breadcrumb data is required to build a BreadcrumbList schema")]
    MissingBreadcrumbData,
}

// ============================================================================
// Documents
// ============================================================================

/// Closed set of top-level schema.org types, tagged by `@type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "@type")]
pub enum Schema {
    Organization(types::Organization),
    Article(types::Article),
    Course(types::Course),
    #[serde(rename = "FAQPage")]
    FaqPage(types::FaqPage),
    BreadcrumbList(types::BreadcrumbList),
    WebSite(types::WebSite),
    LocalBusiness(types::LocalBusiness),
    Service(types::Service),
    HowTo(types::HowTo),
    LearningResource(types::LearningResource),
    ItemList(types::ItemList),
}

impl Schema {
    /// The `@type` this variant serializes to.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Organization(_) => "Organization",
            Self::Article(_) => "Article",
            Self::Course(_) => "Course",
            Self::FaqPage(_) => "FAQPage",
            Self::BreadcrumbList(_) => "BreadcrumbList",
            Self::WebSite(_) => "WebSite",
            Self::LocalBusiness(_) => "LocalBusiness",
            Self::Service(_) => "Service",
            Self::HowTo(_) => "HowTo",
            Self::LearningResource(_) => "LearningResource",
            Self::ItemList(_) => "ItemList",
        }
    }
}

/// A JSON-LD document: the shared base plus one [`Schema`] variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(flatten)]
    schema: Schema,
}

impl StructuredData {
    pub fn new(schema: Schema) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            schema,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.schema.type_name()
    }

    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Outcome of [`validate_structured_data`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Check the base shape of any JSON-LD document.
///
/// Requires `@context == "https://schema.org"` and a non-empty string
/// `@type`. Never fails; problems are reported in the result.
pub fn validate_structured_data(doc: &Value) -> SchemaValidation {
    let mut errors = Vec::new();

    let Some(obj) = doc.as_object() else {
        return SchemaValidation {
            is_valid: false,
            errors: vec!["Structured data must be a JSON object".into()],
        };
    };

    match obj.get("@context") {
        None => errors.push("Missing @context".to_string()),
        Some(Value::String(ctx)) if ctx == SCHEMA_CONTEXT => {}
        Some(other) => errors.push(format!(
            "Invalid @context: expected \"{SCHEMA_CONTEXT}\", found {other}"
        )),
    }

    match obj.get("@type").and_then(Value::as_str) {
        Some(kind) if !kind.trim().is_empty() => {}
        _ => errors.push("Missing @type".to_string()),
    }

    SchemaValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Describe a document for log lines: its `@type` or `<untyped>`.
fn describe(doc: &Value) -> &str {
    doc.get("@type").and_then(Value::as_str).unwrap_or("<untyped>")
}

/// Keep only documents that pass [`validate_structured_data`].
///
/// Dropped documents are logged, never returned as errors.
pub fn retain_valid(docs: impl IntoIterator<Item = Value>) -> Vec<Value> {
    docs.into_iter()
        .filter(|doc| {
            let result = validate_structured_data(doc);
            if !result.is_valid {
                log!("warn"; "dropping {} schema: {}", describe(doc), result.errors.join("; "));
            }
            result.is_valid
        })
        .collect()
}

/// Convert documents to JSON values, dropping any that fail to serialize or validate.
pub fn to_json_ld(docs: &[StructuredData]) -> Vec<Value> {
    let values = docs.iter().filter_map(|doc| match doc.to_value() {
        Ok(value) => Some(value),
        Err(err) => {
            log!("warn"; "failed to serialize {} schema: {err}", doc.type_name());
            None
        }
    });
    retain_valid(values)
}

/// Serialize each document to the text of one `application/ld+json` script.
///
/// A document that cannot be serialized is dropped; the rest still render.
pub fn render_json_ld(docs: &[Value]) -> Vec<String> {
    docs.iter()
        .filter(|doc| validate_structured_data(doc).is_valid)
        .filter_map(|doc| match serde_json::to_string(doc) {
            Ok(json) => Some(json),
            Err(err) => {
                log!("warn"; "failed to serialize {} schema: {err}", describe(doc));
                None
            }
        })
        .collect()
}

// ============================================================================
// Composite
// ============================================================================

/// Page template selected for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    Home,
    Lesson,
    Resource,
    Community,
}

/// Optional inputs for [`generate_schemas`].
#[derive(Debug, Clone, Default)]
pub struct SchemaParts {
    pub organization: Option<OrganizationInput>,
    pub website: Option<WebSiteInput>,
    pub article: Option<ArticleInput>,
    pub course: Option<CourseInput>,
    pub faqs: Option<Vec<FaqItem>>,
    pub breadcrumbs: Option<Vec<BreadcrumbItem>>,
}

/// Assemble the schema list for a page in fixed order:
/// Organization, WebSite, Article, Course (lesson pages only), FAQ, Breadcrumb.
///
/// A failing FAQ or breadcrumb builder is logged and skipped without
/// affecting the other documents.
pub fn generate_schemas(page_type: PageType, parts: &SchemaParts) -> Vec<StructuredData> {
    let mut schemas = Vec::new();

    if let Some(org) = &parts.organization {
        schemas.push(builders::organization(org));
    }
    if let Some(site) = &parts.website {
        schemas.push(builders::website(site));
    }
    if let Some(article) = &parts.article {
        schemas.push(builders::article(article));
    }
    if page_type == PageType::Lesson {
        if let Some(course) = &parts.course {
            schemas.push(builders::course(course));
        }
    }
    if let Some(faqs) = &parts.faqs {
        match builders::faq(faqs) {
            Ok(doc) => schemas.push(doc),
            Err(err) => log!("warn"; "{err}"),
        }
    }
    if let Some(crumbs) = &parts.breadcrumbs {
        match builders::breadcrumb(crumbs) {
            Ok(doc) => schemas.push(doc),
            Err(err) => log!("warn"; "{err}"),
        }
    }

    schemas
}
