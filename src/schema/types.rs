//! schema.org node types.
//!
//! Top-level documents are the variants of [`Schema`](super::Schema); the
//! enum tag supplies their `@type`. Nested nodes carry their own `@type`
//! field, set by their constructors.

use serde::Serialize;

// ============================================================================
// Nested nodes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub url: String,
}

impl ImageObject {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            kind: "ImageObject",
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub contact_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_served: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub available_language: Vec<String>,
}

impl ContactPoint {
    pub fn new(contact_type: impl Into<String>) -> Self {
        Self {
            kind: "ContactPoint",
            contact_type: contact_type.into(),
            telephone: None,
            email: None,
            area_served: None,
            available_language: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: "Person",
            name: name.into(),
            url: None,
            image: None,
            description: None,
        }
    }
}

/// Organization referenced from another node (publisher, provider).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationRef {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

impl OrganizationRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: "Organization",
            name: name.into(),
            url: url.into(),
            logo: None,
        }
    }

    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(ImageObject::new(logo));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

impl WebPageRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: "WebPage",
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

impl Question {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            kind: "Question",
            name: question.into(),
            accepted_answer: Answer {
                kind: "Answer",
                text: answer.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub position: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ListItem {
    /// Breadcrumb entry: the link lives in `item`.
    pub fn crumb(position: u32, name: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            kind: "ListItem",
            position,
            name: name.into(),
            item: Some(item.into()),
            url: None,
            description: None,
        }
    }

    /// Item list entry: the link lives in `url`.
    pub fn entry(position: u32, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind: "ListItem",
            position,
            name: name.into(),
            item: None,
            url: Some(url.into()),
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: String,
}

impl SearchAction {
    /// `target` is a URL template such as `https://x/search?q={search_term_string}`.
    pub fn new(target: impl Into<String>, query_param: &str) -> Self {
        Self {
            kind: "SearchAction",
            target: target.into(),
            query_input: format!("required name={query_param}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub street_address: String,
    pub address_locality: String,
    pub address_region: String,
    pub postal_code: String,
    pub address_country: String,
}

impl PostalAddress {
    pub fn new(
        street_address: impl Into<String>,
        address_locality: impl Into<String>,
        address_region: impl Into<String>,
        postal_code: impl Into<String>,
        address_country: impl Into<String>,
    ) -> Self {
        Self {
            kind: "PostalAddress",
            street_address: street_address.into(),
            address_locality: address_locality.into(),
            address_region: address_region.into(),
            postal_code: postal_code.into(),
            address_country: address_country.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            kind: "GeoCoordinates",
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub price: String,
    pub price_currency: String,
}

impl Offer {
    pub fn new(price: f64, currency: impl Into<String>) -> Self {
        Self {
            kind: "Offer",
            price: format!("{price:.2}"),
            price_currency: currency.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonetaryAmount {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub currency: String,
    pub value: f64,
}

impl MonetaryAmount {
    pub fn usd(value: f64) -> Self {
        Self {
            kind: "MonetaryAmount",
            currency: "USD".into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HowToStep {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub position: u32,
    pub name: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl HowToStep {
    pub fn new(position: u32, name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: "HowToStep",
            position,
            name: name.into(),
            text: text.into(),
            url: None,
            image: None,
        }
    }
}

/// `HowToSupply` or `HowToTool`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HowToItem {
    #[serde(rename = "@type")]
    kind: &'static str,
    pub name: String,
}

impl HowToItem {
    pub fn supply(name: impl Into<String>) -> Self {
        Self {
            kind: "HowToSupply",
            name: name.into(),
        }
    }

    pub fn tool(name: impl Into<String>) -> Self {
        Self {
            kind: "HowToTool",
            name: name.into(),
        }
    }
}

// ============================================================================
// Top-level documents
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_point: Option<ContactPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub headline: String,
    pub description: String,
    pub url: String,
    pub date_published: String,
    pub date_modified: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Person>,
    pub publisher: OrganizationRef,
    pub main_entity_of_page: WebPageRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    pub description: String,
    pub url: String,
    pub provider: OrganizationRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<Person>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub course_prerequisites: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teaches: Vec<String>,
    pub in_language: String,
    pub is_accessible_for_free: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_action: Option<SearchAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoCoordinates>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub opening_hours: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    pub description: String,
    pub provider: OrganizationRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_served: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Offer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HowTo {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<MonetaryAmount>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supply: Vec<HowToItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tool: Vec<HowToItem>,
    pub step: Vec<HowToStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningResource {
    pub name: String,
    pub description: String,
    pub url: String,
    pub learning_resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_required: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub teaches: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub is_accessible_for_free: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemList {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub number_of_items: usize,
    pub item_list_element: Vec<ListItem>,
}
