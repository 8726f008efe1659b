//! Typed input records for the schema builders.

use crate::data::{AuthorRecord, Difficulty};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default)]
pub struct OrganizationInput {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub contact_point: Option<ContactPointInput>,
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactPointInput {
    pub contact_type: String,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub area_served: Option<String>,
    pub available_language: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleInput {
    pub headline: String,
    pub description: String,
    pub url: String,
    pub date_published: String,
    /// Falls back to `date_published`.
    pub date_modified: Option<String>,
    pub author: Option<AuthorRecord>,
    pub image: Option<String>,
    /// Rendered as `articleSection`.
    pub category: Option<String>,
    pub keywords: Vec<String>,
    pub word_count: Option<u32>,
}

/// Organization offering a course or service.
#[derive(Debug, Clone, Default)]
pub struct ProviderInput {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default)]
pub struct CourseInput {
    pub name: String,
    pub description: String,
    pub url: String,
    pub provider: ProviderInput,
    pub instructor: Option<AuthorRecord>,
    pub date_published: Option<String>,
    pub date_modified: Option<String>,
    pub difficulty: Option<Difficulty>,
    /// Rendered as `timeRequired = PT{minutes}M`.
    pub duration_minutes: Option<u32>,
    pub category: Option<String>,
    pub keywords: Vec<String>,
    pub prerequisites: Vec<String>,
    /// Learning outcomes.
    pub teaches: Vec<String>,
}

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

impl FaqItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WebSiteInput {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub search: Option<SearchActionInput>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchActionInput {
    /// URL template containing `{query_param}`.
    pub target: String,
    pub query_param: String,
}

#[derive(Debug, Clone, Default)]
pub struct AddressInput {
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Default)]
pub struct LocalBusinessInput {
    pub name: String,
    pub description: String,
    pub url: String,
    pub telephone: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub address: Option<AddressInput>,
    /// `(latitude, longitude)`
    pub geo: Option<(f64, f64)>,
    pub opening_hours: Vec<String>,
    pub price_range: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct OfferInput {
    pub price: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    pub provider: ProviderInput,
    pub service_type: Option<String>,
    pub area_served: Option<String>,
    pub url: Option<String>,
    pub offer: Option<OfferInput>,
}

#[derive(Debug, Clone, Default)]
pub struct HowToStepInput {
    pub name: String,
    pub text: String,
    pub url: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct HowToInput {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub total_time_minutes: Option<u32>,
    /// US dollars.
    pub estimated_cost: Option<f64>,
    pub supplies: Vec<String>,
    pub tools: Vec<String>,
    pub steps: Vec<HowToStepInput>,
}

#[derive(Debug, Clone, Default)]
pub struct LearningResourceInput {
    pub name: String,
    pub description: String,
    pub url: String,
    pub resource_type: String,
    pub educational_level: Option<Difficulty>,
    pub time_required_minutes: Option<u32>,
    pub teaches: Vec<String>,
    pub keywords: Vec<String>,
    pub is_free: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ItemListEntry {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ItemListInput {
    pub name: String,
    pub description: Option<String>,
    pub items: Vec<ItemListEntry>,
}
