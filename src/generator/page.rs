//! Per-page structured data.
//!
//! Decides which schema documents a page gets from its slug and category,
//! and derives default breadcrumbs.
//!
//! | Page | Documents |
//! |------|-----------|
//! | `/` | Organization (with contact point), WebSite (search action), FAQPage |
//! | lesson categories | Organization, Article, Course, BreadcrumbList? |
//! | `resources` | Organization, Article, BreadcrumbList? |
//! | `community` | Organization, Article, FAQPage, BreadcrumbList? |

use crate::{
    config::SiteInfo,
    data::{
        BreadcrumbItem, Category, PageMetadata,
        templates::{category_image, community_faqs, home_faqs, learning_outcomes},
    },
    schema::{
        PageType, SchemaParts, StructuredData, generate_schemas,
        input::{
            ArticleInput, ContactPointInput, CourseInput, OrganizationInput, ProviderInput,
            SearchActionInput, WebSiteInput,
        },
        retain_valid, to_json_ld,
    },
};
use serde::Serialize;
use serde_json::Value;

/// Query parameter named in the WebSite search action.
const SEARCH_PARAM: &str = "search_term_string";

/// Pick the template for a page. The home slug wins over any category.
pub fn page_type_for(page: &PageMetadata) -> PageType {
    if page.is_home() {
        return PageType::Home;
    }
    match page.category {
        c if c.is_lesson() => PageType::Lesson,
        Category::Community => PageType::Community,
        _ => PageType::Resource,
    }
}

/// Default trail: Home, then the category, then the page itself.
///
/// The category entry is skipped on the home page, and the page entry is
/// skipped when the slug is the bare category path. Positions are `1..n`.
pub fn derive_breadcrumbs(page: &PageMetadata, site: &SiteInfo) -> Vec<BreadcrumbItem> {
    let mut crumbs = vec![BreadcrumbItem::new("Home", site.absolute("/"), 1)];
    if page.is_home() {
        return crumbs;
    }

    let category_path = page.category.path();
    crumbs.push(BreadcrumbItem::new(
        page.category.display_name(),
        site.absolute(&category_path),
        2,
    ));

    if page.slug != category_path {
        let position = crumbs.len() as u32 + 1;
        crumbs.push(BreadcrumbItem::new(
            &page.title,
            site.absolute(&page.slug),
            position,
        ));
    }
    crumbs
}

fn organization_input(site: &SiteInfo) -> OrganizationInput {
    OrganizationInput {
        name: site.name.clone(),
        url: site.base_url().to_owned(),
        description: Some(site.description.clone()),
        logo: Some(site.logo.clone()),
        contact_point: None,
        same_as: site.same_as.clone(),
    }
}

fn article_input(page: &PageMetadata, site: &SiteInfo) -> ArticleInput {
    ArticleInput {
        headline: page.title.clone(),
        description: page.description.clone(),
        url: site.absolute(&page.slug),
        date_published: page.last_updated_iso(),
        date_modified: Some(page.last_updated_iso()),
        author: page.author.clone(),
        image: Some(site.absolute(category_image(page.category))),
        category: Some(page.category.display_name().to_owned()),
        keywords: page.keywords.clone(),
        word_count: None,
    }
}

fn course_input(page: &PageMetadata, site: &SiteInfo) -> CourseInput {
    CourseInput {
        name: page.title.clone(),
        description: page.description.clone(),
        url: site.absolute(&page.slug),
        provider: ProviderInput {
            name: site.name.clone(),
            url: site.base_url().to_owned(),
        },
        instructor: page.author.clone(),
        date_published: Some(page.last_updated_iso()),
        date_modified: Some(page.last_updated_iso()),
        difficulty: page.difficulty,
        duration_minutes: page.estimated_read_time,
        category: Some(page.category.display_name().to_owned()),
        keywords: page.keywords.clone(),
        prerequisites: Vec::new(),
        teaches: learning_outcomes(page.category)
            .iter()
            .map(|s| (*s).to_owned())
            .collect(),
    }
}

fn home_parts(site: &SiteInfo) -> SchemaParts {
    let mut organization = organization_input(site);
    organization.contact_point = Some(ContactPointInput {
        contact_type: "customer support".into(),
        email: Some(site.contact_email.clone()),
        available_language: vec!["English".into()],
        ..Default::default()
    });

    SchemaParts {
        organization: Some(organization),
        website: Some(WebSiteInput {
            name: site.name.clone(),
            url: site.base_url().to_owned(),
            description: Some(site.description.clone()),
            search: Some(SearchActionInput {
                target: site.absolute(&site.search_path),
                query_param: SEARCH_PARAM.into(),
            }),
        }),
        faqs: Some(home_faqs()),
        ..Default::default()
    }
}

/// Non-empty breadcrumb trail carried by the page.
fn page_breadcrumbs(page: &PageMetadata) -> Option<Vec<BreadcrumbItem>> {
    page.breadcrumbs.clone().filter(|crumbs| !crumbs.is_empty())
}

/// Build the schema documents for a page.
///
/// Breadcrumbs are only included when the page carries a non-empty trail;
/// use [`enhance_page`] to derive them first.
pub fn generate_page_schemas(page: &PageMetadata, site: &SiteInfo) -> Vec<StructuredData> {
    let page_type = page_type_for(page);

    let parts = match page_type {
        PageType::Home => home_parts(site),
        PageType::Lesson => SchemaParts {
            organization: Some(organization_input(site)),
            article: Some(article_input(page, site)),
            course: Some(course_input(page, site)),
            breadcrumbs: page_breadcrumbs(page),
            ..Default::default()
        },
        PageType::Community => SchemaParts {
            organization: Some(organization_input(site)),
            article: Some(article_input(page, site)),
            faqs: Some(community_faqs()),
            breadcrumbs: page_breadcrumbs(page),
            ..Default::default()
        },
        PageType::Resource => SchemaParts {
            organization: Some(organization_input(site)),
            article: Some(article_input(page, site)),
            breadcrumbs: page_breadcrumbs(page),
            ..Default::default()
        },
    };

    generate_schemas(page_type, &parts)
}

/// Generated documents plus the page's own valid documents, as JSON.
pub fn page_json_ld(page: &PageMetadata, site: &SiteInfo) -> Vec<Value> {
    let mut docs = to_json_ld(&generate_page_schemas(page, site));
    if let Some(extra) = &page.structured_data {
        docs.extend(retain_valid(extra.iter().cloned()));
    }
    docs
}

/// A page ready for the rendering layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPage {
    #[serde(flatten)]
    pub page: PageMetadata,
    pub json_ld: Vec<Value>,
}

/// Fill in default breadcrumbs when absent or empty and attach the page's JSON-LD.
pub fn enhance_page(mut page: PageMetadata, site: &SiteInfo) -> EnhancedPage {
    if page.breadcrumbs.as_ref().is_none_or(Vec::is_empty) {
        page.breadcrumbs = Some(derive_breadcrumbs(&page, site));
    }
    let json_ld = page_json_ld(&page, site);
    EnhancedPage { page, json_ld }
}
