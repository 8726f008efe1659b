//! Page metadata registry.
//!
//! Maps slugs to [`PageMetadata`] and turns them into render-ready
//! [`SeoConfig`]s. Unknown slugs get a synthesized fallback page, so every
//! lookup produces *some* metadata.
//!
//! # Lifecycle
//!
//! ```text
//! SeoRegistry::new(site)
//!        │
//!        ▼
//! load_from(source).await ──► initialize(records)   (once, shared by all callers)
//!        │                    load error ──► empty registry
//!        ▼
//! get_page_seo / set_page_seo / import / export ...
//!        │
//!        ▼
//! reset() ──► back to the start
//! ```

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::OnceCell;

use super::source::PageSource;
use super::templates::{
    HOME_IMAGE, category_image, category_keywords, fallback_copy, template_keywords, title_suffix,
};
use super::types::{Category, OpenGraph, PageMetadata, SeoConfig, SeoOverrides, TwitterCard};
use crate::{
    config::SiteInfo,
    generator::page::{enhance_page, page_type_for},
    log,
    utils::slug::normalize_slug,
    validate::{ValidationResult, validate_page_metadata},
};

/// Guess a category for an unregistered slug.
///
/// Checks run in a fixed order and the first match wins, so a slug naming
/// two categories (`/resources/marketing-kit`) resolves to whichever is
/// checked first (marketing). Slugs matching nothing are getting-started.
pub fn infer_category(slug: &str) -> Category {
    const RULES: &[(&[&str], Category)] = &[
        (&["getting-started", "startup"], Category::GettingStarted),
        (&["operations", "management"], Category::Operations),
        (&["financial", "money", "budget"], Category::Financial),
        (&["marketing", "promotion"], Category::Marketing),
        (&["community", "discord"], Category::Community),
        (&["resources", "tools"], Category::Resources),
    ];

    RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| slug.contains(n)))
        .map_or(Category::GettingStarted, |(_, category)| *category)
}

/// Placeholder record for a slug missing from the registry.
pub fn fallback_page(slug: &str) -> PageMetadata {
    let category = infer_category(slug);
    let copy = fallback_copy(category);
    let mut page = PageMetadata::new(slug, copy.title, copy.description, category);
    page.keywords = copy.keywords.iter().map(|k| (*k).to_owned()).collect();
    page
}

/// Validation outcome of one stored page.
#[derive(Debug, Clone, Serialize)]
pub struct PageValidation {
    pub slug: String,
    pub validation: ValidationResult,
}

/// Aggregates over every stored page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryStats {
    pub total_pages: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub average_score: f64,
    /// Errors plus warnings across all pages.
    pub total_issues: usize,
}

/// Outcome of [`SeoRegistry::import`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    /// `"{slug}: {messages}"` per rejected record.
    pub errors: Vec<String>,
}

/// Slug-keyed page registry.
///
/// # Thread Safety
///
/// Reads share a `RwLock`; writes (`set_page_seo`, `import`, `initialize`)
/// take it exclusively. `reset()` needs `&mut self`.
#[derive(Debug)]
pub struct SeoRegistry {
    site: SiteInfo,
    pages: RwLock<BTreeMap<String, PageMetadata>>,
    initialized: AtomicBool,
    /// Memoized source load; concurrent `load_from` callers await the same one.
    load: OnceCell<()>,
}

impl SeoRegistry {
    pub fn new(site: SiteInfo) -> Self {
        Self {
            site,
            pages: RwLock::new(BTreeMap::new()),
            initialized: AtomicBool::new(false),
            load: OnceCell::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    pub fn len(&self) -> usize {
        self.pages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.read().is_empty()
    }

    /// Stored record for a slug, if any.
    pub fn get(&self, slug: &str) -> Option<PageMetadata> {
        self.pages.read().get(&normalize_slug(slug)).cloned()
    }

    /// All stored records in slug order.
    pub fn pages(&self) -> Vec<PageMetadata> {
        self.pages.read().values().cloned().collect()
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Bulk-load records. Only the first call has an effect until [`reset`](Self::reset).
    ///
    /// Returns whether the records were loaded.
    pub fn initialize(&self, records: impl IntoIterator<Item = PageMetadata>) -> bool {
        if self.initialized.swap(true, Ordering::AcqRel) {
            log!("registry"; "already initialized, ignoring load");
            return false;
        }

        let mut pages = self.pages.write();
        for mut page in records {
            page.slug = normalize_slug(&page.slug);
            pages.insert(page.slug.clone(), page);
        }
        log!("registry"; "loaded {} pages", pages.len());
        true
    }

    /// Load from `source` once; later and concurrent calls reuse that load.
    ///
    /// A failing source leaves the registry empty (but initialized), so every
    /// lookup falls back to synthesized metadata.
    pub async fn load_from<S: PageSource>(&self, source: &S) -> usize {
        self.load
            .get_or_init(|| async {
                match source.load().await {
                    Ok(records) => {
                        self.initialize(records);
                    }
                    Err(err) => {
                        log!("error"; "failed to load page registry: {err:#}");
                        self.initialize(Vec::new());
                    }
                }
            })
            .await;
        self.len()
    }

    /// Drop all records, the initialized flag and the memoized load.
    pub fn reset(&mut self) {
        self.pages.get_mut().clear();
        *self.initialized.get_mut() = false;
        self.load.take();
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Render-ready SEO for a slug.
    ///
    /// `overrides` only apply when the slug is not registered; stored
    /// records are returned as stored.
    pub fn get_page_seo(&self, slug: &str, overrides: Option<&SeoOverrides>) -> SeoConfig {
        let slug = normalize_slug(slug);
        let page = match self.pages.read().get(&slug) {
            Some(page) => page.clone(),
            None => {
                let mut page = fallback_page(&slug);
                if let Some(overrides) = overrides {
                    overrides.apply_to(&mut page);
                }
                page
            }
        };
        self.to_seo_config(page)
    }

    /// Render-ready JSON-LD for a slug, fallback included.
    pub fn page_schemas(&self, slug: &str) -> Vec<Value> {
        self.get_page_seo(slug, None).structured_data
    }

    fn to_seo_config(&self, page: PageMetadata) -> SeoConfig {
        let site = &self.site;
        let page_type = page_type_for(&page);

        let title = format!("{}{}", page.title, title_suffix(page_type));
        let canonical = site.absolute(&page.slug);
        let image = site.absolute(if page.is_home() {
            HOME_IMAGE
        } else {
            category_image(page.category)
        });

        let mut keywords: Vec<String> = Vec::new();
        let candidates = page
            .keywords
            .iter()
            .map(String::as_str)
            .chain(template_keywords(page_type).iter().copied())
            .chain(category_keywords(page.category).iter().copied());
        for keyword in candidates {
            if !keywords.iter().any(|k| k == keyword) {
                keywords.push(keyword.to_owned());
            }
        }

        let open_graph = OpenGraph {
            title: title.clone(),
            description: page.description.clone(),
            url: canonical.clone(),
            site_name: site.name.clone(),
            og_type: if page.is_home() { "website" } else { "article" }.to_owned(),
            image: image.clone(),
            image_alt: page.title.clone(),
            locale: site.locale.clone(),
        };
        let twitter = TwitterCard {
            card: "summary_large_image".to_owned(),
            site: site.twitter_handle.clone(),
            creator: None,
            title: title.clone(),
            description: page.description.clone(),
            image,
        };

        let (no_index, no_follow) = (page.no_index, page.no_follow);
        let description = page.description.clone();
        let enhanced = enhance_page(page, site);

        SeoConfig {
            title,
            description,
            keywords,
            canonical_url: Some(canonical),
            open_graph: Some(open_graph),
            twitter: Some(twitter),
            structured_data: enhanced.json_ld,
            no_index,
            no_follow,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Validate `record` under `slug` and store it when it has no errors.
    pub fn set_page_seo(&self, slug: &str, mut record: PageMetadata) -> ValidationResult {
        record.slug = normalize_slug(slug);
        let result = validate_page_metadata(&record);
        if result.is_valid {
            self.pages.write().insert(record.slug.clone(), record);
        } else {
            log!("registry"; "rejected {}: {}", record.slug, result.errors.join("; "));
        }
        result
    }

    /// Validation of every stored record.
    pub fn validate_all_configs(&self) -> Vec<PageValidation> {
        self.pages
            .read()
            .iter()
            .map(|(slug, page)| PageValidation {
                slug: slug.clone(),
                validation: validate_page_metadata(page),
            })
            .collect()
    }

    pub fn get_stats(&self) -> RegistryStats {
        let results = self.validate_all_configs();
        let pages = self.pages.read();

        let mut by_category = BTreeMap::new();
        for page in pages.values() {
            *by_category.entry(page.category).or_insert(0) += 1;
        }

        let average_score = if results.is_empty() {
            0.0
        } else {
            let total: i64 = results.iter().map(|r| i64::from(r.validation.score)).sum();
            total as f64 / results.len() as f64
        };

        RegistryStats {
            total_pages: pages.len(),
            by_category,
            average_score,
            total_issues: results.iter().map(|r| r.validation.issue_count()).sum(),
        }
    }

    // ========================================================================
    // Export / Import
    // ========================================================================

    /// Every record as a pretty-printed JSON array.
    pub fn export(&self) -> serde_json::Result<String> {
        let pages = self.pages.read();
        let records: Vec<&PageMetadata> = pages.values().collect();
        serde_json::to_string_pretty(&records)
    }

    /// Store every valid record of a JSON array; report the rest by slug.
    pub fn import(&self, json: &str) -> ImportReport {
        let Ok(values) = serde_json::from_str::<Vec<Value>>(json) else {
            return ImportReport {
                imported: 0,
                errors: vec!["Invalid JSON format".to_owned()],
            };
        };

        let mut report = ImportReport::default();
        for (index, value) in values.into_iter().enumerate() {
            let label = value
                .get("slug")
                .and_then(Value::as_str)
                .map_or_else(|| format!("#{index}"), str::to_owned);

            let mut page: PageMetadata = match serde_json::from_value(value) {
                Ok(page) => page,
                Err(err) => {
                    report.errors.push(format!("{label}: {err}"));
                    continue;
                }
            };

            page.slug = normalize_slug(&page.slug);
            let result = validate_page_metadata(&page);
            if result.is_valid {
                self.pages.write().insert(page.slug.clone(), page);
                report.imported += 1;
            } else {
                report
                    .errors
                    .push(format!("{label}: {}", result.errors.join("; ")));
            }
        }

        log!(
            "registry";
            "imported {} pages, {} rejected",
            report.imported,
            report.errors.len()
        );
        report
    }
}
