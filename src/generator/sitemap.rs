//! Sitemap generation.
//!
//! Lists every indexable registered page for search engines, with crawl
//! hints derived from the page category.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://diyfoodtruckers.com/community</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>0.6</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{
    config::{SiteConfig, SiteInfo},
    data::{Category, PageMetadata},
    log,
};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

// ============================================================================
// Constants
// ============================================================================

/// XML namespace for sitemap
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// File name of the sitemap index written next to the sitemap.
pub const SITEMAP_INDEX_FILE: &str = "sitemap_index.xml";

// ============================================================================
// Crawl hints
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Change frequency and priority for pages of a category.
pub const fn crawl_hints(category: Category) -> (ChangeFrequency, f32) {
    match category {
        Category::GettingStarted => (ChangeFrequency::Monthly, 1.0),
        Category::Operations | Category::Financial | Category::Marketing => {
            (ChangeFrequency::Monthly, 0.9)
        }
        Category::Resources => (ChangeFrequency::Weekly, 0.8),
        Category::Community => (ChangeFrequency::Daily, 0.6),
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Write `sitemap.xml` if enabled in config, plus the sitemap index when
/// extra sitemaps are configured.
///
/// Returns the written paths.
pub fn build_sitemap(config: &SiteConfig, pages: &[PageMetadata]) -> Result<Vec<PathBuf>> {
    if !config.sitemap.enable {
        return Ok(Vec::new());
    }

    let mut written = Vec::new();
    let sitemap = Sitemap::from_pages(pages, &config.site);
    written.push(sitemap.write(config)?);

    if !config.sitemap.extra_sitemaps.is_empty() {
        let mut urls = vec![config.sitemap_url()];
        urls.extend(config.sitemap.extra_sitemaps.iter().cloned());
        let lastmod = pages
            .iter()
            .max_by_key(|p| p.last_updated)
            .map(PageMetadata::lastmod_ymd);

        let path = config.output_dir().join(SITEMAP_INDEX_FILE);
        fs::write(&path, build_sitemap_index(&urls, lastmod.as_deref()))
            .with_context(|| format!("Failed to write sitemap index to {}", path.display()))?;
        log!("sitemap"; "{SITEMAP_INDEX_FILE}");
        written.push(path);
    }

    Ok(written)
}

/// Wrap sitemap URLs in a `<sitemapindex>` document.
pub fn build_sitemap_index(urls: &[String], lastmod: Option<&str>) -> String {
    let mut xml = String::with_capacity(256 + urls.len() * 128);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(r#"<sitemapindex xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');

    for url in urls {
        xml.push_str("  <sitemap>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(url)));
        if let Some(lastmod) = lastmod {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(lastmod)));
        }
        xml.push_str("  </sitemap>\n");
    }

    xml.push_str("</sitemapindex>\n");
    xml
}

// ============================================================================
// Sitemap Implementation
// ============================================================================

/// Sitemap data structure
#[derive(Debug, Default)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    /// Full URL location
    pub loc: String,
    /// Last modification date (optional, YYYY-MM-DD format)
    pub lastmod: Option<String>,
    pub changefreq: ChangeFrequency,
    pub priority: f32,
}

impl Sitemap {
    /// Build from registry records; `noIndex` pages are left out.
    pub fn from_pages(pages: &[PageMetadata], site: &SiteInfo) -> Self {
        let urls = pages
            .iter()
            .filter(|page| !page.no_index)
            .map(|page| {
                let (changefreq, priority) = crawl_hints(page.category);
                UrlEntry {
                    loc: site.absolute(&page.slug),
                    lastmod: Some(page.lastmod_ymd()),
                    changefreq,
                    priority,
                }
            })
            .collect();

        Self { urls }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Generate sitemap XML string.
    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(&lastmod)));
            }
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.changefreq.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Write sitemap to the output directory.
    fn write(self, config: &SiteConfig) -> Result<PathBuf> {
        let output = config.output_dir();
        fs::create_dir_all(&output)
            .with_context(|| format!("Failed to create output directory {}", output.display()))?;

        let sitemap_path = output.join(&config.sitemap.path);
        let count = self.len();
        fs::write(&sitemap_path, self.into_xml())
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!(
            "sitemap";
            "{} ({count} urls)",
            sitemap_path.file_name().unwrap_or_default().to_string_lossy()
        );
        Ok(sitemap_path)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Escape special XML characters.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// ============================================================================
// Tests
// ============================================================================
