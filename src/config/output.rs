//! `[registry]`, `[sitemap]` and `[robots]` section configuration.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[registry]` section - where page metadata is loaded from.
///
/// # Example
/// ```toml
/// [registry]
/// source = "data/pages.json"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// JSON array of page records (relative to project root).
    #[serde(default = "defaults::registry::source")]
    #[educe(Default = defaults::registry::source())]
    pub source: PathBuf,
}

/// `[sitemap]` section.
///
/// # Example
/// ```toml
/// [sitemap]
/// enable = true
/// output = "public"
/// path = "sitemap.xml"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SitemapConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// Output directory for generated artifacts.
    #[serde(default = "defaults::sitemap::output")]
    #[educe(Default = defaults::sitemap::output())]
    pub output: PathBuf,

    /// Sitemap file name inside `output`.
    #[serde(default = "defaults::sitemap::path")]
    #[educe(Default = defaults::sitemap::path())]
    pub path: PathBuf,

    /// Extra sitemap URLs; when set, a `sitemap_index.xml` listing the main
    /// sitemap and these is written too.
    #[serde(default)]
    pub extra_sitemaps: Vec<String>,
}

/// `[robots]` section.
///
/// # Example
/// ```toml
/// [robots]
/// disallow = ["/admin/", "/drafts/"]
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct RobotsConfig {
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enable: bool,

    /// robots.txt file name inside the sitemap output directory.
    #[serde(default = "defaults::robots::path")]
    #[educe(Default = defaults::robots::path())]
    pub path: PathBuf,

    /// Paths every crawler is asked to skip.
    #[serde(default = "defaults::robots::disallow")]
    #[educe(Default = defaults::robots::disallow())]
    pub disallow: Vec<String>,

    /// Emit the `Sitemap:` directive.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub sitemap_directive: bool,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::PathBuf;

    #[test]
    fn test_output_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.registry.source, PathBuf::from("pages.json"));
        assert!(config.sitemap.enable);
        assert_eq!(config.sitemap.path, PathBuf::from("sitemap.xml"));
        assert!(config.sitemap.extra_sitemaps.is_empty());
        assert!(config.robots.enable);
        assert!(config.robots.sitemap_directive);
        assert!(config.robots.disallow.contains(&"/admin/".to_string()));
    }

    #[test]
    fn test_output_custom() {
        let config = r#"
            [registry]
            source = "data/pages.json"

            [sitemap]
            enable = false
            output = "dist"

            [robots]
            disallow = []
            sitemap_directive = false
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.registry.source, PathBuf::from("data/pages.json"));
        assert!(!config.sitemap.enable);
        assert_eq!(config.sitemap.output, PathBuf::from("dist"));
        assert!(config.robots.disallow.is_empty());
        assert!(!config.robots.sitemap_directive);
    }

    #[test]
    fn test_sitemap_unknown_field_rejection() {
        let config = r#"
            [sitemap]
            gzip = true
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }
}
