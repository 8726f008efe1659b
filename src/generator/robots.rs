//! robots.txt generation.
//!
//! ```text
//! User-agent: *
//! Allow: /
//! Disallow: /admin/
//! Disallow: /api/
//!
//! Sitemap: https://diyfoodtruckers.com/sitemap.xml
//! ```

use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

/// robots.txt body: allow everything except `disallow`, then an optional
/// `Sitemap:` directive.
pub fn robots_txt(disallow: &[String], sitemap_url: Option<&str>) -> String {
    let mut body = String::from("User-agent: *\nAllow: /\n");
    for path in disallow.iter().filter(|p| !p.trim().is_empty()) {
        body.push_str(&format!("Disallow: {}\n", path.trim()));
    }
    if let Some(url) = sitemap_url {
        body.push_str(&format!("\nSitemap: {url}\n"));
    }
    body
}

/// Write robots.txt if enabled in config.
pub fn build_robots(config: &SiteConfig) -> Result<Option<PathBuf>> {
    if !config.robots.enable {
        return Ok(None);
    }

    let sitemap_url = (config.robots.sitemap_directive && config.sitemap.enable)
        .then(|| config.sitemap_url());
    let body = robots_txt(&config.robots.disallow, sitemap_url.as_deref());

    let output = config.output_dir();
    fs::create_dir_all(&output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;
    let path = output.join(&config.robots.path);
    fs::write(&path, body)
        .with_context(|| format!("Failed to write robots.txt to {}", path.display()))?;

    log!("robots"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_robots_default_policy() {
        let config = SiteConfig::default();
        let body = robots_txt(&config.robots.disallow, Some(&config.sitemap_url()));

        assert!(body.starts_with("User-agent: *\nAllow: /\n"));
        assert!(body.contains("Disallow: /admin/\n"));
        assert!(body.contains("Disallow: /api/\n"));
        assert!(body.ends_with("\nSitemap: https://diyfoodtruckers.com/sitemap.xml\n"));
    }

    #[test]
    fn test_robots_without_sitemap() {
        let body = robots_txt(&[], None);
        assert_eq!(body, "User-agent: *\nAllow: /\n");
    }

    #[test]
    fn test_robots_skips_blank_paths() {
        let body = robots_txt(&["  ".into(), " /drafts/ ".into()], None);
        assert_eq!(body.matches("Disallow").count(), 1);
        assert!(body.contains("Disallow: /drafts/\n"));
    }

    #[test]
    fn test_build_robots_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.root = dir.path().to_path_buf();

        let path = build_robots(&config).unwrap().unwrap();
        let body = fs::read_to_string(path).unwrap();
        assert!(body.contains("Sitemap: "));
    }

    #[test]
    fn test_build_robots_no_directive_when_sitemap_disabled() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.root = dir.path().to_path_buf();
        config.sitemap.enable = false;

        let path = build_robots(&config).unwrap().unwrap();
        assert!(!fs::read_to_string(path).unwrap().contains("Sitemap:"));
    }

    #[test]
    fn test_build_robots_disabled() {
        let mut config = SiteConfig::default();
        config.robots.enable = false;
        assert!(build_robots(&config).unwrap().is_none());
    }
}
