//! Output generation: per-page structured data and crawler artifacts.

pub mod page;
pub mod robots;
pub mod sitemap;

use crate::{config::SiteConfig, data::SeoRegistry};
use anyhow::Result;
use std::path::PathBuf;

/// Write every enabled crawler artifact for the registry's pages.
///
/// Returns the paths written.
pub fn write_artifacts(config: &SiteConfig, registry: &SeoRegistry) -> Result<Vec<PathBuf>> {
    let pages = registry.pages();
    let mut written = sitemap::build_sitemap(config, &pages)?;
    written.extend(robots::build_robots(config)?);
    Ok(written)
}
