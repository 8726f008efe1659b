//! Site configuration management for `seo.toml`.
//!
//! # Sections
//!
//! | Section      | Purpose                                         |
//! |--------------|-------------------------------------------------|
//! | `[site]`     | Organization identity (name, url, logo, social) |
//! | `[registry]` | Page metadata source                            |
//! | `[sitemap]`  | sitemap.xml output                              |
//! | `[robots]`   | robots.txt output and crawl policy              |
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "DIY Food Truckers Union"
//! url = "https://diyfoodtruckers.com"
//!
//! [registry]
//! source = "data/pages.json"
//!
//! [sitemap]
//! output = "public"
//!
//! [robots]
//! disallow = ["/admin/"]
//! ```

pub mod defaults;
mod error;
mod output;
mod site;

pub use error::ConfigError;
pub use output::{RegistryConfig, RobotsConfig, SitemapConfig};
pub use site::SiteInfo;

use crate::cli::Cli;
use anyhow::Result;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing seo.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root; relative paths below resolve against it
    #[serde(skip)]
    #[educe(Default = PathBuf::from("./"))]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteInfo,

    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub sitemap: SitemapConfig,

    #[serde(default)]
    pub robots: RobotsConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load `seo.toml` from the CLI root, falling back to defaults when absent.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.root = root;
        config.update_with_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.site.url, cli.base_url.as_ref());
        Self::update_option(&mut self.sitemap.output, cli.output.as_ref());
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Registry source resolved against the root.
    pub fn registry_source(&self) -> PathBuf {
        self.root.join(&self.registry.source)
    }

    /// Artifact output directory resolved against the root.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.sitemap.output)
    }

    /// Public URL of the generated sitemap.
    pub fn sitemap_url(&self) -> String {
        let name = self.sitemap.path.to_string_lossy().replace('\\', "/");
        self.site.absolute(&format!("/{}", name.trim_start_matches('/')))
    }

    /// Validate configuration for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("[site].name must not be empty".into()));
        }
        if !(self.site.url.starts_with("http://") || self.site.url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "[site].url must be an absolute http(s) URL, got `{}`",
                self.site.url
            )));
        }
        if self.sitemap.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("[sitemap].path must not be empty".into()));
        }
        if self.robots.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation("[robots].path must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.site.url, defaults::site::URL);
    }

    #[test]
    fn test_unknown_section_rejection() {
        let result = SiteConfig::from_str("[deploy]\nprovider = \"github\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_validate_rejects_relative_url() {
        let config = SiteConfig::from_str("[site]\nurl = \"diyfoodtruckers.com\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[site].url"));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let config = SiteConfig::from_str("[site]\nname = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = SiteConfig::from_path(Path::new("/definitely/not/here/seo.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_sitemap_url() {
        let config = SiteConfig::from_str("[site]\nurl = \"https://x.test/\"\n").unwrap();
        assert_eq!(config.sitemap_url(), "https://x.test/sitemap.xml");
    }

    #[test]
    fn test_load_with_cli_overrides() {
        let dir = TempDir::new().unwrap();
        let mut file = fs::File::create(dir.path().join("seo.toml")).unwrap();
        writeln!(file, "[registry]\nsource = \"data/pages.json\"").unwrap();

        let root = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "truckers-seo",
            "--root",
            &root,
            "--base-url",
            "https://staging.test",
            "stats",
        ]);
        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.site.url, "https://staging.test");
        assert_eq!(config.registry_source(), dir.path().join("data/pages.json"));
        assert!(config.config_path.ends_with("seo.toml"));
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["truckers-seo", "--root", &root, "stats"]);
        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.site.name, defaults::site::NAME);
        assert_eq!(config.output_dir(), dir.path().join("public"));
    }
}
